//! 参数类型、Builder trait 与标识符 escape。

use crate::flavor::Flavor;
use crate::value::SqlValue;
use dyn_clone::DynClone;

/// Escape：把 `$` 替换为 `$$`，避免标识符被 `Args::compile` 当成占位符。
pub fn escape(ident: &str) -> String {
    ident.replace('$', "$$")
}

/// EscapeAll：批量 Escape。
pub fn escape_all(idents: impl IntoIterator<Item = impl AsRef<str>>) -> Vec<String> {
    idents.into_iter().map(|s| escape(s.as_ref())).collect()
}

/// 原样拼入 SQL 的片段（不会成为参数）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raw {
    pub(crate) expr: String,
}

impl Raw {
    pub fn as_str(&self) -> &str {
        &self.expr
    }
}

pub fn raw(expr: impl Into<String>) -> Arg {
    Arg::Raw(Raw { expr: expr.into() })
}

/// 绑定到 builder 上的参数。
#[derive(Clone)]
pub enum Arg {
    /// 普通值，编译时替换成占位符。
    Value(SqlValue),
    /// 原样输出的 SQL。
    Raw(Raw),
    /// 嵌套 builder，编译时递归展开并合并其参数。
    Builder(Box<dyn Builder>),
}

impl std::fmt::Debug for Arg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Value(v) => f.debug_tuple("Value").field(v).finish(),
            Self::Raw(v) => f.debug_tuple("Raw").field(v).finish(),
            Self::Builder(_) => f.write_str("Builder(..)"),
        }
    }
}

impl PartialEq for Arg {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Value(a), Self::Value(b)) => a == b,
            (Self::Raw(a), Self::Raw(b)) => a == b,
            _ => false,
        }
    }
}

/// 可嵌套的 SQL builder。
///
/// `Send + Sync`：builder 构建完成后可以被多个线程同时 build。
pub trait Builder: DynClone + Send + Sync {
    fn build(&self) -> (String, Vec<Arg>) {
        self.build_with_flavor(self.flavor(), &[])
    }

    /// 用指定 flavor 编译；`initial_arg` 占据参数列表的前几个位置。
    fn build_with_flavor(&self, flavor: Flavor, initial_arg: &[Arg]) -> (String, Vec<Arg>);

    fn flavor(&self) -> Flavor;
}

dyn_clone::clone_trait_object!(Builder);

impl Builder for Box<dyn Builder> {
    fn build_with_flavor(&self, flavor: Flavor, initial_arg: &[Arg]) -> (String, Vec<Arg>) {
        (**self).build_with_flavor(flavor, initial_arg)
    }

    fn flavor(&self) -> Flavor {
        (**self).flavor()
    }
}

impl From<Box<dyn Builder>> for Arg {
    fn from(v: Box<dyn Builder>) -> Self {
        Self::Builder(v)
    }
}

impl From<SqlValue> for Arg {
    fn from(v: SqlValue) -> Self {
        Self::Value(v)
    }
}

impl From<Raw> for Arg {
    fn from(v: Raw) -> Self {
        Self::Raw(v)
    }
}

macro_rules! arg_from_value {
    ($($t:ty),+ $(,)?) => {
        $(impl From<$t> for Arg {
            fn from(v: $t) -> Self {
                Self::Value(SqlValue::from(v))
            }
        })+
    };
}

arg_from_value!(
    (),
    bool,
    i8,
    i16,
    i32,
    i64,
    isize,
    u8,
    u16,
    u32,
    u64,
    usize,
    f32,
    f64,
    String,
    &'static str,
    Vec<u8>,
    time::OffsetDateTime,
);

impl<T> From<Option<T>> for Arg
where
    T: Into<SqlValue>,
{
    fn from(v: Option<T>) -> Self {
        Self::Value(SqlValue::from_option(v))
    }
}
