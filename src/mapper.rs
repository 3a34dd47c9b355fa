//! 记录到行的映射：把业务 struct 投影成有序的 `(列名, 值, 是否主键)`。
//!
//! Rust 没有运行时反射，字段元数据通过 `sql_row!` 显式登记，
//! 每个字段带一个 `"name[;primary_key]"` 形式的 tag。

use crate::modifiers::Arg;

/// 解析后的字段 tag。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldTag {
    pub name: &'static str,
    pub primary_key: bool,
}

impl FieldTag {
    /// 解析 `"name[;option...]"`；只识别 `primary_key`，其他选项忽略。
    pub fn parse(tag: &'static str) -> Self {
        let mut parts = tag.split(';');
        let name = parts.next().unwrap_or_default().trim();
        let primary_key = parts.any(|opt| opt.trim() == "primary_key");
        Self { name, primary_key }
    }
}

/// 一个字段的列名、值与主键标记。
#[derive(Debug, Clone, PartialEq)]
pub struct RowField {
    pub name: &'static str,
    pub value: Arg,
    pub primary_key: bool,
}

impl RowField {
    pub fn new(tag: &'static str, value: impl Into<Arg>) -> Self {
        let FieldTag { name, primary_key } = FieldTag::parse(tag);
        Self {
            name,
            value: value.into(),
            primary_key,
        }
    }
}

/// 可被 `InsertBuilder::insert_item` 消费的记录。
pub trait SqlRow {
    /// 按字段声明顺序返回全部字段（含主键）。
    fn row_fields(&self) -> Vec<RowField>;
}

impl<T: SqlRow + ?Sized> SqlRow for &T {
    fn row_fields(&self) -> Vec<RowField> {
        (**self).row_fields()
    }
}

/// 为 struct 生成 `SqlRow` 实现。
///
/// ```ignore
/// sql_row! {
///     impl User {
///         id: "id;primary_key",
///         name: "name",
///     }
/// }
/// ```
///
/// 字段类型需要实现 `Clone` 和 `Into<Arg>`。
#[macro_export]
macro_rules! sql_row {
    (
        impl $ty:ty {
            $( $field:ident : $tag:literal ),* $(,)?
        }
    ) => {
        impl $crate::mapper::SqlRow for $ty {
            fn row_fields(&self) -> Vec<$crate::mapper::RowField> {
                vec![
                    $(
                        $crate::mapper::RowField::new($tag, self.$field.clone())
                    ),*
                ]
            }
        }
    };
}
pub use crate::sql_row;
