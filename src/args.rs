//! Args：收集参数并把含 `$n` 占位符的模板编译成最终 SQL 与有序参数列表。
//!
//! 模板语法：
//! - `$n`：引用第 n 个（从 0 开始）通过 `Args::add` 注册的参数；
//! - `$$`：输出一个 `$`；
//! - 其他 `$` 原样输出。
//!
//! 参数按“在模板中首次出现”的顺序输出，而不是注册顺序。

use crate::flavor::{Flavor, PlaceholderStyle, default_flavor};
use crate::modifiers::Arg;
use crate::string_builder::StringBuilder;
use std::collections::HashMap;

/// Args 存储 builder 的参数，以及默认编译 flavor。
#[derive(Debug, Clone)]
pub struct Args {
    /// 默认 flavor，用于 `compile`。
    pub flavor: Flavor,

    pub(crate) arg_values: Vec<Arg>,
}

impl Default for Args {
    fn default() -> Self {
        Self::with_flavor(default_flavor())
    }
}

impl Args {
    pub fn with_flavor(flavor: Flavor) -> Self {
        Self {
            flavor,
            arg_values: Vec::new(),
        }
    }

    /// 追加一个参数，返回它的占位符（`$0`、`$1`、...）。
    pub fn add(&mut self, arg: impl Into<Arg>) -> String {
        let idx = self.arg_values.len();
        self.arg_values.push(arg.into());
        format!("${idx}")
    }

    /// 按占位符取回参数；只要以 `$<digits>` 开头即可解析。
    pub fn value(&self, placeholder: &str) -> Option<&Arg> {
        let s = placeholder.strip_prefix('$')?;
        let end = digits_len(s);
        if end == 0 {
            return None;
        }
        let idx: usize = s[..end].parse().ok()?;
        self.arg_values.get(idx)
    }

    pub fn len(&self) -> usize {
        self.arg_values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arg_values.is_empty()
    }

    /// 按 `self.flavor` 编译。
    pub fn compile(&self, format: &str, initial_value: &[Arg]) -> (String, Vec<Arg>) {
        self.compile_with_flavor(format, self.flavor, initial_value)
    }

    /// 编译 `format`，用 `flavor` 输出最终占位符。
    ///
    /// # Panics
    ///
    /// 模板引用了未注册的占位符时 panic：这说明生成模板的 builder 有 bug。
    pub fn compile_with_flavor(
        &self,
        format: &str,
        flavor: Flavor,
        initial_value: &[Arg],
    ) -> (String, Vec<Arg>) {
        let mut ctx = CompileContext {
            buf: StringBuilder::new(),
            flavor,
            values: initial_value.to_vec(),
            ordinals: HashMap::new(),
        };

        let mut rest = format;
        while let Some(pos) = rest.find('$') {
            ctx.buf.write_str(&rest[..pos]);
            rest = &rest[pos + 1..];

            match rest.as_bytes().first() {
                Some(b'$') => {
                    ctx.buf.write_char('$');
                    rest = &rest[1..];
                }
                Some(b) if b.is_ascii_digit() => {
                    let end = digits_len(rest);
                    let token = &rest[..end];
                    rest = &rest[end..];
                    let idx = token
                        .parse::<usize>()
                        .ok()
                        .filter(|&i| i < self.arg_values.len())
                        .unwrap_or_else(|| {
                            panic!(
                                "unresolved placeholder token ${token}: only {} args registered",
                                self.arg_values.len()
                            )
                        });
                    ctx.write_arg(idx, &self.arg_values[idx]);
                }
                _ => ctx.buf.write_char('$'),
            }
        }
        ctx.buf.write_str(rest);

        let sql = ctx.buf.into_string();

        #[cfg(feature = "tracing")]
        tracing::trace!(
            flavor = %flavor,
            sql = %sql,
            args = ctx.values.len(),
            "compiled sql template"
        );

        (sql, ctx.values)
    }
}

fn digits_len(s: &str) -> usize {
    s.bytes().take_while(u8::is_ascii_digit).count()
}

#[derive(Debug)]
struct CompileContext {
    buf: StringBuilder,
    flavor: Flavor,
    values: Vec<Arg>,
    /// 有序号方言下，token 下标 -> 已分配的序号。
    ordinals: HashMap<usize, usize>,
}

impl CompileContext {
    fn write_arg(&mut self, idx: usize, arg: &Arg) {
        match arg {
            Arg::Raw(r) => self.buf.write_str(r.as_str()),
            Arg::Builder(b) => {
                let (sql, values) = b.build_with_flavor(self.flavor, &self.values);
                self.buf.write_str(&sql);
                self.values = values;
            }
            Arg::Value(_) => self.write_placeholder(idx, arg),
        }
    }

    fn write_placeholder(&mut self, idx: usize, arg: &Arg) {
        let mut out = String::new();
        match self.flavor.placeholder_style() {
            PlaceholderStyle::Anonymous => {
                self.values.push(arg.clone());
                self.flavor.write_placeholder(self.values.len(), &mut out);
            }
            PlaceholderStyle::Ordinal { .. } => {
                let ordinal = match self.ordinals.get(&idx) {
                    Some(&n) => n,
                    None => {
                        self.values.push(arg.clone());
                        let n = self.values.len();
                        self.ordinals.insert(idx, n);
                        n
                    }
                };
                self.flavor.write_placeholder(ordinal, &mut out);
            }
        }
        self.buf.write_str(&out);
    }
}
