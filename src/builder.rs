//! 自由拼接：用 `$n` 模板直接构造 builder，可作为嵌套子查询传给其他 builder。

use crate::args::Args;
use crate::flavor::Flavor;
use crate::modifiers::{Arg, Builder};

#[derive(Debug, Clone)]
struct CompiledBuilder {
    args: Args,
    format: String,
}

impl Builder for CompiledBuilder {
    fn build_with_flavor(&self, flavor: Flavor, initial_arg: &[Arg]) -> (String, Vec<Arg>) {
        self.args
            .compile_with_flavor(&self.format, flavor, initial_arg)
    }

    fn flavor(&self) -> Flavor {
        self.args.flavor
    }
}

#[derive(Clone)]
struct FlavoredBuilder {
    inner: Box<dyn Builder>,
    flavor: Flavor,
}

impl Builder for FlavoredBuilder {
    fn build_with_flavor(&self, flavor: Flavor, initial_arg: &[Arg]) -> (String, Vec<Arg>) {
        self.inner.build_with_flavor(flavor, initial_arg)
    }

    fn flavor(&self) -> Flavor {
        self.flavor
    }
}

/// 给任意 builder 绑定默认 flavor（`build()` 时使用）。
pub fn with_flavor(builder: impl Builder + 'static, flavor: Flavor) -> Box<dyn Builder> {
    Box::new(FlavoredBuilder {
        inner: Box::new(builder),
        flavor,
    })
}

/// 用 `$n` 模板构造 builder：`$0` 引用 `args_in` 的第一个参数，`$$` 输出 `$`。
///
/// 引用越界的 `$n` 会在 build 时 panic。
pub fn build(
    format: impl Into<String>,
    args_in: impl IntoIterator<Item = impl Into<Arg>>,
) -> Box<dyn Builder> {
    let mut args = Args::default();
    for a in args_in {
        args.add(a);
    }
    Box::new(CompiledBuilder {
        args,
        format: format.into(),
    })
}
