//! halo-sql-insert：INSERT builder 与参数编译核心。
//!
//! 值先以占位符的形式登记在 `Args` 中，build 时再按 `Flavor` 输出
//! 方言对应的占位符与有序参数列表，可直接交给驱动的参数化查询接口。
//!
//! ```
//! use halo_space::{Flavor, insert_cols};
//!
//! let mut ib = Flavor::PostgreSQL.new_insert_builder();
//! ib.insert_into("user");
//! insert_cols!(ib, "id", "name").values([1_i64, 2_i64]);
//! let (sql, args) = ib.build();
//! assert_eq!(sql, "INSERT INTO user (id, name) VALUES ($1, $2)");
//! assert_eq!(args.len(), 2);
//! ```

pub mod args;
pub mod builder;
pub mod flavor;
#[cfg(test)]
mod flavor_tests;
mod injection;
pub mod insert;
pub mod macros;
pub use crate::macros::*;
#[cfg(test)]
mod macros_tests;
pub mod mapper;
#[cfg(test)]
mod mapper_tests;
pub mod modifiers;
mod string_builder;
pub mod value;

pub use crate::args::Args;
pub use crate::builder::{build, with_flavor};
pub use crate::flavor::{
    DefaultFlavorGuard, Flavor, FlavorError, InsertIgnore, PlaceholderStyle, default_flavor,
    set_default_flavor, set_default_flavor_scoped,
};
pub use crate::insert::{InsertBuilder, InsertMarker, insert_ignore_into, insert_into, replace_into};
pub use crate::mapper::{FieldTag, RowField, SqlRow};
pub use crate::modifiers::{Arg, Builder, Raw, escape, escape_all, raw};
pub use crate::value::SqlValue;

/// 便捷命名空间：`use halo_space::sqlbuilder::{...}`。
pub mod sqlbuilder {
    pub use crate::*;
}
