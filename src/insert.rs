//! InsertBuilder：构建 INSERT / INSERT IGNORE / REPLACE 语句。
//!
//! 配置调用可以任意顺序进行，输出子句顺序固定：
//! `[Init] VERB INTO table [AfterInsertInto] (cols) [AfterCols] VALUES (...) [AfterValues]`。

use crate::args::Args;
use crate::flavor::{Flavor, default_flavor};
use crate::injection::Injection;
use crate::macros::{IntoStrings, collect_into_strings};
use crate::mapper::SqlRow;
use crate::modifiers::{Arg, Builder, escape, escape_all};
use crate::string_builder::StringBuilder;
use std::fmt;

/// INSERT 的注入检查点，按输出顺序排列。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum InsertMarker {
    Init,
    AfterInsertInto,
    AfterCols,
    AfterValues,
}

#[derive(Debug, Clone)]
pub struct InsertBuilder {
    verb: &'static str,
    table: Option<String>,
    cols: Vec<String>,
    values: Vec<Vec<String>>,

    args: Args,

    injection: Injection<InsertMarker>,
    marker: InsertMarker,
    /// 冲突子句（如 `ON CONFLICT DO NOTHING`），紧跟 VALUES 输出。
    conflict: Option<&'static str>,
}

impl Default for InsertBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// 用默认 flavor 创建 builder 并设置表名。
pub fn insert_into(table: &str) -> InsertBuilder {
    let mut ib = default_flavor().new_insert_builder();
    ib.insert_into(table);
    ib
}

/// 用默认 flavor 创建 INSERT IGNORE builder。
pub fn insert_ignore_into(table: &str) -> InsertBuilder {
    let mut ib = default_flavor().new_insert_builder();
    ib.insert_ignore_into(table);
    ib
}

/// 用默认 flavor 创建 REPLACE builder。
pub fn replace_into(table: &str) -> InsertBuilder {
    let mut ib = default_flavor().new_insert_builder();
    ib.replace_into(table);
    ib
}

impl InsertBuilder {
    pub fn new() -> Self {
        Self {
            verb: "INSERT",
            table: None,
            cols: Vec::new(),
            values: Vec::new(),
            args: Args::default(),
            injection: Injection::new(),
            marker: InsertMarker::Init,
            conflict: None,
        }
    }

    /// 修改之后 `build` 使用的 flavor，返回旧值。已设置的表名、列名与参数不受影响。
    pub fn set_flavor(&mut self, flavor: Flavor) -> Flavor {
        std::mem::replace(&mut self.args.flavor, flavor)
    }

    pub fn flavor(&self) -> Flavor {
        self.args.flavor
    }

    /// 当前注入游标。
    pub fn marker(&self) -> InsertMarker {
        self.marker
    }

    pub fn build(&self) -> (String, Vec<Arg>) {
        Builder::build(self)
    }

    /// 游标只前进不后退。
    fn advance(&mut self, marker: InsertMarker) {
        self.marker = self.marker.max(marker);
    }

    pub(crate) fn set_target(&mut self, verb: &'static str, table: &str) {
        self.verb = verb;
        self.table = Some(escape(table));
        self.conflict = None;
        self.advance(InsertMarker::AfterInsertInto);
    }

    pub(crate) fn set_conflict_clause(&mut self, clause: &'static str) {
        self.conflict = Some(clause);
    }

    pub fn insert_into(&mut self, table: &str) -> &mut Self {
        self.set_target("INSERT", table);
        self
    }

    /// INSERT IGNORE：具体写法由当前 flavor 决定（改动词或追加冲突子句）。
    pub fn insert_ignore_into(&mut self, table: &str) -> &mut Self {
        self.flavor().prepare_insert_ignore(table, self);
        self
    }

    /// REPLACE INTO（MySQL 扩展）。
    pub fn replace_into(&mut self, table: &str) -> &mut Self {
        self.set_target("REPLACE", table);
        self
    }

    /// 设置列名（覆盖之前的列名）。
    pub fn cols<T>(&mut self, cols: T) -> &mut Self
    where
        T: IntoStrings,
    {
        self.cols = escape_all(collect_into_strings(cols));
        self.advance(InsertMarker::AfterCols);
        self
    }

    /// 追加一行值。
    pub fn values(&mut self, values: impl IntoIterator<Item = impl Into<Arg>>) -> &mut Self {
        let placeholders: Vec<String> = values.into_iter().map(|v| self.var(v)).collect();
        self.values.push(placeholders);
        self.advance(InsertMarker::AfterValues);
        self
    }

    /// 用 mapper 提供的字段设置列名并追加一行；主键字段被跳过。
    pub fn insert_item<R: SqlRow + ?Sized>(&mut self, item: &R) -> &mut Self {
        let (cols, values): (Vec<&'static str>, Vec<Arg>) = item
            .row_fields()
            .into_iter()
            .filter(|f| !f.primary_key)
            .map(|f| (f.name, f.value))
            .unzip();
        self.cols(cols).values(values)
    }

    /// 注册一个参数并返回占位符，可嵌入 `sql_template` 片段中。
    pub fn var(&mut self, v: impl Into<Arg>) -> String {
        self.args.add(v)
    }

    /// 在当前游标位置注入一段原样输出的 SQL，其中的 `$` 不做任何解析。
    pub fn sql(&mut self, sql: impl Into<String>) -> &mut Self {
        self.injection.sql(self.marker, escape(&sql.into()));
        self
    }

    /// 与 `sql` 相同，但片段按模板编译：`var` 返回的 `$n` 会绑定为参数，`$$` 输出 `$`。
    ///
    /// 片段里的 `$n` 必须来自本 builder 的 `var`，否则 `build` 时 panic。
    pub fn sql_template(&mut self, template: impl Into<String>) -> &mut Self {
        self.injection.sql(self.marker, template);
        self
    }
}

impl Builder for InsertBuilder {
    fn build_with_flavor(&self, flavor: Flavor, initial_arg: &[Arg]) -> (String, Vec<Arg>) {
        let mut buf = StringBuilder::new();
        self.injection.write_to(&mut buf, InsertMarker::Init);

        if let Some(t) = &self.table {
            buf.write_leading(self.verb);
            buf.write_str(" INTO ");
            buf.write_str(t);
        }
        self.injection
            .write_to(&mut buf, InsertMarker::AfterInsertInto);

        if !self.cols.is_empty() {
            buf.write_leading("(");
            buf.write_str(&self.cols.join(", "));
            buf.write_char(')');
        }
        self.injection.write_to(&mut buf, InsertMarker::AfterCols);

        if !self.values.is_empty() {
            buf.write_leading("VALUES ");
            let rows: Vec<String> = self
                .values
                .iter()
                .map(|row| format!("({})", row.join(", ")))
                .collect();
            buf.write_str(&rows.join(", "));
        }
        if let Some(clause) = self.conflict {
            buf.write_leading(clause);
        }
        self.injection.write_to(&mut buf, InsertMarker::AfterValues);

        self.args
            .compile_with_flavor(&buf.into_string(), flavor, initial_arg)
    }

    fn flavor(&self) -> Flavor {
        self.args.flavor
    }
}

impl fmt::Display for InsertBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build().0)
    }
}
