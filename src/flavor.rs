//! SQL Flavor（方言）：控制占位符、标识符 Quote 以及 INSERT IGNORE 等方言差异。

use crate::insert::InsertBuilder;
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Mutex, MutexGuard};

/// 支持的 SQL 方言（封闭集合）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Flavor {
    #[default]
    MySQL,
    PostgreSQL,
    SQLite,
    SQLServer,
    CQL,
    ClickHouse,
    Presto,
    Oracle,
    Informix,
    Doris,
}

static ALL_FLAVORS: [Flavor; 10] = [
    Flavor::MySQL,
    Flavor::PostgreSQL,
    Flavor::SQLite,
    Flavor::SQLServer,
    Flavor::CQL,
    Flavor::ClickHouse,
    Flavor::Presto,
    Flavor::Oracle,
    Flavor::Informix,
    Flavor::Doris,
];

static DEFAULT_FLAVOR: AtomicU8 = AtomicU8::new(Flavor::MySQL as u8);
static DEFAULT_FLAVOR_LOCK: Mutex<()> = Mutex::new(());

impl Flavor {
    /// 全部方言，按声明顺序。
    pub fn all() -> &'static [Flavor] {
        &ALL_FLAVORS
    }

    // DEFAULT_FLAVOR 只会写入 `flavor as u8`，下标总在范围内。
    fn from_u8(v: u8) -> Self {
        ALL_FLAVORS[usize::from(v)]
    }
}

/// 获取当前进程级默认 Flavor。
pub fn default_flavor() -> Flavor {
    Flavor::from_u8(DEFAULT_FLAVOR.load(Ordering::Relaxed))
}

/// 设置进程级默认 Flavor，返回旧值。
///
/// 只影响之后新建的 builder；已有 builder 持有自己的 flavor。
pub fn set_default_flavor(flavor: Flavor) -> Flavor {
    let old = DEFAULT_FLAVOR.swap(flavor as u8, Ordering::Relaxed);
    Flavor::from_u8(old)
}

/// 修改默认 Flavor 的 RAII guard（持有全局锁，并行测试之间互不干扰）。
pub struct DefaultFlavorGuard {
    _lock: MutexGuard<'static, ()>,
    old: Flavor,
}

impl Drop for DefaultFlavorGuard {
    fn drop(&mut self) {
        set_default_flavor(self.old);
    }
}

/// 在一个作用域内临时设置默认 Flavor，guard 释放时自动恢复。
pub fn set_default_flavor_scoped(flavor: Flavor) -> DefaultFlavorGuard {
    let lock = DEFAULT_FLAVOR_LOCK
        .lock()
        .unwrap_or_else(|e| e.into_inner());
    let old = set_default_flavor(flavor);
    DefaultFlavorGuard { _lock: lock, old }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::MySQL => "MySQL",
            Self::PostgreSQL => "PostgreSQL",
            Self::SQLite => "SQLite",
            Self::SQLServer => "SQLServer",
            Self::CQL => "CQL",
            Self::ClickHouse => "ClickHouse",
            Self::Presto => "Presto",
            Self::Oracle => "Oracle",
            Self::Informix => "Informix",
            Self::Doris => "Doris",
        };
        f.write_str(s)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FlavorError {
    #[error("builder unknown flavor `{0}`")]
    Unknown(String),
}

impl FromStr for Flavor {
    type Err = FlavorError;

    /// 按名称解析（大小写不敏感），额外接受 `postgres` / `mssql` 别名。
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        match name.as_str() {
            "postgres" => return Ok(Self::PostgreSQL),
            "mssql" => return Ok(Self::SQLServer),
            _ => {}
        }
        ALL_FLAVORS
            .iter()
            .copied()
            .find(|f| f.to_string().eq_ignore_ascii_case(&name))
            .ok_or_else(|| FlavorError::Unknown(s.to_string()))
    }
}

/// 占位符风格。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderStyle {
    /// 匿名 `?`，只能按出现顺序绑定。
    Anonymous,
    /// 带序号的占位符，如 `$1`、`@p1`、`:1`；同一序号可重复引用。
    Ordinal { prefix: &'static str },
}

/// INSERT IGNORE 在各方言下的表达方式。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertIgnore {
    /// 替换动词，例如 `INSERT IGNORE`、`INSERT OR IGNORE`。
    Verb(&'static str),
    /// 保留 `INSERT`，在 VALUES 之后追加冲突子句。
    ConflictClause(&'static str),
}

impl Flavor {
    pub fn placeholder_style(self) -> PlaceholderStyle {
        match self {
            Self::PostgreSQL => PlaceholderStyle::Ordinal { prefix: "$" },
            Self::SQLServer => PlaceholderStyle::Ordinal { prefix: "@p" },
            Self::Oracle => PlaceholderStyle::Ordinal { prefix: ":" },
            Self::MySQL
            | Self::SQLite
            | Self::CQL
            | Self::ClickHouse
            | Self::Presto
            | Self::Informix
            | Self::Doris => PlaceholderStyle::Anonymous,
        }
    }

    /// 渲染第 `ordinal` 个参数（从 1 开始）的占位符。
    pub fn render_placeholder(self, ordinal: usize) -> String {
        let mut out = String::new();
        self.write_placeholder(ordinal, &mut out);
        out
    }

    pub(crate) fn write_placeholder(self, ordinal: usize, out: &mut String) {
        match self.placeholder_style() {
            PlaceholderStyle::Anonymous => out.push('?'),
            PlaceholderStyle::Ordinal { prefix } => {
                out.push_str(prefix);
                out.push_str(&ordinal.to_string());
            }
        }
    }

    /// 为标识符加引号。
    pub fn quote(self, name: &str) -> String {
        match self {
            Self::MySQL | Self::ClickHouse | Self::Doris => format!("`{name}`"),
            Self::PostgreSQL
            | Self::SQLServer
            | Self::SQLite
            | Self::Presto
            | Self::Oracle
            | Self::Informix => format!("\"{name}\""),
            Self::CQL => format!("'{name}'"),
        }
    }

    pub fn insert_ignore(self) -> InsertIgnore {
        match self {
            Self::SQLite => InsertIgnore::Verb("INSERT OR IGNORE"),
            Self::PostgreSQL => InsertIgnore::ConflictClause("ON CONFLICT DO NOTHING"),
            Self::CQL => InsertIgnore::ConflictClause("IF NOT EXISTS"),
            Self::MySQL | Self::Oracle | Self::Doris => InsertIgnore::Verb("INSERT IGNORE"),
            // 不支持忽略冲突的方言退化为普通 INSERT
            Self::SQLServer | Self::ClickHouse | Self::Presto | Self::Informix => {
                InsertIgnore::Verb("INSERT")
            }
        }
    }

    /// 按本方言把 `ib` 设置为 INSERT IGNORE 形式；游标至少推进到表名之后。
    pub fn prepare_insert_ignore(self, table: &str, ib: &mut InsertBuilder) {
        match self.insert_ignore() {
            InsertIgnore::Verb(verb) => ib.set_target(verb, table),
            InsertIgnore::ConflictClause(clause) => {
                ib.set_target("INSERT", table);
                ib.set_conflict_clause(clause);
            }
        }
    }

    /// 创建使用本方言的 InsertBuilder。
    pub fn new_insert_builder(self) -> InsertBuilder {
        let mut ib = InsertBuilder::new();
        ib.set_flavor(self);
        ib
    }
}
