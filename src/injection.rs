//! injection：按构建检查点（marker）注入原样输出的 SQL 片段。

use crate::string_builder::StringBuilder;
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
pub(crate) struct Injection<M> {
    marker_sqls: BTreeMap<M, Vec<String>>,
}

impl<M> Default for Injection<M> {
    fn default() -> Self {
        Self {
            marker_sqls: BTreeMap::new(),
        }
    }
}

impl<M: Ord + Copy> Injection<M> {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn sql(&mut self, marker: M, sql: impl Into<String>) {
        self.marker_sqls.entry(marker).or_default().push(sql.into());
    }

    pub(crate) fn at(&self, marker: M) -> &[String] {
        self.marker_sqls
            .get(&marker)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// 把 `marker` 下的片段以空格连接写入 `buf`（前面补一个空格）。
    pub(crate) fn write_to(&self, buf: &mut StringBuilder, marker: M) {
        let sqls = self.at(marker);
        if sqls.is_empty() {
            return;
        }
        buf.write_leading("");
        buf.write_strings(sqls, " ");
    }
}
