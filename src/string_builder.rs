//! 拼接 SQL 模板用的字符串缓冲。

#[derive(Debug, Default, Clone)]
pub(crate) struct StringBuilder {
    buf: String,
}

impl StringBuilder {
    pub(crate) fn new() -> Self {
        Self { buf: String::new() }
    }

    /// 写入 `s`；缓冲非空时先写一个空格。
    pub(crate) fn write_leading(&mut self, s: &str) {
        if !self.buf.is_empty() {
            self.buf.push(' ');
        }
        self.buf.push_str(s);
    }

    pub(crate) fn write_str(&mut self, s: &str) {
        self.buf.push_str(s);
    }

    pub(crate) fn write_char(&mut self, c: char) {
        self.buf.push(c);
    }

    /// 以 `sep` 连接 `items`，跳过空串。
    pub(crate) fn write_strings(&mut self, items: &[String], sep: &str) {
        let mut first = true;
        for s in items.iter().filter(|s| !s.is_empty()) {
            if !first {
                self.buf.push_str(sep);
            }
            self.buf.push_str(s);
            first = false;
        }
    }

    pub(crate) fn into_string(self) -> String {
        self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::StringBuilder;

    #[test]
    fn leading_space_only_after_first_write() {
        let mut b = StringBuilder::new();
        b.write_leading("INSERT");
        b.write_leading("INTO");
        assert_eq!(b.into_string(), "INSERT INTO");
    }

    #[test]
    fn write_strings_skips_empty() {
        let mut b = StringBuilder::new();
        b.write_strings(&["a".into(), String::new(), "b".into()], ", ");
        assert_eq!(b.into_string(), "a, b");
    }
}
