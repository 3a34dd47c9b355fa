#[cfg(test)]
mod tests {
    use crate::modifiers::Arg;
    use crate::{Flavor, insert_cols, insert_values};
    use pretty_assertions::assert_eq;

    #[test]
    fn insert_macros_accept_mixed_arguments() {
        let mut ib = Flavor::MySQL.new_insert_builder();
        ib.insert_into("t");
        let extra = vec!["c".to_string(), "d".to_string()];
        insert_cols!(ib, "a", String::from("b"), extra);
        insert_values!(ib, 1_i64, "two", 3.5_f64, None::<i64>);

        let (sql, args) = ib.build();
        assert_eq!(sql, "INSERT INTO t (a, b, c, d) VALUES (?, ?, ?, ?)");
        assert_eq!(
            args,
            vec![
                Arg::from(1_i64),
                Arg::from("two"),
                Arg::from(3.5_f64),
                Arg::from(None::<i64>)
            ]
        );
    }

    #[test]
    fn empty_macro_calls() {
        let mut ib = Flavor::MySQL.new_insert_builder();
        ib.insert_into("t");
        insert_cols!(ib);
        insert_values!(ib);
        assert_eq!(ib.build().0, "INSERT INTO t VALUES ()");
    }
}
