#[cfg(test)]
mod tests {
    use crate::mapper::{FieldTag, RowField, SqlRow};
    use crate::modifiers::Arg;
    use crate::{Flavor, sql_row};
    use pretty_assertions::assert_eq;

    #[derive(Debug, Clone)]
    struct User {
        id: i64,
        name: String,
        email: Option<String>,
        status: i32,
    }

    sql_row! {
        impl User {
            id: "id;primary_key",
            name: "name",
            email: "email",
            status: "status",
        }
    }

    fn user() -> User {
        User {
            id: 1234,
            name: "Huan Du".to_string(),
            email: None,
            status: 1,
        }
    }

    #[test]
    fn parse_tag() {
        assert_eq!(
            FieldTag::parse("id;primary_key"),
            FieldTag {
                name: "id",
                primary_key: true
            }
        );
        assert_eq!(
            FieldTag::parse("name"),
            FieldTag {
                name: "name",
                primary_key: false
            }
        );
        assert_eq!(
            FieldTag::parse("created_at;readonly"),
            FieldTag {
                name: "created_at",
                primary_key: false
            }
        );
    }

    #[test]
    fn row_fields_keep_declaration_order() {
        let fields = user().row_fields();
        let names: Vec<_> = fields.iter().map(|f| (f.name, f.primary_key)).collect();
        assert_eq!(
            names,
            vec![
                ("id", true),
                ("name", false),
                ("email", false),
                ("status", false)
            ]
        );
        assert_eq!(fields[0], RowField::new("id;primary_key", 1234_i64));
    }

    #[test]
    fn insert_item_skips_primary_key() {
        let mut ib = Flavor::MySQL.new_insert_builder();
        ib.insert_into("user").insert_item(&user());
        let (sql, args) = ib.build();
        assert_eq!(sql, "INSERT INTO user (name, email, status) VALUES (?, ?, ?)");
        assert_eq!(
            args,
            vec![
                Arg::from("Huan Du"),
                Arg::from(None::<String>),
                Arg::from(1_i32)
            ]
        );
    }

    #[test]
    fn insert_item_twice_appends_rows() {
        let mut second = user();
        second.name = "Charmy Liu".to_string();
        second.email = Some("charmy@example.com".to_string());

        let mut ib = Flavor::PostgreSQL.new_insert_builder();
        ib.insert_into("user");
        ib.insert_item(&user()).insert_item(&second);
        let (sql, args) = ib.build();
        assert_eq!(
            sql,
            "INSERT INTO user (name, email, status) VALUES ($1, $2, $3), ($4, $5, $6)"
        );
        assert_eq!(args[4], Arg::from("charmy@example.com".to_string()));
    }

    struct Manual;

    impl SqlRow for Manual {
        fn row_fields(&self) -> Vec<RowField> {
            vec![
                RowField::new("uid;primary_key", 1_i64),
                RowField::new("label", "x"),
            ]
        }
    }

    #[test]
    fn hand_written_mapper() {
        let mut ib = Flavor::SQLServer.new_insert_builder();
        ib.insert_into("t").insert_item(&Manual);
        assert_eq!(ib.build().0, "INSERT INTO t (label) VALUES (@p1)");
    }
}
