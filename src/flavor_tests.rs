#[cfg(test)]
mod tests {
    use crate::flavor::{
        Flavor, FlavorError, InsertIgnore, PlaceholderStyle, default_flavor,
        set_default_flavor, set_default_flavor_scoped,
    };
    use pretty_assertions::assert_eq;

    #[test]
    fn display_and_parse_round_trip() {
        for &f in Flavor::all() {
            assert_eq!(f.to_string().parse::<Flavor>(), Ok(f));
            assert_eq!(f.to_string().to_lowercase().parse::<Flavor>(), Ok(f));
        }
        assert_eq!("postgres".parse::<Flavor>(), Ok(Flavor::PostgreSQL));
        assert_eq!(" MSSQL ".parse::<Flavor>(), Ok(Flavor::SQLServer));
    }

    #[test]
    fn parse_unknown_flavor_fails() {
        let err = "sybase".parse::<Flavor>().unwrap_err();
        assert_eq!(err, FlavorError::Unknown("sybase".to_string()));
        assert_eq!(err.to_string(), "builder unknown flavor `sybase`");
    }

    #[test]
    fn placeholders_per_flavor() {
        let cases = [
            (Flavor::MySQL, "?"),
            (Flavor::PostgreSQL, "$3"),
            (Flavor::SQLite, "?"),
            (Flavor::SQLServer, "@p3"),
            (Flavor::CQL, "?"),
            (Flavor::ClickHouse, "?"),
            (Flavor::Presto, "?"),
            (Flavor::Oracle, ":3"),
            (Flavor::Informix, "?"),
            (Flavor::Doris, "?"),
        ];
        for (f, expected) in cases {
            assert_eq!(f.render_placeholder(3), expected, "{f}");
        }
        assert_eq!(Flavor::MySQL.placeholder_style(), PlaceholderStyle::Anonymous);
        assert_eq!(
            Flavor::PostgreSQL.placeholder_style(),
            PlaceholderStyle::Ordinal { prefix: "$" }
        );
    }

    #[test]
    fn quote_per_flavor() {
        assert_eq!(Flavor::MySQL.quote("user"), "`user`");
        assert_eq!(Flavor::Doris.quote("user"), "`user`");
        assert_eq!(Flavor::PostgreSQL.quote("user"), "\"user\"");
        assert_eq!(Flavor::Oracle.quote("user"), "\"user\"");
        assert_eq!(Flavor::CQL.quote("user"), "'user'");
    }

    #[test]
    fn insert_ignore_strategies() {
        assert_eq!(Flavor::MySQL.insert_ignore(), InsertIgnore::Verb("INSERT IGNORE"));
        assert_eq!(Flavor::Oracle.insert_ignore(), InsertIgnore::Verb("INSERT IGNORE"));
        assert_eq!(Flavor::Doris.insert_ignore(), InsertIgnore::Verb("INSERT IGNORE"));
        for flavor in [
            Flavor::SQLServer,
            Flavor::ClickHouse,
            Flavor::Presto,
            Flavor::Informix,
        ] {
            assert_eq!(flavor.insert_ignore(), InsertIgnore::Verb("INSERT"), "{flavor}");
        }
        assert_eq!(
            Flavor::SQLite.insert_ignore(),
            InsertIgnore::Verb("INSERT OR IGNORE")
        );
        assert_eq!(
            Flavor::PostgreSQL.insert_ignore(),
            InsertIgnore::ConflictClause("ON CONFLICT DO NOTHING")
        );
        assert_eq!(
            Flavor::CQL.insert_ignore(),
            InsertIgnore::ConflictClause("IF NOT EXISTS")
        );
    }

    #[test]
    fn default_flavor_round_trips_every_flavor() {
        let _g = set_default_flavor_scoped(Flavor::MySQL);
        for &flavor in Flavor::all() {
            set_default_flavor(flavor);
            assert_eq!(default_flavor(), flavor);
        }
    }

    #[test]
    fn scoped_default_flavor_applies_to_new_builders() {
        let _g = set_default_flavor_scoped(Flavor::SQLite);
        assert_eq!(default_flavor(), Flavor::SQLite);
        assert_eq!(crate::InsertBuilder::new().flavor(), Flavor::SQLite);
        assert_eq!(Flavor::Oracle.new_insert_builder().flavor(), Flavor::Oracle);
    }
}
