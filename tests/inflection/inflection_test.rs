#[cfg(test)]
mod tests {
    use schemagen::config::GeneratorConfig;
    use schemagen::inflection::{InflectionRule, InflectionTables, Inflector};

    const WORDS: &[&str] = &[
        "customer", "category", "person", "box", "address", "status", "wolf", "datum", "index",
        "matrix", "bus", "quiz", "ox", "mouse", "child", "analysis", "octopus", "hero", "movie",
        "company", "key", "day", "sheep", "news", "axis", "potato", "church", "process", "alias",
        "knife", "user", "tag", "order_item",
    ];

    #[test]
    fn test_plural_singular_plural_is_stable() {
        let inflector = Inflector::default();
        for word in WORDS {
            let plural = inflector.plural(word);
            let again = inflector.plural(&inflector.singular(&plural));
            assert_eq!(again, plural, "unstable plural for '{}'", word);
        }
    }

    #[test]
    fn test_singular_of_plural_returns_word() {
        let inflector = Inflector::default();
        for word in WORDS {
            assert_eq!(
                inflector.singular(&inflector.plural(word)),
                *word,
                "singular(plural('{}'))",
                word
            );
        }
    }

    #[test]
    fn test_table_names() {
        let inflector = Inflector::default();
        assert_eq!(inflector.singular("order_items"), "order_item");
        assert_eq!(inflector.singular("user_addresses"), "user_address");
        assert_eq!(inflector.plural("audit_log_entry"), "audit_log_entries");
        assert_eq!(inflector.singular("people"), "person");
        assert_eq!(inflector.singular("data"), "datum");
    }

    #[test]
    fn test_config_overrides() {
        let config = GeneratorConfig::from_toml_str(
            r#"
[inflections]
plural = [{ pattern = "(cact)us$", replacement = "${1}i" }]
singular = [{ pattern = "(cact)i$", replacement = "${1}us" }]

[inflections.irregular]
octopus = "octopodes"

[inflections.plural_exact]
staff = "staff"
"#,
        )
        .unwrap();
        let inflector = config.inflector().unwrap();

        assert_eq!(inflector.plural("cactus"), "cacti");
        assert_eq!(inflector.singular("cacti"), "cactus");
        assert_eq!(inflector.plural("octopus"), "octopodes");
        assert_eq!(inflector.singular("octopodes"), "octopus");
        assert_eq!(inflector.plural("staff"), "staff");
    }

    #[test]
    fn test_user_rules_precede_builtins() {
        let tables = InflectionTables {
            plural: vec![InflectionRule::new("(ss)$", "${1}ii")],
            ..Default::default()
        };
        let inflector = Inflector::with_tables(&tables).unwrap();
        assert_eq!(inflector.plural("address"), "addressii");
        assert_eq!(inflector.plural("church"), "churches");
    }
}
