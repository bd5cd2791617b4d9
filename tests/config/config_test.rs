#[cfg(test)]
mod tests {
    use schemagen::casing::TagCasing;
    use schemagen::config::{ConfigError, GeneratorConfig};
    use schemagen::schema::Cardinality;
    use std::fs;

    const FULL: &str = r#"
tags = ["json", "yaml"]
no_factory = true
no_back_referencing = true
struct_tag_casing = "camel"
relation_tag = "rel"
tag_ignore = ["password_hash"]
initialisms = ["sku"]
generator = "schemagen test"

[[replacements]]
tables = ["users"]
match = { db_type = "serial" }
replace = { type = "excellent.Type", imports = ["rock.com/excellent"] }

[aliases.tables.users]
up_plural = "Members"
columns = { email = "EmailAddress" }

[constraints.posts]
foreign = [{ name = "posts_user_fk", columns = ["user_id"], foreign_table = "users", foreign_columns = ["id"] }]

[[relationships]]
name = "user_tags"
from = "users"
to = "tags"
kind = "many_to_many"
bridge = "user_tags"

[inflections.irregular]
octopus = "octopodes"
"#;

    #[test]
    fn test_parse_full_config() {
        let config = GeneratorConfig::from_toml_str(FULL).unwrap();

        assert_eq!(config.tags, vec!["json", "yaml"]);
        assert!(config.no_factory);
        assert!(!config.no_tests);
        assert!(config.no_back_referencing);
        assert_eq!(config.struct_tag_casing, TagCasing::Camel);
        assert_eq!(config.relation_tag, "rel");
        assert_eq!(config.tag_ignore, vec!["password_hash"]);
        assert_eq!(config.generator, "schemagen test");

        assert_eq!(config.replacements.len(), 1);
        assert_eq!(config.replacements[0].tables, vec!["users"]);
        assert_eq!(config.replacements[0].replace.imports, vec!["rock.com/excellent"]);

        let users = &config.aliases.tables["users"];
        assert_eq!(users.up_plural.as_deref(), Some("Members"));
        assert_eq!(users.columns["email"], "EmailAddress");

        assert_eq!(config.constraints["posts"].foreign[0].foreign_table, "users");
        assert_eq!(config.relationships[0].kind, Cardinality::ManyToMany);
        assert_eq!(config.inflections.irregular["octopus"], "octopodes");

        config.validate().unwrap();
    }

    #[test]
    fn test_generator_env_expansion() {
        std::env::set_var("SCHEMAGEN_CONFIG_TEST_SHA", "abc123");
        let config = GeneratorConfig::from_toml_str(r#"generator = "schemagen ${SCHEMAGEN_CONFIG_TEST_SHA}""#).unwrap();
        assert_eq!(config.generator, "schemagen abc123");
        std::env::remove_var("SCHEMAGEN_CONFIG_TEST_SHA");

        let err = GeneratorConfig::from_toml_str(r#"generator = "${SCHEMAGEN_CONFIG_TEST_UNSET}""#).unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnvVar(_)));
    }

    #[test]
    fn test_invalid_values_do_not_fall_back() {
        let err = GeneratorConfig::from_toml_str(r#"struct_tag_casing = "kebab""#).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));

        let config = GeneratorConfig::from_toml_str(
            r#"
[[relationships]]
name = "tags"
from = "posts"
to = "tags"
kind = "many_to_many"
"#,
        )
        .unwrap();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidRelationship { ref name, .. } if name == "tags"));
    }

    #[test]
    fn test_invalid_inflection_rule() {
        let config = GeneratorConfig::from_toml_str(
            r#"
[inflections]
plural = [{ pattern = "([a-z", replacement = "x" }]
"#,
        )
        .unwrap();
        assert!(matches!(config.validate().unwrap_err(), ConfigError::Inflection(_)));
    }

    #[test]
    fn test_from_file() {
        let path = std::env::temp_dir().join(format!("schemagen-config-{}.toml", std::process::id()));
        fs::write(&path, FULL).unwrap();

        let config = GeneratorConfig::from_file(&path).unwrap();
        assert_eq!(config.aliases.tables.len(), 1);

        fs::remove_file(&path).unwrap();
    }
}
