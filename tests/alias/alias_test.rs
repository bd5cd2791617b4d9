#[cfg(test)]
mod tests {
    use schemagen::alias::{AliasResolver, Aliases, TableAlias};
    use schemagen::casing::NameCasing;
    use schemagen::config::{ConfigError, GeneratorConfig};
    use schemagen::inflection::Inflector;
    use schemagen::schema::{Column, SchemaModel, Table};

    fn model() -> SchemaModel {
        SchemaModel::new(vec![
            Table::new("people")
                .with_column(Column::new("id", "serial"))
                .with_column(Column::new("api_key", "text"))
                .with_column(Column::new("home_url", "text")),
            Table::new("order_items").with_column(Column::new("sku", "text")),
        ])
    }

    #[test]
    fn test_derived_defaults() {
        let resolved = AliasResolver::new(&Aliases::default(), &Inflector::default(), &NameCasing::default())
            .resolve(&model())
            .unwrap();

        let people = resolved.table("people");
        assert_eq!(people.up_plural, "People");
        assert_eq!(people.up_singular, "Person");
        assert_eq!(people.down_plural, "people");
        assert_eq!(people.down_singular, "person");

        assert_eq!(resolved.column("people", "api_key"), "APIKey");
        assert_eq!(resolved.column("people", "home_url"), "HomeURL");
        assert_eq!(resolved.column("order_items", "sku"), "Sku");
    }

    #[test]
    fn test_explicit_alias_is_verbatim() {
        let aliases = Aliases::default().with_table(
            "people",
            TableAlias::default()
                .up_singular("Human")
                .down_plural("humanBeings")
                .column("api_key", "token"),
        );
        let resolved = AliasResolver::new(&aliases, &Inflector::default(), &NameCasing::default())
            .resolve(&model())
            .unwrap();

        let people = resolved.table("people");
        assert_eq!(people.up_singular, "Human");
        assert_eq!(people.down_plural, "humanBeings");
        assert_eq!(people.up_plural, "People");
        assert_eq!(resolved.column("people", "api_key"), "token");
        assert_eq!(resolved.column("people", "id"), "ID");
    }

    #[test]
    fn test_configured_initialisms() {
        let casing = NameCasing::with_initialisms(["sku"]);
        let resolved = AliasResolver::new(&Aliases::default(), &Inflector::default(), &casing)
            .resolve(&model())
            .unwrap();
        assert_eq!(resolved.column("order_items", "sku"), "SKU");
    }

    #[test]
    fn test_aliases_from_toml() {
        let config = GeneratorConfig::from_toml_str(
            r#"
[aliases.tables.order_items]
up_singular = "LineItem"
columns = { sku = "StockCode" }
relationships = { order_items_order_fk = "ParentOrder" }
"#,
        )
        .unwrap();
        let resolved = AliasResolver::new(&config.aliases, &Inflector::default(), &NameCasing::default())
            .resolve(&model())
            .unwrap();

        assert_eq!(resolved.table("order_items").up_singular, "LineItem");
        assert_eq!(resolved.table("order_items").up_plural, "OrderItems");
        assert_eq!(resolved.column("order_items", "sku"), "StockCode");
    }

    #[test]
    fn test_alias_for_missing_column_is_rejected() {
        let aliases = Aliases::default().with_table("order_items", TableAlias::default().column("qty", "Quantity"));
        let err = AliasResolver::new(&aliases, &Inflector::default(), &NameCasing::default())
            .resolve(&model())
            .unwrap_err();

        assert!(matches!(
            err,
            ConfigError::UnknownColumn { ref table, ref column, .. } if table == "order_items" && column == "qty"
        ));
    }
}
