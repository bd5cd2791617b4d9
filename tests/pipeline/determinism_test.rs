#[cfg(test)]
mod tests {
    use schemagen::config::GeneratorConfig;
    use schemagen::driver::SnapshotDriver;
    use schemagen::hash;
    use schemagen::pipeline::Pipeline;
    use schemagen::render::{JsonRenderer, Renderer};

    const SCHEMA: &str = r#"{
  "tables": [
    {
      "name": "categories",
      "columns": [
        { "name": "id", "db_type": "serial" },
        { "name": "parent_id", "db_type": "int", "nullable": true }
      ],
      "constraints": {
        "primary": { "name": "categories_pkey", "columns": ["id"] },
        "foreign": [
          { "name": "categories_parent_fk", "columns": ["parent_id"], "foreign_table": "categories", "foreign_columns": ["id"] }
        ]
      }
    },
    {
      "name": "products",
      "columns": [
        { "name": "id", "db_type": "serial" },
        { "name": "category_id", "db_type": "int" },
        { "name": "sku", "db_type": "text" }
      ],
      "constraints": {
        "foreign": [
          { "name": "products_category_fk", "columns": ["category_id"], "foreign_table": "categories", "foreign_columns": ["id"] }
        ]
      }
    },
    {
      "name": "tags",
      "columns": [{ "name": "id", "db_type": "serial" }]
    },
    {
      "name": "product_tags",
      "columns": [
        { "name": "product_id", "db_type": "int" },
        { "name": "tag_id", "db_type": "int" }
      ]
    }
  ]
}"#;

    const CONFIG: &str = r#"
initialisms = ["sku"]

[[replacements]]
match = { db_type = "serial" }
replace = { type = "int64" }

[[replacements]]
match = { db_type = "int", nullable = true }
replace = { type = "null.Int64", imports = ["github.com/aarondl/opt/null"] }

[[relationships]]
name = "product_tags"
from = "products"
to = "tags"
kind = "many_to_many"
bridge = "product_tags"
columns = [{ from = "id", to = "product_id" }]
"#;

    fn render_once() -> (String, String) {
        let driver = SnapshotDriver::from_json_str(SCHEMA).unwrap();
        let config = GeneratorConfig::from_toml_str(CONFIG).unwrap();
        let pipeline = Pipeline::new(config);

        let fingerprint = hash::fingerprint(&pipeline.resolve(&driver).unwrap()).unwrap();

        let mut renderer = JsonRenderer::new(Vec::new());
        let summary = pipeline.run(&driver, &mut renderer).unwrap();
        assert_eq!(summary.fingerprint, fingerprint);
        assert_eq!(renderer.name(), "json");

        (String::from_utf8(renderer.into_inner()).unwrap(), fingerprint)
    }

    #[test]
    fn test_repeated_runs_are_byte_identical() {
        let (first_json, first_hash) = render_once();
        for _ in 0..5 {
            let (json, hash) = render_once();
            assert_eq!(json, first_json);
            assert_eq!(hash, first_hash);
        }
    }

    #[test]
    fn test_relationship_order() {
        let driver = SnapshotDriver::from_json_str(SCHEMA).unwrap();
        let config = GeneratorConfig::from_toml_str(CONFIG).unwrap();
        let input = Pipeline::new(config).resolve(&driver).unwrap();

        let listed: Vec<String> = input
            .model
            .relationships()
            .map(|r| format!("{}->{}:{}", r.from_table, r.to_table, r.kind))
            .collect();

        assert_eq!(
            listed,
            vec![
                "categories->categories:many_to_one",
                "categories->categories:one_to_many",
                "categories->products:one_to_many",
                "products->categories:many_to_one",
                "products->tags:many_to_many",
                "tags->products:many_to_many",
            ]
        );
    }

    #[test]
    fn test_fingerprint_tracks_config() {
        let driver = SnapshotDriver::from_json_str(SCHEMA).unwrap();
        let base = GeneratorConfig::from_toml_str(CONFIG).unwrap();
        let changed = base.clone().without_back_references();

        let a = hash::fingerprint(&Pipeline::new(base).resolve(&driver).unwrap()).unwrap();
        let b = hash::fingerprint(&Pipeline::new(changed).resolve(&driver).unwrap()).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_nullable_replacement_and_aliases() {
        let driver = SnapshotDriver::from_json_str(SCHEMA).unwrap();
        let config = GeneratorConfig::from_toml_str(CONFIG).unwrap();
        let input = Pipeline::new(config).resolve(&driver).unwrap();

        let categories = input.model.table("categories").unwrap();
        assert_eq!(categories.columns[0].source_type, "int64");
        assert_eq!(categories.columns[1].source_type, "null.Int64");

        let products = input.model.table("products").unwrap();
        assert_eq!(products.columns[1].source_type, "");
        assert!(products.columns[1].imports.is_empty());

        assert_eq!(input.aliases.table("categories").up_singular, "Category");
        assert_eq!(input.aliases.table("product_tags").down_plural, "productTags");
        assert_eq!(input.aliases.column("products", "sku"), "SKU");
        assert_eq!(input.aliases.column("products", "category_id"), "CategoryID");
    }
}
