#[cfg(test)]
mod tests {
    use schemagen::alias::{AliasResolver, Aliases, TableAlias};
    use schemagen::casing::NameCasing;
    use schemagen::error::ResolutionError;
    use schemagen::inflection::Inflector;
    use schemagen::relationship::{RelationshipDecl, RelationshipResolver};
    use schemagen::schema::{Cardinality, Column, ForeignKey, SchemaModel, Table};

    fn shop() -> SchemaModel {
        SchemaModel::new(vec![
            Table::new("customers").with_column(Column::new("id", "serial")),
            Table::new("orders")
                .with_column(Column::new("id", "serial"))
                .with_column(Column::new("customer_id", "int"))
                .with_foreign_key(ForeignKey::new(
                    "orders_customer_fk",
                    &["customer_id"],
                    "customers",
                    &["id"],
                )),
            Table::new("products").with_column(Column::new("id", "serial")),
            Table::new("order_products")
                .with_column(Column::new("order_id", "int"))
                .with_column(Column::new("product_id", "int")),
        ])
    }

    fn triples(model: &SchemaModel) -> Vec<(String, String, Cardinality, bool)> {
        model
            .relationships()
            .map(|r| {
                (
                    r.from_table.clone(),
                    r.to_table.clone(),
                    r.kind,
                    r.synthetic_back_reference,
                )
            })
            .collect()
    }

    #[test]
    fn test_explicit_one_to_many_gets_back_reference() {
        let mut model = SchemaModel::new(vec![Table::new("a"), Table::new("b")]);
        let decls = vec![RelationshipDecl::new("a_bs", "a", "b", Cardinality::OneToMany)];

        RelationshipResolver::new(&decls).resolve(&mut model).unwrap();

        assert_eq!(
            triples(&model),
            vec![
                ("a".into(), "b".into(), Cardinality::OneToMany, false),
                ("b".into(), "a".into(), Cardinality::ManyToOne, true),
            ]
        );
    }

    #[test]
    fn test_no_back_referencing_suppresses_synthesis() {
        let mut model = SchemaModel::new(vec![Table::new("a"), Table::new("b")]);
        let decls = vec![RelationshipDecl::new("a_bs", "a", "b", Cardinality::OneToMany)];

        let stats = RelationshipResolver::new(&decls)
            .without_back_references()
            .resolve(&mut model)
            .unwrap();

        assert_eq!(stats.synthesized, 0);
        assert_eq!(
            triples(&model),
            vec![("a".into(), "b".into(), Cardinality::OneToMany, false)]
        );
    }

    #[test]
    fn test_many_to_many_inverts_through_bridge() {
        let mut model = shop();
        let decls = vec![RelationshipDecl::new(
            "order_products",
            "orders",
            "products",
            Cardinality::ManyToMany,
        )
        .through("order_products")
        .on("id", "order_id")];

        RelationshipResolver::new(&decls).resolve(&mut model).unwrap();

        let products = model.table("products").unwrap();
        assert_eq!(products.relationships.len(), 1);
        let back = &products.relationships[0];
        assert_eq!(back.kind, Cardinality::ManyToMany);
        assert_eq!(back.to_table, "orders");
        assert_eq!(back.bridge_table.as_deref(), Some("order_products"));
        assert!(back.synthetic_back_reference);
    }

    #[test]
    fn test_order_is_stable_by_table_pair_then_declaration() {
        let mut model = shop();
        let decls = vec![
            RelationshipDecl::new("second", "orders", "products", Cardinality::OneToOne),
            RelationshipDecl::new("first", "orders", "products", Cardinality::ManyToOne),
        ];

        RelationshipResolver::new(&decls)
            .without_back_references()
            .resolve(&mut model)
            .unwrap();

        let names: Vec<&str> = model
            .table("orders")
            .unwrap()
            .relationships
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, vec!["orders_customer_fk", "second", "first"]);
    }

    #[test]
    fn test_name_coverage_is_scoped_to_declaring_table() {
        let mut model = SchemaModel::new(vec![
            Table::new("users").with_column(Column::new("id", "serial")),
            Table::new("posts")
                .with_column(Column::new("user_id", "int"))
                .with_foreign_key(ForeignKey::new("fk_user", &["user_id"], "users", &["id"])),
            Table::new("comments")
                .with_column(Column::new("user_id", "int"))
                .with_foreign_key(ForeignKey::new("fk_user", &["user_id"], "users", &["id"])),
        ]);
        let decls = vec![RelationshipDecl::new("fk_user", "posts", "users", Cardinality::OneToOne)];

        let stats = RelationshipResolver::new(&decls)
            .without_back_references()
            .resolve(&mut model)
            .unwrap();

        assert_eq!(stats.derived, 1);
        assert_eq!(stats.explicit, 1);
        assert_eq!(
            triples(&model),
            vec![
                ("posts".into(), "users".into(), Cardinality::OneToOne, false),
                ("comments".into(), "users".into(), Cardinality::ManyToOne, false),
            ]
        );
    }

    #[test]
    fn test_triple_coverage_is_scoped_to_declaring_table() {
        let mut model = shop();
        model.tables[3]
            .constraints
            .foreign
            .push(ForeignKey::new("order_products_order_fk", &["order_id"], "orders", &["id"]));
        let decls = vec![RelationshipDecl::new(
            "buyer",
            "orders",
            "customers",
            Cardinality::ManyToOne,
        )];

        RelationshipResolver::new(&decls)
            .without_back_references()
            .resolve(&mut model)
            .unwrap();

        let names: Vec<&str> = model.relationships().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["buyer", "order_products_order_fk"]);
    }

    #[test]
    fn test_self_reference_directions_alias_separately() {
        let mut model = SchemaModel::new(vec![Table::new("categories")
            .with_column(Column::new("id", "serial"))
            .with_column(Column::new("parent_id", "int"))
            .with_foreign_key(ForeignKey::new(
                "categories_parent_fk",
                &["parent_id"],
                "categories",
                &["id"],
            ))]);
        RelationshipResolver::new(&[]).resolve(&mut model).unwrap();

        let inflector = Inflector::default();
        let casing = NameCasing::default();
        let resolve = |aliases: &Aliases| {
            let resolved = AliasResolver::new(aliases, &inflector, &casing)
                .resolve(&model)
                .unwrap();
            resolved.check_relationships(&model).unwrap();
            model
                .relationships()
                .map(|r| format!("{}={}", r.kind, resolved.relationship(r)))
                .collect::<Vec<_>>()
        };

        let forward_only = Aliases::default().with_table(
            "categories",
            TableAlias::default().relationship("categories_parent_fk", "Parent"),
        );
        assert_eq!(
            resolve(&forward_only),
            vec!["many_to_one=Parent", "one_to_many=Categories"]
        );

        let both = Aliases::default().with_table(
            "categories",
            TableAlias::default()
                .relationship("categories_parent_fk", "Parent")
                .relationship("categories_parent_fk.reverse", "Children"),
        );
        assert_eq!(resolve(&both), vec!["many_to_one=Parent", "one_to_many=Children"]);
    }

    #[test]
    fn test_reverse_alias_requires_a_back_reference() {
        let mut model = shop();
        RelationshipResolver::new(&[])
            .without_back_references()
            .resolve(&mut model)
            .unwrap();

        let inflector = Inflector::default();
        let casing = NameCasing::default();
        let aliases = Aliases::default().with_table(
            "customers",
            TableAlias::default().relationship("orders_customer_fk.reverse", "Orders"),
        );
        let resolved = AliasResolver::new(&aliases, &inflector, &casing)
            .resolve(&model)
            .unwrap();

        assert!(resolved.check_relationships(&model).is_err());
    }

    #[test]
    fn test_repeated_resolution_is_identical() {
        let decls = vec![RelationshipDecl::new(
            "order_products",
            "orders",
            "products",
            Cardinality::ManyToMany,
        )
        .through("order_products")];

        let mut first = shop();
        RelationshipResolver::new(&decls).resolve(&mut first).unwrap();
        let mut second = first.clone();
        RelationshipResolver::new(&decls).resolve(&mut second).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_unknown_bridge_table() {
        let mut model = shop();
        let decls = vec![RelationshipDecl::new("tags", "orders", "products", Cardinality::ManyToMany)
            .through("order_tags")];

        let err = RelationshipResolver::new(&decls).resolve(&mut model).unwrap_err();
        assert!(matches!(
            err,
            ResolutionError::UnknownTable { ref relationship, ref table } if relationship == "tags" && table == "order_tags"
        ));
    }
}
