//! Built-in English word tables.
//!
//! Regular suffix handling comes from the `Inflector` crate. These tables
//! hold the words it gets wrong for schema names, matched on the last
//! `_`-separated segment of a name.

/// Irregular singular/plural pairs, matched on whole segments.
pub(crate) static IRREGULAR: &[(&str, &str)] = &[
    // People
    ("person", "people"),
    ("child", "children"),
    ("man", "men"),
    ("woman", "women"),
    // Body parts
    ("foot", "feet"),
    ("tooth", "teeth"),
    // Animals
    ("goose", "geese"),
    ("mouse", "mice"),
    ("ox", "oxen"),
    // -f/-fe → -ves
    ("leaf", "leaves"),
    ("life", "lives"),
    ("knife", "knives"),
    ("wife", "wives"),
    ("half", "halves"),
    ("self", "selves"),
    ("calf", "calves"),
    ("loaf", "loaves"),
    ("wolf", "wolves"),
    ("shelf", "shelves"),
    // -o → -oes
    ("potato", "potatoes"),
    ("tomato", "tomatoes"),
    ("hero", "heroes"),
    // Latin/Greek
    ("analysis", "analyses"),
    ("basis", "bases"),
    ("crisis", "crises"),
    ("diagnosis", "diagnoses"),
    ("hypothesis", "hypotheses"),
    ("thesis", "theses"),
    ("phenomenon", "phenomena"),
    ("criterion", "criteria"),
    ("datum", "data"),
    ("medium", "media"),
    ("index", "indices"),
    ("appendix", "appendices"),
    ("matrix", "matrices"),
    ("vertex", "vertices"),
    ("move", "moves"),
    ("sex", "sexes"),
    ("zombie", "zombies"),
];

/// Words with identical singular and plural forms.
pub(crate) static UNCOUNTABLE: &[&str] = &[
    "equipment",
    "information",
    "rice",
    "money",
    "species",
    "series",
    "fish",
    "sheep",
    "jeans",
    "police",
    "news",
    "metadata",
    "feedback",
];
