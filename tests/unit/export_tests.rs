//! Unit tests for the schema notation writer

use pretty_assertions::assert_eq;
use schema_vet::export::{render, Cardinality};
use schema_vet::model::{Column, Identifier, Index, Key, RelationalKey, Table};

fn products() -> Table {
    Table::new(Identifier::qualified("inventory", "Products"))
        .with_columns(vec![
            Column::new("Sku", "varchar(20)").not_null(),
            Column::new("Name", "nvarchar(100)"),
            Column::new("Stock", "int").not_null().with_default("0"),
        ])
        .with_primary_key(Key::primary(["Sku"]).named("PK_Products"))
        .with_index(Index::on(["Name"]))
        .with_index(Index::on(["Stock", "Sku"]).named("IX_Products_Stock").unique())
}

#[test]
fn single_table_renders_columns_then_indexes() {
    let expected = concat!(
        "table inventory.Products {\n",
        "    Sku varchar(20) [not null, pk]\n",
        "    Name nvarchar(100) [null]\n",
        "    Stock int [not null, default: \"0\"]\n",
        "\n",
        "    indexes {\n",
        "        (Name)\n",
        "        (Stock, Sku) [name: IX_Products_Stock, unique]\n",
        "    }\n",
        "}\n",
    );
    assert_eq!(render(&[products()]), expected);
}

#[test]
fn table_blocks_are_separated_by_one_blank_line() {
    let tables = vec![
        products(),
        Table::new(Identifier::qualified("inventory", "Warehouses"))
            .with_columns(vec![Column::new("Id", "int").not_null()])
            .with_primary_key(Key::primary(["Id"])),
    ];
    let text = render(&tables);
    assert!(text.contains("}\n\ntable inventory.Warehouses {\n"));
    assert!(text.ends_with("    Id int [not null, pk]\n}\n"));
}

#[test]
fn rendering_is_deterministic() {
    let tables = vec![products()];
    assert_eq!(render(&tables), render(&tables));
}

#[test]
fn zero_tables_render_as_empty_text() {
    assert_eq!(render(&[]), "");
}

#[test]
fn schemas_without_foreign_keys_omit_the_relationship_section() {
    let text = render(&[products()]);
    assert!(!text.contains("ref:"));
}

#[test]
fn foreign_key_to_an_unlisted_parent_renders_one_to_many() {
    let relation = RelationalKey::new(
        Identifier::qualified("inventory", "Movements"),
        Key::foreign(["Sku"]).named("FK_Movements_Products"),
        Identifier::qualified("archive", "Products"),
        Key::primary(["Sku"]),
    );
    let movements = Table::new(Identifier::qualified("inventory", "Movements"))
        .with_columns(vec![Column::new("Sku", "varchar(20)").not_null()])
        .with_parent_key(relation);

    // archive.Products is not part of the rendered table list.
    let text = render(&[movements]);
    assert!(text.contains("ref: inventory.Movements.Sku > archive.Products.Sku\n"));
}

#[test]
fn cardinality_markers_match_the_notation() {
    assert_eq!(Cardinality::OneToOne.marker(), "-");
    assert_eq!(Cardinality::OneToMany.marker(), ">");
}

#[test]
fn child_key_matching_parent_unique_key_classifies_one_to_one() {
    let relation = RelationalKey::new(
        Identifier::local("Badges"),
        Key::foreign(["EmployeeCode"]),
        Identifier::local("Employees"),
        Key::unique(["Code"]),
    );
    let parent = Table::new(Identifier::local("Employees"))
        .with_columns(vec![Column::new("EmployeeCode", "int").not_null()])
        .with_unique_key(Key::unique(["employeecode"]));

    let cardinality = Cardinality::classify(&relation, Some(&parent));
    assert_eq!(cardinality, Cardinality::OneToOne);
    assert_eq!(
        Cardinality::classify(&relation, None),
        Cardinality::OneToMany
    );
}
