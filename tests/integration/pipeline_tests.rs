//! End-to-end runs of the full rule catalog and the notation writer

use std::collections::HashMap;

use pretty_assertions::assert_eq;
use schema_vet::export::render;
use schema_vet::lint::{Linter, Severity};
use schema_vet::vet;

use crate::common::{commerce_schema, flawed_schema};

#[test]
fn clean_schema_produces_no_findings() {
    let report = Linter::new().report(&commerce_schema());
    assert!(report.is_clean(), "unexpected findings: {:?}", report.messages);
}

#[test]
fn flawed_schema_findings_by_rule() {
    let messages = Linter::new().check(&flawed_schema());

    let mut by_rule: HashMap<&'static str, usize> = HashMap::new();
    for message in &messages {
        *by_rule.entry(message.rule).or_insert(0) += 1;
    }

    let expected: HashMap<&'static str, usize> = [
        ("candidate-key-missing", 1),
        ("column-with-null-default", 1),
        ("disabled-objects", 1),
        ("foreign-key-index", 1),
        ("no-indexes", 1),
        ("no-surrogate-primary-key", 1),
        ("orphaned-table", 2),
        ("primary-key-column-not-first", 1),
        ("primary-key-not-integer", 1),
        ("redundant-indexes", 1),
        ("reserved-keyword-name", 3),
        ("too-many-columns", 1),
        ("unique-index-nullable-columns", 1),
        ("whitespace-name", 3),
    ]
    .into_iter()
    .collect();

    assert_eq!(by_rule, expected);
    assert_eq!(messages.len(), 19);
}

#[test]
fn flawed_schema_severity_tallies() {
    let report = Linter::new().report(&flawed_schema());
    assert_eq!(report.info_count(), 4);
    assert_eq!(report.warning_count(), 15);
    assert_eq!(report.error_count(), 0);
    assert!(!report.has_errors());
    assert_eq!(report.at_or_above(Severity::Warning).count(), 15);
}

#[test]
fn flawed_schema_message_texts_name_the_objects() {
    let messages = Linter::new().check(&flawed_schema());
    let texts: Vec<String> = messages
        .iter()
        .map(|message| message.to_string())
        .collect();

    for expected in [
        "warning [too-many-columns] dbo.Snapshots: table has 31 columns (limit 30)",
        "warning [redundant-indexes] dbo.Users: \
         index IX_Users_Login is redundant with index IX_Users_Login_Nickname",
        "info [no-surrogate-primary-key] dbo.Shipments: primary key PK_Shipments spans 2 columns",
        "warning [disabled-objects] dbo.AuditState: \
         check constraint CK_AuditState_State is disabled",
    ] {
        assert!(
            texts.iter().any(|text| text == expected),
            "missing {expected:?} in {texts:#?}"
        );
    }
}

#[test]
fn vet_matches_the_default_linter() {
    let schema = flawed_schema();
    let direct = Linter::new().check(&schema);
    assert_eq!(vet(&schema), direct);
}

#[test]
fn commerce_schema_renders_expected_notation() {
    let expected = concat!(
        "table dbo.Customers {\n",
        "    Id int [not null, increment, pk]\n",
        "    Email nvarchar(200) [not null, unique]\n",
        "    FullName nvarchar(100) [not null]\n",
        "}\n",
        "\n",
        "table dbo.Orders {\n",
        "    Id int [not null, increment, pk]\n",
        "    CustomerId int [not null]\n",
        "    PlacedAt datetime2 [not null]\n",
        "    Total decimal(18, 2) [not null]\n",
        "\n",
        "    indexes {\n",
        "        (CustomerId) [name: IX_Orders_Customer]\n",
        "        (PlacedAt) [name: IX_Orders_PlacedAt, include: (Total)]\n",
        "    }\n",
        "}\n",
        "\n",
        "ref: dbo.Orders.CustomerId > dbo.Customers.Id\n",
    );
    assert_eq!(render(&commerce_schema().tables), expected);
}

#[test]
fn rendering_the_same_snapshot_twice_is_byte_identical() {
    let schema = commerce_schema();
    assert_eq!(render(&schema.tables), render(&schema.tables));
}
