//! Unit tests for the schema object model

use pretty_assertions::assert_eq;
use schema_vet::model::{
    Column, DatabaseSchema, Identifier, Index, IndexColumn, Key, Sequence, SortDirection, Table,
    TypeClass, View,
};

#[test]
fn identifier_full_name_joins_present_parts() {
    let local = Identifier::local("Orders");
    assert_eq!(local.full_name(), "Orders");

    let qualified = Identifier::qualified("dbo", "Orders");
    assert_eq!(qualified.full_name(), "dbo.Orders");

    let remote = Identifier::qualified("dbo", "Orders")
        .with_database("Sales")
        .with_server("central");
    assert_eq!(remote.full_name(), "central.Sales.dbo.Orders");
}

#[test]
fn identifier_display_matches_full_name() {
    let id = Identifier::qualified("audit", "EventLog").with_database("Ops");
    assert_eq!(format!("{id}"), id.full_name());
}

#[test]
fn identifier_serializes_named_fields() {
    let id = Identifier::qualified("dbo", "Customers");
    let json = serde_json::to_value(&id).unwrap();
    assert_eq!(json["schema"], "dbo");
    assert_eq!(json["name"], "Customers");
    assert_eq!(json["database"], serde_json::Value::Null);
}

#[test]
fn type_class_recognizes_common_sql_types() {
    assert_eq!(TypeClass::from_sql("INT"), TypeClass::Integer);
    assert_eq!(TypeClass::from_sql("bigint"), TypeClass::Integer);
    assert_eq!(TypeClass::from_sql("decimal(18, 2)"), TypeClass::Decimal);
    assert_eq!(TypeClass::from_sql("double precision"), TypeClass::Float);
    assert_eq!(TypeClass::from_sql("nvarchar(max)"), TypeClass::Text);
    assert_eq!(TypeClass::from_sql("varbinary(256)"), TypeClass::Binary);
    assert_eq!(TypeClass::from_sql("datetime2(7)"), TypeClass::Timestamp);
    assert_eq!(TypeClass::from_sql("jsonb"), TypeClass::Json);
    assert_eq!(TypeClass::from_sql("geography"), TypeClass::Other);
}

#[test]
fn column_classifies_its_declared_type() {
    let id = Column::new("Id", "bigint");
    assert_eq!(id.class, TypeClass::Integer);
    assert!(id.is_nullable);

    let total = Column::new("Total", "decimal(10, 2)").not_null();
    assert_eq!(total.class, TypeClass::Decimal);
    assert!(!total.is_nullable);
}

#[test]
fn table_column_lookup_ignores_case() {
    let table = Table::new(Identifier::qualified("dbo", "Orders"))
        .with_columns(vec![Column::new("Id", "int"), Column::new("Total", "money")]);

    assert!(table.column("ID").is_some());
    assert!(table.column("total").is_some());
    assert!(table.column("Missing").is_none());
}

#[test]
fn candidate_keys_are_primary_or_unique_keys_only() {
    let bare = Table::new(Identifier::local("Bare"));
    assert!(!bare.has_candidate_key());

    let keyed = Table::new(Identifier::local("Keyed"))
        .with_primary_key(Key::primary(["Id"]).named("PK_Keyed"));
    assert!(keyed.has_candidate_key());

    let unique_keyed = Table::new(Identifier::local("Uniq"))
        .with_unique_key(Key::unique(["Code"]).named("UQ_Uniq"));
    assert!(unique_keyed.has_candidate_key());

    // A unique index is not a key constraint.
    let uniquely_indexed = Table::new(Identifier::local("Ix"))
        .with_index(Index::on(["Code"]).named("UX_Ix").unique());
    assert!(!uniquely_indexed.has_candidate_key());
}

#[test]
fn index_column_resolution_prefers_attached_column() {
    let attached = IndexColumn::new("Code").with_column(Column::new("Code", "int").not_null());
    assert_eq!(attached.key_name(), "Code");

    let table =
        Table::new(Identifier::local("T")).with_columns(vec![Column::new("Name", "nvarchar(50)")]);
    let resolved = table.index_column(&IndexColumn::new("name"));
    assert!(resolved.is_some());
    assert!(table.index_column(&IndexColumn::new("UPPER(Name)")).is_none());
}

#[test]
fn index_columns_default_to_ascending() {
    let implicit = IndexColumn::new("A");
    let explicit = IndexColumn::new("B").ascending();
    let descending = IndexColumn::new("C").descending();

    assert_eq!(implicit.effective_direction(), SortDirection::Ascending);
    assert_eq!(explicit.effective_direction(), SortDirection::Ascending);
    assert_eq!(descending.effective_direction(), SortDirection::Descending);
}

#[test]
fn empty_schema_reports_empty() {
    assert!(DatabaseSchema::new().is_empty());

    let with_view = DatabaseSchema::new().with_views(vec![View::new(
        Identifier::qualified("dbo", "ActiveOrders"),
        "SELECT Id FROM dbo.Orders WHERE Status = 'active'",
    )]);
    assert!(!with_view.is_empty());

    let with_sequence = DatabaseSchema::new()
        .with_sequences(vec![Sequence::new(Identifier::qualified("dbo", "OrderNumbers"))]);
    assert!(!with_sequence.is_empty());
}
