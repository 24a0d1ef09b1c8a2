//! Shared schema fixtures for integration tests

use schema_vet::model::{
    CheckConstraint, Column, DatabaseSchema, Identifier, Index, Key, RelationalKey, Routine,
    Sequence, Synonym, Table, View,
};

/// A two-table commerce schema the default rule catalog finds nothing
/// wrong with: integer surrogate keys first, covered foreign keys, and a
/// relationship tying both tables together.
pub fn commerce_schema() -> DatabaseSchema {
    let orders_to_customers = RelationalKey::new(
        Identifier::qualified("dbo", "Orders"),
        Key::foreign(["CustomerId"]).named("FK_Orders_Customers"),
        Identifier::qualified("dbo", "Customers"),
        Key::primary(["Id"]),
    );

    let customers = Table::new(Identifier::qualified("dbo", "Customers"))
        .with_columns(vec![
            Column::new("Id", "int").not_null().auto_increment(1, 1),
            Column::new("Email", "nvarchar(200)").not_null(),
            Column::new("FullName", "nvarchar(100)").not_null(),
        ])
        .with_primary_key(Key::primary(["Id"]).named("PK_Customers"))
        .with_unique_key(Key::unique(["Email"]).named("UQ_Customers_Email"))
        .with_child_key(orders_to_customers.clone());

    let orders = Table::new(Identifier::qualified("dbo", "Orders"))
        .with_columns(vec![
            Column::new("Id", "int").not_null().auto_increment(1, 1),
            Column::new("CustomerId", "int").not_null(),
            Column::new("PlacedAt", "datetime2").not_null(),
            Column::new("Total", "decimal(18, 2)").not_null(),
        ])
        .with_primary_key(Key::primary(["Id"]).named("PK_Orders"))
        .with_parent_key(orders_to_customers)
        .with_index(Index::on(["CustomerId"]).named("IX_Orders_Customer"))
        .with_index(
            Index::on(["PlacedAt"])
                .named("IX_Orders_PlacedAt")
                .with_include(["Total"]),
        );

    DatabaseSchema::new()
        .with_tables(vec![customers, orders])
        .with_views(vec![View::new(
            Identifier::qualified("dbo", "RecentOrders"),
            "SELECT Id, PlacedAt FROM dbo.Orders WHERE PlacedAt > DATEADD(day, -30, GETDATE())",
        )])
        .with_sequences(vec![Sequence::new(Identifier::qualified(
            "dbo",
            "OrderNumbers",
        ))])
}

/// A schema seeded with one occurrence of every rule violation.
///
/// The finding inventory, by rule:
/// - `candidate-key-missing`, `foreign-key-index`, `no-indexes`: Notes
/// - `redundant-indexes`, `unique-index-nullable-columns`: Users
/// - `column-with-null-default`, `disabled-objects`: AuditState
/// - `no-surrogate-primary-key`, `primary-key-not-integer`: Shipments
/// - `primary-key-column-not-first`: Tags
/// - `too-many-columns`: Snapshots
/// - `orphaned-table`: " EventLog" and Extras
/// - `reserved-keyword-name`: Extras.SELECT, UserSummary.ORDER, the
///   PUBLIC synonym
/// - `whitespace-name`: " EventLog", "Seq ", " Rebuild"
///
/// Nineteen findings in total: four `info`, fifteen `warning`.
pub fn flawed_schema() -> DatabaseSchema {
    let notes_to_users = RelationalKey::new(
        Identifier::qualified("dbo", "Notes"),
        Key::foreign(["OwnerId"]).named("FK_Notes_Users"),
        Identifier::qualified("dbo", "Users"),
        Key::primary(["Id"]),
    );
    let audit_to_users = RelationalKey::new(
        Identifier::qualified("dbo", "AuditState"),
        Key::foreign(["UserId"]).named("FK_AuditState_Users"),
        Identifier::qualified("dbo", "Users"),
        Key::primary(["Id"]),
    );
    let shipments_to_users = RelationalKey::new(
        Identifier::qualified("dbo", "Shipments"),
        Key::foreign(["HandledBy"]).named("FK_Shipments_Users"),
        Identifier::qualified("dbo", "Users"),
        Key::primary(["Id"]),
    );
    let snapshots_to_tags = RelationalKey::new(
        Identifier::qualified("dbo", "Snapshots"),
        Key::foreign(["TagId"]).named("FK_Snapshots_Tags"),
        Identifier::qualified("dbo", "Tags"),
        Key::primary(["Id"]),
    );

    // No key, no index, and an uncovered foreign key.
    let notes = Table::new(Identifier::qualified("dbo", "Notes"))
        .with_columns(vec![
            Column::new("Body", "nvarchar(max)"),
            Column::new("OwnerId", "int"),
        ])
        .with_parent_key(notes_to_users.clone());

    // One single-column index shadowed by a wider one, and a unique index
    // over a nullable column.
    let users = Table::new(Identifier::qualified("dbo", "Users"))
        .with_columns(vec![
            Column::new("Id", "int").not_null().auto_increment(1, 1),
            Column::new("Login", "nvarchar(100)").not_null(),
            Column::new("Nickname", "nvarchar(50)"),
        ])
        .with_primary_key(Key::primary(["Id"]).named("PK_Users"))
        .with_index(Index::on(["Nickname"]).named("UX_Users_Nickname").unique())
        .with_index(Index::on(["Login"]).named("IX_Users_Login"))
        .with_index(Index::on(["Login", "Nickname"]).named("IX_Users_Login_Nickname"))
        .with_child_key(notes_to_users)
        .with_child_key(audit_to_users.clone())
        .with_child_key(shipments_to_users.clone());

    // A textual NULL default and a disabled check constraint.
    let audit_state = Table::new(Identifier::qualified("dbo", "AuditState"))
        .with_columns(vec![
            Column::new("Id", "int").not_null(),
            Column::new("UserId", "int").not_null(),
            Column::new("State", "nvarchar(20)").with_default("NULL"),
        ])
        .with_primary_key(Key::primary(["Id"]).named("PK_AuditState"))
        .with_index(Index::on(["UserId"]).named("IX_AuditState_User"))
        .with_parent_key(audit_to_users)
        .with_check(
            CheckConstraint::new("State IN ('new', 'seen')")
                .named("CK_AuditState_State")
                .disabled(),
        );

    // Composite primary key.
    let shipments = Table::new(Identifier::qualified("dbo", "Shipments"))
        .with_columns(vec![
            Column::new("OrderId", "int").not_null(),
            Column::new("LineNo", "int").not_null(),
            Column::new("HandledBy", "int").not_null(),
            Column::new("ShippedAt", "datetime2"),
        ])
        .with_primary_key(Key::primary(["OrderId", "LineNo"]).named("PK_Shipments"))
        .with_index(Index::on(["HandledBy"]).named("IX_Shipments_HandledBy"))
        .with_parent_key(shipments_to_users);

    // Integer primary key declared on the second column.
    let tags = Table::new(Identifier::qualified("dbo", "Tags"))
        .with_columns(vec![
            Column::new("Label", "nvarchar(50)").not_null(),
            Column::new("Id", "int").not_null(),
        ])
        .with_primary_key(Key::primary(["Id"]).named("PK_Tags"))
        .with_child_key(snapshots_to_tags.clone());

    // One column over the default width limit.
    let mut snapshot_columns = vec![
        Column::new("Id", "int").not_null(),
        Column::new("TagId", "int").not_null(),
    ];
    snapshot_columns
        .extend((0..29).map(|position| Column::new(format!("Metric{position:02}"), "int")));
    let snapshots = Table::new(Identifier::qualified("dbo", "Snapshots"))
        .with_columns(snapshot_columns)
        .with_primary_key(Key::primary(["Id"]).named("PK_Snapshots"))
        .with_index(Index::on(["TagId"]).named("IX_Snapshots_Tag"))
        .with_parent_key(snapshots_to_tags);

    // Whitespace in the table name, and no relationships at all.
    let event_log = Table::new(Identifier::qualified("dbo", " EventLog"))
        .with_columns(vec![
            Column::new("Id", "int").not_null(),
            Column::new("Happened", "datetime2").not_null(),
        ])
        .with_primary_key(Key::primary(["Id"]).named("PK_EventLog"));

    // A reserved word as a column name, and no relationships either.
    let extras = Table::new(Identifier::qualified("dbo", "Extras"))
        .with_columns(vec![
            Column::new("Id", "int").not_null(),
            Column::new("SELECT", "nvarchar(10)"),
        ])
        .with_primary_key(Key::primary(["Id"]).named("PK_Extras"));

    DatabaseSchema::new()
        .with_tables(vec![
            notes, users, audit_state, shipments, tags, snapshots, event_log, extras,
        ])
        .with_views(vec![View::new(
            Identifier::qualified("dbo", "UserSummary"),
            "SELECT Login FROM dbo.Users",
        )
        .with_columns(vec![
            Column::new("Login", "nvarchar(100)"),
            Column::new("ORDER", "int"),
        ])])
        .with_sequences(vec![Sequence::new(Identifier::qualified("dbo", "Seq "))])
        .with_synonyms(vec![Synonym::new(
            Identifier::qualified("dbo", "PUBLIC"),
            Identifier::qualified("dbo", "Users"),
        )])
        .with_routines(vec![Routine::procedure(
            Identifier::qualified("dbo", " Rebuild"),
            "ALTER INDEX ALL ON dbo.Users REBUILD",
        )])
}
