//! DBML-style schema notation writer
//!
//! Renders tables, columns, indexes and relationships into a compact text
//! notation. Rendering is pure and deterministic: the same snapshot always
//! produces byte-identical text, and missing names or defaults fall back to
//! fixed forms instead of failing.

mod relationship;

pub use relationship::Cardinality;

use std::collections::HashMap;

use tracing::debug;

use crate::model::{Column, Identifier, Index, IndexColumn, Table};
use crate::util::contains_name_ci;

/// Indentation unit for nested lines.
pub const INDENT: &str = "    ";

/// Render tables into the text notation.
///
/// Table blocks appear in input order, separated by one blank line. The
/// relationship section renders after the last table only when at least one
/// table has a foreign key. Zero tables render as an empty string.
pub fn render(tables: &[Table]) -> String {
    if tables.is_empty() {
        return String::new();
    }

    let by_name: HashMap<&Identifier, &Table> =
        tables.iter().map(|table| (&table.name, table)).collect();

    let mut out = String::new();
    for (position, table) in tables.iter().enumerate() {
        if position > 0 {
            out.push('\n');
        }
        write_table(&mut out, table);
    }

    if tables.iter().any(|table| !table.parent_keys.is_empty()) {
        out.push('\n');
        write_relationships(&mut out, tables, &by_name);
    }

    debug!(
        tables = tables.len(),
        bytes = out.len(),
        "rendered schema notation"
    );
    out
}

fn write_table(out: &mut String, table: &Table) {
    out.push_str(&format!("table {} {{\n", table.name.full_name()));
    for column in &table.columns {
        write_column(out, table, column);
    }
    if !table.indexes.is_empty() {
        if !table.columns.is_empty() {
            out.push('\n');
        }
        out.push_str(&format!("{INDENT}indexes {{\n"));
        for index in &table.indexes {
            write_index(out, index);
        }
        out.push_str(&format!("{INDENT}}}\n"));
    }
    out.push_str("}\n");
}

fn write_column(out: &mut String, table: &Table, column: &Column) {
    // An empty declared type falls back to the classification keyword.
    let type_text = if column.type_name.is_empty() {
        column.class.keyword()
    } else {
        &column.type_name
    };
    out.push_str(&format!(
        "{INDENT}{} {} [{}]\n",
        column.name,
        type_text,
        column_options(table, column)
    ));
}

/// Option order is fixed: nullability, increment, key membership, default.
fn column_options(table: &Table, column: &Column) -> String {
    let mut options: Vec<String> = Vec::new();
    options.push(if column.is_nullable { "null" } else { "not null" }.to_string());
    if column.auto_increment.is_some() {
        options.push("increment".to_string());
    }
    if table
        .primary_key
        .as_ref()
        .is_some_and(|key| contains_name_ci(&key.columns, &column.name))
    {
        options.push("pk".to_string());
    }
    if table
        .unique_keys
        .iter()
        .any(|key| contains_name_ci(&key.columns, &column.name))
    {
        options.push("unique".to_string());
    }
    if let Some(default) = &column.default_value {
        options.push(format!("default: \"{}\"", default.replace('"', "\\\"")));
    }
    options.join(", ")
}

fn write_index(out: &mut String, index: &Index) {
    let key_columns: Vec<&str> = index.columns.iter().map(IndexColumn::key_name).collect();
    out.push_str(&format!("{INDENT}{INDENT}({})", key_columns.join(", ")));
    let options = index_options(index);
    if !options.is_empty() {
        out.push_str(&format!(" [{options}]"));
    }
    out.push('\n');
}

fn index_options(index: &Index) -> String {
    let mut options: Vec<String> = Vec::new();
    if let Some(name) = &index.name {
        options.push(format!("name: {name}"));
    }
    if index.is_unique {
        options.push("unique".to_string());
    }
    if !index.include_columns.is_empty() {
        options.push(format!("include: ({})", index.include_columns.join(", ")));
    }
    options.join(", ")
}

fn write_relationships(
    out: &mut String,
    tables: &[Table],
    by_name: &HashMap<&Identifier, &Table>,
) {
    for table in tables {
        for relation in &table.parent_keys {
            let parent = by_name.get(&relation.parent_table).copied();
            let marker = Cardinality::classify(relation, parent).marker();
            for (child_column, parent_column) in relation.column_pairs() {
                out.push_str(&format!(
                    "ref: {}.{} {} {}.{}\n",
                    relation.child_table.full_name(),
                    child_column,
                    marker,
                    relation.parent_table.full_name(),
                    parent_column
                ));
            }
        }
    }
}
