//! Schema model element types
//!
//! All elements are immutable snapshots produced by a schema provider.
//! Collections preserve the provider's declaration order; the crate reads
//! them and never mutates them.

use super::identifier::Identifier;

/// Placeholder rendered for elements the provider left unnamed.
pub(crate) const UNNAMED: &str = "(unnamed)";

/// Categorical classification of a column's declared data type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeClass {
    Integer,
    Decimal,
    Float,
    Boolean,
    Text,
    Binary,
    Date,
    Time,
    Timestamp,
    Json,
    Other,
}

impl TypeClass {
    /// Classify a raw SQL type name such as `bigint` or `varchar(50)`.
    ///
    /// Only the base type name before any length/precision arguments or
    /// trailing modifiers is inspected. Unknown names classify as `Other`.
    pub fn from_sql(sql_type: &str) -> Self {
        let base = sql_type
            .split(['(', ' '])
            .next()
            .unwrap_or("")
            .trim()
            .to_ascii_lowercase();
        match base.as_str() {
            "int" | "integer" | "bigint" | "smallint" | "tinyint" | "mediumint" | "int2"
            | "int4" | "int8" | "serial" | "bigserial" | "smallserial" => TypeClass::Integer,
            "decimal" | "numeric" | "money" | "smallmoney" => TypeClass::Decimal,
            "float" | "real" | "double" | "float4" | "float8" => TypeClass::Float,
            "bit" | "bool" | "boolean" => TypeClass::Boolean,
            "char" | "nchar" | "varchar" | "nvarchar" | "character" | "text" | "ntext"
            | "clob" | "string" => TypeClass::Text,
            "binary" | "varbinary" | "blob" | "bytea" | "image" => TypeClass::Binary,
            "date" => TypeClass::Date,
            "time" => TypeClass::Time,
            "datetime" | "datetime2" | "smalldatetime" | "datetimeoffset" | "timestamp"
            | "timestamptz" => TypeClass::Timestamp,
            "json" | "jsonb" => TypeClass::Json,
            _ => TypeClass::Other,
        }
    }

    /// Lowercase keyword used when a column carries no declared type text.
    pub fn keyword(self) -> &'static str {
        match self {
            TypeClass::Integer => "integer",
            TypeClass::Decimal => "decimal",
            TypeClass::Float => "float",
            TypeClass::Boolean => "boolean",
            TypeClass::Text => "text",
            TypeClass::Binary => "binary",
            TypeClass::Date => "date",
            TypeClass::Time => "time",
            TypeClass::Timestamp => "timestamp",
            TypeClass::Json => "json",
            TypeClass::Other => "other",
        }
    }
}

/// Autoincrement descriptor for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoIncrement {
    pub start: i64,
    pub increment: i64,
}

/// A table or view column.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    /// Raw declared type text as reported by the provider, e.g. `varchar(50)`.
    pub type_name: String,
    pub class: TypeClass,
    pub is_nullable: bool,
    /// Default-value expression (raw text).
    pub default_value: Option<String>,
    pub auto_increment: Option<AutoIncrement>,
    /// Computed-column definition (raw text).
    pub computed_expression: Option<String>,
}

impl Column {
    /// A nullable column, classified from its declared type text.
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        let type_name = type_name.into();
        let class = TypeClass::from_sql(&type_name);
        Self {
            name: name.into(),
            type_name,
            class,
            is_nullable: true,
            default_value: None,
            auto_increment: None,
            computed_expression: None,
        }
    }

    pub fn not_null(mut self) -> Self {
        self.is_nullable = false;
        self
    }

    /// Override the classification derived from the type text.
    pub fn with_class(mut self, class: TypeClass) -> Self {
        self.class = class;
        self
    }

    pub fn with_default(mut self, expression: impl Into<String>) -> Self {
        self.default_value = Some(expression.into());
        self
    }

    pub fn auto_increment(mut self, start: i64, increment: i64) -> Self {
        self.auto_increment = Some(AutoIncrement { start, increment });
        self
    }

    pub fn computed(mut self, expression: impl Into<String>) -> Self {
        self.computed_expression = Some(expression.into());
        self
    }
}

/// Key constraint kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    Primary,
    Unique,
    Foreign,
}

/// A key constraint over an ordered column list.
#[derive(Debug, Clone, PartialEq)]
pub struct Key {
    pub name: Option<String>,
    pub kind: KeyKind,
    /// Declared column order; order is semantically significant.
    pub columns: Vec<String>,
    pub is_enabled: bool,
}

impl Key {
    fn new(kind: KeyKind, columns: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            name: None,
            kind,
            columns: columns.into_iter().map(Into::into).collect(),
            is_enabled: true,
        }
    }

    pub fn primary(columns: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self::new(KeyKind::Primary, columns)
    }

    pub fn unique(columns: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self::new(KeyKind::Unique, columns)
    }

    pub fn foreign(columns: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self::new(KeyKind::Foreign, columns)
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn disabled(mut self) -> Self {
        self.is_enabled = false;
        self
    }

    /// Constraint name, or a placeholder for unnamed keys.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNNAMED)
    }
}

/// Referential action applied on parent row update or delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReferentialAction {
    #[default]
    NoAction,
    Cascade,
    SetNull,
    SetDefault,
    Restrict,
}

/// A foreign key association between a child table and a parent table.
#[derive(Debug, Clone, PartialEq)]
pub struct RelationalKey {
    pub child_table: Identifier,
    /// The foreign key constraint itself, declared on the child table.
    pub child_key: Key,
    pub parent_table: Identifier,
    /// The primary or unique key the foreign key references.
    pub parent_key: Key,
    pub update_rule: ReferentialAction,
    pub delete_rule: ReferentialAction,
}

impl RelationalKey {
    /// Providers guarantee the child and parent column lists have equal
    /// length and correspond positionally.
    pub fn new(
        child_table: Identifier,
        child_key: Key,
        parent_table: Identifier,
        parent_key: Key,
    ) -> Self {
        debug_assert_eq!(child_key.columns.len(), parent_key.columns.len());
        Self {
            child_table,
            child_key,
            parent_table,
            parent_key,
            update_rule: ReferentialAction::default(),
            delete_rule: ReferentialAction::default(),
        }
    }

    pub fn with_update_rule(mut self, rule: ReferentialAction) -> Self {
        self.update_rule = rule;
        self
    }

    pub fn with_delete_rule(mut self, rule: ReferentialAction) -> Self {
        self.delete_rule = rule;
        self
    }

    /// Positionally corresponding (child, parent) column name pairs.
    pub fn column_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.child_key
            .columns
            .iter()
            .map(String::as_str)
            .zip(self.parent_key.columns.iter().map(String::as_str))
    }
}

/// Index key column sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// One key column of an index.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexColumn {
    /// Expression text as declared, usually a plain column name.
    pub expression: String,
    pub sort_direction: Option<SortDirection>,
    /// The physical column the expression dereferences, when the provider
    /// resolved one.
    pub column: Option<Column>,
}

impl IndexColumn {
    pub fn new(expression: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            sort_direction: None,
            column: None,
        }
    }

    pub fn descending(mut self) -> Self {
        self.sort_direction = Some(SortDirection::Descending);
        self
    }

    pub fn ascending(mut self) -> Self {
        self.sort_direction = Some(SortDirection::Ascending);
        self
    }

    pub fn with_column(mut self, column: Column) -> Self {
        self.column = Some(column);
        self
    }

    /// Name this key column compares and renders under: the resolved
    /// physical column's name where available, else the raw expression.
    pub fn key_name(&self) -> &str {
        match &self.column {
            Some(column) => &column.name,
            None => &self.expression,
        }
    }

    /// Sort direction with the provider default applied.
    pub fn effective_direction(&self) -> SortDirection {
        self.sort_direction.unwrap_or_default()
    }
}

/// An index over a table.
#[derive(Debug, Clone, PartialEq)]
pub struct Index {
    pub name: Option<String>,
    /// Key columns in declared order.
    pub columns: Vec<IndexColumn>,
    /// Non-key columns carried in the index leaf level.
    pub include_columns: Vec<String>,
    pub is_unique: bool,
    pub is_enabled: bool,
}

impl Index {
    pub fn new(columns: Vec<IndexColumn>) -> Self {
        Self {
            name: None,
            columns,
            include_columns: Vec::new(),
            is_unique: false,
            is_enabled: true,
        }
    }

    /// An index keyed on plain column names, ascending.
    pub fn on(names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self::new(names.into_iter().map(IndexColumn::new).collect())
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn unique(mut self) -> Self {
        self.is_unique = true;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.is_enabled = false;
        self
    }

    pub fn with_include(mut self, columns: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.include_columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Index name, or a placeholder for unnamed indexes.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNNAMED)
    }
}

/// A check constraint on a table.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckConstraint {
    pub name: Option<String>,
    pub definition: String,
    pub is_enabled: bool,
}

impl CheckConstraint {
    pub fn new(definition: impl Into<String>) -> Self {
        Self {
            name: None,
            definition: definition.into(),
            is_enabled: true,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn disabled(mut self) -> Self {
        self.is_enabled = false;
        self
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNNAMED)
    }
}

/// When a trigger fires relative to the triggering statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerTiming {
    Before,
    After,
    InsteadOf,
}

/// A DML trigger on a table.
#[derive(Debug, Clone, PartialEq)]
pub struct Trigger {
    pub name: String,
    pub definition: String,
    pub timing: TriggerTiming,
    pub is_insert: bool,
    pub is_update: bool,
    pub is_delete: bool,
    pub is_enabled: bool,
}

impl Trigger {
    pub fn new(
        name: impl Into<String>,
        definition: impl Into<String>,
        timing: TriggerTiming,
    ) -> Self {
        Self {
            name: name.into(),
            definition: definition.into(),
            timing,
            is_insert: false,
            is_update: false,
            is_delete: false,
            is_enabled: true,
        }
    }

    pub fn on_insert(mut self) -> Self {
        self.is_insert = true;
        self
    }

    pub fn on_update(mut self) -> Self {
        self.is_update = true;
        self
    }

    pub fn on_delete(mut self) -> Self {
        self.is_delete = true;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.is_enabled = false;
        self
    }
}

/// A table snapshot with its keys, indexes, constraints and triggers.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub name: Identifier,
    /// Columns in declaration order.
    pub columns: Vec<Column>,
    pub primary_key: Option<Key>,
    pub unique_keys: Vec<Key>,
    /// Foreign keys declared on this table, pointing at parent tables.
    pub parent_keys: Vec<RelationalKey>,
    /// Foreign keys on other tables that reference this table.
    pub child_keys: Vec<RelationalKey>,
    pub indexes: Vec<Index>,
    pub checks: Vec<CheckConstraint>,
    pub triggers: Vec<Trigger>,
}

impl Table {
    pub fn new(name: Identifier) -> Self {
        Self {
            name,
            columns: Vec::new(),
            primary_key: None,
            unique_keys: Vec::new(),
            parent_keys: Vec::new(),
            child_keys: Vec::new(),
            indexes: Vec::new(),
            checks: Vec::new(),
            triggers: Vec::new(),
        }
    }

    pub fn with_columns(mut self, columns: Vec<Column>) -> Self {
        self.columns = columns;
        self
    }

    pub fn with_primary_key(mut self, key: Key) -> Self {
        self.primary_key = Some(key);
        self
    }

    pub fn with_unique_key(mut self, key: Key) -> Self {
        self.unique_keys.push(key);
        self
    }

    pub fn with_parent_key(mut self, key: RelationalKey) -> Self {
        self.parent_keys.push(key);
        self
    }

    pub fn with_child_key(mut self, key: RelationalKey) -> Self {
        self.child_keys.push(key);
        self
    }

    pub fn with_index(mut self, index: Index) -> Self {
        self.indexes.push(index);
        self
    }

    pub fn with_check(mut self, check: CheckConstraint) -> Self {
        self.checks.push(check);
        self
    }

    pub fn with_trigger(mut self, trigger: Trigger) -> Self {
        self.triggers.push(trigger);
        self
    }

    /// Look up a column by name, ASCII case-insensitively.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns
            .iter()
            .find(|column| column.name.eq_ignore_ascii_case(name))
    }

    /// Whether the table has a primary key or at least one unique key.
    pub fn has_candidate_key(&self) -> bool {
        self.primary_key.is_some() || !self.unique_keys.is_empty()
    }

    /// Resolve an index key column to a physical column: the provider's
    /// resolution wins, else the expression is looked up among this table's
    /// columns.
    pub fn index_column<'a>(&'a self, index_column: &'a IndexColumn) -> Option<&'a Column> {
        match &index_column.column {
            Some(column) => Some(column),
            None => self.column(&index_column.expression),
        }
    }
}

/// A view snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub name: Identifier,
    pub definition: String,
    /// Projected columns, where the provider reports them.
    pub columns: Vec<Column>,
}

impl View {
    pub fn new(name: Identifier, definition: impl Into<String>) -> Self {
        Self {
            name,
            definition: definition.into(),
            columns: Vec::new(),
        }
    }

    pub fn with_columns(mut self, columns: Vec<Column>) -> Self {
        self.columns = columns;
        self
    }
}

/// A sequence snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Sequence {
    pub name: Identifier,
    pub start_value: i64,
    pub increment: i64,
    pub min_value: Option<i64>,
    pub max_value: Option<i64>,
    pub cycles: bool,
}

impl Sequence {
    pub fn new(name: Identifier) -> Self {
        Self {
            name,
            start_value: 1,
            increment: 1,
            min_value: None,
            max_value: None,
            cycles: false,
        }
    }
}

/// A synonym pointing at another object.
#[derive(Debug, Clone, PartialEq)]
pub struct Synonym {
    pub name: Identifier,
    pub target: Identifier,
}

impl Synonym {
    pub fn new(name: Identifier, target: Identifier) -> Self {
        Self { name, target }
    }
}

/// Routine kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutineKind {
    Procedure,
    Function,
}

/// A stored procedure or function snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Routine {
    pub name: Identifier,
    pub definition: String,
    pub kind: RoutineKind,
}

impl Routine {
    pub fn procedure(name: Identifier, definition: impl Into<String>) -> Self {
        Self {
            name,
            definition: definition.into(),
            kind: RoutineKind::Procedure,
        }
    }

    pub fn function(name: Identifier, definition: impl Into<String>) -> Self {
        Self {
            name,
            definition: definition.into(),
            kind: RoutineKind::Function,
        }
    }
}
