//! Table diff input types.
//!
//! A [`TableDiff`] is produced by an external diff engine. It pairs the old
//! and new [`Table`] snapshots and lists what was added, deleted and changed.
//! Columns and indexes share the same lists, so each entry is an [`Entity`]
//! and every consumer matches only the kind it handles.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DiffError, Result};
use crate::schema::{Column, Index, Table};

/// A diffable table member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Entity {
    /// A column definition.
    Column(Column),
    /// An index definition.
    Index(Index),
}

impl Entity {
    /// Returns the column, if this entity is one.
    #[must_use]
    pub fn as_column(&self) -> Option<&Column> {
        match self {
            Self::Column(column) => Some(column),
            Self::Index(_) => None,
        }
    }

    /// Returns the index, if this entity is one.
    #[must_use]
    pub fn as_index(&self) -> Option<&Index> {
        match self {
            Self::Index(index) => Some(index),
            Self::Column(_) => None,
        }
    }

    /// Returns the entity name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Column(column) => &column.name,
            Self::Index(index) => &index.name,
        }
    }
}

impl From<Column> for Entity {
    fn from(column: Column) -> Self {
        Self::Column(column)
    }
}

impl From<Index> for Entity {
    fn from(index: Index) -> Self {
        Self::Index(index)
    }
}

/// An entity present in both snapshots with some attribute differing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityChange {
    /// Definition in the old table.
    pub source: Entity,
    /// Definition in the new table.
    pub target: Entity,
}

impl EntityChange {
    /// Creates a change pair.
    #[must_use]
    pub fn new(source: impl Into<Entity>, target: impl Into<Entity>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    /// Returns both sides if this pair is a column change.
    #[must_use]
    pub fn columns(&self) -> Option<(&Column, &Column)> {
        Some((self.source.as_column()?, self.target.as_column()?))
    }

    /// Returns both sides if this pair is an index change.
    #[must_use]
    pub fn indexes(&self) -> Option<(&Index, &Index)> {
        Some((self.source.as_index()?, self.target.as_index()?))
    }

    /// Returns true if the pair mixes a column with an index.
    #[must_use]
    pub fn is_mixed(&self) -> bool {
        self.columns().is_none() && self.indexes().is_none()
    }
}

/// Structural delta between two versions of one table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableDiff {
    /// Old table.
    pub source: Table,
    /// New table.
    pub target: Table,
    /// Entities present only in the new table.
    #[serde(default)]
    pub additions: Vec<Entity>,
    /// Entities present only in the old table.
    #[serde(default)]
    pub deletions: Vec<Entity>,
    /// Entities present in both with some attribute differing.
    #[serde(default)]
    pub changes: Vec<EntityChange>,
}

impl TableDiff {
    /// Creates a diff with no differences between `source` and `target`.
    #[must_use]
    pub fn new(source: Table, target: Table) -> Self {
        Self {
            source,
            target,
            additions: Vec::new(),
            deletions: Vec::new(),
            changes: Vec::new(),
        }
    }

    /// Records an addition.
    #[must_use]
    pub fn addition(mut self, entity: impl Into<Entity>) -> Self {
        self.additions.push(entity.into());
        self
    }

    /// Records a deletion.
    #[must_use]
    pub fn deletion(mut self, entity: impl Into<Entity>) -> Self {
        self.deletions.push(entity.into());
        self
    }

    /// Records a change.
    #[must_use]
    pub fn change(mut self, source: impl Into<Entity>, target: impl Into<Entity>) -> Self {
        self.changes.push(EntityChange::new(source, target));
        self
    }

    /// Returns true if nothing was added, deleted or changed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.additions.is_empty() && self.deletions.is_empty() && self.changes.is_empty()
    }

    /// Returns the first change pair that mixes a column with an index.
    #[must_use]
    pub fn mixed_change(&self) -> Option<&EntityChange> {
        self.changes.iter().find(|change| change.is_mixed())
    }

    /// Column additions in list order.
    pub fn added_columns(&self) -> impl Iterator<Item = &Column> {
        self.additions.iter().filter_map(Entity::as_column)
    }

    /// Column deletions in list order.
    pub fn deleted_columns(&self) -> impl Iterator<Item = &Column> {
        self.deletions.iter().filter_map(Entity::as_column)
    }

    /// Column change pairs in list order.
    pub fn changed_columns(&self) -> impl Iterator<Item = (&Column, &Column)> {
        self.changes.iter().filter_map(EntityChange::columns)
    }

    /// Index additions in list order.
    pub fn added_indexes(&self) -> impl Iterator<Item = &Index> {
        self.additions.iter().filter_map(Entity::as_index)
    }

    /// Index deletions in list order.
    pub fn deleted_indexes(&self) -> impl Iterator<Item = &Index> {
        self.deletions.iter().filter_map(Entity::as_index)
    }

    /// Index change pairs in list order.
    pub fn changed_indexes(&self) -> impl Iterator<Item = (&Index, &Index)> {
        self.changes.iter().filter_map(EntityChange::indexes)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DiffDocument {
    Many(Vec<TableDiff>),
    One(Box<TableDiff>),
}

/// A set of table diffs, rendered as one statement each.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaDiff {
    /// Table diffs, in rendering order.
    pub tables: Vec<TableDiff>,
}

impl SchemaDiff {
    /// Creates an empty schema diff.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a table diff.
    #[must_use]
    pub fn table(mut self, diff: TableDiff) -> Self {
        self.tables.push(diff);
        self
    }

    /// Parses a JSON document holding one table diff or an array of them.
    pub fn from_json(json: &str, origin: &Path) -> Result<Self> {
        let tables = match serde_json::from_str::<DiffDocument>(json)? {
            DiffDocument::Many(tables) => tables,
            DiffDocument::One(table) => vec![*table],
        };

        if tables.is_empty() {
            return Err(DiffError::EmptyInput(origin.to_path_buf()));
        }

        for diff in &tables {
            if let Some(change) = diff.mixed_change() {
                return Err(DiffError::ParseError {
                    path: origin.to_path_buf(),
                    message: format!(
                        "table `{}`: change pairs `{}` with `{}` of a different kind",
                        diff.target.name,
                        change.source.name(),
                        change.target.name()
                    ),
                });
            }
        }

        Ok(Self { tables })
    }

    /// Reads and parses a diff file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ColumnType;

    fn products() -> Table {
        Table::new("products")
            .column(Column::new("id", ColumnType::BigInt))
            .column(Column::new("name", ColumnType::Varchar(255)))
    }

    #[test]
    fn test_entity_kind_accessors() {
        let column: Entity = Column::new("name", ColumnType::Text).into();
        let index: Entity = Index::new("k_name", vec!["name".to_string()]).into();

        assert!(column.as_column().is_some());
        assert!(column.as_index().is_none());
        assert!(index.as_index().is_some());
        assert_eq!(index.name(), "k_name");
    }

    #[test]
    fn test_kind_filtered_iterators() {
        let diff = TableDiff::new(products(), products())
            .addition(Column::new("price", ColumnType::Decimal(10, 2)))
            .addition(Index::new("k_price", vec!["price".to_string()]))
            .change(
                Column::new("name", ColumnType::Varchar(100)),
                Column::new("name", ColumnType::Varchar(255)),
            );

        assert_eq!(diff.added_columns().count(), 1);
        assert_eq!(diff.added_indexes().count(), 1);
        assert_eq!(diff.changed_columns().count(), 1);
        assert_eq!(diff.changed_indexes().count(), 0);
        assert!(!diff.is_empty());
    }

    #[test]
    fn test_mixed_change_is_skipped_by_both_kinds() {
        let diff = TableDiff::new(products(), products()).change(
            Column::new("name", ColumnType::Text),
            Index::new("name", vec!["name".to_string()]),
        );

        assert_eq!(diff.changed_columns().count(), 0);
        assert_eq!(diff.changed_indexes().count(), 0);
        assert!(diff.mixed_change().is_some());
    }

    #[test]
    fn test_from_json_single_document() {
        let json = r#"{
            "source": {"name": "products", "columns": [{"name": "id", "type": "big_int"}]},
            "target": {"name": "products", "columns": [
                {"name": "id", "type": "big_int"},
                {"name": "name", "type": {"varchar": 255}}
            ]},
            "additions": [{"kind": "column", "name": "name", "type": {"varchar": 255}}]
        }"#;

        let schema = SchemaDiff::from_json(json, Path::new("diff.json")).unwrap();
        assert_eq!(schema.tables.len(), 1);
        assert_eq!(schema.tables[0].added_columns().count(), 1);
    }

    #[test]
    fn test_from_json_rejects_empty_array() {
        let err = SchemaDiff::from_json("[]", Path::new("diff.json")).unwrap_err();
        assert!(matches!(err, DiffError::EmptyInput(_)));
    }

    #[test]
    fn test_from_json_rejects_mixed_change() {
        let json = r#"{
            "source": {"name": "t"},
            "target": {"name": "t"},
            "changes": [{
                "source": {"kind": "column", "name": "a", "type": "text"},
                "target": {"kind": "index", "name": "a", "columns": ["a"]}
            }]
        }"#;

        let err = SchemaDiff::from_json(json, Path::new("diff.json")).unwrap_err();
        assert!(matches!(err, DiffError::ParseError { .. }));
    }
}
