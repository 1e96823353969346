//! `ALTER TABLE` generation from a [`TableDiff`].
//!
//! Column clauses come first, index clauses second, both joined with `,\n`
//! under a single `ALTER TABLE` header. Every added or renamed column is
//! placed with an `AFTER` / `FIRST` anchor so that the physical column order
//! stays alphabetical behind the `id` column.

use std::cmp::Ordering;

use tracing::{debug, info};

use crate::config::RenderOptions;
use crate::diff::{SchemaDiff, TableDiff};
use crate::dialect::SchemaRenderer;
use crate::schema::{Column, Index, Table, ID_COLUMN};

/// Where a column lands in the physical column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor<'a> {
    /// First position of the table.
    First,
    /// Right after the named column.
    After(&'a str),
}

/// Returns the column additions in clause emission order: `id` first, then
/// every other column in descending name order.
///
/// Emitting descending names each anchored on their nearest preceding
/// sibling leaves the added columns in ascending order once applied.
#[must_use]
pub fn ordered_additions(diff: &TableDiff) -> Vec<&Column> {
    let mut columns: Vec<&Column> = diff.added_columns().collect();
    columns.sort_by(|a, b| match (a.is_id(), b.is_id()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => compare_names(&b.name, &a.name),
    });
    columns
}

/// Orders column names by UTF-16 code units.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.encode_utf16().cmp(b.encode_utf16())
}

/// Columns of the old table whose position does not move.
#[derive(Debug)]
struct Placement<'a> {
    /// Sorted names, `id` excluded.
    set_columns: Vec<&'a str>,
    has_id: bool,
}

impl<'a> Placement<'a> {
    fn new(diff: &'a TableDiff, deletion: bool) -> Self {
        let renamed: Vec<&str> = diff
            .changed_columns()
            .filter(|(source, target)| source.name != target.name)
            .map(|(source, _)| source.name.as_str())
            .collect();
        let deleted: Vec<&str> = if deletion {
            diff.deleted_columns().map(|c| c.name.as_str()).collect()
        } else {
            Vec::new()
        };

        let kept = |name: &str| !renamed.iter().chain(&deleted).any(|gone| *gone == name);

        let mut set_columns: Vec<&str> = diff
            .source
            .columns
            .iter()
            .map(|c| c.name.as_str())
            .filter(|name| *name != ID_COLUMN && kept(name))
            .collect();
        set_columns.sort_unstable_by(|a, b| compare_names(a, b));

        Self {
            set_columns,
            has_id: diff.source.has_column(ID_COLUMN) && kept(ID_COLUMN),
        }
    }

    /// Computes the anchor for a column named `target`.
    ///
    /// The anchor is the greatest kept name strictly less than `target`.
    /// Returns `None` for `id`, which is never repositioned.
    fn anchor(&self, target: &str) -> Option<Anchor<'a>> {
        if target == ID_COLUMN {
            return None;
        }

        let mut anchor = None;
        for &name in &self.set_columns {
            if compare_names(name, target) != Ordering::Less {
                break;
            }
            anchor = Some(name);
        }

        Some(match anchor {
            Some(name) => Anchor::After(name),
            None if self.has_id => Anchor::After(ID_COLUMN),
            None => Anchor::First,
        })
    }
}

/// Builds `ALTER TABLE` statements using a [`SchemaRenderer`] for the
/// individual column and index definitions.
#[derive(Debug, Clone, Default)]
pub struct AlterBuilder<D> {
    dialect: D,
}

impl<D: SchemaRenderer> AlterBuilder<D> {
    /// Creates a builder over the given renderer.
    #[must_use]
    pub fn new(dialect: D) -> Self {
        Self { dialect }
    }

    /// Returns the renderer.
    pub fn dialect(&self) -> &D {
        &self.dialect
    }

    /// Renders an anchor as a clause suffix.
    fn placement_sql(&self, anchor: Option<Anchor<'_>>) -> String {
        match anchor {
            None => String::new(),
            Some(Anchor::First) => " FIRST".to_string(),
            Some(Anchor::After(name)) => format!(" AFTER {}", self.dialect.quote_identifier(name)),
        }
    }

    /// Builds the column clauses of the statement.
    ///
    /// Emits, in order: `DROP COLUMN` per deleted column (only when
    /// `deletion` is set), `MODIFY COLUMN` / `CHANGE COLUMN` per changed
    /// column, then `ADD COLUMN` per added column in [`ordered_additions`]
    /// order. Returns an empty string when there is nothing to alter.
    #[must_use]
    pub fn alter_columns_sql(&self, diff: &TableDiff, deletion: bool) -> String {
        let placement = Placement::new(diff, deletion);
        let mut sql = Vec::new();

        if deletion {
            for column in diff.deleted_columns() {
                sql.push(format!(
                    "DROP COLUMN {}",
                    self.dialect.quote_identifier(&column.name)
                ));
            }
        }

        for (source, target) in diff.changed_columns() {
            if source.name == target.name {
                sql.push(format!("MODIFY COLUMN {}", self.dialect.column_sql(target)));
                continue;
            }
            let anchor = placement.anchor(&target.name);
            debug!(from = %source.name, to = %target.name, ?anchor, "Renaming column");
            sql.push(format!(
                "CHANGE COLUMN {} {}{}",
                self.dialect.quote_identifier(&source.name),
                self.dialect.column_sql(target),
                self.placement_sql(anchor)
            ));
        }

        for column in ordered_additions(diff) {
            let anchor = placement.anchor(&column.name);
            debug!(column = %column.name, ?anchor, "Adding column");
            sql.push(format!(
                "ADD COLUMN {}{}",
                self.dialect.column_sql(column),
                self.placement_sql(anchor)
            ));
        }

        sql.join(",\n")
    }

    /// Renders the clause dropping an index.
    fn drop_index_sql(&self, index: &Index) -> String {
        if index.is_primary() {
            "DROP PRIMARY KEY".to_string()
        } else {
            format!("DROP KEY {}", self.dialect.quote_identifier(&index.name))
        }
    }

    /// Builds the index clauses of the statement.
    ///
    /// A changed index is rebuilt: its drop clause is immediately followed by
    /// the add clause of the new definition.
    #[must_use]
    pub fn alter_indexes_sql(&self, diff: &TableDiff, deletion: bool) -> String {
        let mut sql = Vec::new();

        if deletion {
            for index in diff.deleted_indexes() {
                sql.push(self.drop_index_sql(index));
            }
        }

        for (source, target) in diff.changed_indexes() {
            debug!(index = %source.name, "Rebuilding index");
            sql.push(self.drop_index_sql(source));
            sql.push(format!("ADD {}", self.dialect.index_sql(target)));
        }

        for index in diff.added_indexes() {
            sql.push(format!("ADD {}", self.dialect.index_sql(index)));
        }

        sql.join(",\n")
    }

    /// Renders the statement header for `table`.
    #[must_use]
    pub fn table_sql(&self, table: &Table, alter: bool) -> String {
        self.dialect.table_header(table, alter)
    }

    /// Builds the full statement migrating `diff.source` to `diff.target`.
    ///
    /// When neither columns nor indexes need altering, the target table is
    /// rendered in full instead.
    #[must_use]
    pub fn sql(&self, diff: &TableDiff, deletion: bool) -> String {
        let column_sql = self.alter_columns_sql(diff, deletion);
        let index_sql = self.alter_indexes_sql(diff, deletion);

        if column_sql.is_empty() && index_sql.is_empty() {
            debug!(table = %diff.target.name, "Nothing to alter, rendering full table");
            return self.dialect.create_table_sql(&diff.target);
        }

        let separator = if !column_sql.is_empty() && !index_sql.is_empty() {
            ",\n"
        } else {
            ""
        };
        info!(table = %diff.target.name, dialect = self.dialect.name(), "Built ALTER TABLE");

        format!(
            "{}\n{column_sql}{separator}{index_sql}",
            self.table_sql(&diff.target, true)
        )
    }

    /// Builds the statement for `diff` according to `options`.
    #[must_use]
    pub fn statement(&self, diff: &TableDiff, options: RenderOptions) -> String {
        if options.alter {
            self.sql(diff, options.include_deletions)
        } else {
            self.dialect.create_table_sql(&diff.target)
        }
    }

    /// Builds one statement per table diff, in input order.
    #[must_use]
    pub fn schema_sql(&self, schema: &SchemaDiff, options: RenderOptions) -> Vec<String> {
        schema
            .tables
            .iter()
            .map(|diff| self.statement(diff, options))
            .collect()
    }
}
