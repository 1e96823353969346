//! Single-definition renderers.
//!
//! The alter builder treats column and index fragments as opaque; it only
//! asks a [`SchemaRenderer`] for them. This module defines that seam and the
//! MySQL implementation.

mod mysql;

pub use mysql::MysqlDialect;

use crate::schema::{Column, ColumnType, Index, IndexType, Table};

/// Trait for dialect-specific rendering of table members.
pub trait SchemaRenderer {
    /// Returns the dialect name.
    fn name(&self) -> &'static str;

    /// Maps a [`ColumnType`] to the dialect-specific SQL type.
    fn type_name(&self, column_type: &ColumnType) -> String;

    /// Returns the auto-increment keyword for this dialect.
    fn auto_increment_keyword(&self) -> &'static str;

    /// Returns the identifier quote character.
    fn quote_char(&self) -> char {
        '"'
    }

    /// Quotes an identifier.
    fn quote_identifier(&self, name: &str) -> String {
        let q = self.quote_char();
        format!("{q}{name}{q}")
    }

    /// Renders one column definition, as used after `ADD COLUMN`.
    fn column_sql(&self, column: &Column) -> String {
        let mut sql = format!(
            "{} {}",
            self.quote_identifier(&column.name),
            self.type_name(&column.column_type)
        );

        if column.unsigned && column.column_type.is_numeric() {
            sql.push_str(" UNSIGNED");
        }

        sql.push_str(if column.nullable { " NULL" } else { " NOT NULL" });

        if let Some(default) = column.default.to_sql() {
            sql.push_str(" DEFAULT ");
            sql.push_str(&default);
        }

        if column.auto_increment {
            sql.push(' ');
            sql.push_str(self.auto_increment_keyword());
        }

        sql
    }

    /// Renders one index definition, as used after `ADD`.
    fn index_sql(&self, index: &Index) -> String {
        let columns: Vec<String> = index
            .columns
            .iter()
            .map(|c| self.quote_identifier(c))
            .collect();
        let columns = columns.join(", ");

        match index.index_type {
            IndexType::Primary => format!("PRIMARY KEY ({columns})"),
            IndexType::Unique => format!(
                "UNIQUE KEY {} ({columns})",
                self.quote_identifier(&index.name)
            ),
            IndexType::Key => format!("KEY {} ({columns})", self.quote_identifier(&index.name)),
        }
    }

    /// Renders the statement header for a table.
    ///
    /// `alter` selects `ALTER TABLE`; otherwise the header opens a
    /// `CREATE TABLE` definition.
    fn table_header(&self, table: &Table, alter: bool) -> String {
        let keyword = if alter { "ALTER TABLE" } else { "CREATE TABLE" };
        format!("{keyword} {}", self.quote_identifier(&table.name))
    }

    /// Renders the full definition of a table.
    fn create_table_sql(&self, table: &Table) -> String {
        let mut sql = self.table_header(table, false);
        sql.push_str(" (\n");

        let definitions: Vec<String> = table
            .columns
            .iter()
            .map(|c| format!("  {}", self.column_sql(c)))
            .chain(
                table
                    .indexes
                    .iter()
                    .map(|i| format!("  {}", self.index_sql(i))),
            )
            .collect();
        sql.push_str(&definitions.join(",\n"));

        sql.push_str("\n)");
        sql
    }
}
