//! MySQL `ALTER TABLE` generation from table diffs.
//!
//! `schema-diff-mysql` turns a [`TableDiff`](diff::TableDiff), the structural
//! difference between two versions of a table, into the DDL that migrates the
//! old table into the new one:
//! - Added and renamed columns are positioned with `AFTER` / `FIRST` so the
//!   column order stays alphabetical behind `id`
//! - Changed indexes are rebuilt, dropping before adding
//! - Primary keys are dropped with `DROP PRIMARY KEY`
//!
//! # Architecture
//!
//! - **Schema** - `Table`, `Column`, `Index` snapshots
//! - **Diff** - `TableDiff` input, produced by an external diff engine
//! - **Dialect** - Rendering of single column / index definitions
//! - **Alter** - Column clauses, index clauses and statement assembly
//!
//! # Example
//!
//! ```rust
//! use schema_diff_mysql::prelude::*;
//!
//! let source = Table::new("products")
//!     .column(Column::new("id", ColumnType::BigInt))
//!     .column(Column::new("name", ColumnType::Varchar(255)))
//!     .column(Column::new("price", ColumnType::Decimal(10, 2)));
//! let weight = Column::new("weight", ColumnType::Double).nullable();
//! let target = source.clone().column(weight.clone());
//!
//! let diff = TableDiff::new(source, target).addition(weight);
//! let sql = AlterBuilder::new(MysqlDialect::new()).sql(&diff, false);
//!
//! assert_eq!(
//!     sql,
//!     "ALTER TABLE `products`\nADD COLUMN `weight` DOUBLE NULL AFTER `price`"
//! );
//! ```
//!
//! # CLI Usage
//!
//! ```bash
//! # Print the statements for a diff file
//! schema-diff-mysql diff.json
//!
//! # Include DROP clauses for deleted columns and indexes
//! schema-diff-mysql diff.json --deletions
//! ```

pub mod alter;
pub mod config;
pub mod dialect;
pub mod diff;
pub mod error;
pub mod schema;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::alter::{ordered_additions, AlterBuilder, Anchor};
    pub use crate::config::RenderOptions;
    pub use crate::dialect::{MysqlDialect, SchemaRenderer};
    pub use crate::diff::{Entity, EntityChange, SchemaDiff, TableDiff};
    pub use crate::error::{DiffError, Result};
    pub use crate::schema::{Column, ColumnType, DefaultValue, Index, IndexType, Table};
}
