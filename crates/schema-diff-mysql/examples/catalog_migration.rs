//! Example: Evolving a product catalog table
//!
//! Builds the diff between two versions of a `products` table by hand and
//! prints the MySQL statement that migrates one into the other.
//!
//! Run with: cargo run --example catalog_migration -p schema-diff-mysql

use schema_diff_mysql::prelude::*;

// =============================================================================
// Table versions
// =============================================================================

fn products_v1() -> Table {
    Table::new("products")
        .column(Column::new("id", ColumnType::BigInt).unsigned().auto_increment())
        .column(Column::new("label", ColumnType::Varchar(100)))
        .column(Column::new("price", ColumnType::Decimal(10, 2)))
        .column(Column::new("legacy_code", ColumnType::Char(8)).nullable())
        .index(Index::primary(vec!["id".to_string()]))
        .index(Index::new("k_label", vec!["label".to_string()]))
}

fn products_v2() -> Table {
    Table::new("products")
        .column(Column::new("id", ColumnType::BigInt).unsigned().auto_increment())
        .column(Column::new("name", ColumnType::Varchar(255)))
        .column(Column::new("price", ColumnType::Decimal(12, 2)))
        .column(Column::new("sku", ColumnType::Varchar(32)))
        .column(Column::new("weight", ColumnType::Double).nullable())
        .index(Index::primary(vec!["id".to_string()]))
        .index(Index::unique("k_label", vec!["name".to_string()]))
        .index(Index::unique("u_sku", vec!["sku".to_string()]))
}

fn main() {
    let v1 = products_v1();
    let v2 = products_v2();

    let diff = TableDiff::new(v1, v2.clone())
        .addition(Column::new("sku", ColumnType::Varchar(32)))
        .addition(Column::new("weight", ColumnType::Double).nullable())
        .addition(Index::unique("u_sku", vec!["sku".to_string()]))
        .deletion(Column::new("legacy_code", ColumnType::Char(8)).nullable())
        .change(
            Column::new("label", ColumnType::Varchar(100)),
            Column::new("name", ColumnType::Varchar(255)),
        )
        .change(
            Column::new("price", ColumnType::Decimal(10, 2)),
            Column::new("price", ColumnType::Decimal(12, 2)),
        )
        .change(
            Index::new("k_label", vec!["label".to_string()]),
            Index::unique("k_label", vec!["name".to_string()]),
        );

    let builder = AlterBuilder::new(MysqlDialect::new());

    println!("-- Without deletions");
    println!("{};\n", builder.sql(&diff, false));

    println!("-- With deletions");
    println!("{};\n", builder.sql(&diff, true));

    println!("-- Unchanged table");
    println!("{};", builder.sql(&TableDiff::new(v2.clone(), v2), false));
}
