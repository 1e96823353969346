#![allow(dead_code)]

use schema_diff_mysql::prelude::*;

pub fn builder() -> AlterBuilder<MysqlDialect> {
    AlterBuilder::new(MysqlDialect::new())
}

pub fn names(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| (*n).to_string()).collect()
}

pub fn varchar(name: &str) -> Column {
    Column::new(name, ColumnType::Varchar(255))
}

/// Table with an `id` primary key followed by varchar columns.
pub fn table_with_id(name: &str, columns: &[&str]) -> Table {
    columns.iter().fold(
        Table::new(name)
            .column(Column::new("id", ColumnType::BigInt).unsigned().auto_increment())
            .index(Index::primary(names(&["id"]))),
        |table, column| table.column(varchar(column)),
    )
}
