//! MySQL renderer.

use crate::schema::ColumnType;

use super::SchemaRenderer;

/// MySQL / MariaDB renderer.
#[derive(Debug, Clone, Default)]
pub struct MysqlDialect;

impl MysqlDialect {
    /// Creates a new MySQL dialect.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl SchemaRenderer for MysqlDialect {
    fn name(&self) -> &'static str {
        "mysql"
    }

    fn type_name(&self, column_type: &ColumnType) -> String {
        column_type.mysql_name()
    }

    fn auto_increment_keyword(&self) -> &'static str {
        "AUTO_INCREMENT"
    }

    fn quote_char(&self) -> char {
        '`'
    }
}
