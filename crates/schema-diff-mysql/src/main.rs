//! schema-diff-mysql CLI
//!
//! Prints the MySQL statements for the table diffs in a JSON file.

use std::path::PathBuf;

use clap::Parser;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use schema_diff_mysql::prelude::*;

/// MySQL ALTER TABLE generation from table diffs.
#[derive(Parser)]
#[command(name = "schema-diff-mysql")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON file holding one table diff or an array of table diffs.
    input: PathBuf,

    /// Emit DROP clauses for deleted columns and indexes.
    #[arg(short, long, env = "SCHEMA_DIFF_DELETIONS")]
    deletions: bool,

    /// Render the target tables as CREATE TABLE instead of altering them.
    #[arg(long)]
    create: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn options(&self) -> RenderOptions {
        let mut options = RenderOptions::new();
        if self.deletions {
            options = options.with_deletions();
        }
        if self.create {
            options = options.create_mode();
        }
        options
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr, statements to stdout
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let schema = SchemaDiff::load(&cli.input)?;
    info!(
        "Loaded {} table diff(s) from {}",
        schema.tables.len(),
        cli.input.display()
    );

    let builder = AlterBuilder::new(MysqlDialect::new());
    for statement in builder.schema_sql(&schema, cli.options()) {
        println!("{statement};\n");
    }

    Ok(())
}
