//! Spindle CLI
//!
//! Renders Cloud Spanner DDL for the bundled sample entities and writes it
//! to stdout or a file.

mod entities;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use spindle::{semicolon, Entity, Generator, GeneratorConfig};

#[derive(Parser)]
#[command(name = "spindle-cli")]
#[command(about = "Generate Cloud Spanner DDL from Spindle records")]
#[command(version = "0.1.0")]
struct Cli {
    /// Tag namespace read for modifiers (overrides config)
    #[arg(long)]
    tag_key: Option<String>,

    /// Modifier that drops a field (overrides config)
    #[arg(long)]
    ignore_sentinel: Option<String>,

    /// Output file; stdout when omitted
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Terminate every statement with `;`
    #[arg(long)]
    semicolon: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Quiet output (errors only)
    #[arg(short, long)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// CREATE TABLE for every entity
    CreateTable,
    /// DROP TABLE for every entity
    DropTable,
    /// CREATE INDEX for every declared index
    CreateIndex,
    /// DROP INDEX for every declared index
    DropIndex,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let mut config = GeneratorConfig::load()?;
    if let Some(tag_key) = cli.tag_key {
        config.tag_key = tag_key;
    }
    if let Some(ignore_sentinel) = cli.ignore_sentinel {
        config.ignore_sentinel = ignore_sentinel;
    }
    let generator = Generator::from_config(&config)?;

    let owned = entities::all();
    let entities: Vec<&dyn Entity> = owned.iter().map(|e| e.as_ref()).collect();

    let statements = render(&generator, &cli.command, &entities)?;
    let statements: Vec<String> = if cli.semicolon {
        statements.iter().map(|s| semicolon(s)).collect()
    } else {
        statements
    };
    let output = statements.join("\n\n");

    match &cli.out {
        Some(path) => {
            std::fs::write(path, &output)
                .with_context(|| format!("failed to write {}", path.display()))?;
            log::info!("wrote {} statements to {}", statements.len(), path.display());
        }
        None => println!("{output}"),
    }

    Ok(())
}

fn render(
    generator: &Generator,
    command: &Commands,
    entities: &[&dyn Entity],
) -> spindle::Result<Vec<String>> {
    match command {
        Commands::CreateTable => generator.create_tables(entities),
        Commands::DropTable => generator.drop_tables(entities),
        Commands::CreateIndex => collect_per_entity(entities, |e| generator.create_indexes(e)),
        Commands::DropIndex => collect_per_entity(entities, |e| generator.drop_indexes(e)),
    }
}

fn collect_per_entity<F>(entities: &[&dyn Entity], mut f: F) -> spindle::Result<Vec<String>>
where
    F: FnMut(&dyn Entity) -> spindle::Result<Vec<String>>,
{
    let mut statements = Vec::new();
    for entity in entities {
        statements.extend(f(*entity)?);
    }
    Ok(statements)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Box<dyn Entity>> {
        entities::all()
    }

    #[test]
    fn test_create_index_covers_all_entities() {
        let owned = sample();
        let entities: Vec<&dyn Entity> = owned.iter().map(|e| e.as_ref()).collect();
        let statements = render(&Generator::new(), &Commands::CreateIndex, &entities).unwrap();
        assert_eq!(statements.len(), 4);
        assert_eq!(
            statements[1],
            "CREATE NULL_FILTERED INDEX `PlayerCommentByPlayerIDCommentNullFiltered` ON `PlayerComment` (`PlayerID`, `Comment`)"
        );
    }

    #[test]
    fn test_create_table_samples() {
        let owned = sample();
        let entities: Vec<&dyn Entity> = owned.iter().map(|e| e.as_ref()).collect();
        let statements = render(&Generator::new(), &Commands::CreateTable, &entities).unwrap();
        assert_eq!(statements.len(), 6);
        assert!(statements[0].contains("`BornedDate` DATE,"));
        assert!(statements[1].contains("`Content` STRING(1048576) NOT NULL,"));
        // "size:99" is not a size modifier.
        assert!(statements[2].contains("`Comment` STRING(MAX),"));
        assert!(!statements[3].contains("`Ignore`"));
        assert!(statements[4].contains("`CurrencyID` INT64 NOT NULL,"));
        assert!(statements[5]
            .contains("`Child2Name` STRING(MAX) NOT NULL,\n) PRIMARY KEY (`ID`)"));
    }
}
