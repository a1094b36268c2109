use std::io::{self, Write};

use anyhow::Context;
use clap::{Parser, Subcommand};
use herald_kernel::{settings::Settings, SymbolTable, Wrapper};

#[derive(Parser)]
#[command(name = "herald")]
#[command(about = "Announce functions by name before calling them")]
struct Cli {
    /// Prefix printed before each function name (overrides configuration)
    #[arg(long, global = true)]
    prefix: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply one wrapper to each named function, in order
    Apply {
        /// Symbols to apply the wrapper to
        #[arg(required = true)]
        names: Vec<String>,

        /// Extra call arguments, accepted and ignored
        #[arg(last = true)]
        extra: Vec<String>,
    },
    /// List the known symbols
    List,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = Settings::load().with_context(|| "failed to load herald settings")?;
    herald_telemetry::init(&settings.telemetry);

    let prefix = cli.prefix.unwrap_or(settings.prefix);
    let table = herald_app::symbol_table();

    match cli.command {
        Commands::Apply { names, extra } => apply(&table, &Wrapper::new(prefix), &names, &extra),
        Commands::List => list(&table, &mut io::stdout().lock()),
    }
}

fn apply(
    table: &SymbolTable,
    wrapper: &Wrapper,
    names: &[String],
    extra: &[String],
) -> anyhow::Result<()> {
    tracing::info!(prefix = wrapper.prefix(), count = names.len(), "applying wrapper");

    for name in names {
        let target = table.resolve(name)?;
        wrapper.call(target.as_ref(), extra)?;
    }

    Ok(())
}

fn list<W: Write>(table: &SymbolTable, out: &mut W) -> anyhow::Result<()> {
    for (name, symbol) in table.iter() {
        let written = match symbol.value() {
            Some(value) => writeln!(out, "{} {} {}", name, symbol.kind(), value),
            None => writeln!(out, "{} {}", name, symbol.kind()),
        };
        written.with_context(|| "failed to write symbol listing")?;
    }
    Ok(())
}
