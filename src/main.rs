//! Dmiq CLI - dmidecode hardware identity in JSON, XML, or SQL

use clap::Parser;
use dmiq::cli::{Args, SubCommand};
use dmiq::{to_json, to_sql, to_xml, InventoryReader, Sink, SqlMode};
use std::fs::File;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse();

    let filter = if args.verbose {
        EnvFilter::new("dmiq=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> dmiq::Result<()> {
    let mut reader = match args.search_path {
        Some(ref path) => InventoryReader::with_search_path(path)?,
        None => InventoryReader::new()?,
    };
    reader.collect()?;

    let mut file = match args.output {
        Some(ref path) => Some(File::create(path)?),
        None => None,
    };
    let sink = if args.no_output {
        Sink::None
    } else {
        match file {
            Some(ref mut f) => Sink::Writer(f),
            None => Sink::Stdout,
        }
    };

    match args.command {
        SubCommand::Json => {
            to_json(reader.record(), sink)?;
        }
        SubCommand::Xml => {
            to_xml(reader.record(), sink)?;
        }
        SubCommand::Sql {
            table,
            id_column,
            id,
            mode,
            keys,
        } => {
            let mode: SqlMode = mode.parse()?;
            let keys: Option<Vec<&str>> = keys
                .as_ref()
                .map(|keys| keys.iter().map(String::as_str).collect());
            to_sql(
                reader.record(),
                &table,
                &id_column,
                &id,
                mode,
                keys.as_deref(),
                sink,
            )?;
        }
    }

    Ok(())
}
