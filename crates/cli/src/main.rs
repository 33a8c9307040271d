mod lookup;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use getarg::ArgStore;
use tracing_subscriber::{EnvFilter, fmt};

use crate::lookup::{Kind, lookup};

#[derive(Parser)]
#[command(name = "getarg")]
#[command(version, about = "Inspect how argv-style tokens resolve into options", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every resolved option
    Dump(DumpArgs),

    /// Look up one option as a string, integer or boolean
    Get(GetArgs),
}

#[derive(Parser)]
struct DumpArgs {
    /// Print JSON instead of key=value lines
    #[arg(long)]
    json: bool,

    /// Tokens to parse (after `--`)
    #[arg(last = true, value_name = "TOKENS")]
    tokens: Vec<String>,
}

#[derive(Parser)]
struct GetArgs {
    /// Option name, with or without leading dashes
    #[arg(value_name = "KEY", allow_hyphen_values = true)]
    key: String,

    /// How to interpret the value
    #[arg(short, long, value_enum, default_value = "string")]
    kind: Kind,

    /// Value returned when the option is absent
    #[arg(short, long, value_name = "VALUE", allow_hyphen_values = true)]
    default: Option<String>,

    /// Print a JSON report instead of the bare value
    #[arg(long)]
    json: bool,

    /// Tokens to parse (after `--`)
    #[arg(last = true, value_name = "TOKENS")]
    tokens: Vec<String>,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Dump(args) => dump(args),
        Commands::Get(args) => get(args),
    }
}

fn dump(args: DumpArgs) -> Result<()> {
    let store = ArgStore::parse(&args.tokens);

    if args.json {
        let json = serde_json::to_string_pretty(&store).context("failed to encode store as JSON")?;
        println!("{json}");
        return Ok(());
    }

    for (key, value) in store.iter() {
        println!("{key}={value}");
    }
    if !store.rest().is_empty() {
        eprintln!("unparsed: {}", store.rest().join(" "));
    }
    Ok(())
}

fn get(args: GetArgs) -> Result<()> {
    let store = ArgStore::parse(&args.tokens);
    let report = lookup(&store, &args.key, args.kind, args.default.as_deref())?;

    if args.json {
        let json = serde_json::to_string_pretty(&report).context("failed to encode lookup as JSON")?;
        println!("{json}");
    } else {
        println!("{}", report.value);
    }
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
