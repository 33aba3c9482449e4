use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use describer::{
    describe, describe_path, parse_document, SchemaDescriber, SchemaRegistry, INLINE,
};
use std::fs;
use std::io::Read;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Describe markup documents and binary message schemas as readable text
#[derive(Parser, Debug)]
#[command(name = "describe", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Describe an XML document
    Xml(XmlArgs),
    /// Describe one or more messages from the schema table
    Msg(MsgArgs),
}

#[derive(Args, Debug)]
struct XmlArgs {
    /// Describe only the element at this dot-separated path
    #[arg(short, long)]
    tag: Option<String>,

    /// Input XML file; reads stdin when absent
    input: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct MsgArgs {
    /// Describe all known messages
    #[arg(short, long)]
    all: bool,

    /// Describe only this message
    #[arg(short, long)]
    msg: Option<String>,

    /// JSON schema table to use instead of the built-in one
    #[arg(long)]
    schema: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Xml(args) => run_xml(args),
        Commands::Msg(args) => run_msg(args),
    }
}

fn run_xml(args: XmlArgs) -> Result<()> {
    let xml = match &args.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            buffer
        }
    };

    let document = parse_document(&xml).context("failed to parse XML")?;
    info!(top_level = document.children.len(), "describing document");

    let output = match &args.tag {
        Some(tag) => describe_path(&document, tag)?,
        None => describe(&document, 0, INLINE),
    };

    println!("{}", output);
    Ok(())
}

fn run_msg(args: MsgArgs) -> Result<()> {
    let registry = match &args.schema {
        Some(path) => {
            let table = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            SchemaRegistry::from_json(&table)
                .with_context(|| format!("failed to load schema table {}", path.display()))?
        }
        None => SchemaRegistry::builtin().context("failed to load built-in schema table")?,
    };
    info!(messages = registry.len(), "schema registry ready");

    let describer = SchemaDescriber::new(&registry);

    if let Some(name) = &args.msg {
        debug!(name = name.as_str(), "describing single message");
        println!("{}", describer.describe_name(name)?);
    }

    if args.all {
        print!("{}", describer.describe_all());
    }

    Ok(())
}
