use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use jsplay::catalog::Catalog;
use jsplay::editor::Buffer;
use jsplay::input::{InputType, detect_input};
use jsplay::models::Variant;
use jsplay::output;
use jsplay::sandbox::{Sandbox, SandboxOptions};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "jsplay")]
#[command(about = "Run JavaScript lessons and snippets in an intercepted sandbox")]
struct Args {
    /// Inline code, a .js file, `-` for stdin, `challenge:<id>` or `topic:<slug>[#<section>]`
    #[arg(required_unless_present = "list")]
    input: Option<String>,

    /// Run the reference solution instead of the starting code
    #[arg(long)]
    solution: bool,

    /// Catalog JSON file (defaults to the built-in lessons)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// List challenges and topics
    #[arg(long)]
    list: bool,

    /// Print the transcript as JSON
    #[arg(long)]
    json: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Indentation for printed objects
    #[arg(long, default_value_t = 2)]
    indent: u8,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    if args.no_color {
        colored::control::set_override(false);
    }

    let catalog = match args.catalog {
        Some(ref path) => Catalog::from_path(path)?,
        None => Catalog::builtin()?,
    };

    if args.list {
        output::print_catalog(&catalog);
        return Ok(());
    }

    let input = args.input.as_deref().unwrap_or_default();
    let variant = if args.solution {
        Variant::Solution
    } else {
        Variant::Starting
    };
    let (title, source) = resolve_source(input, &catalog, variant)?;

    let options = SandboxOptions {
        indent: args.indent,
    };
    let mut sandbox = Sandbox::with_options(Buffer::new(source), options);
    let transcript = sandbox.run();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&transcript)?);
    } else {
        output::print_transcript(&title, &transcript);
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Resolve the positional argument to a display title and the code to run
fn resolve_source(input: &str, catalog: &Catalog, variant: Variant) -> Result<(String, String)> {
    match detect_input(input) {
        InputType::Stdin => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .context("Failed to read source from stdin")?;
            Ok(("stdin".to_string(), source))
        }
        InputType::LocalFile(path) => {
            let source = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path))?;
            Ok((path, source))
        }
        InputType::Challenge(id) => {
            let challenge = catalog
                .challenge(id)
                .with_context(|| format!("No challenge with id {}", id))?;
            Ok((challenge.title.clone(), challenge.code(variant).to_string()))
        }
        InputType::Topic { slug, section } => {
            let topic = catalog
                .topic(&slug)
                .with_context(|| format!("No topic named {}", slug))?;
            match section {
                Some(n) => {
                    let section = n
                        .checked_sub(1)
                        .and_then(|i| topic.sections.get(i))
                        .with_context(|| format!("Topic {} has no section #{}", slug, n))?;
                    Ok((section.title.clone(), section.example.clone()))
                }
                None => {
                    let challenge = topic
                        .challenge
                        .as_ref()
                        .with_context(|| format!("Topic {} has no challenge", slug))?;
                    Ok((challenge.title.clone(), challenge.code(variant).to_string()))
                }
            }
        }
        InputType::Inline(code) => Ok(("inline".to_string(), code)),
    }
}
