//! `sjson` CLI — check, compact, query, and summarize JSON documents.
//!
//! ## Usage
//!
//! ```sh
//! # Validate a document (stdin → "ok" or an error with its byte offset)
//! echo '{"name":"Alice","age":30}' | sjson check
//!
//! # Re-serialize compactly, file to file
//! sjson compact -i data.json -o data.min.json
//!
//! # Print the value at a dotted path
//! sjson get users.0.name -i data.json
//!
//! # Count values by kind
//! sjson stats -i data.json --json
//!
//! # Tighter nesting limit, with decoder logging on stderr
//! RUST_LOG=simple_json=debug sjson --max-depth 16 check -i data.json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use simple_json::options::DEFAULT_MAX_DEPTH;
use simple_json::{ParseOptions, Value, ValueKind};
use std::io::{self, Read};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sjson", version, about = "Check, compact, and query JSON documents")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Deepest allowed object/array nesting
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse the document and report whether it is valid
    Check {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Parse and re-serialize without whitespace
    Compact {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Print the value at a dotted path such as `items.0.name`
    Get {
        /// Dotted path; an empty string selects the root
        path: String,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Show size and value-kind counts
    Stats {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let options = ParseOptions::new().with_max_depth(cli.max_depth);

    match cli.command {
        Commands::Check { input } => {
            let text = read_input(input.as_deref())?;
            parse_document(&text, &options)?;
            println!("ok");
        }
        Commands::Compact { input, output } => {
            let text = read_input(input.as_deref())?;
            let value = parse_document(&text, &options)?;
            write_output(output.as_deref(), &simple_json::serialize(&value))?;
        }
        Commands::Get { path, input } => {
            let text = read_input(input.as_deref())?;
            let value = parse_document(&text, &options)?;
            let found = value
                .pointer(&path)
                .with_context(|| format!("Failed to resolve path: {:?}", path))?;
            println!("{}", found);
        }
        Commands::Stats { input, json } => {
            let text = read_input(input.as_deref())?;
            let value = parse_document(&text, &options)?;
            let stats = Stats::collect(&text, &value);
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                stats.print();
            }
        }
    }

    Ok(())
}

/// Logs go to stderr so they never mix with command output.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn parse_document(text: &str, options: &ParseOptions) -> Result<Value> {
    let value = simple_json::parse_with(text, options).context("Failed to parse JSON")?;
    debug!(kind = %value.kind(), "document parsed");
    Ok(value)
}

/// Size and shape summary of one document.
#[derive(Debug, Default, Serialize)]
struct Stats {
    input_bytes: usize,
    compact_bytes: usize,
    objects: usize,
    arrays: usize,
    strings: usize,
    booleans: usize,
    integers: usize,
    floats: usize,
    nulls: usize,
    max_depth: usize,
}

impl Stats {
    fn collect(text: &str, value: &Value) -> Self {
        let mut stats = Stats {
            input_bytes: text.len(),
            compact_bytes: simple_json::serialize(value).len(),
            ..Stats::default()
        };
        stats.visit(value, 1);
        stats
    }

    fn visit(&mut self, value: &Value, depth: usize) {
        self.max_depth = self.max_depth.max(depth);
        match value.kind() {
            ValueKind::Object => self.objects += 1,
            ValueKind::Array => self.arrays += 1,
            ValueKind::String => self.strings += 1,
            ValueKind::Boolean => self.booleans += 1,
            ValueKind::Integer => self.integers += 1,
            ValueKind::Float => self.floats += 1,
            ValueKind::Null => self.nulls += 1,
        }
        match value {
            Value::Object(map) => {
                for child in map.values() {
                    self.visit(child, depth + 1);
                }
            }
            Value::Array(items) => {
                for child in items {
                    self.visit(child, depth + 1);
                }
            }
            _ => {}
        }
    }

    fn print(&self) {
        let saved = if self.input_bytes > 0 {
            (1.0 - (self.compact_bytes as f64 / self.input_bytes as f64)) * 100.0
        } else {
            0.0
        };
        println!("Input size:    {} bytes", self.input_bytes);
        println!("Compact size:  {} bytes", self.compact_bytes);
        println!("Whitespace:    {:.1}%", saved);
        println!("Max depth:     {}", self.max_depth);
        println!("Objects:       {}", self.objects);
        println!("Arrays:        {}", self.arrays);
        println!("Strings:       {}", self.strings);
        println!("Booleans:      {}", self.booleans);
        println!("Integers:      {}", self.integers);
        println!("Floats:        {}", self.floats);
        println!("Nulls:         {}", self.nulls);
    }
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
