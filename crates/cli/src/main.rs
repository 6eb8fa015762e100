// ABOUTME: CLI for parsing RSS/RDF documents with feedgraph-rss.
// ABOUTME: Reads feeds from files or stdin and prints JSON for verification.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use feedgraph_rss::{ParseOptions, RssParser};
use serde_json::json;
use tracing_subscriber::EnvFilter;

/// Parse one or more RSS/RDF documents and output JSON.
#[derive(Parser, Debug)]
#[command(name = "feedgraph")]
#[command(about = "Parse RSS/RDF feeds and print their structure as JSON", long_about = None)]
struct Args {
    /// Local file paths. Use "-" to read one document from stdin.
    #[arg(required = true)]
    targets: Vec<String>,

    /// Output compact JSON instead of pretty.
    #[arg(long, default_value_t = false)]
    compact: bool,

    /// Maximum nesting accepted inside a captured extension element.
    #[arg(long)]
    max_depth: Option<usize>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut options = ParseOptions::default();
    if let Some(depth) = args.max_depth {
        options = options.max_extension_depth(depth);
    }
    let mut parser = RssParser::with_options(options);

    let mut results = Vec::new();
    for target in &args.targets {
        let outcome = load_document(target)
            .and_then(|doc| parser.parse(&doc).map_err(anyhow::Error::new));
        match outcome {
            Ok(feed) => {
                tracing::info!(path = %target, items = feed.items.len(), "parsed feed");
                results.push(json!({ "target": target, "ok": true, "feed": feed, "error": null }));
            }
            Err(err) => {
                tracing::warn!(path = %target, error = %err, "failed to parse feed");
                results.push(json!({
                    "target": target,
                    "ok": false,
                    "feed": null,
                    "error": err.to_string()
                }));
            }
        }
    }

    let parsed = results
        .iter()
        .filter(|r| r.get("ok").and_then(|v| v.as_bool()) == Some(true))
        .count();
    let failed = results.len() - parsed;

    // Single successful target => the bare feed object, otherwise an envelope.
    let output = if results.len() == 1 && parsed == 1 {
        results[0].get("feed").cloned().unwrap_or_else(|| json!({}))
    } else {
        json!({
            "feeds": results,
            "total_feeds": results.len(),
            "parsed": parsed,
            "failed": failed
        })
    };

    if args.compact {
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("{}", serde_json::to_string_pretty(&output)?);
    }

    if failed > 0 {
        std::process::exit(1);
    }
    Ok(())
}

fn load_document(target: &str) -> Result<String> {
    if target == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }

    let path = PathBuf::from(target);
    if !path.exists() {
        return Err(anyhow!("file not found: {}", target));
    }
    fs::read_to_string(&path).with_context(|| format!("failed to read {}", path.display()))
}
