use anyhow::Result;
use clap::Parser;
use tracing::info;
use versemark::{
    Recognizer, RecognizerOptions, StaticVersionLookup, VersionLookup,
};

#[derive(Parser, Debug)]
#[command(name = "versemark")]
#[command(about = "Recognize scripture references in free-form chat text")]
#[command(version)]
struct Args {
    /// Message text to scan
    message: String,

    /// Default version abbreviation, used unless the message ends with an
    /// override abbreviation
    #[arg(long, default_value = "RSV")]
    version: String,

    /// Exclude mentions inside this bracket pair, given as two characters
    /// (e.g. "[]" or "<>")
    #[arg(long)]
    ignore_brackets: Option<String>,

    /// Emit JSON instead of plain lines
    #[arg(long)]
    json: bool,
}

fn bracket_pair(spec: &str) -> Result<(char, char)> {
    let mut chars = spec.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(open), Some(close), None) => Ok((open, close)),
        _ => anyhow::bail!("bracket pair must be exactly two characters, got {spec:?}"),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // WHY: structured JSON logging enables observability and debugging in production
    tracing_subscriber::fmt()
        .with_target(false)
        .json()
        .init();

    let args = Args::parse();
    info!(?args, "Parsed CLI arguments");

    let lookup = StaticVersionLookup::builtin();
    let version = lookup
        .find_by_abbreviation(&args.version)
        .await
        .ok_or_else(|| anyhow::anyhow!("unknown version abbreviation: {}", args.version))?;

    let options = RecognizerOptions {
        exclude_bracketed: args
            .ignore_brackets
            .as_deref()
            .map(bracket_pair)
            .transpose()?,
    };

    let recognizer = Recognizer::new();
    let output = recognizer
        .recognize(&args.message, &version, &lookup, options)
        .await;

    info!(
        "Recognized {} reference(s), {} rejection(s)",
        output.references.len(),
        output.rejections.len()
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        for reference in &output.references {
            println!("{reference}");
        }
        for rejection in &output.rejections {
            println!("{rejection}");
        }
        if output.references.is_empty() && output.rejections.is_empty() {
            println!("No scripture references recognized");
        }
    }

    Ok(())
}
