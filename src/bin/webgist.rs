//! Command-line front end: fetch a page and print its gist.

use anyhow::Context;
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;
use webgist::{summarize_url_with, Config, Gist, StopwordFilter};

#[derive(Debug, Parser)]
#[command(name = "webgist")]
#[command(version, about = "Extractive webpage summarizer")]
struct Args {
    /// Page to summarize
    url: String,

    /// Summary length in words
    #[arg(short = 'w', long, default_value_t = 100,
          value_parser = clap::value_parser!(u32).range(1..))]
    words: u32,

    /// Number of keywords to list
    #[arg(short = 'k', long, default_value_t = 30)]
    keywords: u32,

    /// Emit JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        error!("{err:?}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();
}

fn run() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = Config::default().with_keyword_count(args.keywords as usize);
    let gist = summarize_url_with(
        &args.url,
        args.words as usize,
        StopwordFilter::english(),
        &config,
    )
    .with_context(|| format!("could not summarize {}", args.url))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&gist)?);
        return Ok(());
    }
    print_report(&gist);
    Ok(())
}

fn print_report(gist: &Gist) {
    println!("Keywords: {}", gist.keywords.join(", "));
    println!();
    println!("Frequencies:");
    let width = gist.keywords.iter().map(|w| w.len()).max().unwrap_or(0);
    for word in &gist.keywords {
        let value = gist.frequencies.get(word).unwrap_or(0.0);
        let bar = "#".repeat((value * 40.0).round() as usize);
        println!("  {word:<width$}  {bar} {value:.2}");
    }
    println!();
    println!(
        "Summary ({} words):",
        gist.summary.split_whitespace().count()
    );
    println!("{}", gist.summary);
}
