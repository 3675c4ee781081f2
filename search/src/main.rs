use anyhow::Result;
use clap::Parser;
use reelfind_search::{build_index, read_records, InvalidRecordPolicy};
use std::path::Path;
use std::time::Instant;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "reelfind")]
#[command(about = "Find movies matching every given keyword", long_about = None)]
struct Cli {
    /// Path to the crawled records JSONL file
    #[arg(long, default_value = "./sample_data/movies.jsonl")]
    records: String,
    /// Abort instead of skipping records that fail keyword extraction
    #[arg(long, default_value_t = false)]
    strict: bool,
    /// Print the titles as a JSON array instead of one per line
    #[arg(long, default_value_t = false)]
    json: bool,
    /// Keywords to match: title words, cast or director names, genres,
    /// release year, metascore, user rating, certificate, or rank
    #[arg(required = true)]
    keywords: Vec<String>,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Cli::parse();

    let policy = if args.strict {
        InvalidRecordPolicy::Abort
    } else {
        InvalidRecordPolicy::Skip
    };
    let records = read_records(Path::new(&args.records))?;
    let index = build_index(records, policy)?;

    let start = Instant::now();
    let titles = index.query(&args.keywords.join(" "));
    tracing::debug!(
        hits = titles.len(),
        took_s = start.elapsed().as_secs_f64(),
        "query complete"
    );

    if args.json {
        println!("{}", serde_json::to_string(&titles)?);
    } else {
        for title in &titles {
            println!("{title}");
        }
    }
    Ok(())
}
