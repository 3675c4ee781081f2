use anyhow::{anyhow, Context, Result};
use clap::Parser;
use reelfind_core::Record;
use reqwest::{header, Client, Url};
use scraper::{ElementRef, Html, Selector};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::time::Duration;
use tokio::time::sleep;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "crawler")]
#[command(about = "Crawl a paginated movie ranking into JSONL records")]
struct Cli {
    /// Output JSONL file path
    #[arg(long, default_value = "./sample_data/movies.jsonl")]
    output: String,
    /// Ranking list URL; the `start` query parameter is set per page
    #[arg(
        long,
        default_value = "https://www.imdb.com/search/title/?groups=top_1000&sort=user_rating,desc&ref_=adv_prv"
    )]
    base_url: String,
    /// Total number of ranked movies to fetch
    #[arg(long, default_value_t = 1000)]
    max_movies: usize,
    /// Movies per result page (the site's pagination unit)
    #[arg(long, default_value_t = 50)]
    page_size: usize,
    /// Delay between page fetches in milliseconds
    #[arg(long, default_value_t = 1000)]
    delay_ms: u64,
    /// Request timeout seconds
    #[arg(long, default_value_t = 12)]
    timeout_secs: u64,
    /// User-Agent string
    #[arg(long, default_value = "reelfind-bot/0.1 (+https://example.com/bot)")]
    user_agent: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Cli::parse();
    if args.page_size == 0 {
        return Err(anyhow!("page size must be positive"));
    }
    if let Some(dir) = std::path::Path::new(&args.output).parent() {
        fs::create_dir_all(dir).ok();
    }

    let client = Client::builder()
        .user_agent(args.user_agent.clone())
        .redirect(reqwest::redirect::Policy::limited(5))
        .timeout(Duration::from_secs(args.timeout_secs))
        .build()?;

    let base = Url::parse(&args.base_url).context("invalid base url")?;
    let mut out = BufWriter::new(File::create(&args.output)?);

    let mut emitted = 0usize;
    let mut start = 1usize;
    while start + args.page_size - 1 <= args.max_movies {
        let url = page_url(&base, start);
        tracing::info!(start, end = start + args.page_size - 1, "retrieving movies");
        match fetch_page(&client, &url).await {
            Ok(html) => {
                let records = parse_page(&html);
                if records.is_empty() {
                    tracing::warn!(%url, "no movie entries found on page");
                }
                for record in &records {
                    serde_json::to_writer(&mut out, record)?;
                    out.write_all(b"\n")?;
                }
                emitted += records.len();
            }
            Err(err) => tracing::warn!(%url, error = %err, "page fetch failed, skipping"),
        }
        start += args.page_size;
        if start + args.page_size - 1 <= args.max_movies {
            sleep(Duration::from_millis(args.delay_ms)).await;
        }
    }
    out.flush()?;
    tracing::info!(emitted, output = %args.output, "crawl complete");
    Ok(())
}

fn page_url(base: &Url, start: usize) -> Url {
    let mut url = base.clone();
    url.query_pairs_mut().append_pair("start", &start.to_string());
    url
}

async fn fetch_page(client: &Client, url: &Url) -> Result<String> {
    let resp = client.get(url.clone()).send().await?;
    if !resp.status().is_success() {
        return Err(anyhow!("status {}", resp.status()));
    }
    if let Some(ct) = resp.headers().get(header::CONTENT_TYPE) {
        if let Ok(v) = ct.to_str() {
            if !v.starts_with("text/html") {
                return Err(anyhow!("unexpected content type {v}"));
            }
        }
    }
    Ok(resp.text().await?)
}

struct Selectors {
    movie: Selector,
    title: Selector,
    rank: Selector,
    year: Selector,
    certificate: Selector,
    rating: Selector,
    genre: Selector,
    metascore: Selector,
    credits: Selector,
}

impl Selectors {
    fn new() -> Self {
        Self {
            movie: Selector::parse("div.lister-item.mode-advanced").unwrap(),
            title: Selector::parse("h3.lister-item-header a").unwrap(),
            rank: Selector::parse("h3.lister-item-header span.lister-item-index").unwrap(),
            year: Selector::parse("span.lister-item-year").unwrap(),
            certificate: Selector::parse("span.certificate").unwrap(),
            rating: Selector::parse(r#"meta[itemprop="ratingValue"]"#).unwrap(),
            genre: Selector::parse("span.genre").unwrap(),
            // only the "favorable" display style carries a metascore here
            metascore: Selector::parse("span.metascore.favorable").unwrap(),
            // the class-less credit paragraph holds director and star links
            credits: Selector::parse(r#"p[class=""] a"#).unwrap(),
        }
    }
}

fn parse_page(html: &str) -> Vec<Record> {
    let sel = Selectors::new();
    let doc = Html::parse_document(html);
    doc.select(&sel.movie).map(|movie| extract_record(movie, &sel)).collect()
}

fn extract_record(movie: ElementRef<'_>, sel: &Selectors) -> Record {
    let text_of = |selector: &Selector| -> Option<String> {
        movie
            .select(selector)
            .next()
            .map(|node| node.text().collect::<String>().trim().to_string())
            .filter(|text| !text.is_empty())
    };

    let title = text_of(&sel.title);
    let rank = text_of(&sel.rank).map(|r| r.trim_end_matches('.').to_string());
    let year = text_of(&sel.year).map(|y| y.trim_matches(|c| c == '(' || c == ')').to_string());
    let certificate = text_of(&sel.certificate);
    let rating = movie
        .select(&sel.rating)
        .next()
        .and_then(|meta| meta.value().attr("content"))
        .map(str::to_string);
    let genres = text_of(&sel.genre)
        .map(|g| g.split(", ").map(str::to_string).collect())
        .unwrap_or_default();
    let metascore = text_of(&sel.metascore);
    let cast = movie
        .select(&sel.credits)
        .map(|a| a.text().collect::<String>().trim().to_string())
        .filter(|name| !name.is_empty())
        .collect();

    Record { title, rank, year, certificate, rating, genres, metascore, cast }
}
