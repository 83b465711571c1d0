// Command-line front-end for game lookups
//
// Runs one lookup for the title given on the command line and prints the
// chat-style reply (or JSON with --json). Logs go to stderr; RUST_LOG
// controls verbosity.

use anyhow::{Context, Result, anyhow, bail};
use kodegen_tools_gameinfo::{GameLookup, LookupConfig, render_reply};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
Usage: kodegen-gameinfo [OPTIONS] <TITLE>...

Look up a game on ErogameScape and print what was found.

Options:
      --json               Print records as a JSON array
      --base-url <URL>     Site root (default: ErogameScape statistics section)
      --concurrency <N>    Detail pages fetched at once (default: 4)
      --timeout <SECS>     Per-request timeout in seconds (default: 30)
  -h, --help               Show this help";

struct Args {
    title: String,
    json: bool,
    config: LookupConfig,
}

fn parse_args() -> Result<Option<Args>> {
    let mut builder = LookupConfig::builder();
    let mut json = false;
    let mut words = Vec::new();

    let mut args = std::env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "--json" => json = true,
            "--base-url" => {
                let v = args.next().ok_or_else(|| anyhow!("Missing value for --base-url"))?;
                builder = builder.base_url(v);
            }
            "--concurrency" => {
                let v: usize = args
                    .next()
                    .ok_or_else(|| anyhow!("Missing value for --concurrency"))?
                    .parse()
                    .context("--concurrency expects a number")?;
                builder = builder.max_concurrent_details(v);
            }
            "--timeout" => {
                let v: u64 = args
                    .next()
                    .ok_or_else(|| anyhow!("Missing value for --timeout"))?
                    .parse()
                    .context("--timeout expects a number of seconds")?;
                builder = builder.request_timeout(Duration::from_secs(v));
            }
            "-h" | "--help" => return Ok(None),
            "--" => {
                words.extend(args.by_ref());
            }
            flag if flag.starts_with("--") => bail!("Unknown option: {flag}"),
            word => words.push(word.to_string()),
        }
    }

    if words.is_empty() {
        bail!("Missing title\n\n{USAGE}");
    }

    Ok(Some(Args {
        title: words.join(" "),
        json,
        config: builder.build()?,
    }))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let Some(args) = parse_args()? else {
        println!("{USAGE}");
        return Ok(());
    };

    let lookup = GameLookup::new(args.config)?;
    let records = lookup
        .run_query(&args.title)
        .await
        .with_context(|| format!("Lookup for '{}' failed", args.title))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        println!("{}", render_reply(&records));
    }

    Ok(())
}
