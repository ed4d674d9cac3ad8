use std::fs;
use std::io;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Instant;

use anyhow::Context;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use newsnex_core::{
    CsvConfig, DedupPolicy, Extraction, FetchConfig, JsonConfig, Profiler, ProfilerConfig, TextConfig,
    convert_to_csv, convert_to_json, convert_to_text, fetch_file, fetch_stdin, fetch_url, validate_url,
};
use owo_colors::OwoColorize;
use tracing::debug;

mod echo;
mod logging;

use echo::*;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const STEPS: usize = 4;

/// Output format for extracted profiles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            _ => Err(format!("Invalid format: {}. Valid options: text, json, csv", s)),
        }
    }
}

/// Which duplicate survives when a name is mentioned more than once
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DedupArg(DedupPolicy);

impl FromStr for DedupArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "first-seen" | "first" => Ok(Self(DedupPolicy::FirstSeen)),
            "highest-confidence" | "highest" => Ok(Self(DedupPolicy::HighestConfidence)),
            _ => Err(format!("Invalid dedup policy: {}. Valid options: first-seen, highest-confidence", s)),
        }
    }
}

/// Where the HTML comes from
#[derive(Debug, Clone, PartialEq, Eq)]
enum Source {
    Stdin,
    Url(String),
    File(String),
}

impl Source {
    fn classify(input: &str) -> anyhow::Result<Self> {
        if input == "-" {
            return Ok(Self::Stdin);
        }

        if looks_like_url(input) {
            let url = validate_url(input).context("Please enter a valid URL (http:// or https://)")?;
            return Ok(Self::Url(url.to_string()));
        }

        Ok(Self::File(input.to_string()))
    }
}

fn looks_like_url(input: &str) -> bool {
    let lower = input.trim().to_ascii_lowercase();
    lower.contains("://") || lower.starts_with("www.")
}

/// Extract people, roles, organizations and quotes from news articles
#[derive(Parser, Debug)]
#[command(name = "newsnex")]
#[command(author = "NewsNex Contributors")]
#[command(version)]
#[command(about = "Extract people, roles, organizations and quotes from news articles", long_about = None)]
struct Args {
    /// URL to fetch, local HTML file, or "-" for stdin
    #[arg(value_name = "INPUT", required_unless_present = "completions")]
    input: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Output format (text, json, csv)
    #[arg(short, long, default_value = "text", value_name = "FORMAT")]
    format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// HTTP timeout in seconds
    #[arg(long, default_value = "10", value_name = "SECS")]
    timeout: u64,

    /// Custom User-Agent for HTTP requests
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,

    /// Duplicate resolution (first-seen, highest-confidence)
    #[arg(long, default_value = "first-seen", value_name = "POLICY")]
    dedup: DedupArg,

    /// Drop profiles below this confidence (0-100)
    #[arg(long, default_value = "0", value_name = "NUM", value_parser = clap::value_parser!(u8).range(0..=100))]
    min_confidence: u8,

    /// Print the located article text instead of profiles
    #[arg(long)]
    content: bool,

    /// Show progress and enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_name = "SHELL")]
    completions: Option<Shell>,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Some(shell) = args.completions {
        clap_complete::generate(shell, &mut Args::command(), "newsnex", &mut io::stdout());
        return;
    }

    if let Err(e) = run(&args).await {
        print_error(&format!("{e:#}"));
        std::process::exit(1);
    }
}

async fn run(args: &Args) -> anyhow::Result<()> {
    logging::init(args.verbose)?;

    if args.verbose {
        print_banner();
        print_info("Debug logging enabled");
        eprintln!();
    }

    let input = args.input.as_deref().context("No input given")?;
    let source = Source::classify(input)?;
    debug!(?source, "resolved input");

    let fetch_config = FetchConfig {
        timeout: args.timeout,
        user_agent: args.user_agent.clone().unwrap_or_else(|| FetchConfig::default().user_agent),
    };

    let started = Instant::now();

    let html = match &source {
        Source::Stdin => {
            if args.verbose {
                print_step(1, STEPS, "Reading from stdin");
            }
            fetch_stdin().context("Failed to read from stdin")?
        }
        Source::Url(url) => {
            if args.verbose {
                print_step(1, STEPS, &format!("Fetching from {}", url.bright_white().underline()));
            }
            fetch_url(url, &fetch_config).await.with_context(|| format!("Failed to fetch URL: {url}"))?
        }
        Source::File(path) => {
            if args.verbose {
                print_step(1, STEPS, &format!("Reading from file {}", path.bright_white()));
            }
            fetch_file(path).with_context(|| format!("Failed to read file: {path}"))?
        }
    };

    let read_time = started.elapsed();

    if args.verbose {
        print_detail("Size", &format_size(html.len()));
        eprintln!();
        print_step(2, STEPS, "Locating article content");
    }

    let config = ProfilerConfig::builder()
        .dedup(args.dedup.0)
        .min_confidence(args.min_confidence)
        .build();
    let profiler = Profiler::with_config(config).context("Failed to configure profiler")?;

    let profile_started = Instant::now();
    let source_url = match &source {
        Source::Url(url) => Some(url.as_str()),
        _ => None,
    };
    let extraction = profiler.profile_html(&html, source_url);
    let profile_time = profile_started.elapsed();

    if args.verbose {
        if let Some(title) = &extraction.title {
            print_detail("Title", title);
        }
        print_step(3, STEPS, "Extracting profiles");
        print_extraction_details(&extraction);
    }

    let output = render(&extraction, args)?;

    if args.verbose {
        print_step(4, STEPS, "Writing output");
        print_detail("Format", &format!("{:?}", args.format));
        eprintln!();
        print_timing_summary(started.elapsed(), &[("Read", read_time), ("Profile", profile_time)]);
    }

    match &args.output {
        Some(path) => {
            fs::write(path, &output).with_context(|| format!("Failed to write to file: {}", path.display()))?;
            print_success(&format!("Output written to {}", path.display().bright_white()));
        }
        None => {
            if output.is_empty() || output.ends_with('\n') {
                print!("{}", output);
            } else {
                println!("{}", output);
            }
        }
    }

    if args.content {
        if extraction.content.is_empty() {
            print_warning("No article content found");
        }
    } else if extraction.profiles.is_empty() {
        print_warning("No profiles found in the article");
    } else {
        let count = extraction.profiles.len();
        print_success(&format!("Found {} profile{}", count, if count == 1 { "" } else { "s" }));
    }

    Ok(())
}

/// Format the extraction for the chosen output
fn render(extraction: &Extraction, args: &Args) -> anyhow::Result<String> {
    if args.content {
        return Ok(extraction.content.clone());
    }

    let profiles = &extraction.profiles;
    Ok(match args.format {
        OutputFormat::Text => convert_to_text(profiles, &TextConfig::default()),
        OutputFormat::Json => {
            convert_to_json(profiles, &JsonConfig { pretty: args.pretty }).context("Failed to convert to JSON")?
        }
        OutputFormat::Csv => convert_to_csv(profiles, &CsvConfig::default()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_parse() {
        assert_eq!("TXT".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert_eq!("csv".parse::<OutputFormat>(), Ok(OutputFormat::Csv));
        assert!("markdown".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_dedup_arg_parse() {
        assert_eq!("first-seen".parse::<DedupArg>(), Ok(DedupArg(DedupPolicy::FirstSeen)));
        assert_eq!("highest-confidence".parse::<DedupArg>(), Ok(DedupArg(DedupPolicy::HighestConfidence)));
        assert!("latest".parse::<DedupArg>().is_err());
    }

    #[test]
    fn test_classify_source() {
        assert_eq!(Source::classify("-").unwrap(), Source::Stdin);
        assert_eq!(Source::classify("article.html").unwrap(), Source::File("article.html".to_string()));
        assert_eq!(
            Source::classify("https://example.com/story").unwrap(),
            Source::Url("https://example.com/story".to_string())
        );
        assert!(Source::classify("ftp://example.com/story").is_err());
        assert!(Source::classify("www.example.com/story").is_err());
    }

    #[test]
    fn test_args_definition() {
        Args::command().debug_assert();
    }
}
