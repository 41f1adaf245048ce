use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use transport_cli::domain::Connection;
use transport_cli::opendata::{
    DEFAULT_BASE_URL, OpendataClient, OpendataConfig, OpendataError, read_response_file,
};
use transport_cli::render::{BANNER, Report, Style};

/// Look up public transport connections between two stops
#[derive(Debug, Parser)]
#[command(name = "transport", version, about, long_about = None)]
struct Cli {
    /// Origin stop name, e.g. "Bern"
    from: String,

    /// Destination stop name, e.g. "Zürich HB"
    to: String,

    /// Maximum number of connections to show (1-16)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=16))]
    limit: Option<u8>,

    /// One line per connection instead of a timeline
    #[arg(short, long)]
    simple: bool,

    /// Do not print the welcome banner
    #[arg(long)]
    no_banner: bool,

    /// API base URL
    #[arg(long, env = "TRANSPORT_API_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    /// Read a saved API response instead of querying the API
    #[arg(long, value_name = "PATH")]
    response_file: Option<PathBuf>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn log_filter_from_verbosity(verbose: u8) -> String {
    std::env::var("RUST_LOG").unwrap_or_else(|_| filter_for_verbosity(verbose).to_string())
}

fn filter_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "transport_cli=info,transport=info",
        _ => "transport_cli=debug,transport=debug",
    }
}

async fn fetch(cli: &Cli) -> Result<Vec<Connection>, OpendataError> {
    if let Some(path) = &cli.response_file {
        return read_response_file(path).await;
    }

    let config = OpendataConfig::new()
        .with_base_url(&cli.base_url)
        .with_timeout(cli.timeout)
        .with_limit(cli.limit);
    let client = OpendataClient::new(config)?;

    client.connections(&cli.from, &cli.to).await
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(log_filter_from_verbosity(
            cli.verbose,
        )))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if !cli.no_banner {
        println!("{BANNER}");
    }

    let connections = match fetch(&cli).await {
        Ok(connections) => connections,
        Err(e) => {
            if let OpendataError::Decode(decode) = &e {
                error!(body = decode.body_excerpt(), "undecodable response");
            }
            eprintln!("Error fetching connections: {e}");
            return ExitCode::FAILURE;
        }
    };

    let style = if cli.simple {
        Style::Simple
    } else {
        Style::Timeline
    };
    print!("{}", Report::new(&connections, style));

    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_requires_both_stops() {
        assert!(Cli::try_parse_from(["transport"]).is_err());
        assert!(Cli::try_parse_from(["transport", "Bern"]).is_err());
    }

    #[test]
    fn cli_defaults() {
        let cli = Cli::try_parse_from(["transport", "Bern", "Zürich HB"]).unwrap();
        assert_eq!(cli.from, "Bern");
        assert_eq!(cli.to, "Zürich HB");
        assert_eq!(cli.timeout, 30);
        assert!(cli.limit.is_none());
        assert!(!cli.simple);
        assert!(cli.response_file.is_none());
    }

    #[test]
    fn cli_options() {
        let cli = Cli::try_parse_from([
            "transport",
            "Bern",
            "Thun",
            "--limit",
            "2",
            "--simple",
            "--no-banner",
            "--base-url",
            "http://localhost:1234/v1",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.limit, Some(2));
        assert!(cli.simple);
        assert!(cli.no_banner);
        assert_eq!(cli.base_url, "http://localhost:1234/v1");
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn limit_must_be_in_range() {
        assert!(Cli::try_parse_from(["transport", "Bern", "Thun", "--limit", "0"]).is_err());
        assert!(Cli::try_parse_from(["transport", "Bern", "Thun", "--limit", "17"]).is_err());
        assert!(Cli::try_parse_from(["transport", "Bern", "Thun", "--limit", "255"]).is_err());

        let cli = Cli::try_parse_from(["transport", "Bern", "Thun", "--limit", "16"]).unwrap();
        assert_eq!(cli.limit, Some(16));
        let cli = Cli::try_parse_from(["transport", "Bern", "Thun", "-l", "1"]).unwrap();
        assert_eq!(cli.limit, Some(1));
    }

    #[test]
    fn verbosity_filters() {
        assert_eq!(filter_for_verbosity(0), "warn");
        assert_eq!(filter_for_verbosity(1), "transport_cli=info,transport=info");
        assert_eq!(filter_for_verbosity(2), "transport_cli=debug,transport=debug");
        assert_eq!(filter_for_verbosity(5), "transport_cli=debug,transport=debug");
    }
}
