//! Ticker Board CLI
//!
//! Command-line front end for the trend backend:
//! - Show the trending leaderboard
//! - Chart the top tickers plus custom ones
//! - Trigger a backend refresh
//! - Run an interactive session

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tickerboard::board::normalize_symbol;
use tickerboard::display::{render, render_leaderboard, OutputFormat};
use tickerboard::{
    BoardClient, Config, LoadedConfig, LoggingConfig, TickerBoard, TickerSource,
};

#[derive(Parser)]
#[command(name = "tickerboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Trending stock ticker mentions from Reddit")]
#[command(long_about = "Ticker Board charts how often stock tickers are mentioned on Reddit.\nData comes from a trend backend; see `tickerboard config` for settings.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Backend URL, overrides config and TICKERBOARD_API_URL
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the trending leaderboard
    Trending,

    /// Show one ticker's daily mention history
    History {
        /// Ticker symbol
        symbol: String,
    },

    /// Check whether the backend knows a ticker
    Validate {
        /// Ticker symbol
        symbol: String,
    },

    /// Chart the top trending tickers
    Chart {
        /// Extra tickers to chart
        #[arg(short, long)]
        add: Vec<String>,
        /// Tickers to leave out
        #[arg(short, long)]
        remove: Vec<String>,
    },

    /// Ask the backend to re-scrape, then chart the new leaderboard
    Refresh,

    /// Check backend health
    Status,

    /// Interactive session (add, remove, refresh, show, quit)
    Session,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Commands::Config { output } = &cli.command {
        return write_default_config(output.as_deref());
    }

    let mut loaded = match &cli.config {
        Some(path) => LoadedConfig {
            config: Config::load_with_env(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            source: Some(path.clone()),
            rejected: Vec::new(),
        },
        None => Config::load_default(),
    };
    if let Some(url) = &cli.api_url {
        loaded.config.api.base_url = url.clone();
    }

    init_logging(&loaded.config.logging);
    tracing::debug!("Ticker Board v{}", env!("CARGO_PKG_VERSION"));
    loaded.report();
    let config = loaded.config;

    let client = Arc::new(BoardClient::new(&config.api).context("creating backend client")?);
    tracing::info!("Backend: {}", client.endpoint().base_url());

    match cli.command {
        Commands::Trending => {
            let leaderboard = client.trending().await.context("fetching trending tickers")?;
            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&leaderboard)?),
                _ => print!("{}", render_leaderboard(&leaderboard)),
            }
        }

        Commands::History { symbol } => {
            let Some(symbol) = normalize_symbol(&symbol) else {
                anyhow::bail!("ticker symbol is empty");
            };
            let history = client
                .history(&symbol)
                .await
                .with_context(|| format!("fetching history for {}", symbol))?;

            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&history)?),
                OutputFormat::Csv => {
                    println!("date,mentions");
                    for point in &history.history {
                        println!("{},{}", point.date, point.mentions);
                    }
                }
                OutputFormat::Table => {
                    println!("{:<12} {:>8}", "Date", history.ticker);
                    println!("{}", "-".repeat(21));
                    for point in &history.history {
                        println!("{:<12} {:>8}", point.date.to_string(), point.mentions);
                    }
                }
            }
        }

        Commands::Validate { symbol } => {
            let Some(symbol) = normalize_symbol(&symbol) else {
                anyhow::bail!("ticker symbol is empty");
            };
            let response = client
                .validate(&symbol)
                .await
                .context("validating ticker")?;

            if response.valid {
                println!("Valid ticker: {}", response.ticker.unwrap_or(symbol));
            } else {
                eprintln!("Invalid ticker: {}", symbol);
                std::process::exit(1);
            }
        }

        Commands::Chart { add, remove } => {
            let mut board = TickerBoard::new(client, &config.board);
            let mut failed = board.load_leaderboard().await.is_err();

            for symbol in &add {
                failed |= board.add_ticker(symbol).await.is_err();
            }
            for symbol in &remove {
                failed |= board.remove_ticker(symbol).await.is_err();
            }

            print!("{}", render(&board.snapshot(), cli.format)?);
            if failed {
                std::process::exit(1);
            }
        }

        Commands::Refresh => {
            let mut board = TickerBoard::new(client, &config.board);
            let failed = board.refresh_all().await.is_err();

            print!("{}", render(&board.snapshot(), cli.format)?);
            if failed {
                std::process::exit(1);
            }
        }

        Commands::Status => match client.health_check().await {
            Ok(status) => {
                println!("Ticker Board v{}", env!("CARGO_PKG_VERSION"));
                println!();
                println!("Backend: {}", client.endpoint().base_url());
                println!("Status:  {}", status);
            }
            Err(e) => {
                eprintln!(
                    "Cannot reach trend backend at {}",
                    client.endpoint().base_url()
                );
                eprintln!("Error: {}", e);
                eprintln!();
                eprintln!("Set the backend URL with --api-url or TICKERBOARD_API_URL");
                std::process::exit(1);
            }
        },

        Commands::Session => {
            let board = TickerBoard::new(client, &config.board);
            run_session(board, cli.format).await?;
        }

        Commands::Config { .. } => unreachable!("handled before config load"),
    }

    Ok(())
}

fn init_logging(config: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("tickerboard={}", config.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if config.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn write_default_config(output: Option<&std::path::Path>) -> anyhow::Result<()> {
    let config = tickerboard::config::generate_default_config();

    match output {
        Some(path) => {
            // Create parent directory if needed
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, &config)?;
            println!("Config written to {:?}", path);
        }
        None => {
            print!("{}", config);
        }
    }
    Ok(())
}

const SESSION_HELP: &str = "\
Commands:
  add <SYMBOL>     track a ticker
  remove <SYMBOL>  stop tracking a ticker
  refresh          re-scrape on the backend and reload
  reload           reload the leaderboard
  show             print the board again
  help             this message
  quit             leave the session";

/// Read commands from stdin and apply them to the board
async fn run_session(
    mut board: TickerBoard<BoardClient>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    board.load_leaderboard().await.ok();
    print!("{}", render(&board.snapshot(), format)?);
    println!("\nType `help` for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            continue;
        };
        let argument = parts.next().unwrap_or_default();

        // Failures are already recorded on the board and shown below
        match command.to_lowercase().as_str() {
            "add" | "a" => {
                board.add_ticker(argument).await.ok();
            }
            "remove" | "rm" | "r" => {
                board.remove_ticker(argument).await.ok();
            }
            "refresh" => {
                board.refresh_all().await.ok();
            }
            "reload" => {
                board.load_leaderboard().await.ok();
            }
            "show" => {}
            "help" | "?" => {
                println!("{}", SESSION_HELP);
                continue;
            }
            "quit" | "exit" | "q" => break,
            other => {
                println!("Unknown command: {} (try `help`)", other);
                continue;
            }
        }

        print!("{}", render(&board.snapshot(), format)?);
    }

    Ok(())
}
