//! gistline: extractive summaries, debate replies and moderation reports.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gistline::RankingDisplay;
use gistline_debate::{ConversationMessage, DebateResponder, Moderator};
use gistline_summary::{Depth, SourceDocument, Summarizer};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::{fmt, EnvFilter};

mod config;

use config::AppConfig;

#[derive(Parser)]
#[command(name = "gistline", version)]
#[command(about = "Heuristic summaries and debate moderation")]
struct Cli {
    /// TOML file with [summary] and [debate] sections
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level (overrides RUST_LOG)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Summarize a text file ("-" reads stdin) and print the result as JSON
    Summarize {
        file: PathBuf,

        /// brief, medium or detailed; anything else means medium
        #[arg(long, default_value = "medium")]
        depth: String,

        /// Use this title instead of the derived one
        #[arg(long)]
        title: Option<String>,

        /// Print the sentence ranking to stderr
        #[arg(long)]
        explain: bool,
    },

    /// Reply to one debate message
    Respond {
        #[arg(long)]
        topic: String,

        #[arg(long)]
        message: String,

        /// Seed for template choice; random when omitted
        #[arg(long)]
        seed: Option<u64>,

        /// JSON transcript the message belongs to
        #[arg(long)]
        history: Option<PathBuf>,
    },

    /// Print the moderation summary of a JSON transcript
    Moderate {
        #[arg(long)]
        topic: String,

        transcript: PathBuf,
    },
}

fn init_logging(verbose: u8) {
    let filter = if verbose > 0 {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

fn read_input(path: &Path) -> Result<Vec<u8>> {
    if path == Path::new("-") {
        let mut buf = Vec::new();
        io::stdin()
            .read_to_end(&mut buf)
            .context("failed to read stdin")?;
        return Ok(buf);
    }
    fs::read(path).with_context(|| format!("failed to read {}", path.display()))
}

fn load_transcript(path: &Path) -> Result<Vec<ConversationMessage>> {
    let bytes = read_input(path)?;
    serde_json::from_slice(&bytes)
        .with_context(|| format!("{} is not a valid transcript", path.display()))
}

fn summarize(
    config: &AppConfig,
    file: &Path,
    depth: &str,
    title: Option<String>,
    explain: bool,
) -> Result<()> {
    let bytes = read_input(file)?;
    let mut source = if file == Path::new("-") {
        SourceDocument::from_text(String::from_utf8_lossy(&bytes), None)
    } else {
        let file_name = file
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| file.display().to_string());
        SourceDocument::from_plain_text_file(&file_name, &bytes)?
    };
    if title.is_some() {
        source.title = title;
    }

    let depth = Depth::from(depth);
    let summarizer = Summarizer::with_config(config.summary.clone());
    let result = summarizer.summarize_source(&source, depth)?;

    if explain {
        let ranking = summarizer.rank(&source.content);
        let selected = config.summary.target_sentences(depth, ranking.len());
        eprintln!("{}", RankingDisplay::new(&ranking).with_selected(selected));
    }

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

fn respond(
    config: &AppConfig,
    topic: &str,
    message: &str,
    seed: Option<u64>,
    history: Option<&Path>,
) -> Result<()> {
    let history = match history {
        Some(path) => load_transcript(path)?,
        None => Vec::new(),
    };
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let reply = DebateResponder::new(&config.debate).respond(topic, message, &history, &mut rng);
    println!("{}", reply);
    Ok(())
}

fn moderate(config: &AppConfig, topic: &str, transcript: &Path) -> Result<()> {
    let history = load_transcript(transcript)?;
    let outcome = Moderator::new(&config.debate).moderate(topic, &history);
    println!("{}", outcome);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = AppConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Summarize {
            file,
            depth,
            title,
            explain,
        } => summarize(&config, &file, &depth, title, explain),
        Command::Respond {
            topic,
            message,
            seed,
            history,
        } => respond(&config, &topic, &message, seed, history.as_deref()),
        Command::Moderate { topic, transcript } => moderate(&config, &topic, &transcript),
    }
}
