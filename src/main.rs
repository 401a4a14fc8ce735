//! tagsmith is a CLI tool that collects a webpage's metadata into a saved
//! form, optionally reads the live page's current tags through a public
//! CORS-bypass proxy, and asks an LLM for an SEO report on them.
//!
//! The tool has five commands:
//! 1. `set` - Update saved form fields
//! 2. `show` - Print the saved form and the results panel
//! 3. `fetch` - Fill title/description from the live page
//! 4. `analyze` - Request the SEO report from the model
//! 5. `reset` - Clear the form and its saved copy

use std::fs;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Builder;
use log::{LevelFilter, info};
use url::Url;

use tagsmith::analyze::{AnalysisConfig, run_analysis};
use tagsmith::constants::{DEFAULT_MODEL, DEFAULT_PROXY, DEFAULT_STATE_PATH};
use tagsmith::fetch::MetaFetcher;
use tagsmith::form::{FormPatch, FormStore};
use tagsmith::render;
use tagsmith::session::Session;
use tagsmith::storage::SqliteStore;

/// A CLI tool to analyze and optimize webpage meta tags with an LLM
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// The command to execute
    #[command(subcommand)]
    command: Command,

    /// Path to the database file holding the saved form
    #[arg(long, short, global = true, default_value = DEFAULT_STATE_PATH)]
    state: String,

    /// Backend URL of the model, e.g. google://gemini-2.5-flash
    #[arg(long, short, global = true, default_value = DEFAULT_MODEL)]
    model: String,

    #[arg(long, short, action = clap::ArgAction::Count, help = "Output v(v...)erbosity: error (0), warn (1), info (2), debug (3), trace (4)", global = true, default_value_t = 2)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Command {
    /// Update saved form fields; omitted fields keep their value
    Set {
        /// URL of the page under analysis
        #[arg(long)]
        url: Option<String>,
        /// Current meta title
        #[arg(long)]
        title: Option<String>,
        /// Current meta description
        #[arg(long)]
        description: Option<String>,
        /// Target keywords, comma separated
        #[arg(long)]
        keywords: Option<String>,
        /// Industry or business type
        #[arg(long)]
        industry: Option<String>,
    },
    /// Print the saved form and the results panel
    Show,
    /// Fill title/description from the live page through the CORS proxy
    Fetch {
        /// Proxy endpoint returning the raw body of its `url` query parameter
        #[arg(long, default_value = DEFAULT_PROXY)]
        proxy: String,
    },
    /// Ask the model for an SEO report on the saved form
    Analyze {
        /// Write the raw Markdown report to this file instead of the terminal
        #[arg(long, short)]
        output: Option<String>,
    },
    /// Clear the form, notices, report and the saved copy
    Reset,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Error,
            1 => LevelFilter::Warn,
            2 => LevelFilter::Info,
            3 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .init();

    // The credential is validated once at startup; a missing key is fatal
    // for every command.
    let config = AnalysisConfig::from_env(&cli.model)?;

    let store = SqliteStore::open(&cli.state)
        .context(format!("Failed to open state database: {}", cli.state))?;
    let mut session = Session::new(FormStore::open(store));

    match cli.command {
        Command::Set {
            url,
            title,
            description,
            keywords,
            industry,
        } => {
            let patch = FormPatch {
                url,
                current_title: title,
                current_description: description,
                keywords,
                industry,
            };
            if !patch.is_empty() {
                session.edit_form(patch);
            }
            print!("{}", render::form_summary(session.form()));
            Ok(())
        }
        Command::Show => {
            print!("{}", render::form_summary(session.form()));
            println!();
            print!("{}", render::report_panel(&session.view()));
            Ok(())
        }
        Command::Fetch { proxy } => handle_fetch(&mut session, &proxy).await,
        Command::Analyze { output } => handle_analyze(&mut session, &config, output).await,
        Command::Reset => {
            session.reset();
            info!("Cleared form and saved data");
            Ok(())
        }
    }
}

async fn handle_fetch(session: &mut Session<SqliteStore>, proxy: &str) -> Result<()> {
    let proxy_url =
        Url::parse(proxy).map_err(|err| anyhow::anyhow!("Invalid proxy url: {err}"))?;

    let Some(ticket) = session.begin_fetch() else {
        if let Some(notice) = session.fetch_notice() {
            eprint!("{}", render::fetch_notice_line(notice.message()));
        }
        return Ok(());
    };

    let fetcher = MetaFetcher::new(proxy_url);
    let url = session.form().url.clone();
    let outcome = fetcher.fetch_meta(&url).await;
    session.complete_fetch(ticket, outcome);

    if let Some(notice) = session.fetch_notice() {
        eprint!("{}", render::fetch_notice_line(notice.message()));
    }
    print!("{}", render::form_summary(session.form()));
    Ok(())
}

async fn handle_analyze(
    session: &mut Session<SqliteStore>,
    config: &AnalysisConfig,
    output: Option<String>,
) -> Result<()> {
    let provider = config.build_provider()?;

    let Some(ticket) = session.begin_analysis() else {
        anyhow::bail!("An analysis is already running.");
    };

    info!("Generating analysis...");
    let outcome = run_analysis(session.form(), provider.as_ref()).await;
    session.complete_analysis(ticket, outcome);

    if let Some(message) = session.analysis_error() {
        anyhow::bail!("{message}");
    }

    if let (Some(report), Some(path)) = (session.report(), output.as_deref()) {
        fs::write(path, report).context(format!("Failed to write report to {path}"))?;
        info!("Wrote analysis report to {path}");
        return Ok(());
    }

    print!("{}", render::report_panel(&session.view()));
    Ok(())
}
