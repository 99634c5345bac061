//! E-Card - command line entry point.
//!
//! Loads a card page and runs one of the visitor's actions against the local
//! host: downloads land in the output directory, navigations and chat links
//! are printed to stdout.

use anyhow::Result;
use clap::{Parser, Subcommand};
use ecard::effects::{LogSurface, RecordingSurface, StyleSurface};
use ecard::{
    Config, ECard, ExportOutcome, FilePreferenceStore, HtmlPage, LocalHost, PageContext,
    VCardDialect,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Digital business card runtime
#[derive(Parser, Debug)]
#[command(name = "ecard")]
#[command(about = "Export and share the contact printed on a digital business card")]
struct Args {
    /// Card HTML page (overrides ECARD_PAGE)
    #[arg(short, long)]
    page: Option<PathBuf>,

    /// Download directory (overrides ECARD_OUTPUT_DIR)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Client user-agent string (overrides ECARD_USER_AGENT)
    #[arg(short, long)]
    user_agent: Option<String>,

    /// vCard dialect, strict or legacy (overrides ECARD_VCARD_DIALECT)
    #[arg(long)]
    dialect: Option<VCardDialect>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the contact record as JSON
    Extract,
    /// Export the contact as a vCard
    SaveContact,
    /// Open a prefilled chat with the card owner
    OpenChat,
    /// Switch between light and dark theme
    ToggleTheme,
    /// Load the page and print its style timeline
    Preview,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration
    let mut config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only, stdout carries command output)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Some(page) = args.page {
        config.page_path = page;
    }
    if let Some(output_dir) = args.output_dir {
        config.output_dir = output_dir;
    }
    if let Some(user_agent) = args.user_agent {
        config.user_agent = user_agent;
    }
    if let Some(dialect) = args.dialect {
        config.vcard_dialect = dialect;
    }

    info!("Loading card page {}", config.page_path.display());

    let (page, load_error) = match HtmlPage::load(&config.page_path) {
        Ok(page) => (page, None),
        Err(e) => (HtmlPage::default(), Some(e)),
    };
    let page = Arc::new(page);

    let recording = RecordingSurface::new();
    let surface: Arc<dyn StyleSurface> = match args.command {
        Command::Preview => Arc::new(recording.clone()),
        _ => Arc::new(LogSurface),
    };

    let context = PageContext {
        reader: page.clone(),
        layout: page,
        host: Arc::new(LocalHost::new(&config.output_dir)),
        store: Arc::new(FilePreferenceStore::new(&config.preferences_path)),
        surface,
    };
    let card = ECard::new(context, &config);

    if let Some(e) = load_error {
        card.report_init_failure(&e);
        card.settle().await;
        return Err(e.into());
    }

    let report = card.init();

    match args.command {
        Command::Extract => {
            println!("{}", serde_json::to_string_pretty(&card.contact())?);
        }
        Command::SaveContact => {
            if let ExportOutcome::Failed = card.save_contact().await {
                error!("Contact export failed");
            }
        }
        Command::OpenChat => {
            if card.open_chat().is_none() {
                error!("Opening chat failed");
            }
        }
        Command::ToggleTheme => match card.toggle_theme() {
            Some(theme) => println!("{}", serde_json::to_string(&theme)?),
            None => println!("{}", serde_json::to_string(&card.theme())?),
        },
        Command::Preview => {
            info!(
                "Page initialized: theme {:?}, {} animated elements, {} social buttons",
                report.theme, report.animated, report.social_buttons
            );
        }
    }

    card.settle().await;

    if let Command::Preview = args.command {
        for recorded in recording.changes() {
            println!("{:>6}ms  {}", recorded.at.as_millis(), recorded.change);
        }
    }

    tracing::debug!("Metrics: {:?}", card.metrics().summary());
    Ok(())
}
