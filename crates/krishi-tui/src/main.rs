use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use krishi_core::{Config, Language, Section};
use tracing::{info, warn};

mod app;
mod cli;
mod handler;
mod logging;
mod tui;
mod ui;

use app::App;

#[derive(Parser)]
#[command(name = "krishi")]
#[command(version)]
#[command(about = "Krishi Jyoti: MSP rates, schemes, crop health and voice help for farmers")]
struct Cli {
    /// Interface language (en, hi, te, ta, ml). Overrides the saved setting.
    #[arg(short, long, global = true)]
    lang: Option<String>,

    /// Section to open in the TUI (dashboard, schemes, loans, subsidies, climate, disease-detection, support)
    #[arg(short, long)]
    section: Option<String>,

    /// Print JSON instead of formatted text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show Minimum Support Prices
    Msp {
        /// Only show crops starting with this name
        #[arg(short, long)]
        crop: Option<String>,
    },
    /// Show government loan schemes
    Loans {
        /// crop, equipment, infrastructure or emergency
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Show agricultural subsidies and their deadlines
    Subsidies,
    /// Show weather, alerts and crop recommendations
    Climate,
    /// Ask the schemes assistant a question
    Ask {
        /// Your question
        question: Vec<String>,
    },
    /// Run disease detection on a plant photo
    Scan {
        /// Path to an image file
        image: PathBuf,
    },
    /// List supported languages, or save the interface language
    Languages {
        /// Language code to save as the default
        #[arg(long)]
        set: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.command.is_some() {
        logging::init_stderr()?;
    } else if let Some(path) = logging::init_file()? {
        info!(path = %path.display(), "logging to file");
    }

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            warn!(error = %e, "could not load config, using defaults");
            Config::new()
        }
    };

    let language = match cli.lang.as_deref() {
        Some(code) => Language::from_code(code).unwrap_or_else(|| {
            warn!(code, "unknown language code, falling back to English");
            Language::En
        }),
        None => config.language(),
    };

    match cli.command {
        None => {
            let section = match cli.section.as_deref() {
                Some(slug) => Section::from_slug(slug).unwrap_or_else(|| {
                    warn!(slug, "unknown section, opening the dashboard");
                    Section::Dashboard
                }),
                None => Section::Dashboard,
            };
            run_tui(&config, language, section).await
        }
        Some(Commands::Msp { crop }) => cli::list_msp(crop.as_deref(), cli.json),
        Some(Commands::Loans { category }) => cli::list_loans(category.as_deref(), cli.json),
        Some(Commands::Subsidies) => cli::list_subsidies(cli.json),
        Some(Commands::Climate) => cli::show_climate(&config, cli.json),
        Some(Commands::Ask { question }) => cli::ask(&config, &question.join(" "), language).await,
        Some(Commands::Scan { image }) => cli::scan(&config, &image, cli.json).await,
        Some(Commands::Languages { set }) => cli::languages(set.as_deref()),
    }
}

async fn run_tui(config: &Config, language: Language, section: Section) -> Result<()> {
    tui::install_panic_hook();
    let mut terminal = tui::init()?;
    let mut events = tui::EventHandler::new();

    let config_path = Config::get_config_path().ok();
    let mut app = App::new(config, language, config_path);
    app.open_section(section);
    info!(language = language.as_str(), "session started");

    let result = run_loop(&mut terminal, &mut events, &mut app).await;

    tui::restore()?;
    result
}

async fn run_loop(
    terminal: &mut tui::Tui,
    events: &mut tui::EventHandler,
    app: &mut App,
) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| ui::render(app, frame))?;

        let Some(event) = events.next().await else {
            break;
        };
        handler::handle_event(app, event).await?;
        app.poll_tasks().await;
    }
    info!("session ended");
    Ok(())
}
