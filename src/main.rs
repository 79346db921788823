use std::path::PathBuf;

use chrono::Utc;
use clap::{Parser, Subcommand};
use quick_translate_lib::build_session;
use quick_translate_lib::core::translator::languages::all_languages;
use quick_translate_lib::shared::settings::AppSettings;
use quick_translate_lib::shared::time::format_relative_time;

#[derive(Parser)]
#[command(name = "quick-translate", version, about = "Translate text and keep a short history")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to settings file.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate text and record it in history.
    Translate {
        /// Source language code, or "auto".
        #[arg(short, long)]
        from: Option<String>,
        /// Target language code.
        #[arg(short, long)]
        to: Option<String>,
        /// The text to translate.
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Show recent translations, newest first.
    History,
    /// Forget all recent translations.
    Clear,
    /// List supported languages.
    Languages,
    /// Report the language of a text.
    Detect {
        #[arg(required = true)]
        text: Vec<String>,
    },
}

async fn load_settings(path: Option<&PathBuf>) -> AppSettings {
    let loaded = match path {
        Some(path) => AppSettings::load_from(path).await,
        None => AppSettings::load().await,
    };
    loaded.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "failed to load settings, using defaults");
        AppSettings::default()
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let settings = load_settings(cli.config.as_ref()).await;

    match cli.command {
        Commands::Translate { from, to, text } => {
            let mut session = build_session(&settings)?;
            if let Some(from) = from {
                session.source = from;
            }
            if let Some(to) = to {
                session.target = to;
            }
            session.input = text.join(" ");

            let record = session.translate().await?;
            println!("{}", record.translated_text);
        }
        Commands::History => {
            let session = build_session(&settings)?;
            let now = Utc::now();
            if session.history().is_empty() {
                println!("No recent translations");
            } else {
                println!("Recent Translations ({})", session.history().len());
            }
            for record in session.history() {
                println!(
                    "[{}] {} -> {} ({})\n  {}\n  {}",
                    format_relative_time(record.timestamp, now),
                    record.source_language.name,
                    record.target_language.name,
                    record.id,
                    record.source_text,
                    record.translated_text,
                );
            }
        }
        Commands::Clear => {
            let mut session = build_session(&settings)?;
            session.clear_history();
            println!("History cleared");
        }
        Commands::Languages => {
            for lang in all_languages() {
                println!("{:<6} {}", lang.code, lang.name);
            }
        }
        Commands::Detect { text } => {
            let mut session = build_session(&settings)?;
            session.input = text.join(" ");
            println!("{}", session.detect_language().await?);
        }
    }

    Ok(())
}
