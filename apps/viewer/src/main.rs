use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use roster_core::{failure_message, render_error, App, DataService, DataServiceConfig, Document};
use tracing::error;
use tracing_subscriber::EnvFilter;

mod config;

use config::load_settings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Html,
    Text,
}

#[derive(Parser, Debug)]
#[command(about = "Load the student roster and render it as a document")]
struct Args {
    /// Base URL the document path is resolved against.
    #[arg(long)]
    base_url: Option<String>,
    #[arg(long)]
    document_path: Option<String>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Write the rendered document here instead of stdout.
    #[arg(long)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let settings = load_settings().with_overrides(args.base_url, args.document_path);
    let config = DataServiceConfig::new(settings.base_url)
        .with_document_path(settings.document_path);

    let mut document = Document::new();
    match DataService::global(&config) {
        Ok(service) => {
            let mut app = App::new(service);
            app.init(&mut document).await;
        }
        Err(err) => {
            error!(error = %err, "could not configure data service");
            render_error(&failure_message(&err), &mut document);
        }
    }

    let rendered = match args.format {
        OutputFormat::Html => document.to_html(),
        OutputFormat::Text => document.to_text(),
    };

    match args.output {
        Some(path) => fs::write(&path, rendered).with_context(|| {
            format!("failed to write rendered document to '{}'", path.display())
        })?,
        None => print!("{rendered}"),
    }

    Ok(())
}
