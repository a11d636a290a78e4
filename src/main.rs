// Main entry point
use clap::Parser;
use colored::Colorize;
use pdftr::application::input::SelectedFile;
use pdftr::application::wiring::{
    FileChangeEvent, LanguageDefaults, Outcome, PdfTranslatorApp, UrlSubmitEvent,
};
use pdftr::domain::model::TranslateOptions;
use pdftr::domain::traits::TabOpener;
use pdftr::infrastructure::config::{self, load_config};
use pdftr::infrastructure::logging::init_logging;
use pdftr::interfaces::cli::Cli;
use pdftr::interfaces::shutdown::{until_interrupted, INTERRUPTED_EXIT_CODE};
use pdftr::presentation::display::BlobStore;
use pdftr::presentation::opener::{EchoOpener, SaveOpener, SystemOpener};
use pdftr::presentation::terminal::TerminalView;
use pdftr::presentation::view_model::{UiState, ViewModel};
use pdftr::state::AppState;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Setup graceful shutdown handler
    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            eprintln!("Failed to listen for shutdown signal: {}", e);
        } else {
            eprintln!("\nInterrupted, shutting down...");
            let _ = shutdown_tx.send(());
        }
    });

    let cli = Cli::parse();
    let mut config = load_config()?;
    if let Some(base_url) = &cli.base_url {
        config.base_url = base_url.clone();
    }

    if config.logging.enable {
        init_logging(&config.logging)?;
    }

    if cli.generate_config {
        config::generate_config_sample()?;
        return Ok(());
    }
    if cli.edit_config {
        if let Some(config_path) = config::get_config_path() {
            let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());
            tokio::task::spawn_blocking(move || {
                std::process::Command::new(editor).arg(&config_path).status()
            })
            .await??;
        } else {
            eprintln!("{}", "Config file not found".red());
        }
        return Ok(());
    }

    let state = AppState::new(config)?;

    if cli.status {
        print_status(&state, cli.json).await?;
        return Ok(());
    }
    if cli.languages {
        print_languages(&state, cli.json).await?;
        return Ok(());
    }

    let Some(input) = cli.input.clone() else {
        eprintln!("{}", "Please provide a PDF file or URL".red());
        std::process::exit(1);
    };

    let options = cli.translate_options(&state.config)?;
    let app = build_app(&cli, &state, options);

    if !app.init().await {
        eprintln!(
            "{}",
            format!("Could not load languages from {}", state.service.base_url()).red()
        );
        std::process::exit(1);
    }
    let (from, to) = cli.select_languages(app.view())?;
    tracing::debug!("Translating {} -> {}", from, to);

    let Some(outcome) = until_interrupted(dispatch(&app, &cli, &input), shutdown_rx).await else {
        eprintln!("{}", "Translation interrupted".red());
        std::process::exit(INTERRUPTED_EXIT_CODE);
    };

    match outcome {
        Outcome::Displayed(url) => {
            tracing::debug!("Translated PDF available at {}", url);
            Ok(())
        }
        Outcome::Ignored => {
            eprintln!("{}", format!("Not a PDF: {}", input).red());
            std::process::exit(1);
        }
        Outcome::Failed(_) => std::process::exit(1),
    }
}

fn build_app(cli: &Cli, state: &AppState, options: TranslateOptions) -> PdfTranslatorApp {
    let config = &state.config;
    let opener: Arc<dyn TabOpener> = match (&cli.output, cli.no_open) {
        (Some(path), _) => Arc::new(SaveOpener::new(path.clone())),
        (None, true) => Arc::new(EchoOpener),
        (None, false) => Arc::new(SystemOpener::new(config.open_command.clone())),
    };
    let view = ViewModel::new(
        UiState::full(),
        Arc::new(TerminalView::new()),
        config.error_display(),
    );
    let service = Arc::new(state.service.clone());

    PdfTranslatorApp::new(
        view,
        service.clone(),
        service,
        opener,
        BlobStore::new(config.blob_dir()),
    )
    .with_defaults(LanguageDefaults {
        from: config.default_from_lang.clone(),
        to: config.default_to_lang.clone(),
    })
    .with_options(options)
}

async fn dispatch(app: &PdfTranslatorApp, cli: &Cli, input: &str) -> Outcome {
    if cli.input_is_url() {
        app.view()
            .update(|state| state.url_input = Some(input.to_string()));
        app.handle_url_submit(&mut UrlSubmitEvent::new()).await
    } else {
        let event = FileChangeEvent {
            files: vec![SelectedFile::from_path(input)],
        };
        app.handle_file_change(event).await
    }
}

async fn print_languages(state: &AppState, json: bool) -> anyhow::Result<()> {
    let languages = state.service.get_supported_languages().await?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({ "languages": languages }))?
        );
    } else {
        for lang in &languages {
            println!("{}", lang);
        }
    }
    Ok(())
}

async fn print_status(state: &AppState, json: bool) -> anyhow::Result<()> {
    let info = state.service.service_info().await;
    let health = state.service.health().await;

    if json {
        let value = serde_json::json!({
            "base_url": state.service.base_url(),
            "version": info.as_ref().ok().map(|i| i.version.clone()),
            "healthy": health.as_ref().map(|h| h.is_healthy()).unwrap_or(false),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("{}", "pdftr Status".green().bold());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!(
        "Config: {}",
        config::get_config_path()
            .filter(|p| p.exists())
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "Not found (using defaults)".to_string())
    );
    println!("Service: {}", state.service.base_url());

    match info {
        Ok(info) => println!("Version: {} ({})", info.version, info.message),
        Err(e) => println!("Version: {}", e.to_string().red()),
    }
    match health {
        Ok(h) if h.is_healthy() => println!("Health: {}", "healthy".green()),
        Ok(h) => println!("Health: {}", h.status.yellow()),
        Err(e) => println!("Health: {}", e.to_string().red()),
    }

    Ok(())
}
