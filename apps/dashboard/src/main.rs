use std::{path::PathBuf, sync::Arc};

use anyhow::Result;
use briefing_core::{
    DashboardController, GeminiConfig, GeminiProvider, LoadOutcome, LoadTicket, NewsFetcher,
};
use chrono::Local;
use clap::Parser;
use shared::Language;
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    sync::mpsc::{self, UnboundedSender},
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod render;

use commands::{parse_intent, Intent, HELP};
use config::{load_settings, DEFAULT_CONFIG_PATH};

#[derive(Parser, Debug)]
#[command(name = "robopulse", about = "AI & robotics daily briefing")]
struct Args {
    /// Display and content language (en or zh).
    #[arg(long)]
    language: Option<Language>,
    #[arg(long)]
    model: Option<String>,
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// Render the initial briefing and exit.
    #[arg(long)]
    once: bool,
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

    let mut settings = load_settings(&args.config);
    if let Some(language) = args.language {
        settings.language = language;
    }
    if let Some(model) = args.model {
        settings.model = model;
    }
    info!(
        model = %settings.model,
        language = %settings.language,
        credential = settings.api_key.is_some(),
        "starting dashboard"
    );

    let provider = GeminiProvider::new(GeminiConfig {
        api_key: settings.api_key.clone(),
        api_base_url: settings.api_base_url.clone(),
        request_timeout: settings.request_timeout(),
    })?;
    let fetcher = Arc::new(NewsFetcher::new(Arc::new(provider), settings.model.clone()));
    let mut controller = DashboardController::new(fetcher, settings.language);

    let (outcome_tx, mut outcome_rx) = mpsc::unbounded_channel();
    let initial = controller.begin_load(settings.language);
    spawn_load(&controller, &outcome_tx, initial);

    if args.once {
        if let Some(outcome) = outcome_rx.recv().await {
            controller.apply(outcome);
        }
        print_state(&controller);
        return Ok(());
    }

    print_state(&controller);
    println!("{HELP}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            Some(outcome) = outcome_rx.recv() => {
                if controller.apply(outcome) {
                    print_state(&controller);
                }
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                match parse_intent(&line) {
                    Ok(Intent::Quit) => break,
                    Ok(Intent::Help) => println!("{HELP}"),
                    Ok(Intent::Refresh) => {
                        let ticket = controller.begin_refresh();
                        spawn_load(&controller, &outcome_tx, ticket);
                        print_state(&controller);
                    }
                    Ok(Intent::ToggleLanguage) => {
                        let ticket = controller.begin_toggle_language();
                        spawn_load(&controller, &outcome_tx, ticket);
                        print_state(&controller);
                    }
                    Ok(Intent::SelectCategory(category)) => {
                        controller.select_category(category);
                        print_state(&controller);
                    }
                    Err(err) => println!("{err}"),
                }
            }
        }
    }

    Ok(())
}

fn spawn_load(
    controller: &DashboardController,
    outcome_tx: &UnboundedSender<LoadOutcome>,
    ticket: LoadTicket,
) {
    let fetcher = controller.fetcher();
    let outcome_tx = outcome_tx.clone();
    tokio::spawn(async move {
        let outcome = ticket.run(&fetcher).await;
        if outcome_tx.send(outcome).is_err() {
            debug!(
                generation = ticket.generation(),
                language = %ticket.language(),
                "dashboard closed before load finished"
            );
        }
    });
}

fn print_state(controller: &DashboardController) {
    println!(
        "\n{}\n",
        render::render(controller.state(), Local::now().date_naive())
    );
}
