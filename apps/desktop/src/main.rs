use std::{io::Write, sync::Arc};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use client_core::{
    config::{load_settings, normalize_server_url},
    CatalogState, CatalogStateStore, FormInputModel, HttpCatalogClient, StoreEvent,
};
use shared::domain::MovieId;
use tokio::sync::broadcast::{self, error::RecvError};
use tracing_subscriber::EnvFilter;

mod render;

#[derive(Parser, Debug)]
#[command(name = "movie-catalog", about = "Browse and edit a remote movie catalog")]
struct Args {
    /// Overrides `client.toml` and the environment.
    #[arg(long)]
    server_url: Option<String>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show every movie in the catalog.
    List,
    /// Add a movie and show the updated catalog.
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        year: String,
        #[arg(long)]
        genre: String,
        #[arg(long)]
        rating: String,
    },
    /// Delete a movie by id and show the updated catalog.
    Delete {
        #[arg(long)]
        id: i64,
    },
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

    let mut settings = load_settings().context("failed to load client settings")?;
    if let Some(url) = args.server_url.as_deref() {
        settings.server_url = normalize_server_url(url)?;
    }
    let client = HttpCatalogClient::new(settings.server_url.clone());
    tracing::debug!(server_url = client.server_url(), "using catalog service");

    let store = CatalogStateStore::new(Arc::new(client));
    let notices = tokio::spawn(print_notices(store.subscribe()));

    let mut stdout = std::io::stdout();
    let outcome = run(&store, args.command.unwrap_or(Command::List), &mut stdout).await;

    drop(store);
    let _ = notices.await;
    outcome
}

/// Loads the catalog, applies the command and always prints the resulting catalog.
async fn run(
    store: &Arc<CatalogStateStore>,
    command: Command,
    out: &mut impl Write,
) -> Result<()> {
    let state = store.load().await;
    if let CatalogState::Failed(message) = &state {
        writeln!(out, "{}", render::render_state(&state))?;
        bail!("could not load catalog: {message}");
    }

    let action = match command {
        Command::List => Ok(()),
        Command::Add {
            title,
            year,
            genre,
            rating,
        } => {
            let mut form = FormInputModel::new();
            form.set_title(title);
            form.set_year_input(&year);
            form.set_genre(genre);
            form.set_rating_input(&rating);
            match store.submit(&mut form).await {
                Ok(record) => {
                    writeln!(out, "Added movie {} (id {})", record.title, record.id)?;
                    Ok(())
                }
                Err(err) => Err(err),
            }
        }
        Command::Delete { id } => match store.delete(MovieId(id)).await {
            Ok(()) => {
                writeln!(out, "Deleted movie {id}")?;
                Ok(())
            }
            Err(err) => Err(err),
        },
    };

    writeln!(out, "{}", render::render_state(&store.snapshot().await))?;
    action?;
    Ok(())
}

async fn print_notices(mut events: broadcast::Receiver<StoreEvent>) {
    loop {
        match events.recv().await {
            Ok(StoreEvent::TransientError(notice)) => eprintln!("notice: {}", notice.message),
            Ok(StoreEvent::StateChanged(_)) => {}
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "dropped store events");
            }
            Err(RecvError::Closed) => break,
        }
    }
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
