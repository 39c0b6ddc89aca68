//! Plain-text rendering of the catalog state.

use std::fmt::Write as _;

use client_core::CatalogState;
use shared::protocol::MovieRecord;

pub fn render_state(state: &CatalogState) -> String {
    match state {
        CatalogState::Loading => "Loading…".to_string(),
        CatalogState::Failed(message) => format!("Error: {message}"),
        CatalogState::Ready(movies) if movies.is_empty() => "No movies in the catalog.".to_string(),
        CatalogState::Ready(movies) => movies
            .iter()
            .map(render_movie)
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

fn render_movie(movie: &MovieRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", movie.title);
    let _ = writeln!(out, "  Year:   {}", movie.year);
    let _ = writeln!(out, "  Genre:  {}", movie.genre);
    let _ = writeln!(out, "  Rating: {}", movie.rating);
    let _ = write!(out, "  ID:     {}", movie.id);
    out
}
