use super::*;
use async_trait::async_trait;
use client_core::{catalog_client::ClientResult, CatalogClient, CatalogClientError};
use shared::protocol::{MovieRecord, NewMovie};

struct RejectingCatalogClient {
    movies: Vec<MovieRecord>,
}

#[async_trait]
impl CatalogClient for RejectingCatalogClient {
    async fn list(&self) -> ClientResult<Vec<MovieRecord>> {
        Ok(self.movies.clone())
    }

    async fn create(&self, _movie: &NewMovie) -> ClientResult<MovieRecord> {
        Err(CatalogClientError::Transport("connection reset".into()))
    }

    async fn delete(&self, _id: MovieId) -> ClientResult<()> {
        Err(CatalogClientError::Transport("connection reset".into()))
    }
}

fn rejecting_store() -> Arc<CatalogStateStore> {
    CatalogStateStore::new(Arc::new(RejectingCatalogClient {
        movies: vec![MovieRecord {
            id: MovieId(1),
            title: "Inception".to_string(),
            year: 2010,
            genre: "Sci-Fi".to_string(),
            rating: 8.8,
        }],
    }))
}

#[tokio::test]
async fn failed_delete_still_prints_unchanged_catalog() {
    let store = rejecting_store();
    let mut out = Vec::new();

    let result = run(&store, Command::Delete { id: 1 }, &mut out).await;

    assert!(result.is_err());
    let printed = String::from_utf8(out).expect("utf8");
    assert!(printed.starts_with("Inception\n"), "{printed}");
    assert!(!printed.contains("Deleted movie"));
}

#[tokio::test]
async fn failed_add_still_prints_unchanged_catalog() {
    let store = rejecting_store();
    let mut out = Vec::new();

    let command = Command::Add {
        title: "Up".to_string(),
        year: "2009".to_string(),
        genre: "Animation".to_string(),
        rating: "8.2".to_string(),
    };
    let result = run(&store, command, &mut out).await;

    assert!(result.is_err());
    let printed = String::from_utf8(out).expect("utf8");
    assert!(printed.contains("ID:     1"), "{printed}");
    assert!(!printed.contains("Added movie"));
}
