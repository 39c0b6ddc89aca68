use async_trait::async_trait;
use reqwest::{header, Client, Response};
use shared::{
    domain::MovieId,
    protocol::{MovieRecord, NewMovie},
};
use tracing::{debug, warn};

use crate::error::CatalogClientError;

pub type ClientResult<T> = std::result::Result<T, CatalogClientError>;

/// The three operations of the remote catalog service.
#[async_trait]
pub trait CatalogClient: Send + Sync {
    async fn list(&self) -> ClientResult<Vec<MovieRecord>>;
    async fn create(&self, movie: &NewMovie) -> ClientResult<MovieRecord>;
    async fn delete(&self, id: MovieId) -> ClientResult<()>;
}

pub struct HttpCatalogClient {
    http: Client,
    server_url: String,
}

impl HttpCatalogClient {
    pub fn new(server_url: impl Into<String>) -> Self {
        Self::with_http_client(Client::new(), server_url)
    }

    pub fn with_http_client(http: Client, server_url: impl Into<String>) -> Self {
        let server_url = server_url.into().trim_end_matches('/').to_string();
        Self { http, server_url }
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    async fn fetch_list(&self) -> ClientResult<Vec<MovieRecord>> {
        let response = self
            .http
            .get(format!("{}/get-movies", self.server_url))
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;
        let movies = ensure_success(response)?.json().await?;
        Ok(movies)
    }

    async fn post_movie(&self, movie: &NewMovie) -> ClientResult<MovieRecord> {
        let response = self
            .http
            .post(format!("{}/add-movie", self.server_url))
            .json(movie)
            .send()
            .await?;
        let record = ensure_success(response)?.json().await?;
        Ok(record)
    }

    async fn delete_movie(&self, id: MovieId) -> ClientResult<()> {
        let response = self
            .http
            .delete(format!("{}/delete/{}", self.server_url, id.0))
            .send()
            .await?;
        ensure_success(response)?;
        Ok(())
    }
}

/// Anything outside 2xx is a failure, including redirects reqwest does not follow.
fn ensure_success(response: Response) -> ClientResult<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(CatalogClientError::Service { status })
    }
}

fn log_failure<T>(operation: &str, result: ClientResult<T>) -> ClientResult<T> {
    if let Err(err) = &result {
        warn!(operation, error = %err, "catalog request failed");
    }
    result
}

#[async_trait]
impl CatalogClient for HttpCatalogClient {
    async fn list(&self) -> ClientResult<Vec<MovieRecord>> {
        debug!(server_url = %self.server_url, "requesting movie list");
        log_failure("list", self.fetch_list().await)
    }

    async fn create(&self, movie: &NewMovie) -> ClientResult<MovieRecord> {
        debug!(title = %movie.title, "submitting new movie");
        log_failure("create", self.post_movie(movie).await)
    }

    async fn delete(&self, id: MovieId) -> ClientResult<()> {
        debug!(%id, "deleting movie");
        log_failure("delete", self.delete_movie(id).await)
    }
}

#[cfg(test)]
#[path = "tests/catalog_client_tests.rs"]
mod tests;
