//! Client-side synchronization of a remote movie catalog.

pub mod catalog_client;
pub mod config;
pub mod error;
pub mod form;
pub mod store;

pub use catalog_client::{CatalogClient, HttpCatalogClient};
pub use config::{load_settings, ClientSettings};
pub use error::{ActionError, CatalogClientError};
pub use form::{Draft, FormInputModel, NumericInput};
pub use store::{
    CatalogState, CatalogStateStore, StoreAction, StoreEvent, TransientNotice,
};
