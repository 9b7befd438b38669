//! Client for the book catalog and recommendation service.
//!
//! Each handler in [`views`] follows the same path: read the form input and
//! the stored token, make one call to the backend, then render the answer or
//! tell the user it failed.

pub mod api;
pub mod browser;
pub mod config;
pub mod error;
pub mod messages;
pub mod models;
pub mod render;
pub mod storage;
pub mod token;
pub mod ui;
pub mod views;

pub use api::ApiClient;
pub use browser::{Browser, Outcome};
pub use config::ClientConfig;
pub use error::ClientError;
pub use storage::{FileStorage, LocalStorage, MemoryStorage};
pub use ui::{Page, Region, TerminalUi, Ui};
