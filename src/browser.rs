use crate::api::ApiClient;
use crate::storage::LocalStorage;
use crate::token::TOKEN_KEY;
use crate::ui::Ui;

/// What a view handler has to work with: the backend, the local storage
/// holding the session token, and the page it renders into.
pub struct Browser<S, U> {
    pub api: ApiClient,
    pub storage: S,
    pub ui: U,
}

impl<S: LocalStorage, U: Ui> Browser<S, U> {
    pub fn new(api: ApiClient, storage: S, ui: U) -> Self {
        Browser { api, storage, ui }
    }

    pub fn token(&self) -> Option<String> {
        self.storage.get_item(TOKEN_KEY)
    }
}

/// Result of one handler invocation. The user has already been told either way.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

impl Outcome {
    pub fn is_success(self) -> bool {
        self == Outcome::Success
    }
}
