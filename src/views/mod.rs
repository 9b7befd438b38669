//! Form handlers, one module per page.

pub mod admin;
pub mod login;
pub mod user;

use log::error;

use crate::browser::{Browser, Outcome};
use crate::storage::LocalStorage;
use crate::token::TOKEN_KEY;
use crate::ui::{Page, Ui};

/// Drops the stored token and goes back to the entry page. No server call.
pub fn logout<S: LocalStorage, U: Ui>(browser: &mut Browser<S, U>) -> Outcome {
    let outcome = match browser.storage.remove_item(TOKEN_KEY) {
        Ok(()) => Outcome::Success,
        Err(err) => {
            error!("failed to clear token: {err}");
            Outcome::Failure
        }
    };
    browser.ui.navigate(Page::Index);
    outcome
}
