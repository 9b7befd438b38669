use log::{debug, error, info};

use crate::browser::{Browser, Outcome};
use crate::error::ClientError;
use crate::messages::{CONNECTION_FAILED, LOGIN_FAILED};
use crate::models::Credentials;
use crate::storage::LocalStorage;
use crate::token::{decode_claims, TOKEN_KEY};
use crate::ui::{Page, Region, Ui};

/// Login form submit. On success the token is stored and the page moves to
/// the admin or user view depending on the role claim.
pub async fn submit<S: LocalStorage, U: Ui>(
    browser: &mut Browser<S, U>,
    username: &str,
    password: &str,
) -> Outcome {
    debug!("submitting login for {username}");
    let credentials = Credentials::new(username, password);

    let token = match browser.api.login(&credentials).await {
        Ok(token) => token,
        Err(ClientError::Status { status, message }) => {
            info!("login for {username} rejected with {status}");
            browser
                .ui
                .set_text(Region::Message, message.as_deref().unwrap_or(LOGIN_FAILED));
            return Outcome::Failure;
        }
        Err(err) => {
            error!("login request failed: {err}");
            browser.ui.set_text(Region::Message, CONNECTION_FAILED);
            return Outcome::Failure;
        }
    };

    match store_and_route(&mut browser.storage, &token) {
        Ok(page) => {
            info!("logged in as {username}, opening {page}");
            browser.ui.navigate(page);
            Outcome::Success
        }
        Err(err) => {
            error!("could not use issued token: {err}");
            browser.ui.set_text(Region::Message, CONNECTION_FAILED);
            Outcome::Failure
        }
    }
}

// The token is stored before its payload is read, so a malformed token still
// replaces whatever session was there.
fn store_and_route<S: LocalStorage>(storage: &mut S, token: &str) -> Result<Page, ClientError> {
    storage.set_item(TOKEN_KEY, token)?;
    let claims = decode_claims(token)?;
    Ok(Page::landing_for(&claims))
}
