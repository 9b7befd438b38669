use log::{debug, error, info};

use crate::browser::{Browser, Outcome};
use crate::messages::{BOOK_NOT_FOUND, CONNECTION_FAILED, GENRE_COUNT_REQUIRED};
use crate::models::GenreSelection;
use crate::render::{pretty_json, recommendations_html};
use crate::storage::LocalStorage;
use crate::ui::{Region, Ui};

/// Book search submit: shows the book document as formatted JSON.
pub async fn search_book<S: LocalStorage, U: Ui>(browser: &mut Browser<S, U>, book_id: &str) -> Outcome {
    let token = browser.token();
    debug!("looking up book {book_id:?}");

    let result = browser.api.fetch_book(token.as_deref(), book_id).await;
    match result.and_then(|book| pretty_json(&book)) {
        Ok(text) => {
            browser.ui.set_text(Region::BookDetails, &text);
            Outcome::Success
        }
        Err(err) if err.is_status() => {
            info!("book {book_id:?} lookup failed: {err}");
            browser.ui.alert(BOOK_NOT_FOUND);
            Outcome::Failure
        }
        Err(err) => {
            error!("book lookup failed: {err}");
            browser.ui.alert(CONNECTION_FAILED);
            Outcome::Failure
        }
    }
}

/// Genre form submit. Nothing is sent unless exactly three distinct genres
/// are selected.
pub async fn request_recommendations<S, U, I, G>(browser: &mut Browser<S, U>, selected: I) -> Outcome
where
    S: LocalStorage,
    U: Ui,
    I: IntoIterator<Item = G>,
    G: Into<String>,
{
    let token = browser.token();
    debug!("genre form submitted, token present: {}", token.is_some());

    let selection = match GenreSelection::new(selected) {
        Ok(selection) => selection,
        Err(err) => {
            debug!("{err}");
            browser.ui.alert(GENRE_COUNT_REQUIRED);
            return Outcome::Failure;
        }
    };
    debug!("selected genres: {:?}", selection.genres());

    match browser.api.recommend(token.as_deref(), &selection).await {
        Ok(books) => {
            debug!("received {} recommendations", books.len());
            browser
                .ui
                .set_html(Region::Recommendations, &recommendations_html(&books));
            Outcome::Success
        }
        Err(err) => {
            error!("recommendation request failed: {err}");
            browser.ui.alert(&format!("Erro: {err}"));
            Outcome::Failure
        }
    }
}
