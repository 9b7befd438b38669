use log::{debug, error, info};

use crate::browser::{Browser, Outcome};
use crate::messages::{BOOK_ADDED, BOOK_ADD_FAILED, BOOK_REMOVED, BOOK_REMOVE_FAILED, CONNECTION_FAILED};
use crate::models::{BookForm, NewBook};
use crate::storage::LocalStorage;
use crate::ui::Ui;

pub async fn add_book<S: LocalStorage, U: Ui>(browser: &mut Browser<S, U>, form: BookForm) -> Outcome {
    let token = browser.token();
    let book = NewBook::from(form);
    debug!("adding book {:?}", book.title);

    match browser.api.add_book(token.as_deref(), &book).await {
        Ok(stored) => {
            if let Some(id) = stored.and_then(|b| b.id) {
                info!("book stored with id {id}");
            }
            browser.ui.alert(BOOK_ADDED);
            Outcome::Success
        }
        Err(err) if err.is_status() => {
            info!("add book rejected: {err}");
            browser.ui.alert(BOOK_ADD_FAILED);
            Outcome::Failure
        }
        Err(err) => {
            error!("add book failed: {err}");
            browser.ui.alert(CONNECTION_FAILED);
            Outcome::Failure
        }
    }
}

pub async fn delete_book<S: LocalStorage, U: Ui>(browser: &mut Browser<S, U>, book_id: &str) -> Outcome {
    let token = browser.token();
    debug!("deleting book {book_id:?}");

    match browser.api.delete_book(token.as_deref(), book_id).await {
        Ok(()) => {
            browser.ui.alert(BOOK_REMOVED);
            Outcome::Success
        }
        Err(err) if err.is_status() => {
            info!("delete book {book_id:?} rejected: {err}");
            browser.ui.alert(BOOK_REMOVE_FAILED);
            Outcome::Failure
        }
        Err(err) => {
            error!("delete book failed: {err}");
            browser.ui.alert(CONNECTION_FAILED);
            Outcome::Failure
        }
    }
}
