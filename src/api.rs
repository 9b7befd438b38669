//! HTTP access to the catalog backend.
//!
//! One method per endpoint. Non-2xx answers come back as
//! [`ClientError::Status`]; connection and body decoding failures as
//! [`ClientError::Transport`].

use log::debug;
use reqwest::{Client, RequestBuilder, Response, Url};
use serde_json::Value;

use crate::error::ClientError;
use crate::models::{Book, Credentials, GenreSelection, LoginReply, NewBook, RecommendedBook};
use crate::render::{display_text, is_truthy};

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base: Url,
}

impl ApiClient {
    pub fn new(base: Url) -> Result<Self, ClientError> {
        let http = Client::builder().build()?;
        Ok(ApiClient { http, base })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| ClientError::Config(format!("{} cannot be a base URL", self.base)))?;
            path.pop_if_empty().extend(segments);
        }
        Ok(url)
    }

    fn authorized(request: RequestBuilder, token: Option<&str>) -> RequestBuilder {
        match token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    fn require_success(response: Response) -> Result<Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(ClientError::Status {
                status: status.as_u16(),
                message: None,
            })
        }
    }

    /// `POST /login`. The body is decoded before the status is looked at, so
    /// an unreadable body is a transport failure even on a 401.
    pub async fn login(&self, credentials: &Credentials) -> Result<String, ClientError> {
        let url = self.endpoint(&["login"])?;
        debug!("POST {url}");
        let response = self.http.post(url).json(credentials).send().await?;
        let status = response.status();
        let reply: LoginReply = response.json().await?;
        if status.is_success() {
            reply.token.ok_or(ClientError::MissingToken)
        } else {
            Err(ClientError::Status {
                status: status.as_u16(),
                message: reply.error.filter(is_truthy).map(|e| display_text(Some(&e))),
            })
        }
    }

    /// `GET /api/livros/{id}`, returning the book exactly as the backend sent it.
    pub async fn fetch_book(&self, token: Option<&str>, id: &str) -> Result<Value, ClientError> {
        let url = self.endpoint(&["api", "livros", id])?;
        debug!("GET {url}");
        let response = Self::authorized(self.http.get(url), token).send().await?;
        let response = Self::require_success(response)?;
        Ok(response.json().await?)
    }

    /// `POST /api/livros`. Returns the stored book when the answer parses as one.
    pub async fn add_book(&self, token: Option<&str>, book: &NewBook) -> Result<Option<Book>, ClientError> {
        let url = self.endpoint(&["api", "livros"])?;
        debug!("POST {url}");
        let response = Self::authorized(self.http.post(url), token)
            .json(book)
            .send()
            .await?;
        let response = Self::require_success(response)?;
        Ok(response.json::<Book>().await.ok())
    }

    /// `DELETE /api/livros/{id}`.
    pub async fn delete_book(&self, token: Option<&str>, id: &str) -> Result<(), ClientError> {
        let url = self.endpoint(&["api", "livros", id])?;
        debug!("DELETE {url}");
        let response = Self::authorized(self.http.delete(url), token).send().await?;
        Self::require_success(response)?;
        Ok(())
    }

    /// `POST /api/recommend`.
    pub async fn recommend(
        &self,
        token: Option<&str>,
        selection: &GenreSelection,
    ) -> Result<Vec<RecommendedBook>, ClientError> {
        let url = self.endpoint(&["api", "recommend"])?;
        debug!("POST {url}");
        let response = Self::authorized(self.http.post(url), token)
            .json(selection)
            .send()
            .await?;
        debug!("recommend answered {}", response.status());
        let response = Self::require_success(response)?;
        let items: Vec<Value> = response.json().await?;
        Ok(items.iter().map(RecommendedBook::from_json).collect())
    }
}
