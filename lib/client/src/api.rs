use arenadeck_core::comment::Comment;
use arenadeck_core::pagination::PageRequest;
use arenadeck_core::thread::{assemble_thread, RenderNode};
use arenadeck_utils::errors::AppError;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

use crate::resource::ResourceKind;

pub const API_URL_ENV_VAR: &str = "ARENADECK_API_URL";

/// Client for the backend HTTP JSON API.
///
/// The backend is treated as an opaque collaborator: every operation is a
/// single request, failures are surfaced to the caller and never retried
/// here.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
    token: Option<String>,
}

/// Error payload shape of the backend, `{"detail": "..."}`.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    detail: String,
}

impl ApiClient {
    /// Creates a client for the service at `base_url` (scheme and
    /// authority, e.g. `https://arena.example.org`).
    pub fn new(base_url: &str) -> Result<ApiClient, AppError> {
        Ok(ApiClient {
            http: Client::new(),
            base_url: Url::parse(base_url)?,
            token: None,
        })
    }

    /// Creates a client from the [`API_URL_ENV_VAR`] environment variable.
    pub fn from_env() -> Result<ApiClient, AppError> {
        let base_url = std::env::var(API_URL_ENV_VAR)?;
        ApiClient::new(base_url.as_str())
    }

    /// Attaches the bearer token sent with mutating requests.
    pub fn with_token(mut self, token: impl Into<String>) -> ApiClient {
        self.token = Some(token.into());
        self
    }

    fn endpoint(&self, path: &str) -> Result<Url, AppError> {
        Ok(self.base_url.join(path)?)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
        let status = response.status();
        if status.is_success() {
            Ok(response.json::<T>().await?)
        } else {
            Err(Self::api_error(status, response).await)
        }
    }

    async fn check_status(response: Response) -> Result<(), AppError> {
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(Self::api_error(status, response).await)
        }
    }

    async fn api_error(status: StatusCode, response: Response) -> AppError {
        let detail = match response.json::<ApiErrorBody>().await {
            Ok(body) => body.detail,
            // not all error paths produce the JSON shape, fall back to the status line
            Err(_) => String::from(status.canonical_reason().unwrap_or("unknown error")),
        };
        AppError::Api {
            status: status.as_u16(),
            detail,
        }
    }

    /// Fetches the flat comment set of an article, in server order (pinned
    /// roots first, then by creation time).
    pub async fn get_article_comments(&self, article_id: i64) -> Result<Vec<Comment>, AppError> {
        let url = self.endpoint(&format!("api/articles/{article_id}/comments"))?;
        let response = self.http.get(url).send().await?;
        Self::read_json(response).await
    }

    /// Fetches an article's comments and assembles them into render order.
    /// The thread is rebuilt from scratch on every call; callers re-run it
    /// after every reply, delete or pin.
    pub async fn load_comment_thread(&self, article_id: i64) -> Result<Vec<RenderNode>, AppError> {
        let comments = self.get_article_comments(article_id).await?;
        log::trace!("Loaded {} comments for article {article_id}", comments.len());
        Ok(assemble_thread(comments))
    }

    /// Fetches one page of a paginated collection. A returned batch shorter
    /// than `request.page_size` means the collection is exhausted.
    pub async fn get_page<T: DeserializeOwned>(
        &self,
        kind: ResourceKind,
        request: PageRequest,
        filters: &[(&'static str, String)],
    ) -> Result<Vec<T>, AppError> {
        let url = self.endpoint(kind.path())?;
        let response = self
            .http
            .get(url)
            .query(&[
                ("page", request.page.to_string()),
                ("page_size", request.page_size.to_string()),
            ])
            .query(filters)
            .send()
            .await?;
        Self::read_json(response).await
    }

    pub async fn get_card_expansions(&self) -> Result<Vec<String>, AppError> {
        let url = self.endpoint("api/cards/expansions")?;
        let response = self.http.get(url).send().await?;
        Self::read_json(response).await
    }

    /// Posts a new root comment on an article. Requires a token.
    pub async fn create_comment(&self, article_id: i64, content: &str) -> Result<Comment, AppError> {
        let url = self.endpoint(&format!("api/articles/{article_id}/comments"))?;
        let response = self
            .authorize(self.http.post(url))
            .json(&serde_json::json!({ "content": content }))
            .send()
            .await?;
        Self::read_json(response).await
    }

    /// Posts a reply under an existing comment. Requires a token.
    pub async fn reply_to_comment(&self, comment_id: i64, content: &str) -> Result<Comment, AppError> {
        let url = self.endpoint(&format!("api/comments/{comment_id}/reply"))?;
        let response = self
            .authorize(self.http.post(url))
            .json(&serde_json::json!({ "content": content }))
            .send()
            .await?;
        Self::read_json(response).await
    }

    /// Deletes a comment and all of its replies. Requires a token.
    pub async fn delete_comment(&self, comment_id: i64) -> Result<(), AppError> {
        let url = self.endpoint(&format!("api/comments/{comment_id}"))?;
        let response = self.authorize(self.http.delete(url)).send().await?;
        Self::check_status(response).await
    }

    /// Pins or unpins a root comment. Requires a token.
    pub async fn set_comment_pinned(&self, comment_id: i64, pinned: bool) -> Result<(), AppError> {
        let url = self.endpoint(&format!("api/comments/{comment_id}/pin"))?;
        let response = self
            .authorize(self.http.post(url))
            .json(&serde_json::json!({ "pinned": pinned }))
            .send()
            .await?;
        Self::check_status(response).await
    }
}
