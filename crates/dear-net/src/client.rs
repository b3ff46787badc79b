//! `reqwest` implementation of every backend trait.

use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::api::{AuthApi, ChatApi, ContentApi, JournalApi, UserApi};
use crate::config::ApiConfig;
use crate::dto::*;
use crate::error::{ApiError, Result};

/// HTTP client for the Dear backend.
///
/// The bearer token is read from the preference store's watch channel on
/// every request; when no token is stored the header is simply omitted.
pub struct ApiClient {
    config: ApiConfig,
    http: reqwest::Client,
    token: watch::Receiver<Option<String>>,
}

impl ApiClient {
    pub fn new(config: ApiConfig, token: watch::Receiver<Option<String>>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .read_timeout(config.read_timeout)
            .timeout(config.total_timeout())
            .build()?;

        debug!(base_url = %config.base_url, "api client ready");

        Ok(Self {
            config,
            http,
            token,
        })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Base URL joined with `segments`, each one percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.config.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidBaseUrl(self.config.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let builder = self.http.request(method, url);
        let token = self.token.borrow().clone();
        match token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn execute(&self, builder: RequestBuilder) -> Result<Response> {
        let request = builder.build()?;
        let method = request.method().clone();
        let path = request.url().path().to_string();

        let response = self.http.execute(request).await.map_err(|e| {
            warn!(%method, %path, error = %e, "api request failed");
            ApiError::from(e)
        })?;

        let status = response.status();
        debug!(%method, %path, status = status.as_u16(), "api exchange");

        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::Status {
                status: status.as_u16(),
                body,
            })
        }
    }

    async fn fetch<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = self.execute(builder).await?;
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn send(&self, builder: RequestBuilder) -> Result<()> {
        self.execute(builder).await?;
        Ok(())
    }
}

#[async_trait]
impl AuthApi for ApiClient {
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse> {
        let url = self.endpoint(&["auth", "login"])?;
        self.fetch(self.request(Method::POST, url).json(request)).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<()> {
        let url = self.endpoint(&["auth", "register"])?;
        self.send(self.request(Method::POST, url).json(request)).await
    }
}

#[async_trait]
impl JournalApi for ApiClient {
    async fn list_journals(&self) -> Result<Vec<JournalResponse>> {
        let url = self.endpoint(&["journals"])?;
        self.fetch(self.request(Method::GET, url)).await
    }

    async fn create_journal(&self, request: &CreateJournalRequest) -> Result<JournalResponse> {
        let url = self.endpoint(&["journals"])?;
        self.fetch(self.request(Method::POST, url).json(request)).await
    }
}

#[async_trait]
impl ChatApi for ApiClient {
    async fn post_message(&self, request: &ChatRequest) -> Result<ChatResponse> {
        // The backend routes the chat collection with a trailing slash.
        let url = self.endpoint(&["chat", ""])?;
        self.fetch(self.request(Method::POST, url).json(request)).await
    }

    async fn delete_message(&self, id: &str) -> Result<()> {
        let url = self.endpoint(&["chat", id])?;
        self.send(self.request(Method::DELETE, url)).await
    }

    async fn set_flag(&self, id: &str, request: &FlagRequest) -> Result<()> {
        let url = self.endpoint(&["chat", id, "flag"])?;
        self.send(self.request(Method::PATCH, url).json(request)).await
    }
}

#[async_trait]
impl UserApi for ApiClient {
    async fn profile(&self) -> Result<UserProfileResponse> {
        let url = self.endpoint(&["users", "me"])?;
        self.fetch(self.request(Method::GET, url)).await
    }
}

#[async_trait]
impl ContentApi for ApiClient {
    async fn articles(&self) -> Result<Vec<ArticleResponse>> {
        let url = self.endpoint(&["articles"])?;
        self.fetch(self.request(Method::GET, url)).await
    }

    async fn audio(&self) -> Result<Vec<AudioTrackResponse>> {
        let url = self.endpoint(&["audio"])?;
        self.fetch(self.request(Method::GET, url)).await
    }

    async fn quotes(&self) -> Result<Vec<MotivationalQuoteResponse>> {
        let url = self.endpoint(&["quotes"])?;
        self.fetch(self.request(Method::GET, url)).await
    }

    async fn mood_music(&self, mood: &str) -> Result<Vec<AudioTrackResponse>> {
        let mut url = self.endpoint(&["music"])?;
        url.query_pairs_mut().append_pair("mood", mood);
        self.fetch(self.request(Method::GET, url)).await
    }

    async fn recommended_music(&self) -> Result<Vec<AudioTrackResponse>> {
        let url = self.endpoint(&["music", "recommend"])?;
        self.fetch(self.request(Method::GET, url)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> ApiClient {
        let (_tx, rx) = watch::channel(None);
        ApiClient::new(ApiConfig::new(base).unwrap(), rx).unwrap()
    }

    #[test]
    fn endpoints_append_to_base_path() {
        let client = client("http://dear.example/api/v1/");
        assert_eq!(
            client.endpoint(&["journals"]).unwrap().as_str(),
            "http://dear.example/api/v1/journals"
        );
        assert_eq!(
            client.endpoint(&["chat", ""]).unwrap().as_str(),
            "http://dear.example/api/v1/chat/"
        );
    }

    #[test]
    fn path_ids_are_escaped() {
        let client = client("http://dear.example/");
        assert_eq!(
            client.endpoint(&["chat", "a/b", "flag"]).unwrap().as_str(),
            "http://dear.example/chat/a%2Fb/flag"
        );
    }
}
