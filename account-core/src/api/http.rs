use std::sync::Arc;
use std::time::Duration;

use account_model::{AVATAR_FIELD, AvatarUpload, ProfileUpdatePayload, SignUpPayload, User};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, multipart};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};
use url::Url;

use super::{AccountApi, routes};
use crate::error::TransportError;

/// Connection settings for [`HttpAccountApi`].
#[derive(Debug, Clone)]
pub struct HttpApiSettings {
    pub base_url: Url,
    pub timeout: Duration,
    pub bearer_token: Option<String>,
}

impl HttpApiSettings {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: Duration::from_secs(30),
            bearer_token: None,
        }
    }
}

/// `reqwest` implementation of [`AccountApi`].
#[derive(Clone)]
pub struct HttpAccountApi {
    client: Client,
    base_url: Url,
    token_store: Arc<RwLock<Option<String>>>,
}

impl std::fmt::Debug for HttpAccountApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpAccountApi")
            .field("base_url", &self.base_url.as_str())
            .field(
                "has_token",
                &self
                    .token_store
                    .try_read()
                    .map(|t| t.is_some())
                    .unwrap_or(false),
            )
            .finish()
    }
}

impl HttpAccountApi {
    pub fn new(settings: HttpApiSettings) -> Result<Self, TransportError> {
        let client = Client::builder().timeout(settings.timeout).build()?;

        let mut base_url = settings.base_url;
        // Url::join replaces the last segment unless the base ends in '/'.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        info!(base_url = %base_url, "creating account API client");

        Ok(Self {
            client,
            base_url,
            token_store: Arc::new(RwLock::new(settings.bearer_token)),
        })
    }

    /// Resolve a route against the base URL.
    pub fn build_url(&self, path: &str) -> Result<Url, TransportError> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub async fn set_token(&self, token: Option<String>) {
        *self.token_store.write().await = token;
    }

    pub async fn token(&self) -> Option<String> {
        self.token_store.read().await.clone()
    }

    async fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.token_store.read().await.as_ref() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send(&self, route: &str, builder: RequestBuilder) -> Result<Response, TransportError> {
        let response = self.authorize(builder).await.send().await?;
        let status = response.status();
        if status.is_success() {
            debug!(route, status = status.as_u16(), "account API request succeeded");
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        warn!(route, status = status.as_u16(), "account API request rejected");
        Err(TransportError::Status {
            status: status.as_u16(),
            body,
        })
    }

    async fn decode_user(response: Response) -> Result<User, TransportError> {
        response
            .json::<User>()
            .await
            .map_err(|err| TransportError::Decode(err.to_string()))
    }
}

#[async_trait]
impl AccountApi for HttpAccountApi {
    async fn update_profile(&self, payload: &ProfileUpdatePayload) -> Result<User, TransportError> {
        let url = self.build_url(routes::PROFILE)?;
        let response = self
            .send(routes::PROFILE, self.client.put(url).json(payload))
            .await?;
        Self::decode_user(response).await
    }

    async fn register(&self, payload: &SignUpPayload) -> Result<(), TransportError> {
        let url = self.build_url(routes::USERS)?;
        self.send(routes::USERS, self.client.post(url).json(payload))
            .await?;
        Ok(())
    }

    async fn upload_avatar(&self, upload: AvatarUpload) -> Result<User, TransportError> {
        let url = self.build_url(routes::USER_AVATAR)?;
        let part = multipart::Part::bytes(upload.bytes)
            .file_name(upload.file_name)
            .mime_str(upload.content_type)?;
        let form = multipart::Form::new().part(AVATAR_FIELD, part);

        let response = self
            .send(routes::USER_AVATAR, self.client.patch(url).multipart(form))
            .await?;
        Self::decode_user(response).await
    }
}
