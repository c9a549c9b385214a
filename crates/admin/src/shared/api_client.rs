//! HTTP client for the back-office REST API.
//!
//! One `reqwest::Client` is shared by every resource. Collections follow the
//! paginated envelope (`count`/`next`/`previous`/`results`), items live at
//! `<collection><id>/`.

use std::marker::PhantomData;
use std::time::Duration;

use async_trait::async_trait;
use contracts::domain::common::ResourceId;
use contracts::shared::images::{ImageOwner, ImagePatch, ImageRecord, NewImage};
use contracts::shared::list::{ListQuery, ListResponse};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

use super::config::ApiConfig;

/// Ошибки обращения к API
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Unauthorized")]
    Unauthorized,

    #[error("{resource} {id} not found")]
    NotFound { resource: String, id: String },

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

// ============================================================================
// Service seams
// ============================================================================

/// CRUD-сервис одного ресурса
#[async_trait]
pub trait ResourceService<T: Send>: Send + Sync {
    async fn get_all(&self, query: &ListQuery) -> Result<ListResponse<T>, ApiError>;

    async fn get_by_id(&self, id: &str) -> Result<T, ApiError>;

    async fn create(&self, body: &serde_json::Value) -> Result<T, ApiError>;

    /// Частичное обновление (PATCH)
    async fn update(&self, id: &str, body: &serde_json::Value) -> Result<T, ApiError>;

    async fn delete(&self, id: &str) -> Result<(), ApiError>;
}

/// Сервис галерей изображений
#[async_trait]
pub trait ImageService: Send + Sync {
    async fn list(&self, owner: &ImageOwner) -> Result<Vec<ImageRecord>, ApiError>;

    async fn create(&self, owner: &ImageOwner, image: &NewImage) -> Result<ImageRecord, ApiError>;

    async fn update(
        &self,
        id: &ResourceId,
        owner: &ImageOwner,
        patch: &ImagePatch,
    ) -> Result<ImageRecord, ApiError>;

    async fn delete(&self, id: &ResourceId, owner: &ImageOwner) -> Result<(), ApiError>;
}

// ============================================================================
// ApiClient
// ============================================================================

/// HTTP-клиент REST API (общий для всех ресурсов)
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let base_url = config.base_url.trim().trim_end_matches('/').to_string();
        let parsed = reqwest::Url::parse(&base_url)
            .map_err(|e| ApiError::InvalidBaseUrl(format!("{}: {}", config.base_url, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ApiError::InvalidBaseUrl(config.base_url.clone()));
        }

        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| ApiError::Network(format!("Failed to create HTTP client: {}", e)))?;

        let token = config
            .token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string);

        tracing::info!("API client ready: {} (token: {})", base_url, token.is_some());
        Ok(Self {
            client,
            base_url,
            token,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Сервис ресурса для коллекции `endpoint` (например, `/api/flights/flights/`)
    pub fn resource<T>(&self, endpoint: &str) -> HttpResource<T> {
        HttpResource::new(self.clone(), endpoint)
    }

    pub fn images(&self) -> HttpImageService {
        HttpImageService::new(self.clone())
    }

    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let mut request = self
            .client
            .request(method, self.url(path))
            .header("Accept", "application/json");
        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("Token {}", token));
        }
        request
    }

    async fn send(
        &self,
        request: reqwest::RequestBuilder,
        target: &Target<'_>,
    ) -> Result<String, ApiError> {
        let response = request.send().await.map_err(|e| {
            tracing::error!("Request to {} failed: {}", target.resource, e);
            if e.is_timeout() {
                ApiError::Network(format!("request to {} timed out", target.resource))
            } else {
                ApiError::Network(e.to_string())
            }
        })?;

        let status = response.status();
        tracing::debug!("{} -> {}", target.resource, status);

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if status.is_success() {
            return Ok(body);
        }

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(ApiError::Unauthorized),
            StatusCode::NOT_FOUND if target.id.is_some() => Err(ApiError::NotFound {
                resource: target.resource.to_string(),
                id: target.id.unwrap_or_default().to_string(),
            }),
            _ => {
                tracing::error!("API request failed with status {}: {}", status, preview(&body));
                Err(ApiError::Http {
                    status: status.as_u16(),
                    body,
                })
            }
        }
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        target: &Target<'_>,
    ) -> Result<T, ApiError> {
        let body = self.send(request, target).await?;
        decode(&body)
    }

    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<T, ApiError> {
        let request = self.request(Method::GET, path).query(query);
        self.fetch(request, &Target::collection(path)).await
    }
}

/// Что запрашиваем (для сообщений об ошибках и маппинга 404)
struct Target<'a> {
    resource: &'a str,
    id: Option<&'a str>,
}

impl<'a> Target<'a> {
    fn collection(resource: &'a str) -> Self {
        Self { resource, id: None }
    }

    fn item(resource: &'a str, id: &'a str) -> Self {
        Self {
            resource,
            id: Some(id),
        }
    }
}

fn preview(body: &str) -> String {
    let preview: String = body.chars().take(500).collect();
    if preview.len() < body.len() {
        format!("{}...", preview)
    } else {
        preview
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    tracing::debug!("API response preview: {}", preview(body));
    serde_json::from_str::<T>(body).map_err(|e| {
        tracing::error!("Failed to parse API response. Error: {}", e);
        ApiError::Decode(format!("{}. Response: {}", e, preview(body)))
    })
}

/// `<collection><id>/`
pub fn item_path(endpoint: &str, id: &str) -> String {
    let collection = if endpoint.ends_with('/') {
        endpoint.to_string()
    } else {
        format!("{}/", endpoint)
    };
    format!("{}{}/", collection, urlencoding::encode(id.trim()))
}

// ============================================================================
// HttpResource
// ============================================================================

/// HTTP-реализация `ResourceService` для одной коллекции
pub struct HttpResource<T> {
    client: ApiClient,
    endpoint: String,
    _marker: PhantomData<fn() -> T>,
}

impl<T> HttpResource<T> {
    pub fn new(client: ApiClient, endpoint: &str) -> Self {
        Self {
            client,
            endpoint: endpoint.to_string(),
            _marker: PhantomData,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl<T> ResourceService<T> for HttpResource<T>
where
    T: DeserializeOwned + Send + 'static,
{
    async fn get_all(&self, query: &ListQuery) -> Result<ListResponse<T>, ApiError> {
        tracing::info!("GET {} {:?}", self.endpoint, query.to_query_pairs());
        self.client
            .get_json(&self.endpoint, &query.to_query_pairs())
            .await
    }

    async fn get_by_id(&self, id: &str) -> Result<T, ApiError> {
        let path = item_path(&self.endpoint, id);
        let request = self.client.request(Method::GET, &path);
        self.client
            .fetch(request, &Target::item(&self.endpoint, id))
            .await
    }

    async fn create(&self, body: &serde_json::Value) -> Result<T, ApiError> {
        let request = self.client.request(Method::POST, &self.endpoint).json(body);
        self.client
            .fetch(request, &Target::collection(&self.endpoint))
            .await
    }

    async fn update(&self, id: &str, body: &serde_json::Value) -> Result<T, ApiError> {
        let path = item_path(&self.endpoint, id);
        let request = self.client.request(Method::PATCH, &path).json(body);
        self.client
            .fetch(request, &Target::item(&self.endpoint, id))
            .await
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let path = item_path(&self.endpoint, id);
        tracing::info!("DELETE {}", path);
        let request = self.client.request(Method::DELETE, &path);
        self.client
            .send(request, &Target::item(&self.endpoint, id))
            .await
            .map(|_| ())
    }
}

// ============================================================================
// HttpImageService
// ============================================================================

pub struct HttpImageService {
    client: ApiClient,
}

impl HttpImageService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ImageService for HttpImageService {
    async fn list(&self, owner: &ImageOwner) -> Result<Vec<ImageRecord>, ApiError> {
        let query = vec![(owner.owner_param().to_string(), owner.id().as_string())];
        let page: ListResponse<ImageRecord> =
            self.client.get_json(owner.endpoint(), &query).await?;
        Ok(page.results)
    }

    async fn create(&self, owner: &ImageOwner, image: &NewImage) -> Result<ImageRecord, ApiError> {
        let mut body =
            serde_json::to_value(image).map_err(|e| ApiError::Decode(e.to_string()))?;
        if let Some(map) = body.as_object_mut() {
            map.insert(
                owner.owner_field().to_string(),
                serde_json::Value::String(owner.id().as_string()),
            );
        }
        let request = self
            .client
            .request(Method::POST, owner.endpoint())
            .json(&body);
        self.client
            .fetch(request, &Target::collection(owner.endpoint()))
            .await
    }

    async fn update(
        &self,
        id: &ResourceId,
        owner: &ImageOwner,
        patch: &ImagePatch,
    ) -> Result<ImageRecord, ApiError> {
        let id = id.as_string();
        let path = item_path(owner.endpoint(), &id);
        let request = self.client.request(Method::PATCH, &path).json(patch);
        self.client
            .fetch(request, &Target::item(owner.endpoint(), &id))
            .await
    }

    async fn delete(&self, id: &ResourceId, owner: &ImageOwner) -> Result<(), ApiError> {
        let id = id.as_string();
        let path = item_path(owner.endpoint(), &id);
        let request = self.client.request(Method::DELETE, &path);
        self.client
            .send(request, &Target::item(owner.endpoint(), &id))
            .await
            .map(|_| ())
    }
}
