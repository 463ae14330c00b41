//! Typed endpoint methods over a transport and a middleware pipeline.

use std::fmt;
use std::sync::Arc;

use imageer_domain::AppError;
use imageer_domain::api::{
    CreateProjectRequest, CreateServiceAccountRequest, CreateUploadUrlRequest, Images,
    ListImagesParams, Page, Project, Projects, ReprocessImagesRequest, ServiceAccount,
    ServiceAccountWithApiKey, ServiceAccounts, UpdateProjectRequest, UpdateServiceAccountRequest,
    UploadUrl, User,
};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::middleware::{Middleware, MiddlewarePipeline};
use super::request::{ApiRequest, ApiResponse, HttpMethod};
use super::result::{RequestResult, ResponseMeta};
use crate::error::{ClientError, ClientResult};
use crate::ports::Transport;

const API_PREFIX: &str = "/api/v1";

/// Client for the Imageer REST API.
///
/// Every method returns `Ok` with a [`RequestResult`] whenever the server
/// answered with either a decodable body or a declared error; `Err` is kept
/// for transport failures and bodies that match neither.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    transport: Arc<dyn Transport>,
    pipeline: MiddlewarePipeline,
}

/// Builder for [`ApiClient`].
pub struct ApiClientBuilder {
    base_url: String,
    transport: Arc<dyn Transport>,
    pipeline: MiddlewarePipeline,
}

impl ApiClientBuilder {
    /// Sets the origin requests are sent to. Empty means same-origin.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Appends a middleware layer.
    #[must_use]
    pub fn middleware(mut self, layer: Arc<dyn Middleware>) -> Self {
        self.pipeline.push(layer);
        self
    }

    /// Builds the client.
    #[must_use]
    pub fn build(self) -> ApiClient {
        ApiClient {
            base_url: self.base_url,
            transport: self.transport,
            pipeline: self.pipeline,
        }
    }
}

impl ApiClient {
    /// Starts building a client over `transport`.
    #[must_use]
    pub fn builder(transport: Arc<dyn Transport>) -> ApiClientBuilder {
        ApiClientBuilder {
            base_url: String::new(),
            transport,
            pipeline: MiddlewarePipeline::new(),
        }
    }

    /// Origin requests are sent to; empty for same-origin.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The middleware pipeline.
    #[must_use]
    pub const fn middleware(&self) -> &MiddlewarePipeline {
        &self.pipeline
    }

    // Users

    /// `GET /api/v1/users/me`
    ///
    /// # Errors
    ///
    /// Returns an error if the transport fails or the body is malformed.
    pub async fn get_current_user(&self) -> ClientResult<RequestResult<User>> {
        self.fetch(self.request(HttpMethod::Get, "/users/me")).await
    }

    // Projects

    /// `GET /api/v1/admin/projects`
    ///
    /// # Errors
    ///
    /// Returns an error if the transport fails or the body is malformed.
    pub async fn list_projects(&self, page: Page) -> ClientResult<RequestResult<Projects>> {
        let path = with_query("/admin/projects", &page)?;
        self.fetch(self.request(HttpMethod::Get, &path)).await
    }

    /// `GET /api/v1/admin/projects/{projectId}`
    ///
    /// # Errors
    ///
    /// Returns an error if the transport fails or the body is malformed.
    pub async fn get_project(&self, project_id: &str) -> ClientResult<RequestResult<Project>> {
        let path = format!("/admin/projects/{}", segment(project_id));
        self.fetch(self.request(HttpMethod::Get, &path)).await
    }

    /// `POST /api/v1/admin/projects`
    ///
    /// # Errors
    ///
    /// Returns an error if the transport fails or a body cannot be coded.
    pub async fn create_project(
        &self,
        body: &CreateProjectRequest,
    ) -> ClientResult<RequestResult<Project>> {
        let request = json(self.request(HttpMethod::Post, "/admin/projects"), body)?;
        self.fetch(request).await
    }

    /// `PUT /api/v1/admin/projects/{projectId}`
    ///
    /// # Errors
    ///
    /// Returns an error if the transport fails or a body cannot be coded.
    pub async fn update_project(
        &self,
        project_id: &str,
        body: &UpdateProjectRequest,
    ) -> ClientResult<RequestResult<Project>> {
        let path = format!("/admin/projects/{}", segment(project_id));
        let request = json(self.request(HttpMethod::Put, &path), body)?;
        self.fetch(request).await
    }

    /// `DELETE /api/v1/admin/projects/{projectId}`
    ///
    /// # Errors
    ///
    /// Returns an error if the transport fails or the error body is malformed.
    pub async fn delete_project(&self, project_id: &str) -> ClientResult<RequestResult<()>> {
        let path = format!("/admin/projects/{}", segment(project_id));
        self.fetch_empty(self.request(HttpMethod::Delete, &path))
            .await
    }

    // Service accounts

    /// `GET /api/v1/admin/service-accounts`
    ///
    /// # Errors
    ///
    /// Returns an error if the transport fails or the body is malformed.
    pub async fn list_service_accounts(
        &self,
        page: Page,
    ) -> ClientResult<RequestResult<ServiceAccounts>> {
        let path = with_query("/admin/service-accounts", &page)?;
        self.fetch(self.request(HttpMethod::Get, &path)).await
    }

    /// `GET /api/v1/admin/service-accounts/{serviceAccountId}`
    ///
    /// # Errors
    ///
    /// Returns an error if the transport fails or the body is malformed.
    pub async fn get_service_account(
        &self,
        service_account_id: &str,
    ) -> ClientResult<RequestResult<ServiceAccount>> {
        let path = format!("/admin/service-accounts/{}", segment(service_account_id));
        self.fetch(self.request(HttpMethod::Get, &path)).await
    }

    /// `POST /api/v1/admin/service-accounts`
    ///
    /// # Errors
    ///
    /// Returns an error if the transport fails or a body cannot be coded.
    pub async fn create_service_account(
        &self,
        body: &CreateServiceAccountRequest,
    ) -> ClientResult<RequestResult<ServiceAccountWithApiKey>> {
        let request = json(self.request(HttpMethod::Post, "/admin/service-accounts"), body)?;
        self.fetch(request).await
    }

    /// `PUT /api/v1/admin/service-accounts/{serviceAccountId}`
    ///
    /// # Errors
    ///
    /// Returns an error if the transport fails or a body cannot be coded.
    pub async fn update_service_account(
        &self,
        service_account_id: &str,
        body: &UpdateServiceAccountRequest,
    ) -> ClientResult<RequestResult<ServiceAccount>> {
        let path = format!("/admin/service-accounts/{}", segment(service_account_id));
        let request = json(self.request(HttpMethod::Put, &path), body)?;
        self.fetch(request).await
    }

    /// `DELETE /api/v1/admin/service-accounts/{serviceAccountId}`
    ///
    /// # Errors
    ///
    /// Returns an error if the transport fails or the error body is malformed.
    pub async fn delete_service_account(
        &self,
        service_account_id: &str,
    ) -> ClientResult<RequestResult<()>> {
        let path = format!("/admin/service-accounts/{}", segment(service_account_id));
        self.fetch_empty(self.request(HttpMethod::Delete, &path))
            .await
    }

    // Images

    /// `GET /api/v1/admin/projects/{projectId}/images`
    ///
    /// # Errors
    ///
    /// Returns an error if the transport fails or the body is malformed.
    pub async fn list_images(
        &self,
        project_id: &str,
        params: &ListImagesParams,
    ) -> ClientResult<RequestResult<Images>> {
        let path = with_query(
            &format!("/admin/projects/{}/images", segment(project_id)),
            params,
        )?;
        self.fetch(self.request(HttpMethod::Get, &path)).await
    }

    /// `DELETE /api/v1/admin/projects/{projectId}/images/{imageId}`
    ///
    /// # Errors
    ///
    /// Returns an error if the transport fails or the error body is malformed.
    pub async fn delete_image(
        &self,
        project_id: &str,
        image_id: &str,
    ) -> ClientResult<RequestResult<()>> {
        let path = format!(
            "/admin/projects/{}/images/{}",
            segment(project_id),
            segment(image_id)
        );
        self.fetch_empty(self.request(HttpMethod::Delete, &path))
            .await
    }

    /// `POST /api/v1/admin/projects/{projectId}/images/reprocess`
    ///
    /// # Errors
    ///
    /// Returns an error if the transport fails or a body cannot be coded.
    pub async fn reprocess_images(
        &self,
        project_id: &str,
        body: &ReprocessImagesRequest,
    ) -> ClientResult<RequestResult<()>> {
        let path = format!("/admin/projects/{}/images/reprocess", segment(project_id));
        let request = json(self.request(HttpMethod::Post, &path), body)?;
        self.fetch_empty(request).await
    }

    /// `POST /api/v1/projects/{projectId}/images/upload-url`
    ///
    /// # Errors
    ///
    /// Returns an error if the transport fails or a body cannot be coded.
    pub async fn create_upload_url(
        &self,
        project_id: &str,
        body: &CreateUploadUrlRequest,
    ) -> ClientResult<RequestResult<UploadUrl>> {
        let path = format!("/projects/{}/images/upload-url", segment(project_id));
        let request = json(self.request(HttpMethod::Post, &path), body)?;
        self.fetch(request).await
    }

    fn request(&self, method: HttpMethod, path: &str) -> ApiRequest {
        ApiRequest::new(method, format!("{}{API_PREFIX}{path}", self.base_url))
    }

    async fn execute(&self, request: ApiRequest) -> ClientResult<ApiResponse> {
        let request = self.pipeline.on_request(request);
        tracing::debug!(method = %request.method, url = %request.url, "sending API request");

        let response = self.transport.send(request).await?;
        tracing::debug!(status = response.status, "received API response");

        self.pipeline.on_response(&response);
        Ok(response)
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        request: ApiRequest,
    ) -> ClientResult<RequestResult<T>> {
        let response = self.execute(request).await?;
        let meta = ResponseMeta::from(&response);

        if !response.is_success() {
            return failure(&response, meta);
        }
        if response.is_body_empty() {
            return Ok(RequestResult::empty(meta));
        }

        response
            .json()
            .map(|data| RequestResult::success(data, meta))
            .map_err(|source| ClientError::Decode {
                status: response.status,
                source,
            })
    }

    async fn fetch_empty(&self, request: ApiRequest) -> ClientResult<RequestResult<()>> {
        let response = self.execute(request).await?;
        let meta = ResponseMeta::from(&response);

        if response.is_success() {
            Ok(RequestResult::empty(meta))
        } else {
            failure(&response, meta)
        }
    }
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("middleware", &self.pipeline)
            .finish_non_exhaustive()
    }
}

fn failure<T>(response: &ApiResponse, meta: ResponseMeta) -> ClientResult<RequestResult<T>> {
    response
        .json::<AppError>()
        .map(|error| RequestResult::failure(error, meta))
        .map_err(|_| ClientError::UnexpectedStatus {
            status: response.status,
            status_text: response.status_text.clone(),
        })
}

fn json<B: Serialize>(request: ApiRequest, body: &B) -> ClientResult<ApiRequest> {
    request
        .with_json(body)
        .map_err(|e| ClientError::Encode(e.to_string()))
}

fn with_query<Q: Serialize>(path: &str, query: &Q) -> ClientResult<String> {
    let query =
        serde_urlencoded::to_string(query).map_err(|e| ClientError::Encode(e.to_string()))?;
    if query.is_empty() {
        Ok(path.to_string())
    } else {
        Ok(format!("{path}?{query}"))
    }
}

fn segment(value: &str) -> std::borrow::Cow<'_, str> {
    urlencoding::encode(value)
}
