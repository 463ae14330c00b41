//! Typed client for the Imageer REST API.
//!
//! Requests flow through an explicit middleware pipeline before reaching
//! the [`Transport`](crate::ports::Transport); responses are observed by the
//! same pipeline and then decoded into a [`RequestResult`].

mod api_client;
mod factory;
mod middleware;
mod request;
mod result;
mod unwrap;

pub use api_client::{ApiClient, ApiClientBuilder};
pub use factory::{ClientOptions, create_api_client};
pub use middleware::{
    CredentialsMiddleware, ErrorNotificationMiddleware, Middleware, MiddlewarePipeline,
};
pub use request::{ApiRequest, ApiResponse, Credentials, HttpMethod};
pub use result::{RequestResult, ResponseMeta};
pub use unwrap::{unwrap, unwrap_empty};
