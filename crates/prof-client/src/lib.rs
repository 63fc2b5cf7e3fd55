//! # prof-client
//!
//! Typed REST client for the Professor Search backend.
//!
//! Every request reads the bearer token from the shared [`Session`]; a `401`
//! anywhere clears that session. Endpoint groups:
//! - professors (list, priority list, create, update, delete, process, export)
//! - universities
//! - users (profile, registration, admin approval workflow)
//! - auth (login, verify, visitor passwords)
//! - Gemini API keys
//! - dashboard statistics

pub mod auth;
pub mod dashboard;
pub mod export;
pub mod keys;
pub mod professors;
pub mod universities;
pub mod users;

mod error;
pub mod http;

pub use error::ClientError;
pub use professors::ProcessOutcome;

use std::time::Duration;

use prof_auth::Session;
use prof_config::ApiConfig;
use reqwest::Method;
use serde::Serialize;

use crate::http::{Envelope, read_bytes, read_envelope};

/// HTTP client bound to one backend and one session.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    root: String,
    session: Session,
}

impl ApiClient {
    /// Build a client for the configured backend.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] if the API section is not configured,
    /// or [`ClientError::Http`] if the HTTP client fails to build.
    pub fn new(config: &ApiConfig, session: Session) -> Result<Self, ClientError> {
        let root = config.api_root()?;
        let http = reqwest::Client::builder()
            .user_agent(concat!("profsearch/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            root,
            session,
        })
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Fail early when no token is stored.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotLoggedIn`].
    pub fn require_login(&self) -> Result<(), ClientError> {
        if self.session.is_authenticated() {
            Ok(())
        } else {
            Err(ClientError::NotLoggedIn)
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.root)
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        match self.session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send(&self, builder: reqwest::RequestBuilder, path: &str) -> Result<reqwest::Response, ClientError> {
        tracing::debug!(path, "backend request");
        builder.send().await.map_err(|source| ClientError::Connect {
            url: self.url(path),
            source,
        })
    }

    /// Send and decode the envelope without interpreting `success`.
    async fn exchange(
        &self,
        method: Method,
        path: &str,
        body: Option<&(impl Serialize + Sync)>,
    ) -> Result<Envelope, ClientError> {
        let mut builder = self.request(method, path);
        if let Some(body) = body {
            builder = builder.json(body);
        }
        let resp = self.send(builder, path).await?;
        read_envelope(resp, &self.session, path).await
    }

    pub(crate) async fn get(&self, path: &str) -> Result<Envelope, ClientError> {
        self.exchange(Method::GET, path, None::<&()>)
            .await?
            .ensure_success()
    }

    pub(crate) async fn post<B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Envelope, ClientError> {
        self.exchange(Method::POST, path, Some(body))
            .await?
            .ensure_success()
    }

    pub(crate) async fn put<B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Envelope, ClientError> {
        self.exchange(Method::PUT, path, Some(body))
            .await?
            .ensure_success()
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<Envelope, ClientError> {
        self.exchange(Method::DELETE, path, None::<&()>)
            .await?
            .ensure_success()
    }

    pub(crate) async fn get_bytes(&self, path: &str) -> Result<Vec<u8>, ClientError> {
        let resp = self.send(self.request(Method::GET, path), path).await?;
        read_bytes(resp, &self.session, path).await
    }
}
