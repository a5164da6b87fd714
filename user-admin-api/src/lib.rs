//! Client for the user-admin REST service.
//!
//! [`Client`] wraps a single base endpoint (e.g. `http://localhost:8000/api/users`)
//! and hands out a [`UsersClient`] for the list/create/update/delete operations.
//! Every operation is a single best-effort request: nothing is retried, cached
//! or timed out, and any failure is returned to the caller.
pub mod http;
pub mod users;

mod envelope;

use std::borrow::Cow;

pub use ::http::StatusCode;

pub use envelope::Envelope;
pub use users::{CreateUser, UpdateUser, User, UserId, UsersClient};

#[derive(Clone, Debug)]
pub struct Client {
    base_url: Cow<'static, str>,
    http: http::Client,
}

impl Client {
    /// Creates a new `Client` using `base_url` as the users endpoint.
    pub fn new<T>(base_url: T) -> Self
    where
        T: Into<Cow<'static, str>>,
    {
        Self {
            base_url: base_url.into(),
            http: http::Client::new(),
        }
    }

    /// Returns the base URL of the users endpoint.
    #[inline]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn users(&self) -> UsersClient<'_> {
        UsersClient::new(self)
    }

    /// Returns a new [`http::RequestBuilder`] seeded with the base URL.
    pub(crate) fn request(&self) -> http::RequestBuilder {
        http::RequestBuilder::new(self.base_url.to_string())
    }

    pub(crate) async fn send(&self, request: http::Request) -> Result<http::Response> {
        self.http.send(request).await
    }
}

impl PartialEq for Client {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Transport(#[from] http::Error),
    #[error("bad status code: {0}")]
    BadStatusCode(StatusCode),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns the status code of the response when the request itself
    /// succeeded but the server answered with a non-2xx status.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::BadStatusCode(status) => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
