//! Bearer-credential acquisition for the push provider.
//!
//! The sender only depends on the `AccessTokenProvider` trait; the concrete
//! `ServiceAccountCredentials` implementation performs the OAuth2 JWT-bearer
//! exchange against the Google token endpoint. Tokens are fetched fresh on
//! every call - this module deliberately carries no cache.

mod service_account;

pub use service_account::{ServiceAccountCredentials, ServiceAccountKey};

use crate::error::PushResult;
use async_trait::async_trait;

/// OAuth scope required to call the FCM v1 send endpoint
pub const FCM_SCOPE: &str = "https://www.googleapis.com/auth/firebase.messaging";

/// A short-lived bearer credential
#[derive(Debug, Clone)]
pub struct AccessToken {
    /// The bearer token string, used as the `Authorization` header value
    pub token: String,
    /// Remaining validity in seconds, as reported by the token endpoint
    pub expires_in: i64,
}

/// Trait for collaborators that produce bearer credentials.
///
/// Implementations may perform network I/O and must handle concurrent
/// calls safely; the sender places no lock around them and does not retry.
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    /// Obtain a fresh access token
    async fn access_token(&self) -> PushResult<AccessToken>;
}
