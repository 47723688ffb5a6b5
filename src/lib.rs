//! fcm-push
//!
//! Client adapter for Firebase Cloud Messaging's HTTP v1 send endpoint.
//! Formats a notification request into the FCM wire schema, obtains an
//! OAuth2 service-account bearer token, issues one HTTP POST, and maps
//! provider error responses to typed failures. One attempt per send: no
//! queueing, no retries, no delivery guarantees beyond that.

pub mod auth;
pub mod config;
pub mod error;
pub mod external;
pub mod providers;

pub use config::{ConfigLoader, FcmSettings, Settings};
pub use error::{PushError, PushResult};
pub use external::build_http_client;
pub use providers::{
    Alert, FcmProvider, Payload, PayloadValue, PushProvider, SendRequest, SendResponse,
};
