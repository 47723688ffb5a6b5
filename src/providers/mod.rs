//! Push system with pluggable providers.
//!
//! The core trait `PushProvider` allows additional vendors (APNs, webpush
//! relays, etc.) to plug in next to the FCM implementation.

mod provider;

pub mod fcm;

pub use fcm::FcmProvider;
pub use provider::{Alert, Payload, PayloadValue, PushProvider, SendRequest, SendResponse};
