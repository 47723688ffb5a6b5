//! FCM HTTP v1 push provider: value coercion, wire-message construction,
//! and send orchestration.

pub mod message;
pub mod sender;
pub mod values;

pub use sender::{BASE_URL, FcmProvider};
