//! Broadcast API client seam for livecast.
//!
//! This crate defines the asynchronous interface the publishing controller
//! uses to drive the remote platform's broadcast lifecycle. Concrete HTTP
//! clients live with the host; the controller only sees the trait.

mod client;
mod error;

pub use client::BroadcastApi;
pub use error::{ApiError, ApiResult};
