// proxy core - token plumbing, upstream forwarding, error envelopes

pub mod auth;
pub mod compat;
pub mod error;
pub mod upstream;

pub use error::ProxyError;
pub use upstream::{ProxyReply, UpstreamClient};
