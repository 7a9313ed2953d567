//! # Transport Providers Module
//!
//! This module contains the Transport Providers that can be used by
//! [`WfsClientInstance`], along with the Basic-auth middleware every client
//! is wrapped in.
//!
//! [`WfsClientInstance`]: ../wfs/wfs_client/struct.WfsClientInstance.html

pub use middleware::BasicAuthMiddleware;
pub mod middleware;

#[cfg(feature = "reqwest")]
pub use self::reqwest::TransportReqwest;
#[cfg(feature = "reqwest")]
pub mod reqwest;
