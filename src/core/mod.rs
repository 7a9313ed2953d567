//! # WFS probe core
//!
//! Core functionality of the WFS probe client.
//!
//! The `core` module contains the transport contract and error types shared
//! by every probe operation. It is intended to be used by the [`wfsprobe`]
//! crate.
//!
//! [`wfsprobe`]: ../index.html

pub use error::WfsError;
pub mod error;

pub use transport::Transport;
pub mod transport;

#[cfg(feature = "blocking")]
pub use transport::blocking;

pub use transport_request::TransportRequest;
pub mod transport_request;

pub use transport_response::TransportResponse;
pub mod transport_response;
