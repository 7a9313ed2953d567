//! # Transport module
//!
//! This module contains the [`Transport`] trait and the [`TransportRequest`] and [`TransportResponse`] types.
//!
//! You can implement this trait for your own types, or use one of the provided
//! features to use a transport library.

use super::{transport_response::TransportResponse, TransportRequest, WfsError};

/// This trait is used to send requests to a WFS endpoint.
///
/// You can implement this trait for your own types, or use one of the provided
/// features to use a transport library.
///
/// # Examples
/// ```
/// use wfsprobe::core::{Transport, TransportRequest, TransportResponse, WfsError};
///
/// struct MyTransport;
///
/// #[async_trait::async_trait]
/// impl Transport for MyTransport {
///    async fn send(&self, req: TransportRequest) -> Result<TransportResponse, WfsError> {
///         // Send your request here
///
///         Ok(TransportResponse::default())
///    }
/// }
/// ```
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// Send a request to a WFS endpoint.
    ///
    /// # Errors
    /// Should return a [`WfsError::TransportError`] if the request cannot be
    /// sent.
    async fn send(&self, req: TransportRequest) -> Result<TransportResponse, WfsError>;
}

#[cfg(feature = "blocking")]
pub mod blocking {
    //! # Blocking transport module
    //!
    //! This module contains the [`Transport`] trait and the [`TransportRequest`] and [`TransportResponse`] types.
    //!
    //! You can implement this trait for your own types, or use one of the provided
    //! features to use a transport library.
    //!
    //! This trait is used for blocking requests.

    use crate::core::{TransportRequest, TransportResponse, WfsError};

    /// This trait is used to send requests to a WFS endpoint.
    ///
    /// You can implement this trait for your own types, or use one of the provided
    /// features to use a transport library.
    ///
    /// This trait is used for blocking requests.
    ///
    /// # Examples
    /// ```
    /// use wfsprobe::core::{blocking::Transport, TransportRequest, TransportResponse, WfsError};
    ///
    /// struct MyTransport;
    ///
    /// impl Transport for MyTransport {
    ///    fn send(&self, req: TransportRequest) -> Result<TransportResponse, WfsError> {
    ///         // Send your request here
    ///
    ///         Ok(TransportResponse::default())
    ///    }
    /// }
    /// ```
    pub trait Transport {
        /// Send a request to a WFS endpoint.
        ///
        /// # Errors
        /// Should return a [`WfsError::TransportError`] if the request cannot
        /// be sent.
        fn send(&self, req: TransportRequest) -> Result<TransportResponse, WfsError>;
    }
}
