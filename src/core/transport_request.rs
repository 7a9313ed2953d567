//! # Transport Request
//!
//! This module contains the `TransportRequest` struct and related types.
//!
//! It is intended to be used by the [`wfsprobe`] crate.
//!
//! [`wfsprobe`]: ../index.html

use std::collections::HashMap;

/// This struct represents a request to be sent to a WFS endpoint.
///
/// This struct represents a request to be sent to a WFS endpoint. It is used
/// by the [`Transport`] trait.
///
/// All WFS probe operations are plain `GET` requests; the request is fully
/// described by its path, query parameters and headers.
///
/// [`Transport`]: ../transport/trait.Transport.html
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct TransportRequest {
    /// path to the resource
    pub path: String,

    /// query parameters to be sent with the request
    pub query_parameters: HashMap<String, String>,

    /// headers to be sent with the request
    pub headers: HashMap<String, String>,
}
