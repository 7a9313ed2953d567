//! # Error types
//!
//! This module contains the error types for the [`wfsprobe`] crate.
//!
//! [`wfsprobe`]: ../index.html

/// WFS probe error type
///
/// This type is used to represent errors that can occur while probing a WFS
/// endpoint. It is used as the error type for the [`Result`] type.
///
/// # Examples
/// ```
/// use wfsprobe::core::WfsError;
///
/// fn foo() -> Result<(), WfsError> {
///   Ok(())
/// }
///
/// foo().map_err(|e| match e {
///   WfsError::TransportError(_) => println!("Transport error"),
///   WfsError::RequestBuildError(_) => println!("Request build error"),
///   _ => println!("Other error"),
/// });
/// ```
///
/// [`Result`]: https://doc.rust-lang.org/std/result/enum.Result.html
#[derive(thiserror::Error, Debug)]
pub enum WfsError {
    /// this error is returned when the transport layer fails
    #[error("Transport error: {0}")]
    TransportError(String),

    /// this error is returned when an operation builder is missing a
    /// required field
    #[error("Request build error: {0}")]
    RequestBuildError(String),

    /// this error is returned when the initialization of client fails
    #[error("Client initialization error: {0}")]
    ClientInitializationError(String),

    /// this error is returned when a probe report cannot be written to its
    /// output sink
    #[error("Output error: {0}")]
    OutputError(String),
}
