//! # wfsprobe
//!
//! Diagnostic probes for GeoServer Web Feature Service (WFS) endpoints.
//!
//! The crate exposes a small, transport-agnostic WFS client speaking the
//! OGC WFS 1.1.0 query-parameter conventions over HTTPS with HTTP Basic
//! authentication, plus two probe runners that reproduce the field
//! diagnostics this crate grew out of:
//!
//! * [`probe::check_columns`] — issue a `DescribeFeatureType` request and
//!   print the raw schema response;
//! * [`probe::list_layers`] — issue two `GetFeature` attempts (bare and
//!   namespace-qualified `typeName`) and report each HTTP status.
//!
//! Responses are surfaced exactly as received and never parsed.
//!
//! # Example
//! ```no_run
//! use wfsprobe::{Credentials, WfsClientBuilder};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = WfsClientBuilder::with_reqwest_transport()
//!         .with_workspace("BU_anekal_Sva")
//!         .with_credentials(Credentials {
//!             username: "BU_anekal_Sva",
//!             password: "secret",
//!         })
//!         .build()?;
//!
//!     wfsprobe::probe::check_columns(
//!         &client,
//!         "BU_anekal_Sva:anekal_polygon",
//!         &mut std::io::stdout(),
//!     )
//!     .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! * `reqwest` (default) — [`reqwest`]-backed transport;
//! * `blocking` (default) — blocking transport and probe runners for use
//!   without an async runtime.
//!
//! The client is transport-layer-agnostic: implement
//! [`core::Transport`] (or [`core::blocking::Transport`]) to substitute your
//! own transport, which is also how the probe runners are tested.
//!
//! [`reqwest`]: https://docs.rs/reqwest

pub mod core;
pub mod probe;
pub mod transport;

#[doc(inline)]
pub use wfs::{Credentials, WfsClientBuilder, WfsClientInstance, WfsConfig};
pub mod wfs;

#[cfg(feature = "reqwest")]
#[doc(inline)]
pub use wfs::WfsClient;
