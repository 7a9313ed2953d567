//! # WFS operations
//!
//! This module provides the structures and methods for talking to a
//! GeoServer WFS endpoint: the workspace-scoped client and the
//! `DescribeFeatureType` / `GetFeature` operations. It is intended to be
//! used by the [`wfsprobe`] crate.
//!
//! [`wfsprobe`]: ../index.html

pub mod describe_feature_type;
pub mod get_feature;

pub use wfs_client::{Credentials, WfsClientBuilder, WfsClientInstance, WfsConfig};
pub mod wfs_client;

#[cfg(feature = "reqwest")]
pub use wfs_client_alias::WfsClient;

/// WFS protocol version spoken by every probe operation.
pub(crate) const WFS_VERSION: &str = "1.1.0";

#[cfg(feature = "reqwest")]
mod wfs_client_alias {
    use super::WfsClientInstance;
    use crate::transport::{middleware::BasicAuthMiddleware, TransportReqwest};

    /// WFS probe client backed by the default [`reqwest`] transport.
    ///
    /// # Examples
    /// ```
    /// use wfsprobe::{Credentials, WfsClient, WfsClientBuilder};
    ///
    /// # fn main() -> Result<(), wfsprobe::core::WfsError> {
    /// let client: WfsClient = WfsClientBuilder::with_reqwest_transport()
    ///     .with_workspace("BU_anekal_Sva")
    ///     .with_credentials(Credentials {
    ///         username: "BU_anekal_Sva",
    ///         password: "secret",
    ///     })
    ///     .build()?;
    ///
    /// let _ = client;
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// [`reqwest`]: https://docs.rs/reqwest
    pub type WfsClient = WfsClientInstance<BasicAuthMiddleware<TransportReqwest>>;
}
