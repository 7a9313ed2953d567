//! WFS client module
//!
//! This module contains the [`WfsClientInstance`] struct and its staged
//! builder. A client bundles a transport, the target GeoServer workspace and
//! the Basic-auth credentials, and exposes the probe operations.

use std::{ops::Deref, sync::Arc};

use crate::{
    core::WfsError,
    transport::middleware::BasicAuthMiddleware,
};

/// HTTP Basic credential pair for a protected GeoServer workspace.
///
/// Analogous to a login: the username is typically the workspace name
/// itself. Credentials are consumed while building the client; only the
/// derived `Authorization` header is retained afterwards.
///
/// # Examples
/// ```
/// use wfsprobe::Credentials;
///
/// Credentials {
///     username: "BU_anekal_Sva",
///     password: "secret",
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Credentials<S>
where
    S: Into<String>,
{
    /// Basic-auth user name.
    pub username: S,

    /// Basic-auth password.
    pub password: S,
}

/// Client configuration retained for the lifetime of the client.
#[derive(Debug, Clone)]
pub struct WfsConfig {
    /// GeoServer workspace the client talks to. Determines the request path
    /// (`/geoserver/{workspace}/wfs`) and the namespace prefix of qualified
    /// feature-type names.
    pub workspace: String,
}

impl WfsConfig {
    /// Request path of the workspace-scoped WFS endpoint.
    pub(crate) fn wfs_path(&self) -> String {
        format!("/geoserver/{}/wfs", self.workspace)
    }

    /// Namespace-qualified form of a bare layer name
    /// (`{workspace}:{layer}`).
    pub(crate) fn qualified_type_name(&self, layer: &str) -> String {
        format!("{}:{}", self.workspace, layer)
    }
}

/// WFS probe client.
///
/// The client is transport-layer-agnostic, so you can use any transport layer
/// that implements the [`Transport`] trait.
///
/// Clients are created with the [`WfsClientBuilder`]; each one is scoped to a
/// single workspace and credential pair.
///
/// # Synchronization
///
/// Client is thread-safe and can be shared between threads. You don't need to
/// wrap it in `Arc` or `Mutex` because it is already wrapped in `Arc` and
/// holds no mutable state.
///
/// [`Transport`]: crate::core::Transport
pub struct WfsClientInstance<T> {
    pub(crate) inner: Arc<WfsClientRef<T>>,
}

impl<T> Deref for WfsClientInstance<T> {
    type Target = WfsClientRef<T>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<T> Clone for WfsClientInstance<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

/// Shared reference counterpart of [`WfsClientInstance`].
pub struct WfsClientRef<T> {
    /// Transport used by all probe operations, already wrapped in the
    /// Basic-auth middleware.
    pub(crate) transport: T,

    /// Client configuration.
    pub(crate) config: WfsConfig,
}

/// WFS client builder.
///
/// The builder is staged: transport, then workspace, then credentials. The
/// final [`build`] wraps the transport in a [`BasicAuthMiddleware`] so every
/// request the client sends carries the `Authorization` header.
///
/// # Examples
/// ```
/// use wfsprobe::{Credentials, WfsClientBuilder};
/// # use wfsprobe::core::{Transport, TransportRequest, TransportResponse, WfsError};
/// # struct MyTransport;
/// # #[async_trait::async_trait]
/// # impl Transport for MyTransport {
/// #     async fn send(&self, _request: TransportRequest) -> Result<TransportResponse, WfsError> {
/// #         unimplemented!()
/// #     }
/// # }
///
/// # fn main() -> Result<(), WfsError> {
/// // note that MyTransport must implement the `Transport` trait
/// let client = WfsClientBuilder::with_transport(MyTransport)
///     .with_workspace("BU_anekal_Sva")
///     .with_credentials(Credentials {
///         username: "BU_anekal_Sva",
///         password: "secret",
///     })
///     .build()?;
/// # Ok(())
/// # }
/// ```
///
/// [`build`]: WfsClientCredentialsBuilder::build
pub struct WfsClientBuilder<T> {
    pub(crate) transport: Option<T>,
}

impl<T> WfsClientBuilder<T> {
    /// Create a builder around your own [`Transport`] implementation.
    ///
    /// [`Transport`]: crate::core::Transport
    pub fn with_transport(transport: T) -> WfsClientBuilder<T> {
        WfsClientBuilder {
            transport: Some(transport),
        }
    }

    /// Set the GeoServer workspace the client is scoped to.
    pub fn with_workspace<S>(self, workspace: S) -> WfsClientWorkspaceBuilder<T>
    where
        S: Into<String>,
    {
        WfsClientWorkspaceBuilder {
            transport: self.transport,
            workspace: workspace.into(),
        }
    }
}

/// Intermediate builder stage holding the transport and workspace.
pub struct WfsClientWorkspaceBuilder<T> {
    pub(crate) transport: Option<T>,
    pub(crate) workspace: String,
}

impl<T> WfsClientWorkspaceBuilder<T> {
    /// Set the Basic-auth credentials used for every request.
    pub fn with_credentials<S>(self, credentials: Credentials<S>) -> WfsClientCredentialsBuilder<T>
    where
        S: Into<String>,
    {
        WfsClientCredentialsBuilder {
            transport: self.transport,
            workspace: self.workspace,
            username: credentials.username.into(),
            password: credentials.password.into(),
        }
    }
}

/// Final builder stage; [`build`] produces the client.
///
/// [`build`]: WfsClientCredentialsBuilder::build
pub struct WfsClientCredentialsBuilder<T> {
    pub(crate) transport: Option<T>,
    pub(crate) workspace: String,
    pub(crate) username: String,
    pub(crate) password: String,
}

impl<T> WfsClientCredentialsBuilder<T> {
    /// Build the [`WfsClientInstance`], wrapping the transport in the
    /// Basic-auth middleware.
    ///
    /// # Errors
    /// Returns [`WfsError::ClientInitializationError`] if no transport was
    /// provided.
    pub fn build(self) -> Result<WfsClientInstance<BasicAuthMiddleware<T>>, WfsError> {
        let transport = self.transport.ok_or_else(|| {
            WfsError::ClientInitializationError("Transport is not set".into())
        })?;

        let transport = BasicAuthMiddleware::new(transport, &self.username, &self.password);

        Ok(WfsClientInstance {
            inner: Arc::new(WfsClientRef {
                transport,
                config: WfsConfig {
                    workspace: self.workspace,
                },
            }),
        })
    }
}
