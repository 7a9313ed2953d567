//! # Basic-auth middleware
//!
//! Transport middleware that injects the `Authorization` header required by
//! protected GeoServer workspaces. Every [`WfsClientInstance`] wraps its
//! transport in this middleware at build time.
//!
//! [`WfsClientInstance`]: ../../wfs/wfs_client/struct.WfsClientInstance.html

use crate::core::{Transport, TransportRequest, TransportResponse, WfsError};
use base64::{engine::general_purpose, Engine as _};

/// Transport decorator that attaches HTTP Basic credentials to every request.
///
/// The header value is computed once, when the middleware is created; the
/// credential pair itself is not retained.
pub struct BasicAuthMiddleware<T> {
    pub(crate) transport: T,
    pub(crate) auth_header: String,
}

impl<T> BasicAuthMiddleware<T> {
    /// Wrap `transport` so that every request carries
    /// `Authorization: Basic <base64(username:password)>`.
    pub fn new(transport: T, username: &str, password: &str) -> Self {
        let token = general_purpose::STANDARD.encode(format!("{username}:{password}"));

        Self {
            transport,
            auth_header: format!("Basic {token}"),
        }
    }
}

#[async_trait::async_trait]
impl<T> Transport for BasicAuthMiddleware<T>
where
    T: Transport + Send + Sync,
{
    async fn send(&self, mut req: TransportRequest) -> Result<TransportResponse, WfsError> {
        req.headers
            .insert("Authorization".into(), self.auth_header.clone());

        self.transport.send(req).await
    }
}

#[cfg(feature = "blocking")]
impl<T> crate::core::blocking::Transport for BasicAuthMiddleware<T>
where
    T: crate::core::blocking::Transport,
{
    fn send(&self, mut req: TransportRequest) -> Result<TransportResponse, WfsError> {
        req.headers
            .insert("Authorization".into(), self.auth_header.clone());

        self.transport.send(req)
    }
}

#[cfg(test)]
mod should {
    use super::*;

    #[tokio::test]
    async fn attach_basic_auth_header() {
        #[derive(Default)]
        struct MockTransport;

        #[async_trait::async_trait]
        impl Transport for MockTransport {
            async fn send(
                &self,
                request: TransportRequest,
            ) -> Result<TransportResponse, WfsError> {
                // base64("BU_anekal_Sva:Or!U$er@bhm123")
                assert_eq!(
                    "Basic QlVfYW5la2FsX1N2YTpPciFVJGVyQGJobTEyMw==",
                    request.headers.get("Authorization").unwrap().clone()
                );
                Ok(TransportResponse::default())
            }
        }

        let middleware =
            BasicAuthMiddleware::new(MockTransport, "BU_anekal_Sva", "Or!U$er@bhm123");

        let result = middleware.send(TransportRequest::default()).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn keep_existing_headers() {
        #[derive(Default)]
        struct MockTransport;

        #[async_trait::async_trait]
        impl Transport for MockTransport {
            async fn send(
                &self,
                request: TransportRequest,
            ) -> Result<TransportResponse, WfsError> {
                assert_eq!("b", request.headers.get("a").unwrap().clone());
                assert!(request.headers.contains_key("Authorization"));
                Ok(TransportResponse::default())
            }
        }

        let middleware = BasicAuthMiddleware::new(MockTransport, "user", "pass");

        let result = middleware
            .send(TransportRequest {
                headers: [("a".into(), "b".into())].into(),
                ..Default::default()
            })
            .await;

        assert!(result.is_ok());
    }
}
