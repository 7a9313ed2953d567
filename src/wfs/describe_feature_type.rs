//! DescribeFeatureType module.
//!
//! Query the schema (attribute list) of a feature type.
//!
//! The [`DescribeFeatureTypeBuilder`] is created by the
//! [`describe_feature_type`] method of the client and executed against the
//! client's transport. The response body is surfaced verbatim; no parsing is
//! attempted.
//!
//! [`describe_feature_type`]: WfsClientInstance::describe_feature_type

use derive_builder::Builder;

use crate::{
    core::{Transport, TransportRequest, TransportResponse, WfsError},
    wfs::{wfs_client::WfsClientInstance, WFS_VERSION},
};

impl<T> WfsClientInstance<T> {
    /// Create a new `DescribeFeatureType` request builder.
    ///
    /// # Example
    /// ```no_run
    /// # use wfsprobe::{Credentials, WfsClientBuilder};
    ///
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = WfsClientBuilder::with_reqwest_transport()
    ///     .with_workspace("BU_anekal_Sva")
    ///     .with_credentials(Credentials {
    ///         username: "BU_anekal_Sva",
    ///         password: "secret",
    ///     })
    ///     .build()?;
    ///
    /// let result = client
    ///     .describe_feature_type()
    ///     .type_name("BU_anekal_Sva:anekal_polygon")
    ///     .execute()
    ///     .await?;
    ///
    /// println!("{}", result.body);
    /// # Ok(())
    /// # }
    /// ```
    pub fn describe_feature_type(&self) -> DescribeFeatureTypeBuilder<T> {
        DescribeFeatureTypeBuilder {
            wfs_client: Some(self.clone()),
            ..Default::default()
        }
    }
}

/// The `DescribeFeatureType` request.
///
/// Issued as a GET against the workspace WFS endpoint with the WFS 1.1.0
/// query-parameter conventions.
#[derive(Builder)]
#[builder(pattern = "owned", build_fn(vis = "pub(super)"))]
pub struct DescribeFeatureType<T> {
    #[builder(setter(custom))]
    pub(super) wfs_client: WfsClientInstance<T>,

    /// Feature type to describe, usually namespace-qualified as
    /// `workspace:layer`.
    #[builder(setter(into))]
    pub(super) type_name: String,

    /// Requested schema representation. GeoServer answers with XML schema
    /// when it does not support the requested format.
    #[builder(setter(into), default = "String::from(\"application/json\")")]
    pub(super) output_format: String,
}

impl<T> DescribeFeatureType<T> {
    fn transport_request(&self) -> TransportRequest {
        TransportRequest {
            path: self.wfs_client.config.wfs_path(),
            query_parameters: [
                ("service".into(), "WFS".into()),
                ("version".into(), WFS_VERSION.into()),
                ("request".into(), "DescribeFeatureType".into()),
                ("typeName".into(), self.type_name.clone()),
                ("outputFormat".into(), self.output_format.clone()),
            ]
            .into(),
            ..Default::default()
        }
    }
}

impl<T> DescribeFeatureTypeBuilder<T>
where
    T: Transport,
{
    /// Execute the request and return the raw schema response.
    ///
    /// # Errors
    /// Returns [`WfsError::RequestBuildError`] if `type_name` was not set
    /// and [`WfsError::TransportError`] for any network-level failure.
    pub async fn execute(self) -> Result<DescribeFeatureTypeResult, WfsError> {
        let request = self
            .build()
            .map_err(|err| WfsError::RequestBuildError(err.to_string()))?;

        let transport_request = request.transport_request();
        let response = request
            .wfs_client
            .transport
            .send(transport_request)
            .await?;

        Ok(response.into())
    }
}

#[cfg(feature = "blocking")]
impl<T> DescribeFeatureTypeBuilder<T>
where
    T: crate::core::blocking::Transport,
{
    /// Execute the request on a blocking transport and return the raw
    /// schema response.
    ///
    /// # Errors
    /// Returns [`WfsError::RequestBuildError`] if `type_name` was not set
    /// and [`WfsError::TransportError`] for any network-level failure.
    pub fn execute_blocking(self) -> Result<DescribeFeatureTypeResult, WfsError> {
        let request = self
            .build()
            .map_err(|err| WfsError::RequestBuildError(err.to_string()))?;

        let transport_request = request.transport_request();
        let response = request.wfs_client.transport.send(transport_request)?;

        Ok(response.into())
    }
}

/// Result of a `DescribeFeatureType` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescribeFeatureTypeResult {
    /// HTTP status code of the response.
    pub status: u16,

    /// Response body exactly as received, expected to be a JSON or XML
    /// schema description.
    pub body: String,
}

impl From<TransportResponse> for DescribeFeatureTypeResult {
    fn from(response: TransportResponse) -> Self {
        let body = response
            .body
            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
            .unwrap_or_default();

        Self {
            status: response.status,
            body,
        }
    }
}

#[cfg(test)]
mod should {
    use super::*;
    use crate::wfs::wfs_client::{Credentials, WfsClientBuilder};
    use crate::transport::middleware::BasicAuthMiddleware;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MockTransport;

    #[async_trait::async_trait]
    impl Transport for MockTransport {
        async fn send(&self, _request: TransportRequest) -> Result<TransportResponse, WfsError> {
            Ok(TransportResponse {
                status: 200,
                body: Some(b"{\"featureTypes\":[]}".to_vec()),
                ..Default::default()
            })
        }
    }

    fn client() -> WfsClientInstance<BasicAuthMiddleware<MockTransport>> {
        WfsClientBuilder::with_transport(MockTransport)
            .with_workspace("BU_anekal_Sva")
            .with_credentials(Credentials {
                username: "BU_anekal_Sva",
                password: "Or!U$er@bhm123",
            })
            .build()
            .unwrap()
    }

    #[test]
    fn verify_all_query_parameters() {
        let request = client()
            .describe_feature_type()
            .type_name("BU_anekal_Sva:anekal_polygon")
            .build()
            .unwrap()
            .transport_request();

        assert_eq!(
            HashMap::<String, String>::from([
                ("service".into(), "WFS".into()),
                ("version".into(), "1.1.0".into()),
                ("request".into(), "DescribeFeatureType".into()),
                ("typeName".into(), "BU_anekal_Sva:anekal_polygon".into()),
                ("outputFormat".into(), "application/json".into()),
            ]),
            request.query_parameters
        );
    }

    #[test]
    fn target_workspace_endpoint() {
        let request = client()
            .describe_feature_type()
            .type_name("BU_anekal_Sva:anekal_polygon")
            .build()
            .unwrap()
            .transport_request();

        assert_eq!("/geoserver/BU_anekal_Sva/wfs", request.path);
    }

    #[tokio::test]
    async fn surface_body_verbatim() {
        let result = client()
            .describe_feature_type()
            .type_name("BU_anekal_Sva:anekal_polygon")
            .execute()
            .await
            .unwrap();

        assert_eq!(200, result.status);
        assert_eq!("{\"featureTypes\":[]}", result.body);
    }

    #[tokio::test]
    async fn return_err_if_type_name_is_not_provided() {
        let result = client().describe_feature_type().execute().await;

        assert!(matches!(result, Err(WfsError::RequestBuildError(_))));
    }
}
