//! GetFeature module.
//!
//! Fetch feature data (geometry + attributes) for a layer.
//!
//! The [`GetFeatureBuilder`] is created by the [`get_feature`] method of the
//! client. The original diagnostic flow requests a single feature in
//! `EPSG:4326`, which the builder defaults reproduce; the response body is
//! surfaced verbatim.
//!
//! [`get_feature`]: WfsClientInstance::get_feature

use derive_builder::Builder;

use crate::{
    core::{Transport, TransportRequest, TransportResponse, WfsError},
    wfs::{wfs_client::WfsClientInstance, WFS_VERSION},
};

impl<T> WfsClientInstance<T> {
    /// Create a new `GetFeature` request builder.
    ///
    /// # Example
    /// ```no_run
    /// # use wfsprobe::{Credentials, WfsClientBuilder};
    ///
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = WfsClientBuilder::with_reqwest_transport()
    ///     .with_workspace("BU_bengaluru_east_Sva")
    ///     .with_credentials(Credentials {
    ///         username: "BU_bengaluru_east_Sva",
    ///         password: "secret",
    ///     })
    ///     .build()?;
    ///
    /// let result = client
    ///     .get_feature()
    ///     .type_name("east_polygon")
    ///     .execute()
    ///     .await?;
    ///
    /// println!("Status: {}", result.status);
    /// # Ok(())
    /// # }
    /// ```
    pub fn get_feature(&self) -> GetFeatureBuilder<T> {
        GetFeatureBuilder {
            wfs_client: Some(self.clone()),
            ..Default::default()
        }
    }
}

/// The `GetFeature` request.
///
/// Issued as a GET against the workspace WFS endpoint. GeoServer accepts the
/// `typeName` either bare (`east_polygon`) or namespace-qualified
/// (`BU_bengaluru_east_Sva:east_polygon`) depending on its configuration,
/// which is exactly what the layer-name probe explores.
#[derive(Builder)]
#[builder(pattern = "owned", build_fn(vis = "pub(super)"))]
pub struct GetFeature<T> {
    #[builder(setter(custom))]
    pub(super) wfs_client: WfsClientInstance<T>,

    /// Feature layer to query, bare or namespace-qualified.
    #[builder(setter(into))]
    pub(super) type_name: String,

    /// Upper bound on the number of features returned.
    #[builder(default = "1")]
    pub(super) max_features: u32,

    /// Spatial reference system of the returned geometries.
    #[builder(setter(into), default = "String::from(\"EPSG:4326\")")]
    pub(super) srs_name: String,

    /// Requested encoding of the feature collection.
    #[builder(setter(into), default = "String::from(\"application/json\")")]
    pub(super) output_format: String,
}

impl<T> GetFeature<T> {
    fn transport_request(&self) -> TransportRequest {
        TransportRequest {
            path: self.wfs_client.config.wfs_path(),
            query_parameters: [
                // the original probe sends the service name lowercase here
                ("service".into(), "wfs".into()),
                ("version".into(), WFS_VERSION.into()),
                ("request".into(), "GetFeature".into()),
                ("typeName".into(), self.type_name.clone()),
                ("maxFeatures".into(), self.max_features.to_string()),
                ("outputFormat".into(), self.output_format.clone()),
                ("srsname".into(), self.srs_name.clone()),
            ]
            .into(),
            ..Default::default()
        }
    }
}

impl<T> GetFeatureBuilder<T>
where
    T: Transport,
{
    /// Execute the request and return the raw feature response.
    ///
    /// # Errors
    /// Returns [`WfsError::RequestBuildError`] if `type_name` was not set
    /// and [`WfsError::TransportError`] for any network-level failure.
    pub async fn execute(self) -> Result<GetFeatureResult, WfsError> {
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
impl<T> GetFeatureBuilder<T>
where
    T: crate::core::blocking::Transport,
{
    /// Execute the request on a blocking transport and return the raw
    /// feature response.
    ///
    /// # Errors
    /// Returns [`WfsError::RequestBuildError`] if `type_name` was not set
    /// and [`WfsError::TransportError`] for any network-level failure.
    pub fn execute_blocking(self) -> Result<GetFeatureResult, WfsError> {
        let request = self
            .build()
            .map_err(|err| WfsError::RequestBuildError(err.to_string()))?;

        let transport_request = request.transport_request();
        let response = request.wfs_client.transport.send(transport_request)?;

        Ok(response.into())
    }
}

/// Result of a `GetFeature` request.
///
/// Non-200 statuses are not errors at this level; the caller decides how to
/// report them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetFeatureResult {
    /// HTTP status code of the response.
    pub status: u16,

    /// Response body exactly as received.
    pub body: String,
}

impl From<TransportResponse> for GetFeatureResult {
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
