//! # Reqwest Transport Implementation
//!
//! This module contains the [`TransportReqwest`] struct.
//! It is used to send requests to a WFS endpoint using the [`reqwest`] crate.
//! It is intended to be used by the [`wfsprobe`] crate.
//!
//! It requires the [`reqwest` feature] to be enabled.
//!
//! [`TransportReqwest`]: ./struct.TransportReqwest.html
//! [`reqwest`]: https://docs.rs/reqwest
//! [`wfsprobe`]: ../index.html
//! [`reqwest` feature]: ../index.html#features

use crate::{
    core::{
        error::{WfsError, WfsError::TransportError},
        Transport, TransportRequest, TransportResponse,
    },
    wfs::wfs_client::WfsClientBuilder,
};
use bytes::Bytes;
use log::info;
use reqwest::{header::HeaderMap, StatusCode};
use std::{collections::HashMap, time::Duration};
use urlencoding::encode;

/// Every probe request is bounded by this timeout; a slower server surfaces
/// as a [`WfsError::TransportError`].
pub(crate) const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// This struct is used to send requests to a WFS endpoint using the
/// [`reqwest`] crate. It is used as the transport type for the
/// [`WfsClientInstance`].
///
/// [`reqwest`]: https://docs.rs/reqwest
/// [`WfsClientInstance`]: ../wfs/wfs_client/struct.WfsClientInstance.html
#[derive(Clone, Debug)]
pub struct TransportReqwest {
    reqwest_client: reqwest::Client,

    /// The hostname to use for requests.
    /// It is used as the base URL for all requests.
    ///
    /// It defaults to `https://rdgis.karnataka.gov.in`.
    /// # Examples
    /// ```
    /// use wfsprobe::transport::TransportReqwest;
    ///
    /// let transport = {
    ///    let mut transport = TransportReqwest::default();
    ///    transport.hostname = "https://geoserver.example.com".into();
    ///    transport
    /// };
    /// ```
    pub hostname: String,

    /// Upper bound on each request, [`REQUEST_TIMEOUT`] unless narrowed in
    /// tests.
    request_timeout: Duration,
}

#[async_trait::async_trait]
impl Transport for TransportReqwest {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, WfsError> {
        let request_url = prepare_url(&self.hostname, &request.path, &request.query_parameters);
        info!("{}", request_url);
        let headers = prepare_headers(&request.headers)?;

        let result = self
            .reqwest_client
            .get(request_url)
            .headers(headers)
            .timeout(self.request_timeout)
            .send()
            .await
            .map_err(|e| TransportError(e.to_string()))?;

        let status = result.status();
        result
            .bytes()
            .await
            .map_err(|e| TransportError(e.to_string()))
            .and_then(|bytes| create_result(status, bytes))
    }
}

impl Default for TransportReqwest {
    fn default() -> Self {
        Self {
            reqwest_client: reqwest::Client::default(),
            hostname: "https://rdgis.karnataka.gov.in".into(),
            request_timeout: REQUEST_TIMEOUT,
        }
    }
}

impl TransportReqwest {
    /// Create a new [`TransportReqwest`] instance.
    ///
    /// It provides a default [`reqwest`] client using
    /// [`reqwest::Client::default()`] and a default hostname of
    /// `https://rdgis.karnataka.gov.in`.
    ///
    /// # Example
    /// ```
    /// use wfsprobe::transport::TransportReqwest;
    ///
    /// let transport = TransportReqwest::new();
    /// ```
    ///
    /// [`reqwest`]: https://docs.rs/reqwest
    pub fn new() -> Self {
        Self::default()
    }

    /// set the custom hostname for request
    pub fn set_hostname<S>(&mut self, hostname: S)
    where
        S: Into<String>,
    {
        self.hostname = hostname.into();
    }
}

fn prepare_headers(request_headers: &HashMap<String, String>) -> Result<HeaderMap, WfsError> {
    HeaderMap::try_from(request_headers).map_err(|err| TransportError(err.to_string()))
}

fn prepare_url(hostname: &str, path: &str, query_params: &HashMap<String, String>) -> String {
    if query_params.is_empty() {
        return format!("{}{}", hostname, path);
    }
    let mut qp = query_params
        .iter()
        .fold(format!("{}{}?", hostname, path), |acc_query, (k, v)| {
            format!("{}{}={}&", acc_query, k, encode(v))
        });

    qp.remove(qp.len() - 1);
    qp
}

fn create_result(status: StatusCode, body: Bytes) -> Result<TransportResponse, WfsError> {
    Ok(TransportResponse {
        status: status.as_u16(),
        body: (!body.is_empty()).then(|| body.to_vec()),
        ..Default::default()
    })
}

impl WfsClientBuilder<TransportReqwest> {
    /// Creates a new [`WfsClientBuilder`] with the default
    /// [`TransportReqwest`] transport.
    /// The default transport uses the [`reqwest`] crate to send requests and
    /// the default hostname `https://rdgis.karnataka.gov.in`.
    ///
    /// # Examples
    /// ```
    /// use wfsprobe::{Credentials, WfsClientBuilder};
    ///
    /// # fn main() -> Result<(), wfsprobe::core::WfsError> {
    /// let client = WfsClientBuilder::with_reqwest_transport()
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
    /// [`reqwest`]: https://docs.rs/reqwest
    pub fn with_reqwest_transport() -> WfsClientBuilder<TransportReqwest> {
        WfsClientBuilder {
            transport: Some(TransportReqwest::new()),
        }
    }
}

#[cfg(feature = "blocking")]
pub mod blocking {
    //! # Reqwest Transport Blocking Implementation
    //!
    //! This module contains the [`TransportReqwest`] struct.
    //! It is used to send requests to a WFS endpoint using the [`reqwest`]
    //! crate without an async runtime.
    //!
    //! It requires the `reqwest` and `blocking` features to be enabled.
    //!
    //! [`TransportReqwest`]: ./struct.TransportReqwest.html
    //! [`reqwest`]: https://docs.rs/reqwest

    use log::info;

    use crate::{
        core::{TransportRequest, TransportResponse, WfsError},
        transport::reqwest::{create_result, prepare_headers, prepare_url, REQUEST_TIMEOUT},
        wfs::wfs_client::WfsClientBuilder,
    };

    /// This struct is used to send requests to a WFS endpoint using the
    /// [`reqwest`] crate. It is used as the transport type for the
    /// [`WfsClientInstance`].
    ///
    /// It requires the `reqwest` and `blocking` features to be enabled.
    ///
    /// [`reqwest`]: https://docs.rs/reqwest
    /// [`WfsClientInstance`]: ../../wfs/wfs_client/struct.WfsClientInstance.html
    pub struct TransportReqwest {
        reqwest_client: reqwest::blocking::Client,

        /// The hostname to use for requests.
        /// It is used as the base URL for all requests.
        ///
        /// It defaults to `https://rdgis.karnataka.gov.in`.
        pub hostname: String,

        /// Upper bound on each request, [`REQUEST_TIMEOUT`] unless narrowed
        /// in tests.
        request_timeout: std::time::Duration,
    }

    impl crate::core::blocking::Transport for TransportReqwest {
        fn send(&self, request: TransportRequest) -> Result<TransportResponse, WfsError> {
            let request_url = prepare_url(&self.hostname, &request.path, &request.query_parameters);
            info!("{}", request_url);
            let headers = prepare_headers(&request.headers)?;

            let result = self
                .reqwest_client
                .get(request_url)
                .headers(headers)
                .timeout(self.request_timeout)
                .send()
                .map_err(|e| WfsError::TransportError(e.to_string()))?;

            let status = result.status();
            result
                .bytes()
                .map_err(|e| WfsError::TransportError(e.to_string()))
                .and_then(|bytes| create_result(status, bytes))
        }
    }

    impl Default for TransportReqwest {
        fn default() -> Self {
            Self {
                reqwest_client: reqwest::blocking::Client::default(),
                hostname: "https://rdgis.karnataka.gov.in".into(),
                request_timeout: REQUEST_TIMEOUT,
            }
        }
    }

    impl TransportReqwest {
        /// Create a new blocking [`TransportReqwest`] instance with the
        /// default hostname `https://rdgis.karnataka.gov.in`.
        pub fn new() -> Self {
            Self::default()
        }

        /// set the custom hostname for request
        pub fn set_hostname<S>(&mut self, hostname: S)
        where
            S: Into<String>,
        {
            self.hostname = hostname.into();
        }
    }

    impl WfsClientBuilder<TransportReqwest> {
        /// Creates a new [`WfsClientBuilder`] with the default blocking
        /// [`TransportReqwest`] transport.
        ///
        /// # Examples
        /// ```
        /// use wfsprobe::{Credentials, WfsClientBuilder};
        ///
        /// # fn main() -> Result<(), wfsprobe::core::WfsError> {
        /// let client = WfsClientBuilder::with_reqwest_blocking_transport()
        ///     .with_workspace("BU_anekal_Sva")
        ///     .with_credentials(Credentials {
        ///         username: "BU_anekal_Sva",
        ///         password: "secret",
        ///     })
        ///     .build()?;
        /// # Ok(())
        /// # }
        /// ```
        pub fn with_reqwest_blocking_transport() -> WfsClientBuilder<TransportReqwest> {
            WfsClientBuilder {
                transport: Some(TransportReqwest::new()),
            }
        }
    }

    #[cfg(test)]
    mod should {
        use super::*;
        use crate::core::blocking::Transport;

        use wiremock::matchers::{header, method, path as path_matcher, query_param};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        #[test]
        fn bound_requests_by_thirty_seconds() {
            assert_eq!(REQUEST_TIMEOUT, TransportReqwest::default().request_timeout);
        }

        #[tokio::test]
        async fn send_via_get_method() {
            let _ = env_logger::builder().is_test(true).try_init();
            let server = MockServer::start().await;

            Mock::given(method("GET"))
                .and(path_matcher("/geoserver/BU_anekal_Sva/wfs"))
                .and(query_param("request", "DescribeFeatureType"))
                .respond_with(ResponseTemplate::new(200).set_body_string("{\"featureTypes\":[]}"))
                .mount(&server)
                .await;

            tokio::task::spawn_blocking(move || {
                let transport = TransportReqwest {
                    hostname: server.uri(),
                    ..Default::default()
                };

                let request = TransportRequest {
                    path: "/geoserver/BU_anekal_Sva/wfs".into(),
                    query_parameters: [("request".into(), "DescribeFeatureType".into())].into(),
                    ..Default::default()
                };

                let response = transport.send(request).unwrap();

                assert_eq!(response.status, 200);
            })
            .await
            .unwrap();
        }

        #[tokio::test]
        async fn send_basic_auth_header() {
            let server = MockServer::start().await;

            Mock::given(method("GET"))
                .and(path_matcher("/geoserver/BU_anekal_Sva/wfs"))
                .and(header(
                    "Authorization",
                    "Basic QlVfYW5la2FsX1N2YTpPciFVJGVyQGJobTEyMw==",
                ))
                .respond_with(ResponseTemplate::new(200))
                .mount(&server)
                .await;

            tokio::task::spawn_blocking(move || {
                let transport = {
                    let mut transport = TransportReqwest::default();
                    transport.set_hostname(server.uri());
                    transport
                };
                let middleware = crate::transport::BasicAuthMiddleware::new(
                    transport,
                    "BU_anekal_Sva",
                    "Or!U$er@bhm123",
                );

                let request = TransportRequest {
                    path: "/geoserver/BU_anekal_Sva/wfs".into(),
                    ..Default::default()
                };

                let response = middleware.send(request).unwrap();

                assert_eq!(response.status, 200);
            })
            .await
            .unwrap();
        }
    }
}

#[cfg(test)]
mod should {
    use super::*;
    use test_case::test_case;
    use wiremock::matchers::{method, path as path_matcher, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test_case("/geoserver/BU_anekal_Sva/wfs" ; "anekal workspace")]
    #[test_case("/geoserver/BU_bengaluru_east_Sva/wfs" ; "bengaluru east workspace")]
    #[tokio::test]
    async fn send_via_get_method(path_to_send: &str) {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path_matcher(path_to_send.to_string()))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"featureTypes\":[]}"))
            .mount(&server)
            .await;

        let transport = TransportReqwest {
            hostname: server.uri(),
            ..Default::default()
        };

        let request = TransportRequest {
            path: path_to_send.into(),
            query_parameters: [("service".into(), "WFS".into())].into(),
            ..Default::default()
        };

        let response = transport.send(request).await.unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.body, Some(b"{\"featureTypes\":[]}".to_vec()));
    }

    #[tokio::test]
    async fn encode_query_parameter_values() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path_matcher("/geoserver/BU_anekal_Sva/wfs"))
            .and(query_param("typeName", "BU_anekal_Sva:anekal_polygon"))
            .and(query_param("outputFormat", "application/json"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let transport = TransportReqwest {
            hostname: server.uri(),
            ..Default::default()
        };

        let request = TransportRequest {
            path: "/geoserver/BU_anekal_Sva/wfs".into(),
            query_parameters: [
                ("typeName".into(), "BU_anekal_Sva:anekal_polygon".into()),
                ("outputFormat".into(), "application/json".into()),
            ]
            .into(),
            ..Default::default()
        };

        let response = transport.send(request).await.unwrap();

        assert_eq!(response.status, 200);
    }

    #[tokio::test]
    async fn surface_error_statuses_as_responses() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path_matcher("/geoserver/BU_anekal_Sva/wfs"))
            .respond_with(ResponseTemplate::new(404).set_body_string("Layer not found"))
            .mount(&server)
            .await;

        let transport = TransportReqwest {
            hostname: server.uri(),
            ..Default::default()
        };

        let request = TransportRequest {
            path: "/geoserver/BU_anekal_Sva/wfs".into(),
            ..Default::default()
        };

        let response = transport.send(request).await.unwrap();

        assert_eq!(response.status, 404);
        assert_eq!(response.body, Some(b"Layer not found".to_vec()));
    }

    #[test]
    fn bound_requests_by_thirty_seconds() {
        assert_eq!(Duration::from_secs(30), REQUEST_TIMEOUT);
        assert_eq!(REQUEST_TIMEOUT, TransportReqwest::default().request_timeout);
    }

    #[tokio::test]
    async fn time_out_slow_responses() {
        let _ = env_logger::builder().is_test(true).try_init();
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path_matcher("/geoserver/BU_anekal_Sva/wfs"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
            .mount(&server)
            .await;

        let transport = TransportReqwest {
            hostname: server.uri(),
            request_timeout: Duration::from_millis(50),
            ..Default::default()
        };

        let result = transport
            .send(TransportRequest {
                path: "/geoserver/BU_anekal_Sva/wfs".into(),
                ..Default::default()
            })
            .await;

        assert!(matches!(result, Err(WfsError::TransportError(_))));
    }

    #[tokio::test]
    async fn return_err_on_unreachable_host() {
        let transport = TransportReqwest {
            hostname: "http://127.0.0.1:9".into(),
            ..Default::default()
        };

        let result = transport.send(TransportRequest::default()).await;

        assert!(matches!(result, Err(WfsError::TransportError(_))));
    }
}
