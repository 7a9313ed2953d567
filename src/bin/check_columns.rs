//! Print the column schema of the Anekal polygon layer.
//!
//! One authenticated `DescribeFeatureType` request against the production
//! GeoServer; every failure is printed rather than propagated, so the probe
//! always exits normally.

use std::io;

use wfsprobe::{probe, transport::reqwest::blocking::TransportReqwest, Credentials, WfsClientBuilder};

const HOSTNAME: &str = "https://rdgis.karnataka.gov.in";
const WORKSPACE: &str = "BU_anekal_Sva";
const USERNAME: &str = "BU_anekal_Sva";
const PASSWORD: &str = "Or!U$er@bhm123";
const LAYER: &str = "BU_anekal_Sva:anekal_polygon";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let transport = {
        let mut transport = TransportReqwest::new();
        transport.set_hostname(HOSTNAME);
        transport
    };

    let client = WfsClientBuilder::with_transport(transport)
        .with_workspace(WORKSPACE)
        .with_credentials(Credentials {
            username: USERNAME,
            password: PASSWORD,
        })
        .build()?;

    probe::check_columns_blocking(&client, LAYER, &mut io::stdout())?;

    Ok(())
}
