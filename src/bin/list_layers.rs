//! Probe which `typeName` form the Bengaluru East workspace accepts.
//!
//! Two authenticated `GetFeature` attempts (bare layer name, then
//! namespace-qualified) against the production GeoServer. Non-200 responses
//! are reported with a body snippet; a transport-level failure aborts the
//! probe with a process error.

use std::io;

use wfsprobe::{probe, transport::reqwest::blocking::TransportReqwest, Credentials, WfsClientBuilder};

const HOSTNAME: &str = "https://rdgis.karnataka.gov.in";
const WORKSPACE: &str = "BU_bengaluru_east_Sva";
const USERNAME: &str = "BU_bengaluru_east_Sva";
const PASSWORD: &str = "Or!U$er@bhm123";
const LAYER: &str = "east_polygon";

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

    probe::list_layers_blocking(&client, LAYER, &mut io::stdout())?;

    Ok(())
}
