//! # Diagnostic probe runners
//!
//! Best-effort diagnostics against a WFS endpoint, reproducing the output
//! contract of the original field scripts. Each runner writes
//! human-readable text to a caller-supplied sink so the binaries can point
//! it at stdout and tests at a buffer.
//!
//! The two runners handle failures differently, on purpose:
//!
//! * [`check_columns`] catches every operation error and prints its text —
//!   the probe itself always completes;
//! * [`list_layers`] lets transport-level failures propagate and only
//!   reports non-success HTTP *responses*.

use std::io::Write;

use crate::{
    core::{Transport, WfsError},
    wfs::{get_feature::GetFeatureResult, WfsClientInstance},
};

/// Number of body characters reported for a non-success `GetFeature`
/// response.
const BODY_SNIPPET_CHARS: usize = 200;

/// Probe the schema of `type_name` with a `DescribeFeatureType` request and
/// print the raw response body.
///
/// Any [`WfsError`] raised by the operation — timeouts included — is caught
/// and printed instead of propagated; the runner only fails if the sink
/// does.
pub async fn check_columns<T, W>(
    client: &WfsClientInstance<T>,
    type_name: &str,
    out: &mut W,
) -> Result<(), WfsError>
where
    T: Transport,
    W: Write,
{
    match client
        .describe_feature_type()
        .type_name(type_name)
        .execute()
        .await
    {
        Ok(result) => writeln!(out, "{}", result.body),
        Err(err) => writeln!(out, "{}", err),
    }
    .map_err(output_error)
}

/// Probe which `typeName` form the server accepts for `layer` with two
/// sequential `GetFeature` attempts: the bare layer name first, then the
/// namespace-qualified `{workspace}:{layer}` form.
///
/// Both attempts always run; a 200 on the first does not short-circuit the
/// second. Each attempt reports `Status: <code>`, plus the first 200
/// characters of the body when the status is not 200. Transport-level
/// failures are not caught and abort the probe.
pub async fn list_layers<T, W>(
    client: &WfsClientInstance<T>,
    layer: &str,
    out: &mut W,
) -> Result<(), WfsError>
where
    T: Transport,
    W: Write,
{
    let qualified = client.config.qualified_type_name(layer);

    writeln!(out, "Testing GetFeature with typeName={layer} & JSON output...")
        .map_err(output_error)?;
    let result = client.get_feature().type_name(layer).execute().await?;
    report_attempt(&result, out)?;

    writeln!(out, "Testing GetFeature with typeName={qualified}...").map_err(output_error)?;
    let result = client.get_feature().type_name(qualified).execute().await?;
    report_attempt(&result, out)?;

    Ok(())
}

fn report_attempt<W>(result: &GetFeatureResult, out: &mut W) -> Result<(), WfsError>
where
    W: Write,
{
    writeln!(out, "Status: {}", result.status).map_err(output_error)?;

    if result.status != 200 {
        let snippet: String = result.body.chars().take(BODY_SNIPPET_CHARS).collect();
        writeln!(out, "{snippet}").map_err(output_error)?;
    }

    Ok(())
}

fn output_error(err: std::io::Error) -> WfsError {
    WfsError::OutputError(err.to_string())
}

#[cfg(feature = "blocking")]
pub use self::blocking::{check_columns_blocking, list_layers_blocking};

#[cfg(feature = "blocking")]
mod blocking {
    //! Blocking twins of the probe runners, for use without an async
    //! runtime.

    use std::io::Write;

    use super::{output_error, report_attempt};
    use crate::{core::WfsError, wfs::WfsClientInstance};

    /// Blocking twin of [`check_columns`].
    ///
    /// [`check_columns`]: super::check_columns
    pub fn check_columns_blocking<T, W>(
        client: &WfsClientInstance<T>,
        type_name: &str,
        out: &mut W,
    ) -> Result<(), WfsError>
    where
        T: crate::core::blocking::Transport,
        W: Write,
    {
        match client
            .describe_feature_type()
            .type_name(type_name)
            .execute_blocking()
        {
            Ok(result) => writeln!(out, "{}", result.body),
            Err(err) => writeln!(out, "{}", err),
        }
        .map_err(output_error)
    }

    /// Blocking twin of [`list_layers`].
    ///
    /// [`list_layers`]: super::list_layers
    pub fn list_layers_blocking<T, W>(
        client: &WfsClientInstance<T>,
        layer: &str,
        out: &mut W,
    ) -> Result<(), WfsError>
    where
        T: crate::core::blocking::Transport,
        W: Write,
    {
        let qualified = client.config.qualified_type_name(layer);

        writeln!(out, "Testing GetFeature with typeName={layer} & JSON output...")
            .map_err(output_error)?;
        let result = client
            .get_feature()
            .type_name(layer)
            .execute_blocking()?;
        report_attempt(&result, out)?;

        writeln!(out, "Testing GetFeature with typeName={qualified}...").map_err(output_error)?;
        let result = client
            .get_feature()
            .type_name(qualified)
            .execute_blocking()?;
        report_attempt(&result, out)?;

        Ok(())
    }
}
