//! Parse command implementation.

use crate::cli::ParseArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use caseuco_domain::{DomainError, Facet, WirelessNetworkConnectionFacet};
use serde_json::Value;
use std::fs;
use std::io::{self, Read};
use tracing::{debug, info};

/// Execute the parse command.
pub fn execute_parse(args: ParseArgs, formatter: &Formatter) -> Result<()> {
    let json = read_input(&args.input)?;
    let facet = parse_fragment(&json)?;

    println!("{}", formatter.format_facet(&facet)?);
    info!(id = %facet.id(), "parsed facet");

    Ok(())
}

/// Read a fragment from a file path, or from stdin when the path is `-`.
fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        debug!("reading fragment from stdin");
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        debug!(path = input, "reading fragment from file");
        Ok(fs::read_to_string(input)?)
    }
}

/// Parse a JSON-LD fragment into a wireless network connection facet.
///
/// The `@type` is checked here before decoding so a mismatch surfaces as
/// `CliError::Domain(DomainError::UnexpectedType)` rather than as the
/// untyped `serde_json::Error` the facet's own decode check produces.
pub fn parse_fragment(json: &str) -> Result<WirelessNetworkConnectionFacet> {
    let value: Value = serde_json::from_str(json)?;

    let found = value
        .get("@type")
        .and_then(Value::as_str)
        .ok_or_else(|| CliError::InvalidInput("Fragment has no '@type' string".to_string()))?;

    let expected = WirelessNetworkConnectionFacet::qualified_type_name();
    if found != expected {
        return Err(DomainError::UnexpectedType {
            expected,
            found: found.to_string(),
        }
        .into());
    }

    Ok(serde_json::from_value(value)?)
}
