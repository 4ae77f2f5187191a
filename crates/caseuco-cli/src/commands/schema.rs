//! Schema command implementation.

use crate::error::Result;
use crate::output::Formatter;
use caseuco_domain::object::IDENTITY_FIELDS;
use caseuco_domain::{Facet, WireField, WirelessNetworkConnectionFacet};

/// Execute the schema command.
pub fn execute_schema(formatter: &Formatter) -> Result<()> {
    println!("{}", render_schema(formatter)?);
    Ok(())
}

/// Render the wire key table of the wireless network connection facet.
pub fn render_schema(formatter: &Formatter) -> Result<String> {
    let fields: Vec<WireField> = IDENTITY_FIELDS
        .iter()
        .chain(WirelessNetworkConnectionFacet::WIRE_FIELDS)
        .copied()
        .collect();

    formatter.format_schema(&WirelessNetworkConnectionFacet::qualified_type_name(), &fields)
}
