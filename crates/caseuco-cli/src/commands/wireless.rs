//! Wireless command implementation.

use crate::cli::WirelessArgs;
use crate::error::Result;
use crate::output::Formatter;
use caseuco_domain::{Facet, ObjectId, WirelessNetworkConnectionFacet};
use tracing::info;

/// Execute the wireless command.
pub fn execute_wireless(args: WirelessArgs, formatter: &Formatter) -> Result<()> {
    let facet = build_facet(args)?;

    println!("{}", formatter.format_facet(&facet)?);
    info!(id = %facet.id(), type_tag = facet.type_tag(), "emitted facet");

    Ok(())
}

/// Build a facet from the command arguments.
pub fn build_facet(args: WirelessArgs) -> Result<WirelessNetworkConnectionFacet> {
    let mut facet = match args.id {
        Some(id) => WirelessNetworkConnectionFacet::with_id(ObjectId::from_string(&id)?),
        None => WirelessNetworkConnectionFacet::new(),
    };

    if let Some(ssid) = args.ssid {
        facet.set_ssid(ssid);
    }

    Ok(facet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;

    #[test]
    fn test_build_with_ssid() {
        let facet = build_facet(WirelessArgs {
            ssid: Some("MyHomeWiFi".to_string()),
            id: None,
        })
        .unwrap();
        assert_eq!(facet.ssid(), Some("MyHomeWiFi"));
    }

    #[test]
    fn test_build_without_ssid() {
        let facet = build_facet(WirelessArgs { ssid: None, id: None }).unwrap();
        assert_eq!(facet.ssid(), None);
    }

    #[test]
    fn test_build_with_explicit_id() {
        let facet = build_facet(WirelessArgs {
            ssid: None,
            id: Some("_:00000000-0000-0000-0000-000000000009".to_string()),
        })
        .unwrap();
        assert_eq!(facet.id(), ObjectId::from_value(9));
    }

    #[test]
    fn test_build_with_invalid_id() {
        let result = build_facet(WirelessArgs {
            ssid: None,
            id: Some("nine".to_string()),
        });
        assert!(matches!(result, Err(CliError::Domain(_))));
    }
}
