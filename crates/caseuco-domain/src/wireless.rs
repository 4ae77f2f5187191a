//! Wireless network connection facet

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::facet::{Facet, WireField};
use crate::namespace::Namespace;
use crate::object::{ObjectId, UcoIdentity};

/// Facet recording that an observable has (or had) a wireless network
/// connection, characterized by the network's SSID.
///
/// The SSID is stored verbatim: empty strings are kept and no length or
/// charset rules apply. An unset SSID is left out of the JSON-LD output.
///
/// # Examples
///
/// ```
/// use caseuco_domain::WirelessNetworkConnectionFacet;
///
/// let facet = WirelessNetworkConnectionFacet::new().with_ssid("MyHomeWiFi");
/// let json = serde_json::to_string(&facet).unwrap();
///
/// assert!(json.contains(r#""observable:ssid":"MyHomeWiFi""#));
/// assert!(json.contains(r#""@type":"observable:WirelessNetworkConnectionFacet""#));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "WirelessNetworkConnectionFacetRepr")]
pub struct WirelessNetworkConnectionFacet {
    #[serde(flatten)]
    identity: UcoIdentity,

    #[serde(rename = "observable:ssid", skip_serializing_if = "Option::is_none")]
    ssid: Option<String>,
}

impl WirelessNetworkConnectionFacet {
    /// Create a facet with no SSID and a fresh identifier
    pub fn new() -> Self {
        Self {
            identity: UcoIdentity::for_facet::<Self>(),
            ssid: None,
        }
    }

    /// Create a facet with no SSID and a known identifier
    pub fn with_id(id: ObjectId) -> Self {
        Self {
            identity: UcoIdentity::with_id::<Self>(id),
            ssid: None,
        }
    }

    /// Set the SSID, returning the same facet for chaining
    pub fn set_ssid(&mut self, ssid: impl Into<String>) -> &mut Self {
        self.ssid = Some(ssid.into());
        self
    }

    /// Clear the SSID, returning the same facet for chaining
    pub fn clear_ssid(&mut self) -> &mut Self {
        self.ssid = None;
        self
    }

    /// Builder form of [`set_ssid`](Self::set_ssid)
    pub fn with_ssid(mut self, ssid: impl Into<String>) -> Self {
        self.set_ssid(ssid);
        self
    }

    /// Get the SSID, if one was set
    pub fn ssid(&self) -> Option<&str> {
        self.ssid.as_deref()
    }
}

impl Default for WirelessNetworkConnectionFacet {
    fn default() -> Self {
        Self::new()
    }
}

impl Facet for WirelessNetworkConnectionFacet {
    const NAMESPACE: Namespace = Namespace::Observable;
    const TYPE_NAME: &'static str = "WirelessNetworkConnectionFacet";
    const WIRE_FIELDS: &'static [WireField] = &[WireField::new("ssid", "observable:ssid")];

    fn identity(&self) -> &UcoIdentity {
        &self.identity
    }
}

/// Wire shape read before the type tag has been checked
#[derive(Deserialize)]
struct WirelessNetworkConnectionFacetRepr {
    #[serde(rename = "@id")]
    id: ObjectId,

    #[serde(rename = "@type")]
    type_tag: String,

    #[serde(rename = "observable:ssid", default)]
    ssid: Option<String>,
}

impl TryFrom<WirelessNetworkConnectionFacetRepr> for WirelessNetworkConnectionFacet {
    type Error = DomainError;

    fn try_from(repr: WirelessNetworkConnectionFacetRepr) -> Result<Self, Self::Error> {
        Ok(Self {
            identity: UcoIdentity::checked::<Self>(repr.id, repr.type_tag)?,
            ssid: repr.ssid,
        })
    }
}
