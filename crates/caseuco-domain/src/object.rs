//! Object identity - the `@id` / `@type` pair carried by every UCO object

use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DomainError;
use crate::facet::{Facet, WireField};

/// Prefix of a JSON-LD blank node label
const BLANK_NODE_PREFIX: &str = "_:";

/// Unique identifier for a UCO object based on UUIDv7
///
/// Generated locally without coordination. On the wire it is written as a
/// JSON-LD blank node label (`_:<uuid>`) so the enclosing graph may relabel it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectId(u128);

impl ObjectId {
    /// Generate a new UUIDv7-based ObjectId
    ///
    /// # Examples
    ///
    /// ```
    /// use caseuco_domain::ObjectId;
    ///
    /// let id = ObjectId::new();
    /// assert!(id.value() > 0);
    /// ```
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Create an ObjectId from a raw u128 value
    pub fn from_value(value: u128) -> Self {
        Self(value)
    }

    /// Parse an ObjectId from a UUID string, with or without the `_:` prefix
    ///
    /// # Examples
    ///
    /// ```
    /// use caseuco_domain::ObjectId;
    ///
    /// let id = ObjectId::new();
    /// assert_eq!(ObjectId::from_string(&id.to_string()).unwrap(), id);
    /// assert_eq!(ObjectId::from_string(&id.blank_node()).unwrap(), id);
    /// ```
    pub fn from_string(s: &str) -> Result<Self, DomainError> {
        let raw = s.strip_prefix(BLANK_NODE_PREFIX).unwrap_or(s);
        uuid::Uuid::parse_str(raw)
            .map(|u| Self(u.as_u128()))
            .map_err(|e| DomainError::InvalidId(format!("'{}': {}", s, e)))
    }

    /// Get the raw u128 value
    pub fn value(&self) -> u128 {
        self.0
    }

    /// Render as a JSON-LD blank node label (`_:<uuid>`)
    pub fn blank_node(&self) -> String {
        format!("{}{}", BLANK_NODE_PREFIX, self)
    }
}

impl Default for ObjectId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}

impl Serialize for ObjectId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.blank_node())
    }
}

impl<'de> Deserialize<'de> for ObjectId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        ObjectId::from_string(&raw).map_err(de::Error::custom)
    }
}

/// Wire keys of the identity fields shared by every UCO object
pub const IDENTITY_FIELDS: &[WireField] = &[
    WireField::new("id", "@id"),
    WireField::new("type_tag", "@type"),
];

/// Identity of a UCO object: its type tag and its identifier
///
/// Embedded by value in every facet. The type tag is fixed when the identity
/// is created and there is no way to change it afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct UcoIdentity {
    #[serde(rename = "@id")]
    id: ObjectId,

    #[serde(rename = "@type")]
    type_tag: String,
}

impl UcoIdentity {
    /// Create an identity with a fresh id for the given facet type
    pub fn for_facet<F: Facet>() -> Self {
        Self::with_id::<F>(ObjectId::new())
    }

    /// Create an identity with a known id for the given facet type
    pub fn with_id<F: Facet>(id: ObjectId) -> Self {
        Self {
            id,
            type_tag: F::qualified_type_name(),
        }
    }

    /// Rebuild an identity read from the wire, checking the tag names `F`
    ///
    /// # Errors
    /// Returns `DomainError::UnexpectedType` if `type_tag` is not the tag of `F`
    pub fn checked<F: Facet>(id: ObjectId, type_tag: String) -> Result<Self, DomainError> {
        let expected = F::qualified_type_name();
        if type_tag != expected {
            return Err(DomainError::UnexpectedType {
                expected,
                found: type_tag,
            });
        }
        Ok(Self { id, type_tag })
    }

    /// Get the object identifier
    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// Get the namespace-qualified type tag
    pub fn type_tag(&self) -> &str {
        &self.type_tag
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WirelessNetworkConnectionFacet;

    #[test]
    fn test_object_id_ordering() {
        let id1 = ObjectId::from_value(1000);
        let id2 = ObjectId::from_value(2000);

        assert!(id1 < id2);
        assert!(id2 > id1);
    }

    #[test]
    fn test_object_id_blank_node() {
        let id = ObjectId::from_value(1);
        assert_eq!(id.blank_node(), "_:00000000-0000-0000-0000-000000000001");
    }

    #[test]
    fn test_object_id_invalid_string() {
        assert!(matches!(
            ObjectId::from_string("not-a-valid-uuid"),
            Err(DomainError::InvalidId(_))
        ));
        assert!(ObjectId::from_string("").is_err());
        assert!(ObjectId::from_string("_:").is_err());
    }

    #[test]
    fn test_object_id_serializes_as_blank_node() {
        let id = ObjectId::from_value(42);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id.blank_node()));

        let back: ObjectId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_identity_for_facet() {
        let identity = UcoIdentity::for_facet::<WirelessNetworkConnectionFacet>();
        assert_eq!(identity.type_tag(), "observable:WirelessNetworkConnectionFacet");
    }

    #[test]
    fn test_identity_checked_rejects_other_type() {
        let err = UcoIdentity::checked::<WirelessNetworkConnectionFacet>(
            ObjectId::new(),
            "observable:WifiAddressFacet".to_string(),
        )
        .unwrap_err();

        assert_eq!(
            err,
            DomainError::UnexpectedType {
                expected: "observable:WirelessNetworkConnectionFacet".to_string(),
                found: "observable:WifiAddressFacet".to_string(),
            }
        );
    }

    #[test]
    fn test_identity_wire_keys() {
        let identity = UcoIdentity::with_id::<WirelessNetworkConnectionFacet>(ObjectId::from_value(7));
        let value = serde_json::to_value(&identity).unwrap();
        let object = value.as_object().unwrap();

        for field in IDENTITY_FIELDS {
            assert!(object.contains_key(field.key), "missing {}", field.key);
        }
        assert_eq!(object.len(), IDENTITY_FIELDS.len());
    }
}
