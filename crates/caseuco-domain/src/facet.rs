//! Facet abstraction and the field to wire key mapping
//!
//! Every concrete facet embeds a [`UcoIdentity`] and declares its vocabulary,
//! local type name, and wire fields as associated constants. Serialization is
//! data-driven through serde; nothing here needs dynamic dispatch.

use crate::namespace::Namespace;
use crate::object::{ObjectId, UcoIdentity};

/// One entry of a facet's field to wire key table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WireField {
    /// Rust field name
    pub field: &'static str,

    /// Key the field is emitted under in JSON-LD output
    pub key: &'static str,
}

impl WireField {
    /// Create a new table entry
    pub const fn new(field: &'static str, key: &'static str) -> Self {
        Self { field, key }
    }
}

/// A typed bundle of properties describing one aspect of an observable
pub trait Facet {
    /// Vocabulary the facet type belongs to
    const NAMESPACE: Namespace;

    /// Unqualified type name
    const TYPE_NAME: &'static str;

    /// Property fields and their wire keys, identity fields excluded
    const WIRE_FIELDS: &'static [WireField];

    /// Get the embedded identity
    fn identity(&self) -> &UcoIdentity;

    /// Get the namespace-qualified type tag
    fn type_tag(&self) -> &str {
        self.identity().type_tag()
    }

    /// Get the object identifier
    fn id(&self) -> ObjectId {
        self.identity().id()
    }

    /// Build the type tag for this facet type
    fn qualified_type_name() -> String
    where
        Self: Sized,
    {
        Self::NAMESPACE.qualify(Self::TYPE_NAME)
    }
}
