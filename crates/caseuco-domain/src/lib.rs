//! CASE/UCO Domain Layer
//!
//! This crate holds the data model for observable facets of the CASE/UCO
//! forensic interchange ontology. Facets are plain value types that serialize
//! into JSON-LD fragments through serde; graph assembly and bundle export
//! live elsewhere.
//!
//! ## Key Concepts
//!
//! - **Facet**: a typed bundle of properties describing one aspect of an observable
//! - **Identity**: the `@type` tag and `@id` every UCO object carries
//! - **Namespace**: the vocabulary prefix a type tag is qualified with
//! - **Wire fields**: the explicit field to JSON-LD key mapping of each facet
//!
//! ## Example
//!
//! ```
//! use caseuco_domain::{Facet, WirelessNetworkConnectionFacet};
//!
//! let mut facet = WirelessNetworkConnectionFacet::new();
//! facet.set_ssid("MyHomeWiFi");
//!
//! assert_eq!(facet.ssid(), Some("MyHomeWiFi"));
//! assert_eq!(facet.type_tag(), "observable:WirelessNetworkConnectionFacet");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod facet;
pub mod namespace;
pub mod object;
pub mod wireless;

// Re-exports for convenience
pub use error::DomainError;
pub use facet::{Facet, WireField};
pub use namespace::Namespace;
pub use object::{ObjectId, UcoIdentity};
pub use wireless::WirelessNetworkConnectionFacet;
