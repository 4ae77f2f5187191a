//! Namespace module - UCO vocabulary prefixes

use std::fmt;

/// Vocabulary a UCO type or property name belongs to
///
/// Type tags are compact IRIs: the namespace prefix followed directly by the
/// local name, e.g. `observable:WirelessNetworkConnectionFacet`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    /// Core UCO vocabulary (`uco-core:`)
    Core,

    /// Observable vocabulary (`observable:`)
    Observable,
}

impl Namespace {
    /// Get the compact IRI prefix, including the trailing colon
    pub fn prefix(&self) -> &'static str {
        match self {
            Namespace::Core => "uco-core:",
            Namespace::Observable => "observable:",
        }
    }

    /// Qualify a local name with this namespace
    pub fn qualify(&self, local_name: &str) -> String {
        format!("{}{}", self.prefix(), local_name)
    }

    /// Find the namespace a qualified name belongs to
    pub fn of(qualified: &str) -> Option<Self> {
        [Namespace::Core, Namespace::Observable]
            .into_iter()
            .find(|ns| qualified.starts_with(ns.prefix()))
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix().trim_end_matches(':'))
    }
}
