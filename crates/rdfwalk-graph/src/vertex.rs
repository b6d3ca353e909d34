//! Vertex identities.
//!
//! A [`Vertex`] is an opaque, immutable name. Entity vertices compare by name
//! alone, so two vertices built from the same IRI are interchangeable.
//!
//! Relation vertices additionally carry the `(subject, object)` anchor of the
//! triple they stand for. Without it every `p` edge in the graph would collapse
//! onto one shared `p` node and a walk `A -p-> ?` could continue to the object
//! of any other `p` triple. Canonicalization never looks at the anchor.

use std::fmt;
use std::sync::Arc;

/// Reserved token substituted for masked walk positions.
///
/// The in-memory graph refuses vertices with this name, so a masked position
/// can never be confused with a real hop.
pub const WILDCARD_TOKEN: &str = "*";

/// The triple a relation vertex was created for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RelationAnchor {
    subject: Arc<str>,
    object: Arc<str>,
}

impl RelationAnchor {
    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn object(&self) -> &str {
        &self.object
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Vertex {
    name: Arc<str>,
    anchor: Option<RelationAnchor>,
}

impl Vertex {
    /// An entity vertex (IRI, blank node or literal).
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            anchor: None,
        }
    }

    /// A relation vertex for the triple `subject -name-> object`.
    pub fn relation(
        name: impl Into<Arc<str>>,
        subject: impl Into<Arc<str>>,
        object: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            name: name.into(),
            anchor: Some(RelationAnchor {
                subject: subject.into(),
                object: object.into(),
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_relation(&self) -> bool {
        self.anchor.is_some()
    }

    pub fn anchor(&self) -> Option<&RelationAnchor> {
        self.anchor.as_ref()
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<&str> for Vertex {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Vertex {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}
