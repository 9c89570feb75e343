//! Node and triple types.
//!
//! A [`Node`] is an opaque label: the core never looks inside it, it only
//! compares and hashes it. Triples are (subject, predicate, object) node
//! tuples and patterns use `None` as the ANY wildcard.

use std::fmt;
use std::rc::Rc;

/// An opaque graph vertex.
///
/// Cloning is cheap (reference-counted label).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Node(Rc<str>);

impl Node {
    /// Create a node from its label.
    pub fn new(label: impl AsRef<str>) -> Self {
        Self(Rc::from(label.as_ref()))
    }

    /// Get the label.
    pub fn label(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Node {
    fn from(label: &str) -> Self {
        Node::new(label)
    }
}

impl From<String> for Node {
    fn from(label: String) -> Self {
        Self(Rc::from(label))
    }
}

/// A (subject, predicate, object) statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Triple {
    pub subject: Node,
    pub predicate: Node,
    pub object: Node,
}

impl Triple {
    /// Create a new triple.
    pub fn new(subject: impl Into<Node>, predicate: impl Into<Node>, object: impl Into<Node>) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
        }
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {} {})", self.subject, self.predicate, self.object)
    }
}

/// A triple pattern. `None` in a position matches any node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TriplePattern {
    pub subject: Option<Node>,
    pub predicate: Option<Node>,
    pub object: Option<Node>,
}

impl TriplePattern {
    /// The pattern matching every triple.
    pub const ANY: TriplePattern = TriplePattern {
        subject: None,
        predicate: None,
        object: None,
    };

    /// Create a pattern from optional positions.
    pub fn new(subject: Option<Node>, predicate: Option<Node>, object: Option<Node>) -> Self {
        Self {
            subject,
            predicate,
            object,
        }
    }

    /// Pattern with only the subject bound.
    pub fn subject(subject: impl Into<Node>) -> Self {
        Self {
            subject: Some(subject.into()),
            ..Self::default()
        }
    }

    /// Pattern with only the predicate bound.
    pub fn predicate(predicate: impl Into<Node>) -> Self {
        Self {
            predicate: Some(predicate.into()),
            ..Self::default()
        }
    }

    /// Pattern with only the object bound.
    pub fn object(object: impl Into<Node>) -> Self {
        Self {
            object: Some(object.into()),
            ..Self::default()
        }
    }

    /// Returns true if every position is bound.
    pub fn is_concrete(&self) -> bool {
        self.subject.is_some() && self.predicate.is_some() && self.object.is_some()
    }

    /// Check whether the triple matches this pattern.
    pub fn matches(&self, triple: &Triple) -> bool {
        fn slot(bound: &Option<Node>, node: &Node) -> bool {
            bound.as_ref().map_or(true, |b| b == node)
        }
        slot(&self.subject, &triple.subject)
            && slot(&self.predicate, &triple.predicate)
            && slot(&self.object, &triple.object)
    }
}

impl From<&Triple> for TriplePattern {
    fn from(triple: &Triple) -> Self {
        Self {
            subject: Some(triple.subject.clone()),
            predicate: Some(triple.predicate.clone()),
            object: Some(triple.object.clone()),
        }
    }
}

impl fmt::Display for TriplePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn slot(bound: &Option<Node>) -> &str {
            bound.as_ref().map_or("ANY", |n| n.label())
        }
        write!(
            f,
            "({} {} {})",
            slot(&self.subject),
            slot(&self.predicate),
            slot(&self.object)
        )
    }
}

/// Build a [`Triple`] from three labels.
///
/// ```
/// let t = onto_core::triple!("A", "subClassOf", "B");
/// assert_eq!(t.predicate.label(), "subClassOf");
/// ```
#[macro_export]
macro_rules! triple {
    ($s:expr, $p:expr, $o:expr $(,)?) => {
        $crate::Triple::new($s, $p, $o)
    };
}
