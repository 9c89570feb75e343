//! Hierarchy case builder.

use crate::error::{CaseError, CaseResult};
use crate::relation::{labels, Relation};
use onto_core::{GraphResult, Node};
use onto_hierarchy::{contains, tree_nodes, Traversal};

/// Expected hierarchy answers for one relation.
///
/// Every check enumerates a set with `tree_nodes` and then confirms each
/// member with `contains`, so both entry points are held to the same answer.
///
/// ```
/// use onto_tests::HierarchyCase;
///
/// HierarchyCase::new("chain")
///     .edges(&[("a", "b"), ("b", "c")])
///     .closure("a", &["b", "c"])
///     .direct("a", &["b"])
///     .run()
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct HierarchyCase {
    name: String,
    relation: Relation,
    checks: Vec<Check>,
}

#[derive(Debug, Clone)]
struct Check {
    traversal: Traversal,
    root: Node,
    expected: Vec<String>,
}

impl HierarchyCase {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            relation: Relation::new(),
            checks: Vec::new(),
        }
    }

    pub fn relation(mut self, relation: Relation) -> Self {
        self.relation = relation;
        self
    }

    pub fn edges(self, edges: &[(&str, &str)]) -> Self {
        self.relation(Relation::from_edges(edges))
    }

    /// Expect the transitive closure of `root`.
    pub fn closure(self, root: &str, expected: &[&str]) -> Self {
        self.check(Traversal::closure(), root, expected)
    }

    /// Expect the built-in direct set of `root`.
    pub fn direct(self, root: &str, expected: &[&str]) -> Self {
        self.check(Traversal::direct(true), root, expected)
    }

    /// Expect the standard direct set of `root`.
    pub fn standard(self, root: &str, expected: &[&str]) -> Self {
        self.check(Traversal::direct(false), root, expected)
    }

    fn check(mut self, traversal: Traversal, root: &str, expected: &[&str]) -> Self {
        let mut expected: Vec<String> = expected.iter().map(|s| s.to_string()).collect();
        expected.sort();
        self.checks.push(Check {
            traversal,
            root: Node::new(root),
            expected,
        });
        self
    }

    pub fn run(&self) -> CaseResult<()> {
        for check in &self.checks {
            self.run_check(check)?;
        }
        tracing::debug!(case = %self.name, checks = self.checks.len(), "hierarchy case passed");
        Ok(())
    }

    fn run_check(&self, check: &Check) -> CaseResult<()> {
        let Traversal { direct, builtin } = check.traversal;
        let query = match (direct, builtin) {
            (false, _) => "closure",
            (true, true) => "direct",
            (true, false) => "standard",
        };

        let found = tree_nodes(check.root.clone(), self.relation.lister(), direct, builtin)
            .collect::<GraphResult<Vec<_>>>()
            .map_err(|e| CaseError::relation(&self.name, e))?;
        let actual = labels(found.iter().cloned());
        if actual != check.expected {
            return Err(self.mismatch(query, check, actual));
        }

        let mut confirmed = Vec::new();
        for node in &found {
            if contains(&check.root, node, self.relation.lister(), direct, builtin)
                .map_err(|e| CaseError::relation(&self.name, e))?
            {
                confirmed.push(node.clone());
            }
        }
        let confirmed = labels(confirmed);
        if confirmed != check.expected {
            return Err(self.mismatch("contains", check, confirmed));
        }
        Ok(())
    }

    fn mismatch(&self, query: &'static str, check: &Check, actual: Vec<String>) -> CaseError {
        CaseError::Mismatch {
            case: self.name.clone(),
            query,
            root: check.root.to_string(),
            expected: check.expected.clone(),
            actual,
        }
    }
}
