//! Shared strategy tree
//!
//! One node per distinct feedback history. Nodes live in an arena and refer to
//! their children by `NodeId`; every node has exactly one parent, so the tree
//! never needs back-references.

use crate::core::{Code, Feedback};
use std::collections::BTreeMap;

/// Handle to a node inside a `StrategyTree`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// A guess and the follow-up guess for every feedback seen after it
#[derive(Debug, Clone)]
pub struct StrategyNode {
    guess: Code,
    children: BTreeMap<Feedback, NodeId>,
}

impl StrategyNode {
    /// The guess to play at this point in the game
    #[inline]
    #[must_use]
    pub const fn guess(&self) -> Code {
        self.guess
    }

    /// Children in canonical order (exact descending, then partial descending)
    pub fn children(&self) -> impl Iterator<Item = (Feedback, NodeId)> + '_ {
        self.children.iter().map(|(&feedback, &id)| (feedback, id))
    }

    /// Check if no game continued past this guess
    #[inline]
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// One line of the pre-order walk over the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutlineEntry {
    /// Distance from the root (the root is 0)
    pub depth: usize,
    /// Feedback on the edge into this node, `None` for the root
    pub feedback: Option<Feedback>,
    pub guess: Code,
}

/// The complete decision tree, rooted at the opening guess
#[derive(Debug, Clone)]
pub struct StrategyTree {
    nodes: Vec<StrategyNode>,
}

impl StrategyTree {
    /// Create a tree holding only the opening guess
    #[must_use]
    pub fn new(first_guess: Code) -> Self {
        Self {
            nodes: vec![StrategyNode {
                guess: first_guess,
                children: BTreeMap::new(),
            }],
        }
    }

    /// The root node, holding the opening guess
    #[inline]
    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Look up a node
    ///
    /// # Panics
    /// Panics if `id` came from a different tree
    #[inline]
    #[must_use]
    pub fn node(&self, id: NodeId) -> &StrategyNode {
        &self.nodes[id.0]
    }

    /// Fetch the child of `parent` reached by `feedback`, creating it with
    /// `guess` if this history has not been seen before
    ///
    /// An existing child keeps its guess. Because guess selection is
    /// deterministic, a repeated history always computes the same guess.
    ///
    /// # Examples
    /// ```
    /// use mastermind_knuth::core::{Code, Feedback};
    /// use mastermind_knuth::solver::StrategyTree;
    ///
    /// let opening = Code::from_digits(&[1, 1, 2, 2]).unwrap();
    /// let next = Code::from_digits(&[1, 3, 4, 4]).unwrap();
    ///
    /// let mut tree = StrategyTree::new(opening);
    /// let root = tree.root();
    /// let first = tree.add_guess(root, Feedback::new(1, 0), next);
    /// let again = tree.add_guess(root, Feedback::new(1, 0), next);
    ///
    /// assert_eq!(first, again);
    /// assert_eq!(tree.node_count(), 2);
    /// ```
    pub fn add_guess(&mut self, parent: NodeId, feedback: Feedback, guess: Code) -> NodeId {
        if let Some(&existing) = self.nodes[parent.0].children.get(&feedback) {
            debug_assert_eq!(
                self.nodes[existing.0].guess, guess,
                "same history produced a different guess"
            );
            return existing;
        }

        let id = NodeId(self.nodes.len());
        self.nodes.push(StrategyNode {
            guess,
            children: BTreeMap::new(),
        });
        self.nodes[parent.0].children.insert(feedback, id);
        id
    }

    /// Follow one edge without creating anything
    #[must_use]
    pub fn child(&self, parent: NodeId, feedback: Feedback) -> Option<NodeId> {
        self.nodes[parent.0].children.get(&feedback).copied()
    }

    /// The guess to play after receiving `history` (feedback for each earlier guess)
    ///
    /// Returns `None` if no recorded game produced that history.
    #[must_use]
    pub fn next_guess(&self, history: &[Feedback]) -> Option<Code> {
        history
            .iter()
            .try_fold(self.root(), |node, &feedback| self.child(node, feedback))
            .map(|node| self.node(node).guess)
    }

    /// Total number of nodes, root included
    #[inline]
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of guesses on the longest path from the root
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self.root(), 1)];

        while let Some((id, level)) = stack.pop() {
            deepest = deepest.max(level);
            stack.extend(self.node(id).children.values().map(|&child| (child, level + 1)));
        }

        deepest
    }

    /// Walk the tree in pre-order, children in canonical order
    #[must_use]
    pub fn outline(&self) -> Vec<OutlineEntry> {
        let mut entries = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![(self.root(), None, 0)];

        while let Some((id, feedback, depth)) = stack.pop() {
            let node = self.node(id);
            entries.push(OutlineEntry {
                depth,
                feedback,
                guess: node.guess,
            });

            // Reversed so the first child is popped first
            stack.extend(
                node.children
                    .iter()
                    .rev()
                    .map(|(&fb, &child)| (child, Some(fb), depth + 1)),
            );
        }

        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;

    fn code(text: &str) -> Code {
        Code::parse(text, &GameConfig::default()).unwrap()
    }

    fn sample_tree() -> StrategyTree {
        let mut tree = StrategyTree::new(code("1122"));
        let root = tree.root();
        let a = tree.add_guess(root, Feedback::new(0, 0), code("3345"));
        tree.add_guess(root, Feedback::new(2, 0), code("1213"));
        tree.add_guess(root, Feedback::new(0, 1), code("2344"));
        tree.add_guess(a, Feedback::new(1, 1), code("3456"));
        tree
    }

    #[test]
    fn new_tree_has_only_root() {
        let tree = StrategyTree::new(code("1122"));
        assert_eq!(tree.node_count(), 1);
        assert_eq!(tree.depth(), 1);
        assert_eq!(tree.node(tree.root()).guess(), code("1122"));
        assert!(tree.node(tree.root()).is_leaf());
    }

    #[test]
    fn add_guess_is_idempotent() {
        let mut tree = StrategyTree::new(code("1122"));
        let root = tree.root();
        let first = tree.add_guess(root, Feedback::new(1, 1), code("1344"));
        let second = tree.add_guess(root, Feedback::new(1, 1), code("1344"));

        assert_eq!(first, second);
        assert_eq!(tree.node_count(), 2);
    }

    #[test]
    fn distinct_feedback_creates_distinct_children() {
        let mut tree = StrategyTree::new(code("1122"));
        let root = tree.root();
        let a = tree.add_guess(root, Feedback::new(1, 1), code("1344"));
        let b = tree.add_guess(root, Feedback::new(1, 0), code("1344"));

        assert_ne!(a, b);
        assert_eq!(tree.child(root, Feedback::new(1, 1)), Some(a));
        assert_eq!(tree.child(root, Feedback::new(1, 0)), Some(b));
        assert_eq!(tree.child(root, Feedback::new(0, 0)), None);
    }

    #[test]
    fn children_in_canonical_order() {
        let tree = sample_tree();
        let order: Vec<Feedback> = tree.node(tree.root()).children().map(|(f, _)| f).collect();
        assert_eq!(
            order,
            vec![Feedback::new(2, 0), Feedback::new(0, 1), Feedback::new(0, 0)]
        );
    }

    #[test]
    fn next_guess_follows_history() {
        let tree = sample_tree();
        assert_eq!(tree.next_guess(&[]), Some(code("1122")));
        assert_eq!(tree.next_guess(&[Feedback::new(0, 0)]), Some(code("3345")));
        assert_eq!(
            tree.next_guess(&[Feedback::new(0, 0), Feedback::new(1, 1)]),
            Some(code("3456"))
        );
        assert_eq!(tree.next_guess(&[Feedback::new(3, 0)]), None);
    }

    #[test]
    fn depth_counts_guess_levels() {
        assert_eq!(sample_tree().depth(), 3);
    }

    #[test]
    fn outline_is_preorder_in_canonical_order() {
        let tree = sample_tree();
        let lines: Vec<(usize, Option<Feedback>, String)> = tree
            .outline()
            .into_iter()
            .map(|e| (e.depth, e.feedback, e.guess.to_string()))
            .collect();

        assert_eq!(
            lines,
            vec![
                (0, None, "1122".to_string()),
                (1, Some(Feedback::new(2, 0)), "1213".to_string()),
                (1, Some(Feedback::new(0, 1)), "2344".to_string()),
                (1, Some(Feedback::new(0, 0)), "3345".to_string()),
                (2, Some(Feedback::new(1, 1)), "3456".to_string()),
            ]
        );
    }
}
