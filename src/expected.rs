use std::borrow::Cow;
use std::rc::Rc;

// # Expected sets as difference lists
//
// Alternation and epsilon sequencing union the "expected" labels of both
// branches, and deep `or` chains do this at every level. Concatenating
// plain vectors there is quadratic, so labels are kept as a persistent
// append tree behind `Rc`: appending two sets allocates one node and
// clones two pointers, and the flat label list is materialized exactly
// once, when an error is rendered.

/// Accumulated production labels describing what a parser would have
/// accepted. Appending is O(1); de-duplication and ordering happen only at
/// materialization time.
#[derive(Clone, Debug, Default)]
pub struct Expected {
    root: Option<Rc<Node>>,
}

#[derive(Debug)]
enum Node {
    Label(Cow<'static, str>),
    Append(Rc<Node>, Rc<Node>),
}

impl Expected {
    /// The empty set.
    pub fn empty() -> Self {
        Expected { root: None }
    }

    /// A single production label.
    pub fn label(text: impl Into<Cow<'static, str>>) -> Self {
        Expected {
            root: Some(Rc::new(Node::Label(text.into()))),
        }
    }

    /// Build a set from a sequence of labels, keeping their order.
    pub fn from_labels<I>(labels: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Cow<'static, str>>,
    {
        labels
            .into_iter()
            .fold(Expected::empty(), |acc, l| acc.append(Expected::label(l)))
    }

    /// Concatenate two sets. O(1): shares both operands.
    pub fn append(self, other: Expected) -> Expected {
        match (self.root, other.root) {
            (None, root) | (root, None) => Expected { root },
            (Some(a), Some(b)) => Expected {
                root: Some(Rc::new(Node::Append(a, b))),
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Materialize the labels: first-seen order, duplicates removed.
    ///
    /// Traversal uses an explicit work stack so that deeply nested append
    /// chains cannot exhaust the native call stack.
    pub fn labels(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        let mut stack: Vec<&Node> = Vec::new();
        if let Some(root) = &self.root {
            stack.push(root);
        }
        while let Some(node) = stack.pop() {
            match node {
                Node::Label(text) => {
                    if !out.contains(&text.as_ref()) {
                        out.push(text.as_ref());
                    }
                }
                Node::Append(left, right) => {
                    stack.push(right);
                    stack.push(left);
                }
            }
        }
        out
    }

    /// Render the labels for an error message: `a, b or c`.
    ///
    /// Returns `None` when the set is empty so the caller can omit the line.
    pub fn render(&self) -> Option<String> {
        let labels = self.labels();
        match labels.as_slice() {
            [] => None,
            [only] => Some((*only).to_string()),
            [init @ .., last] => Some(format!("{} or {}", init.join(", "), last)),
        }
    }
}
