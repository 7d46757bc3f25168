//! Rendered projection of a navigation model.

/// An interactive element of the navigation bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewNode {
    index: usize,
    label: String,
    target: String,
}

impl ViewNode {
    pub fn new(index: usize, label: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            index,
            label: label.into(),
            target: target.into(),
        }
    }

    /// Position of the node in its tree.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Queryable text content.
    pub fn text(&self) -> &str {
        &self.label
    }

    /// Destination reached when the node is activated.
    pub fn target(&self) -> &str {
        &self.target
    }
}

/// Output of one render pass: nodes in navigation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewTree {
    nodes: Vec<ViewNode>,
}

impl ViewTree {
    pub fn new(nodes: Vec<ViewNode>) -> Self {
        Self { nodes }
    }

    pub fn nodes(&self) -> &[ViewNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ViewNode> {
        self.nodes.get(index)
    }

    pub fn texts(&self) -> Vec<&str> {
        self.nodes.iter().map(ViewNode::text).collect()
    }
}
