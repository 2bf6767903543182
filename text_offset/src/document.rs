//! Arena-backed document tree.
//!
//! `NodeId`s are handles into one `Document`; identity is the handle, not the content.

use crate::error::OffsetError;
use crate::node::{DocumentTree, NodeContent, RangeStart, SelectionSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

#[derive(Debug, Clone)]
enum NodeData {
    Element {
        id: Option<String>,
        children: Vec<NodeId>,
    },
    Text(String),
    Comment,
}

#[derive(Debug, Clone)]
struct Slot {
    parent: Option<NodeId>,
    data: NodeData,
}

/// In-memory document: a root element plus everything appended below it.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Slot>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            nodes: vec![Slot {
                parent: None,
                data: NodeData::Element {
                    id: None,
                    children: Vec::new(),
                },
            }],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn append_element(
        &mut self,
        parent: NodeId,
        id: Option<&str>,
    ) -> Result<NodeId, OffsetError> {
        self.append(
            parent,
            NodeData::Element {
                id: id.map(str::to_string),
                children: Vec::new(),
            },
        )
    }

    pub fn append_text(
        &mut self,
        parent: NodeId,
        text: impl Into<String>,
    ) -> Result<NodeId, OffsetError> {
        self.append(parent, NodeData::Text(text.into()))
    }

    /// Append a node that is neither text nor element. Its contents never count.
    pub fn append_comment(&mut self, parent: NodeId) -> Result<NodeId, OffsetError> {
        self.append(parent, NodeData::Comment)
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        match self.slot(node).map(|slot| &slot.data) {
            Some(NodeData::Element { children, .. }) => children,
            _ => &[],
        }
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.slot(node).and_then(|slot| slot.parent)
    }

    /// Identifier of an element; `None` for anonymous elements, text and comments.
    pub fn element_id(&self, node: NodeId) -> Option<&str> {
        match self.slot(node).map(|slot| &slot.data) {
            Some(NodeData::Element { id, .. }) => id.as_deref(),
            _ => None,
        }
    }

    /// Contents of a text node; `None` for elements and comments.
    pub fn text(&self, node: NodeId) -> Option<&str> {
        match self.slot(node).map(|slot| &slot.data) {
            Some(NodeData::Text(text)) => Some(text),
            _ => None,
        }
    }

    /// Concatenated text of all descendant text nodes, in document order.
    pub fn text_content(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(node, &mut out);
        out
    }

    fn collect_text(&self, node: NodeId, out: &mut String) {
        match self.slot(node).map(|slot| &slot.data) {
            Some(NodeData::Text(text)) => out.push_str(text),
            Some(NodeData::Element { children, .. }) => {
                for &child in children {
                    self.collect_text(child, out);
                }
            }
            Some(NodeData::Comment) | None => {}
        }
    }

    fn find_element(&self, node: NodeId, wanted: &str) -> Option<NodeId> {
        let NodeData::Element { id, children } = &self.slot(node)?.data else {
            return None;
        };
        if id.as_deref() == Some(wanted) {
            return Some(node);
        }
        children
            .iter()
            .find_map(|&child| self.find_element(child, wanted))
    }

    fn append(&mut self, parent: NodeId, data: NodeData) -> Result<NodeId, OffsetError> {
        let next = u32::try_from(self.nodes.len()).map_err(|_| OffsetError::UnknownNode)?;
        let child = NodeId(next);

        match &mut self
            .nodes
            .get_mut(parent.0 as usize)
            .ok_or(OffsetError::UnknownNode)?
            .data
        {
            NodeData::Element { children, .. } => children.push(child),
            NodeData::Text(_) | NodeData::Comment => return Err(OffsetError::NotAContainer),
        }

        self.nodes.push(Slot {
            parent: Some(parent),
            data,
        });
        Ok(child)
    }

    fn slot(&self, node: NodeId) -> Option<&Slot> {
        self.nodes.get(node.0 as usize)
    }
}

impl DocumentTree for Document {
    type Node = NodeId;

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.find_element(self.root(), id)
    }

    fn is_same_node(&self, a: &NodeId, b: &NodeId) -> bool {
        a == b
    }

    fn content(&self, node: &NodeId) -> NodeContent<NodeId> {
        match self.slot(*node).map(|slot| &slot.data) {
            Some(NodeData::Text(text)) => NodeContent::Text {
                len: text.encode_utf16().count(),
            },
            Some(NodeData::Element { children, .. }) => NodeContent::Structural {
                children: children.clone(),
            },
            Some(NodeData::Comment) | None => NodeContent::Structural {
                children: Vec::new(),
            },
        }
    }
}

/// Selection over a `Document`: either no ranges or one collapsed range start.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    start: Option<RangeStart<NodeId>>,
}

impl Selection {
    pub fn empty() -> Self {
        Self { start: None }
    }

    pub fn collapsed(node: NodeId, offset: u32) -> Self {
        Self {
            start: Some(RangeStart { node, offset }),
        }
    }
}

impl SelectionSource<NodeId> for Selection {
    fn range_start(&self) -> Option<RangeStart<NodeId>> {
        self.start
    }
}
