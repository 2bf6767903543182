// Live DOM adapters: the browser's document and selection seen through the
// `text_offset` capability traits.
use text_offset::{DocumentTree, NodeContent, RangeStart, SelectionSource};
use wasm_bindgen::JsCast;
use web_sys::{CharacterData, Document, Node, Selection};

/// Read-only view of a browser document. Without a document no container resolves.
pub struct LiveDom {
    document: Option<Document>,
}

impl LiveDom {
    pub fn new(document: Document) -> Self {
        Self {
            document: Some(document),
        }
    }

    /// Document of the current window, if any.
    pub fn current() -> Self {
        Self {
            document: web_sys::window().and_then(|window| window.document()),
        }
    }

    /// Concatenated data of descendant text nodes, matching what the walk counts.
    pub fn text_content(&self, node: &Node) -> String {
        let mut out = String::new();
        collect_text(node, &mut out);
        out
    }
}

impl DocumentTree for LiveDom {
    type Node = Node;

    fn element_by_id(&self, id: &str) -> Option<Node> {
        self.document
            .as_ref()?
            .get_element_by_id(id)
            .map(Into::into)
    }

    fn is_same_node(&self, a: &Node, b: &Node) -> bool {
        a.is_same_node(Some(b))
    }

    fn content(&self, node: &Node) -> NodeContent<Node> {
        match node.node_type() {
            Node::TEXT_NODE => NodeContent::Text {
                len: node
                    .dyn_ref::<CharacterData>()
                    .map_or(0, |text| text.length() as usize),
            },
            Node::ELEMENT_NODE => NodeContent::Structural {
                children: child_nodes(node),
            },
            // Comments, processing instructions, CDATA: no text, but still a child slot.
            _ => NodeContent::Structural {
                children: Vec::new(),
            },
        }
    }
}

fn child_nodes(node: &Node) -> Vec<Node> {
    let list = node.child_nodes();
    (0..list.length()).filter_map(|i| list.item(i)).collect()
}

fn collect_text(node: &Node, out: &mut String) {
    match node.node_type() {
        Node::TEXT_NODE => {
            if let Some(text) = node.dyn_ref::<CharacterData>() {
                out.push_str(&text.data());
            }
        }
        Node::ELEMENT_NODE => {
            for child in child_nodes(node) {
                collect_text(&child, out);
            }
        }
        _ => {}
    }
}

/// The browser selection, read through its first range.
pub struct LiveSelection {
    selection: Option<Selection>,
}

impl LiveSelection {
    pub fn new(selection: Selection) -> Self {
        Self {
            selection: Some(selection),
        }
    }

    /// Selection of the current window; a missing window or selection reads as empty.
    pub fn current() -> Self {
        Self {
            selection: web_sys::window().and_then(|window| window.get_selection().ok().flatten()),
        }
    }
}

impl SelectionSource<Node> for LiveSelection {
    fn range_start(&self) -> Option<RangeStart<Node>> {
        let selection = self.selection.as_ref()?;
        if selection.range_count() == 0 {
            return None;
        }

        let range = selection.get_range_at(0).ok()?;
        Some(RangeStart {
            node: range.start_container().ok()?,
            offset: range.start_offset().ok()?,
        })
    }
}
