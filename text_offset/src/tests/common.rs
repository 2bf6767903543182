use tracing_subscriber::EnvFilter;

use crate::{Document, NodeId};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// `<div id="c">hello <b>world</b></div>`
pub struct HelloWorld {
    pub doc: Document,
    pub container: NodeId,
    pub hello: NodeId,
    pub bold: NodeId,
    pub world: NodeId,
}

pub fn hello_world() -> HelloWorld {
    let mut doc = Document::new();
    let root = doc.root();
    let container = doc.append_element(root, Some("c")).unwrap();
    let hello = doc.append_text(container, "hello ").unwrap();
    let bold = doc.append_element(container, None).unwrap();
    let world = doc.append_text(bold, "world").unwrap();

    HelloWorld {
        doc,
        container,
        hello,
        bold,
        world,
    }
}

/// `<div id="c"><p>ab</p><p>cd</p></div>`
pub struct TwoParagraphs {
    pub doc: Document,
    pub container: NodeId,
    pub ab: NodeId,
    pub cd: NodeId,
}

pub fn two_paragraphs() -> TwoParagraphs {
    let mut doc = Document::new();
    let root = doc.root();
    let container = doc.append_element(root, Some("c")).unwrap();
    let first = doc.append_element(container, None).unwrap();
    let ab = doc.append_text(first, "ab").unwrap();
    let second = doc.append_element(container, None).unwrap();
    let cd = doc.append_text(second, "cd").unwrap();

    TwoParagraphs {
        doc,
        container,
        ab,
        cd,
    }
}

/// Every text node under `node`, in document order.
pub fn text_nodes(doc: &Document, node: NodeId) -> Vec<NodeId> {
    let mut out = Vec::new();
    collect_text_nodes(doc, node, &mut out);
    out
}

fn collect_text_nodes(doc: &Document, node: NodeId, out: &mut Vec<NodeId>) {
    if doc.text(node).is_some() {
        out.push(node);
        return;
    }
    for &child in doc.children(node) {
        collect_text_nodes(doc, child, out);
    }
}

/// Every element under `node` (inclusive), in document order.
pub fn elements(doc: &Document, node: NodeId) -> Vec<NodeId> {
    let mut out = Vec::new();
    collect_elements(doc, node, &mut out);
    out
}

fn collect_elements(doc: &Document, node: NodeId, out: &mut Vec<NodeId>) {
    if doc.text(node).is_some() {
        return;
    }
    out.push(node);
    for &child in doc.children(node) {
        collect_elements(doc, child, out);
    }
}
