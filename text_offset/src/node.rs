/// What a node holds, as seen by the offset walk.
///
/// Hosts report anything that is neither text nor an element (comments, processing
/// instructions, doctypes) as `Structural` with no children: it then contributes no
/// characters but still occupies a child index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeContent<N> {
    /// Text-bearing node; `len` is in UTF-16 code units.
    Text { len: usize },
    /// Ordered child sequence.
    Structural { children: Vec<N> },
}

/// Read access to a host document tree.
pub trait DocumentTree {
    type Node: Clone;

    /// First element in document order carrying identifier `id`.
    fn element_by_id(&self, id: &str) -> Option<Self::Node>;

    /// Reference identity. Two distinct nodes with equal content are never the same.
    fn is_same_node(&self, a: &Self::Node, b: &Self::Node) -> bool;

    fn content(&self, node: &Self::Node) -> NodeContent<Self::Node>;
}

/// Start boundary of the first selection range.
///
/// `offset` is a UTF-16 index when `node` is text, and a child index otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeStart<N> {
    pub node: N,
    pub offset: u32,
}

/// Read access to the host's current selection.
pub trait SelectionSource<N> {
    /// Start of the first range, or `None` when the selection has no ranges.
    fn range_start(&self) -> Option<RangeStart<N>>;
}
