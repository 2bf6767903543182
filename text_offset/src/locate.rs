//! Depth-first, pre-order walk that counts text preceding the selection start.
//!
//! The walk is a pure recursion: every frame returns how many UTF-16 units it consumed
//! and whether the start node was reached, and the caller stops visiting siblings as
//! soon as one frame reports `found`.

use tracing::{debug, warn};

use crate::error::OffsetError;
use crate::node::{DocumentTree, NodeContent, RangeStart, SelectionSource};

/// Result of locating a selection start inside a container.
///
/// When `found` is false the start node is not under the container and `offset` is the
/// container's total text length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub offset: usize,
    pub found: bool,
}

#[derive(Debug, Clone, Copy)]
struct Walk {
    consumed: usize,
    found: bool,
}

impl Walk {
    const fn hit(consumed: usize) -> Self {
        Walk {
            consumed,
            found: true,
        }
    }

    const fn pass(consumed: usize) -> Self {
        Walk {
            consumed,
            found: false,
        }
    }
}

/// Sum of text lengths over all text nodes reachable through `node`'s children.
///
/// A text node has no children and therefore yields 0, as does a childless element.
pub fn text_length_sum<T>(tree: &T, node: &T::Node) -> usize
where
    T: DocumentTree + ?Sized,
{
    let NodeContent::Structural { children } = tree.content(node) else {
        return 0;
    };

    children
        .iter()
        .map(|child| match tree.content(child) {
            NodeContent::Text { len } => len,
            NodeContent::Structural { .. } => text_length_sum(tree, child),
        })
        .sum()
}

/// Walk `container` in document order until `start.node` is reached.
pub fn locate_from<T>(tree: &T, container: &T::Node, start: &RangeStart<T::Node>) -> Location
where
    T: DocumentTree + ?Sized,
{
    let walk = walk(tree, container, start);
    Location {
        offset: walk.consumed,
        found: walk.found,
    }
}

/// Locate the current selection start inside the element with identifier `container_id`.
///
/// An empty selection yields offset 0 without resolving the container.
pub fn locate_in_container<T, S>(
    tree: &T,
    selection: &S,
    container_id: &str,
) -> Result<Location, OffsetError>
where
    T: DocumentTree + ?Sized,
    S: SelectionSource<T::Node> + ?Sized,
{
    let Some(start) = selection.range_start() else {
        debug!(container_id, "selection has no ranges");
        return Ok(Location {
            offset: 0,
            found: false,
        });
    };

    let container = tree
        .element_by_id(container_id)
        .ok_or_else(|| OffsetError::ContainerNotFound(container_id.to_string()))?;

    let location = locate_from(tree, &container, &start);
    if location.found {
        debug!(container_id, offset = location.offset, "located selection start");
    } else {
        warn!(
            container_id,
            offset = location.offset,
            "selection start is outside the container; reporting its full text length"
        );
    }

    Ok(location)
}

/// Character offset of the selection start relative to the container's text content.
pub fn offset_in_container<T, S>(
    tree: &T,
    selection: &S,
    container_id: &str,
) -> Result<usize, OffsetError>
where
    T: DocumentTree + ?Sized,
    S: SelectionSource<T::Node> + ?Sized,
{
    locate_in_container(tree, selection, container_id).map(|location| location.offset)
}

fn walk<T>(tree: &T, node: &T::Node, start: &RangeStart<T::Node>) -> Walk
where
    T: DocumentTree + ?Sized,
{
    let content = tree.content(node);

    if tree.is_same_node(node, &start.node) {
        // `start.offset` is a UTF-16 index for text and a child index for structure.
        let consumed = match content {
            NodeContent::Text { .. } => start.offset as usize,
            NodeContent::Structural { children } => children
                .iter()
                .take(start.offset as usize)
                .map(|child| text_length_sum(tree, child))
                .sum(),
        };
        return Walk::hit(consumed);
    }

    match content {
        NodeContent::Text { len } => Walk::pass(len),
        NodeContent::Structural { children } => {
            let mut consumed = 0;
            for child in &children {
                let step = walk(tree, child, start);
                consumed += step.consumed;
                if step.found {
                    return Walk::hit(consumed);
                }
            }
            Walk::pass(consumed)
        }
    }
}
