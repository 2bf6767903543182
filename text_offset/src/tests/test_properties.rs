use crate::tests::common::{elements, hello_world, text_nodes};
use crate::{Document, NodeId, Selection, locate_in_container, text_length_sum};

/// <div id="c">hello <b>world</b><!----><p>ab<i>cd</i></p> tail</div>
fn mixed() -> Document {
    let mut doc = Document::new();
    let root = doc.root();
    let c = doc.append_element(root, Some("c")).unwrap();
    doc.append_text(c, "hello ").unwrap();
    let b = doc.append_element(c, None).unwrap();
    doc.append_text(b, "world").unwrap();
    doc.append_comment(c).unwrap();
    let p = doc.append_element(c, None).unwrap();
    doc.append_text(p, "ab").unwrap();
    let i = doc.append_element(p, None).unwrap();
    doc.append_text(i, "cd").unwrap();
    doc.append_text(c, " tail").unwrap();
    doc
}

fn container(doc: &Document) -> NodeId {
    doc.children(doc.root())[0]
}

#[test]
fn test_text_offsets_match_text_content_prefix() {
    let doc = mixed();
    let c = container(&doc);
    let content: Vec<u16> = doc.text_content(c).encode_utf16().collect();

    let mut before = 0usize;
    for node in text_nodes(&doc, c) {
        let text = doc.text(node).unwrap();
        let len = text.encode_utf16().count();
        for k in 0..=len {
            let location = locate_in_container(&doc, &Selection::collapsed(node, k as u32), "c")
                .unwrap();
            assert!(location.found);
            assert_eq!(location.offset, before + k, "node {:?} at {}", text, k);
            assert!(location.offset <= content.len());
        }
        before += len;
    }
    assert_eq!(before, content.len());
}

#[test]
fn test_element_offsets_clamp_at_child_count() {
    let doc = mixed();
    let c = container(&doc);

    for node in elements(&doc, c) {
        let child_count = doc.children(node).len() as u32;
        let at = |n| {
            locate_in_container(&doc, &Selection::collapsed(node, n), "c")
                .unwrap()
                .offset
        };

        let saturated = at(child_count);
        for extra in 1..4 {
            assert_eq!(at(child_count + extra), saturated);
        }
    }
}

#[test]
fn test_element_offsets_are_monotonic() {
    let doc = mixed();
    let c = container(&doc);

    for node in elements(&doc, c) {
        let child_count = doc.children(node).len() as u32;
        let mut last = 0;
        for n in 0..=child_count {
            let offset = locate_in_container(&doc, &Selection::collapsed(node, n), "c")
                .unwrap()
                .offset;
            assert!(offset >= last);
            last = offset;
        }
    }
}

#[test]
fn test_unfound_start_equals_total_length() {
    let mut doc = mixed();
    let root = doc.root();
    let other = doc.append_element(root, None).unwrap();
    let stray = doc.append_text(other, "stray").unwrap();
    let c = container(&doc);

    for offset in [0, 3, 100] {
        let location =
            locate_in_container(&doc, &Selection::collapsed(stray, offset), "c").unwrap();
        assert!(!location.found);
        assert_eq!(location.offset, text_length_sum(&doc, &c));
    }
}

#[test]
fn test_results_are_stable_across_calls() {
    let fx = hello_world();

    for node in text_nodes(&fx.doc, fx.container) {
        let selection = Selection::collapsed(node, 1);
        let first = locate_in_container(&fx.doc, &selection, "c");
        let second = locate_in_container(&fx.doc, &selection, "c");
        assert_eq!(first, second);
    }
}
