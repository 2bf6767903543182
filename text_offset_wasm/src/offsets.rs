/// JS/DOM boundary uses UTF-16 code units (`Text.length`, `Range.startOffset`).
/// An offset inside a surrogate pair rounds up to the next scalar boundary; offsets past
/// the end clamp to the end.
pub fn utf16_offset_to_byte(source: &str, utf16: usize) -> usize {
    if utf16 == 0 {
        return 0;
    }

    let mut u16_count = 0usize;
    for (byte_idx, ch) in source.char_indices() {
        if u16_count >= utf16 {
            return byte_idx;
        }
        u16_count += ch.len_utf16();
    }

    source.len()
}

/// Same rounding as [`utf16_offset_to_byte`], counted in Unicode scalar values.
pub fn utf16_offset_to_char(source: &str, utf16: usize) -> usize {
    let mut u16_count = 0usize;
    let mut chars = 0usize;
    for ch in source.chars() {
        if u16_count >= utf16 {
            break;
        }
        u16_count += ch.len_utf16();
        chars += 1;
    }
    chars
}

/// Byte offset back to UTF-16 units. A byte inside a scalar rounds down.
pub fn byte_offset_to_utf16_offset(source: &str, byte: usize) -> usize {
    let mut utf16 = 0usize;
    for (byte_idx, ch) in source.char_indices() {
        if byte_idx + ch.len_utf8() > byte {
            break;
        }
        utf16 += ch.len_utf16();
    }
    utf16
}
