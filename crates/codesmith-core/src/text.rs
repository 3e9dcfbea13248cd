pub(crate) fn char_len(text: &str) -> usize {
    text.chars().count()
}

pub(crate) fn byte_offset(text: &str, char_offset: usize) -> usize {
    // Offsets at or past the last character map to the end of the buffer, which keeps
    // end-of-buffer slices total without a separate bounds check.
    text.char_indices()
        .nth(char_offset)
        .map(|(byte, _)| byte)
        .unwrap_or(text.len())
}

pub(crate) fn slice(text: &str, start: usize, end: usize) -> &str {
    &text[byte_offset(text, start)..byte_offset(text, end)]
}
