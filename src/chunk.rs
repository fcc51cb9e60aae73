//! Fixed-size text chunking for size-limited consumers

/// Default chunk size, sized for bounded LLM context windows.
pub const DEFAULT_MAX_LEN: usize = 6000;

/// Split `text` into contiguous windows of at most `max_len` characters.
///
/// Windows preserve order and content exactly: concatenating the result
/// reproduces `text`. Lengths are counted in characters, so splits never
/// land inside a UTF-8 sequence. Empty input yields no chunks.
///
/// `max_len` must be positive; zero is a caller contract violation.
pub fn chunk_text(text: &str, max_len: usize) -> Vec<String> {
    debug_assert!(max_len > 0, "max_len must be positive");
    if max_len == 0 {
        return Vec::new();
    }

    let mut chunks = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        let split = rest
            .char_indices()
            .nth(max_len)
            .map_or(rest.len(), |(idx, _)| idx);
        let (head, tail) = rest.split_at(split);
        chunks.push(head.to_string());
        rest = tail;
    }
    chunks
}
