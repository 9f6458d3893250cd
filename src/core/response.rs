//! Discord message size utilities
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.6.0
//!
//! ## Changelog
//! - 1.1.0: Drop embed helpers, only plain message content is sent
//! - 1.0.0: Initial chunking helpers

/// Discord message content limit
pub const MESSAGE_LIMIT: usize = 2000;

/// Split text into pieces no longer than `max_size` bytes.
///
/// Splits on line boundaries where possible and never inside a UTF-8
/// character. Lines that are longer than `max_size` on their own are cut
/// character by character.
pub fn chunk_text(text: &str, max_size: usize) -> Vec<String> {
    if text.len() <= max_size {
        return vec![text.to_string()];
    }

    let mut chunks = Vec::new();
    let mut current = String::new();

    for line in text.lines() {
        // +1 for the newline we put back
        if !current.is_empty() && current.len() + line.len() + 1 > max_size {
            chunks.push(std::mem::take(&mut current));
        }

        if line.len() > max_size {
            let mut pieces = split_long_line(line, max_size);
            if let Some(last) = pieces.pop() {
                chunks.extend(pieces);
                current = last;
            }
            continue;
        }

        if !current.is_empty() {
            current.push('\n');
        }
        current.push_str(line);
    }

    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

fn split_long_line(line: &str, max_size: usize) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut current = String::new();
    for ch in line.chars() {
        if current.len() + ch.len_utf8() > max_size && !current.is_empty() {
            pieces.push(std::mem::take(&mut current));
        }
        current.push(ch);
    }
    if !current.is_empty() {
        pieces.push(current);
    }
    pieces
}

/// Chunk text for message content (2000 character limit)
pub fn chunk_for_message(text: &str) -> Vec<String> {
    chunk_text(text, MESSAGE_LIMIT)
}

/// Truncate text to fit the message limit, adding an ellipsis if cut
pub fn truncate_for_message(text: &str) -> String {
    if text.len() <= MESSAGE_LIMIT {
        return text.to_string();
    }
    let mut end = MESSAGE_LIMIT - 3;
    while end > 0 && !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &text[..end])
}
