//! Utility modules for the weather gateway
//!
//! - **error**: Error types and HTTP error mapping
//! - **logging**: Tracing subscriber setup

pub mod error;
pub mod logging;

/// Truncate string to at most `max_len` bytes, ending with an ellipsis.
///
/// Cuts on a character boundary so multi-byte text never panics.
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        return s.to_string();
    }

    let mut end = max_len.saturating_sub(3);
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &s[..end])
}
