/// Opening marker wrapped around matched substrings.
pub const MARK_OPEN: &str = "<mark>";
/// Closing marker wrapped around matched substrings.
pub const MARK_CLOSE: &str = "</mark>";

/// Wrap every non-overlapping case-insensitive occurrence of `needle_lower`
/// (already lowercased) in `<mark>` markers, preserving the original text's
/// case and bytes outside the markers. Matching resumes after the end of
/// each occurrence. An empty needle returns the text unchanged.
///
/// Only the literal markers are inserted; callers rendering the result as
/// markup are responsible for escaping the surrounding text.
pub fn highlight_occurrences(text: &str, needle_lower: &str) -> String {
    if needle_lower.is_empty() {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len() + MARK_OPEN.len() + MARK_CLOSE.len());
    let mut i = 0;
    while i < text.len() {
        if let Some(len) = prefix_match_len(&text[i..], needle_lower) {
            out.push_str(MARK_OPEN);
            out.push_str(&text[i..i + len]);
            out.push_str(MARK_CLOSE);
            i += len;
        } else {
            let step = text[i..]
                .chars()
                .next()
                .map(char::len_utf8)
                .unwrap_or(1);
            out.push_str(&text[i..i + step]);
            i += step;
        }
    }
    out
}

/// Byte length of a case-insensitive match of `needle_lower` at the start of
/// `hay`, or None. Folding is char-by-char, so the matched slice of the
/// original text may differ in byte length from the needle.
fn prefix_match_len(hay: &str, needle_lower: &str) -> Option<usize> {
    let mut needle = needle_lower.chars().peekable();
    let mut len = 0;
    for c in hay.chars() {
        if needle.peek().is_none() {
            break;
        }
        for folded in c.to_lowercase() {
            match needle.next() {
                Some(expected) if expected == folded => {}
                _ => return None,
            }
        }
        len += c.len_utf8();
    }
    if needle.peek().is_none() {
        Some(len)
    } else {
        None
    }
}
