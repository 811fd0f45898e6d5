//! Text normalization for the vector ranking path

/// Normalize raw resume text for vectorization:
/// lower-case, strip everything that is not an ASCII letter or whitespace,
/// and collapse whitespace runs into single spaces.
///
/// This runs upstream of TF-IDF only; skill detection works on the raw text
/// because symbols like `+`, `#`, and `.` carry meaning there.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;

    for c in text.chars() {
        if c.is_ascii_alphabetic() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(c.to_ascii_lowercase());
        } else if c.is_whitespace() {
            pending_space = true;
        }
        // Digits, punctuation, and symbols are dropped without
        // introducing a word break of their own.
    }

    out
}
