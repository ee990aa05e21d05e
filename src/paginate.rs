use crate::error::{Error, Result};

/// Return up to `count` paths following `from` in `sequence`
///
/// An empty `from` starts at the beginning. A `from` that is not in the
/// sequence (the file was removed or renamed since the cursor was written)
/// yields an empty page rather than restarting. `sequence` must not contain
/// duplicates; the first match wins if it does.
pub fn paginate(sequence: &[String], count: usize, from: &str) -> Result<Vec<String>> {
    if count == 0 {
        return Err(Error::invalid_argument("count must be greater than zero"));
    }

    let start = if from.is_empty() {
        0
    } else {
        match sequence.iter().position(|path| path == from) {
            Some(i) => i + 1,
            None => return Ok(Vec::new()),
        }
    };

    Ok(sequence.iter().skip(start).take(count).cloned().collect())
}
