use crate::models::common::CountMismatch;

/// Extracts one hash per confirmation line, in file order.
///
/// A line qualifies when it contains `marker` (exact, case-sensitive). The hash
/// is the text following the first occurrence of the marker, up to any further
/// occurrence, with surrounding whitespace trimmed. Hashes are not validated.
pub fn extract_tx_hashes<'a, I>(lines: I, marker: &str) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .filter(|line| line.contains(marker))
        .map(|line| {
            line.split(marker)
                .nth(1)
                .unwrap_or_default()
                .trim()
                .to_string()
        })
        .collect()
}

pub fn check_counts(hash_count: usize, log_count: usize) -> Option<CountMismatch> {
    if hash_count == log_count {
        None
    } else {
        Some(CountMismatch {
            hashes: hash_count,
            logs: log_count,
        })
    }
}
