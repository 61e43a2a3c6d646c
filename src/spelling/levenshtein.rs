//! Edit distance between words.

use std::cmp::min;

/// Minimum number of single-character insertions, deletions or substitutions
/// turning `a` into `b`. Counted in characters, not bytes.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let mut previous: Vec<usize> = (0..=b_chars.len()).collect();
    let mut current = vec![0; b_chars.len() + 1];

    for (i, ca) in a.chars().enumerate() {
        current[0] = i + 1;
        for (j, cb) in b_chars.iter().enumerate() {
            let cost = usize::from(ca != *cb);
            current[j + 1] = min(
                min(previous[j + 1] + 1, current[j] + 1),
                previous[j] + cost,
            );
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[b_chars.len()]
}

/// Bounded edit distance: `None` as soon as the distance must exceed
/// `threshold`.
pub fn levenshtein_distance_threshold(a: &str, b: &str, threshold: usize) -> Option<usize> {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    if a_chars.len().abs_diff(b_chars.len()) > threshold {
        return None;
    }

    let mut previous: Vec<usize> = (0..=b_chars.len()).collect();
    let mut current = vec![0; b_chars.len() + 1];

    for (i, ca) in a_chars.iter().enumerate() {
        current[0] = i + 1;
        let mut row_min = current[0];

        for (j, cb) in b_chars.iter().enumerate() {
            let cost = usize::from(ca != cb);
            current[j + 1] = min(
                min(previous[j + 1] + 1, current[j] + 1),
                previous[j] + cost,
            );
            row_min = min(row_min, current[j + 1]);
        }

        // Row minima never decrease.
        if row_min > threshold {
            return None;
        }
        std::mem::swap(&mut previous, &mut current);
    }

    let distance = previous[b_chars.len()];
    (distance <= threshold).then_some(distance)
}
