/// Default cap on edit distance computations.
///
/// Candidate fields can be long free text, so every comparison is bounded.
pub const DEFAULT_DISTANCE_LIMIT: usize = 100;

/// Compute the Levenshtein edit distance between `target` and `comparator`,
/// capped at `limit`.
///
/// `target` is the string being matched against; `comparator` is the possible
/// match. Comparison is case-insensitive. An empty `target` contributes zero
/// distance against any comparator; an empty `comparator` costs the full
/// length of the target.
///
/// # Arguments
/// * `target` - The string being matched against
/// * `comparator` - The candidate string
/// * `limit` - Upper bound on the returned distance
///
/// # Returns
/// The edit distance, never exceeding `limit`
pub fn levenshtein(target: &str, comparator: &str, limit: usize) -> usize {
    if target.is_empty() {
        return 0;
    }

    let target: Vec<char> = target.to_lowercase().chars().collect();
    let comparator: Vec<char> = comparator.to_lowercase().chars().collect();

    // Single rolling row over the target; O(|target|) memory.
    let mut previous_row: Vec<usize> = (0..=target.len()).collect();

    for (j, c2) in comparator.iter().enumerate() {
        let mut current_row = Vec::with_capacity(target.len() + 1);
        current_row.push(j + 1);
        let mut row_min = j + 1;

        for (i, c1) in target.iter().enumerate() {
            let insert = previous_row[i + 1] + 1;
            let delete = current_row[i] + 1;
            let replace = previous_row[i] + usize::from(c1 != c2);
            let cell = insert.min(delete).min(replace);
            row_min = row_min.min(cell);
            current_row.push(cell);
        }

        // Once every cell in a row exceeds the limit the final distance will
        // too, so stop early.
        if row_min > limit {
            return limit;
        }

        previous_row = current_row;
    }

    previous_row[target.len()].min(limit)
}

/// Edit distance with the default limit.
#[inline]
pub fn distance(target: &str, comparator: &str) -> usize {
    levenshtein(target, comparator, DEFAULT_DISTANCE_LIMIT)
}
