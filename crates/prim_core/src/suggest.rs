pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let a_len = a_chars.len();
    let b_len = b_chars.len();

    if a_len == 0 {
        return b_len;
    }
    if b_len == 0 {
        return a_len;
    }

    // Two rolling rows instead of the full matrix.
    let mut prev: Vec<usize> = (0..=b_len).collect();
    let mut cur = vec![0; b_len + 1];

    for i in 1..=a_len {
        cur[0] = i;
        for j in 1..=b_len {
            let cost = usize::from(a_chars[i - 1] != b_chars[j - 1]);
            cur[j] = (prev[j] + 1).min(cur[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut cur);
    }

    prev[b_len]
}

/// Closest candidate within half the length of `name` (at least 1 edit),
/// compared case-insensitively.
pub fn find_best_match<'a>(
    name: &str,
    candidates: impl Iterator<Item = &'a str>,
) -> Option<&'a str> {
    let needle = name.to_lowercase();
    let mut best_match = None;
    let mut min_distance = (name.chars().count() / 2).max(1);

    for candidate in candidates {
        let distance = levenshtein_distance(&needle, &candidate.to_lowercase());
        if distance <= min_distance {
            min_distance = distance;
            best_match = Some(candidate);
        }
    }

    best_match
}
