// src/matching/distance.rs

/// Compute the Levenshtein edit distance between two strings.
///
/// Returns the minimum number of single-character insertions, deletions, and
/// substitutions required to transform `a` into `b`, measured over Unicode
/// scalar values rather than bytes. Classic unit-cost dynamic program, kept
/// to two rolling rows instead of the full `(m+1) x (n+1)` table.
///
/// The result is always `<= max(len(a), len(b))` in characters, is zero iff
/// the strings are equal, and is symmetric in its arguments.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // prev[j] holds dp[i-1][j]; the base row is the distance from the empty
    // prefix, i.e. j insertions.
    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0usize; n + 1];

    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            let cost = usize::from(a_chars[i - 1] != b_chars[j - 1]);
            curr[j] = (prev[j] + 1)
                .min(curr[j - 1] + 1)
                .min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}
