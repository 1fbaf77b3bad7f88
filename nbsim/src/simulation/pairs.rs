//! Triangular indexing of unordered body pairs
//!
//! For `n` bodies there are `n(n-1)/2` pairs `(i, j)` with `i < j`. Pairs are
//! numbered row by row: row `i` holds `(i, i+1) .. (i, n-1)`, so a flat index
//! `k` decodes by subtracting row lengths `n - i - 1` until it falls inside a
//! row. This linear numbering is what the force engine splits across threads.

use std::ops::Range;

/// Number of unordered pairs among `n` bodies
pub fn pair_count(n: usize) -> usize {
    if n < 2 {
        0
    } else {
        n * (n - 1) / 2
    }
}

/// Decode flat index `k` into the pair `(i, j)`, `i < j < n`.
/// `k` must be below `pair_count(n)`.
pub fn index_to_pair(k: usize, n: usize) -> (usize, usize) {
    debug_assert!(k < pair_count(n), "pair index {k} out of range for {n} bodies");

    let mut rest = k;
    let mut i = 0;
    // walk rows until the remainder indexes inside row i
    while rest >= n - i - 1 {
        rest -= n - i - 1;
        i += 1;
    }
    (i, i + 1 + rest)
}

/// Inverse of [`index_to_pair`]
pub fn pair_to_index(i: usize, j: usize, n: usize) -> usize {
    debug_assert!(i < j && j < n, "({i}, {j}) is not an ordered pair below {n}");

    // rows 0..i hold (n-1) + (n-2) + ... + (n-i) pairs
    i * (2 * n - i - 1) / 2 + (j - i - 1)
}

/// Walks the pairs of a contiguous flat-index range in order.
///
/// Only the first index is decoded with [`index_to_pair`]; later pairs are
/// reached by stepping along the row, which keeps a block walk linear.
#[derive(Debug, Clone)]
pub struct PairIter {
    i: usize,
    j: usize,
    n: usize,
    remaining: usize,
}

impl PairIter {
    pub fn new(range: Range<usize>, n: usize) -> Self {
        let remaining = range.len();
        let (i, j) = if remaining > 0 {
            index_to_pair(range.start, n)
        } else {
            (0, 1)
        };
        Self { i, j, n, remaining }
    }
}

impl Iterator for PairIter {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let pair = (self.i, self.j);
        self.remaining -= 1;

        self.j += 1;
        if self.j == self.n {
            self.i += 1;
            self.j = self.i + 1;
        }
        Some(pair)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for PairIter {}

/// Split `0..total` into at most `parts` contiguous blocks of `ceil(total / parts)`
/// indices. The last block ends at `total`; empty trailing blocks are dropped,
/// so the result covers every index exactly once.
pub fn partition(total: usize, parts: usize) -> Vec<Range<usize>> {
    if total == 0 || parts == 0 {
        return Vec::new();
    }
    let block = total.div_ceil(parts);

    (0..parts)
        .map(|t| {
            let start = (t * block).min(total);
            let end = (start + block).min(total);
            start..end
        })
        .filter(|r| !r.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_then_encode_is_identity() {
        for n in 2..40 {
            for k in 0..pair_count(n) {
                let (i, j) = index_to_pair(k, n);
                assert!(i < j && j < n);
                assert_eq!(pair_to_index(i, j, n), k);
            }
        }
    }

    #[test]
    fn every_pair_reached_exactly_once() {
        let n = 17;
        let mut seen = vec![vec![0u32; n]; n];
        for k in 0..pair_count(n) {
            let (i, j) = index_to_pair(k, n);
            seen[i][j] += 1;
        }
        for i in 0..n {
            for j in 0..n {
                let expected = if i < j { 1 } else { 0 };
                assert_eq!(seen[i][j], expected, "pair ({i}, {j})");
            }
        }
    }

    #[test]
    fn degenerate_counts() {
        assert_eq!(pair_count(0), 0);
        assert_eq!(pair_count(1), 0);
        assert_eq!(pair_count(2), 1);
        assert_eq!(pair_count(100), 4950);
    }

    #[test]
    fn iter_matches_decode_from_any_start() {
        let n = 11;
        let total = pair_count(n);
        for start in 0..total {
            let walked: Vec<_> = PairIter::new(start..total, n).collect();
            let decoded: Vec<_> = (start..total).map(|k| index_to_pair(k, n)).collect();
            assert_eq!(walked, decoded);
        }
    }

    #[test]
    fn partition_covers_range_without_overlap() {
        for total in [0, 1, 7, 10, 45, 4950] {
            for parts in 1..=9 {
                let blocks = partition(total, parts);
                assert!(blocks.len() <= parts);

                let mut next = 0;
                for b in &blocks {
                    assert_eq!(b.start, next);
                    next = b.end;
                }
                assert_eq!(next, total);
            }
        }
    }

    #[test]
    fn partition_uses_ceil_sized_blocks() {
        let blocks = partition(10, 4);
        assert_eq!(blocks, vec![0..3, 3..6, 6..9, 9..10]);

        // more threads than work: trailing blocks are empty and dropped
        let blocks = partition(3, 8);
        assert_eq!(blocks, vec![0..1, 1..2, 2..3]);
    }
}
