use super::{overlap_len, Fragment};

/// An ordered pair of fragment indices that overlap: `a` is the base, `b` the extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeedPair {
    pub a: usize,
    pub b: usize,
}

impl SeedPair {
    pub fn new(a: usize, b: usize) -> Self {
        debug_assert_ne!(a, b);
        Self { a, b }
    }
}

/// All ordered pairs `(a, b)`, `a != b`, where `fragments[b]` extends `fragments[a]`.
///
/// Pairs come out sorted by `a`, then by `b`, following the input order.
///
/// ```
/// use reseq::libs::assemble::{seed_pairs, Fragment, SeedPair};
/// let fragments = vec![
///     Fragment::new("s1", "AAGCTTAG"),
///     Fragment::new("s2", "CTTAGGC"),
///     Fragment::new("s3", "AGGCCA"),
/// ];
/// assert_eq!(
///     seed_pairs(&fragments),
///     vec![SeedPair::new(0, 1), SeedPair::new(1, 2)]
/// );
/// ```
pub fn seed_pairs(fragments: &[Fragment]) -> Vec<SeedPair> {
    let mut pairs = vec![];

    for (n, base) in fragments.iter().enumerate() {
        for (i, ext) in fragments.iter().enumerate() {
            if i == n {
                continue;
            }
            if overlap_len(base, ext).is_some() {
                pairs.push(SeedPair::new(n, i));
            }
        }
    }

    pairs
}
