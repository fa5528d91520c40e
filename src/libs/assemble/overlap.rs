use super::Fragment;

/// Offset of the leftmost occurrence of `needle` in `haystack`.
fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// Length of the overlap between the tail of `base` and the head of `ext`.
///
/// Candidate overlaps are prefixes of `ext`, tried from the longest
/// (`ext` minus one base) down to just over half of `ext`. A candidate is
/// accepted only when its *leftmost* occurrence in `base` ends exactly at the
/// end of `base`; a candidate that also shows up earlier in `base` is skipped.
///
/// ```
/// use reseq::libs::assemble::{overlap_len, Fragment};
/// let base = Fragment::new("a", "AAGCTTAG");
/// let ext = Fragment::new("b", "CTTAGGC");
/// assert_eq!(overlap_len(&base, &ext), Some(5));
/// assert_eq!(overlap_len(&ext, &base), None);
/// ```
pub fn overlap_len(base: &Fragment, ext: &Fragment) -> Option<usize> {
    let len_a = base.len();
    let len_b = ext.len();
    let half = (len_b + 1) / 2;

    for trim in 1..half {
        let clip = &ext.seq[..len_b - trim];
        match find(&base.seq, clip) {
            Some(m) if m == len_a - clip.len() => return Some(clip.len()),
            _ => continue,
        }
    }

    None
}

/// Splices `ext` onto `base` when they overlap by more than half of `ext`.
///
/// Returns `None` when no such overlap exists.
pub fn overlap(base: &Fragment, ext: &Fragment) -> Option<Fragment> {
    let k = overlap_len(base, ext)?;
    Some(base.merge(ext, k))
}
