/// Separator of the name trail of a merged fragment.
///
/// It must not appear in any fragment name.
pub const SEP: char = ':';

/// A named DNA sequence.
///
/// Original fragments come straight from the input file. Merged fragments
/// carry a `SEP`-joined trail of the original names, in assembly order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub name: String,
    pub seq: Vec<u8>,
}

impl Fragment {
    pub fn new(name: impl Into<String>, seq: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            seq: seq.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.seq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    /// Names of the original fragments composing this one.
    ///
    /// ```
    /// use reseq::libs::assemble::Fragment;
    /// let frag = Fragment::new("s1:s2:s3", "ACGT");
    /// assert_eq!(frag.trail().collect::<Vec<_>>(), vec!["s1", "s2", "s3"]);
    /// ```
    pub fn trail(&self) -> impl Iterator<Item = &str> {
        self.name.split(SEP)
    }

    /// Appends `ext` minus its first `overlap` bases.
    pub(crate) fn merge(&self, ext: &Fragment, overlap: usize) -> Fragment {
        let mut seq = Vec::with_capacity(self.len() + ext.len() - overlap);
        seq.extend_from_slice(&self.seq);
        seq.extend_from_slice(&ext.seq[overlap..]);

        Fragment {
            name: format!("{}{}{}", self.name, SEP, ext.name),
            seq,
        }
    }
}

/// Which original fragments are still free to join the chain.
///
/// Each extension produces a fresh vector, so sibling searches never share state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Availability(Vec<bool>);

impl Availability {
    /// Every one of `n` fragments available.
    pub fn all(n: usize) -> Self {
        Self(vec![true; n])
    }

    /// A copy with `idx` marked as used.
    pub fn without(&self, idx: usize) -> Self {
        debug_assert!(self.0[idx], "fragment {} is already in the chain", idx);
        let mut flags = self.0.clone();
        flags[idx] = false;
        Self(flags)
    }

    pub fn is_available(&self, idx: usize) -> bool {
        self.0[idx]
    }

    pub fn is_exhausted(&self) -> bool {
        !self.0.iter().any(|&f| f)
    }

    /// Available indices, ascending.
    pub fn available(&self) -> impl Iterator<Item = usize> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(i, &f)| if f { Some(i) } else { None })
    }

    /// Used indices, ascending.
    pub fn used(&self) -> impl Iterator<Item = usize> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(i, &f)| if f { None } else { Some(i) })
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One node of the chain search: the sequence built so far and what is left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainState {
    pub dna: Fragment,
    pub availability: Availability,
}
