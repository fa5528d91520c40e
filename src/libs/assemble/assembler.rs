use std::collections::HashSet;

use super::{
    find_chain, overlap, seed_pairs, AssembleError, Availability, ChainOutcome, ChainState,
    Fragment, SeedPair, SEP,
};

/// Outcome of growing the chain started from one seed pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attempt {
    pub seed: SeedPair,
    pub succeeded: bool,
}

/// A successful reconstruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assembly {
    /// The full sequence; its name is the trail of original fragment names
    pub contig: Fragment,
    /// Every seed pair, in enumeration order
    pub seeds: Vec<SeedPair>,
    /// Seeds tried, in order; only the last one succeeded
    pub attempts: Vec<Attempt>,
}

impl Assembly {
    /// Original fragment names in assembly order.
    pub fn segments(&self) -> Vec<&str> {
        self.contig.trail().collect()
    }
}

/// Drives the reconstruction over a fixed list of fragments.
///
/// ```
/// use reseq::libs::assemble::{Assembler, Fragment};
/// let assembler = Assembler::new(vec![
///     Fragment::new("s1", "AAGCTTAG"),
///     Fragment::new("s2", "CTTAGGC"),
///     Fragment::new("s3", "AGGCCA"),
/// ])
/// .unwrap();
/// let assembly = assembler.assemble().unwrap();
/// assert_eq!(assembly.contig.seq, b"AAGCTTAGGCCA".to_vec());
/// assert_eq!(assembly.segments(), vec!["s1", "s2", "s3"]);
/// ```
#[derive(Debug, Clone)]
pub struct Assembler {
    fragments: Vec<Fragment>,
}

impl Assembler {
    /// Fails if a name contains the trail separator or is used twice.
    pub fn new(fragments: Vec<Fragment>) -> Result<Self, AssembleError> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(fragments.len());

        for (index, frag) in fragments.iter().enumerate() {
            if frag.name.contains(SEP) {
                return Err(AssembleError::ReservedSeparator {
                    index,
                    name: frag.name.clone(),
                });
            }
            if !seen.insert(&frag.name) {
                return Err(AssembleError::DuplicateName {
                    index,
                    name: frag.name.clone(),
                });
            }
        }
        drop(seen);

        Ok(Self { fragments })
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn seeds(&self) -> Vec<SeedPair> {
        seed_pairs(&self.fragments)
    }

    /// Initial chain state for a seed pair, or `None` if the pair does not overlap.
    pub fn seed_state(&self, seed: &SeedPair) -> Option<ChainState> {
        let dna = overlap(&self.fragments[seed.a], &self.fragments[seed.b])?;
        let availability = Availability::all(self.fragments.len())
            .without(seed.a)
            .without(seed.b);

        Some(ChainState { dna, availability })
    }

    pub fn assemble(&self) -> Result<Assembly, AssembleError> {
        self.assemble_with(|_, _| {})
    }

    /// Same as [`Assembler::assemble`], reporting each attempt as it finishes.
    ///
    /// `report` receives the attempt number and the attempt.
    pub fn assemble_with<F>(&self, report: F) -> Result<Assembly, AssembleError>
    where
        F: FnMut(usize, &Attempt),
    {
        self.assemble_from(self.seeds(), report)
    }

    /// Tries `seeds` in order, as produced by [`Assembler::seeds`].
    pub fn assemble_from<F>(
        &self,
        seeds: Vec<SeedPair>,
        mut report: F,
    ) -> Result<Assembly, AssembleError>
    where
        F: FnMut(usize, &Attempt),
    {
        let mut attempts = Vec::with_capacity(seeds.len());

        for (p, seed) in seeds.iter().enumerate() {
            let outcome = match self.seed_state(seed) {
                Some(state) => find_chain(&self.fragments, state),
                None => ChainOutcome::DeadEnd,
            };

            let attempt = Attempt {
                seed: *seed,
                succeeded: outcome.is_success(),
            };
            report(p, &attempt);
            attempts.push(attempt);

            if let ChainOutcome::Success(state) = outcome {
                return Ok(Assembly {
                    contig: state.dna,
                    seeds,
                    attempts,
                });
            }
        }

        Err(AssembleError::AssemblyFailed { seeds: seeds.len() })
    }
}
