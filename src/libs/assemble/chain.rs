use super::{overlap, ChainState, Fragment};

/// Result of growing one chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainOutcome {
    /// Every fragment has been consumed.
    Success(ChainState),
    /// Some fragments are left but none extends the chain.
    DeadEnd,
}

impl ChainOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ChainOutcome::Success(_))
    }
}

/// Greedily extends `state` with the remaining fragments.
///
/// At each step the lowest available index whose fragment overlaps the chain
/// is spliced on and the search continues from the new chain. That choice is
/// final: if the walk gets stuck later, the whole search is a `DeadEnd` and
/// no other fragment is tried at an earlier step. Callers wanting more than
/// one path must start from different states.
///
/// Each step replaces the current state, so only one chain is alive at a time.
pub fn find_chain(fragments: &[Fragment], mut state: ChainState) -> ChainOutcome {
    loop {
        if state.availability.is_exhausted() {
            return ChainOutcome::Success(state);
        }

        let next = state.availability.available().find_map(|i| {
            overlap(&state.dna, &fragments[i]).map(|dna| ChainState {
                dna,
                availability: state.availability.without(i),
            })
        });

        match next {
            Some(next) => state = next,
            None => return ChainOutcome::DeadEnd,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::assemble::Availability;
    use std::collections::HashSet;

    fn start(fragments: &[Fragment], first: usize) -> ChainState {
        ChainState {
            dna: fragments[first].clone(),
            availability: Availability::all(fragments.len()).without(first),
        }
    }

    #[test]
    fn nothing_left_is_success() {
        let fragments = vec![Fragment::new("a", "ACGT")];
        let state = start(&fragments, 0);
        assert_eq!(
            find_chain(&fragments, state.clone()),
            ChainOutcome::Success(state)
        );
    }

    #[test]
    fn extends_to_the_end() {
        let fragments = vec![
            Fragment::new("s1", "AAGCTTAG"),
            Fragment::new("s2", "CTTAGGC"),
            Fragment::new("s3", "AGGCCA"),
        ];
        match find_chain(&fragments, start(&fragments, 0)) {
            ChainOutcome::Success(state) => {
                assert_eq!(state.dna.seq, b"AAGCTTAGGCCA".to_vec());
                assert_eq!(state.dna.name, "s1:s2:s3");
                assert!(state.availability.is_exhausted());
            }
            ChainOutcome::DeadEnd => panic!("expected a full chain"),
        }
    }

    #[test]
    fn cannot_extend_leftwards() {
        let fragments = vec![
            Fragment::new("s1", "AAGCTTAG"),
            Fragment::new("s2", "CTTAGGC"),
            Fragment::new("s3", "AGGCCA"),
        ];
        // s1 only fits in front of s2
        let outcome = find_chain(&fragments, start(&fragments, 1));
        assert_eq!(outcome, ChainOutcome::DeadEnd);
        assert!(!outcome.is_success());
    }

    #[test]
    fn commits_to_first_extension() {
        // A is extended by both B and C. A:B cannot take C, A:C can take B.
        let fragments = vec![
            Fragment::new("A", "TTTTGCAT"),
            Fragment::new("B", "GCATCGG"),
            Fragment::new("C", "TTTGCATAGCATC"),
        ];
        assert!(overlap(&fragments[0], &fragments[1]).is_some());
        assert!(overlap(&fragments[0], &fragments[2]).is_some());

        // B is scanned first, so the walk dies even though A:C:B exists
        assert_eq!(
            find_chain(&fragments, start(&fragments, 0)),
            ChainOutcome::DeadEnd
        );

        // same fragments with C scanned first
        let reordered = vec![
            fragments[0].clone(),
            fragments[2].clone(),
            fragments[1].clone(),
        ];
        match find_chain(&reordered, start(&reordered, 0)) {
            ChainOutcome::Success(state) => {
                assert_eq!(state.dna.name, "A:C:B");
                assert_eq!(state.dna.seq, b"TTTTGCATAGCATCGG".to_vec());
            }
            ChainOutcome::DeadEnd => panic!("expected a full chain"),
        }
    }

    #[test]
    fn long_chain_in_order() {
        // 400 reads of 40 bp every 15 bp over a fixed pseudo-random genome
        let mut x: u64 = 0x9e37_79b9_7f4a_7c15;
        let dna: Vec<u8> = (0..400 * 15 + 25)
            .map(|_| {
                x ^= x << 13;
                x ^= x >> 7;
                x ^= x << 17;
                b"ACGT"[(x % 4) as usize]
            })
            .collect();
        let fragments: Vec<Fragment> = (0..400)
            .map(|r| Fragment::new(format!("r{}", r), &dna[r * 15..r * 15 + 40]))
            .collect();

        match find_chain(&fragments, start(&fragments, 0)) {
            ChainOutcome::Success(state) => {
                assert_eq!(state.dna.seq, dna);
                assert_eq!(state.dna.trail().count(), 400);
                assert!(state.availability.is_exhausted());
            }
            ChainOutcome::DeadEnd => panic!("expected a full chain"),
        }
    }

    #[test]
    fn trail_matches_used_indices() {
        let fragments = vec![
            Fragment::new("f0", "GGACTTCC"),
            Fragment::new("f3", "TACGATTG"),
            Fragment::new("f1", "CTTCCGTA"),
            Fragment::new("f2", "CCGTACGA"),
        ];
        let state = match find_chain(&fragments, start(&fragments, 0)) {
            ChainOutcome::Success(state) => state,
            ChainOutcome::DeadEnd => panic!("expected a full chain"),
        };
        assert_eq!(state.dna.name, "f0:f1:f2:f3");
        assert_eq!(state.dna.seq, b"GGACTTCCGTACGATTG".to_vec());

        let names: Vec<&str> = state.dna.trail().collect();
        let unique: HashSet<&str> = names.iter().copied().collect();
        assert_eq!(names.len(), unique.len());

        let used: HashSet<&str> = state
            .availability
            .used()
            .map(|i| fragments[i].name.as_str())
            .collect();
        assert_eq!(used, unique);
    }
}
