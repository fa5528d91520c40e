use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssembleError {
    /// A fragment name contains the trail separator
    ReservedSeparator {
        /// Position of the fragment in the input
        index: usize,
        name: String,
    },
    /// Two fragments share a name
    DuplicateName {
        /// Position of the second fragment in the input
        index: usize,
        name: String,
    },
    /// No seed pair grew into a chain using every fragment
    AssemblyFailed {
        /// Number of seed pairs tried
        seeds: usize,
    },
}

impl fmt::Display for AssembleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssembleError::ReservedSeparator { index, name } => write!(
                f,
                "Fragment {} is named \"{}\", which contains the reserved separator '{}'",
                index,
                name,
                super::SEP
            ),
            AssembleError::DuplicateName { index, name } => write!(
                f,
                "Fragment {} is named \"{}\", which is used more than once",
                index, name
            ),
            AssembleError::AssemblyFailed { seeds } => write!(
                f,
                "Unable to reconstruct the DNA sequence: none of {} seed pairs consumed every fragment",
                seeds
            ),
        }
    }
}

impl std::error::Error for AssembleError {}
