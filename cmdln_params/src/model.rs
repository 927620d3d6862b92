/// The cardinality of tokens a positional parameter may capture.
///
/// Inspired by argparse: <https://docs.python.org/3/library/argparse.html#nargs>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bound {
    /// `[min, max]`: At least `min` and at most `max` tokens.
    Range(usize, usize),
    /// `[min, ..)`: At least `min` tokens, without any upper limit.
    Lower(usize),
}

impl Bound {
    /// The minimum number of tokens to capture.
    pub fn min(&self) -> usize {
        match self {
            Bound::Range(min, _) => *min,
            Bound::Lower(min) => *min,
        }
    }

    /// The maximum number of tokens to capture, if limited.
    pub fn max(&self) -> Option<usize> {
        match self {
            Bound::Range(_, max) => Some(*max),
            Bound::Lower(_) => None,
        }
    }

    /// The same bound, but with a minimum of `0`.
    pub fn optional(self) -> Self {
        match self {
            Bound::Range(_, max) => Bound::Range(0, max),
            Bound::Lower(_) => Bound::Lower(0),
        }
    }

    /// The number of tokens this bound greedily captures when `offered` are available.
    pub fn limit(&self, offered: usize) -> usize {
        match self.max() {
            Some(max) => std::cmp::min(offered, max),
            None => offered,
        }
    }
}

impl std::fmt::Display for Bound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Bound::Range(min, max) => write!(f, "[{min}, {max}]"),
            Bound::Lower(min) => write!(f, "[{min}, ..)"),
        }
    }
}
