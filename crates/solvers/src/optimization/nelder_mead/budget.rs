/// A limit on evaluations or iterations, possibly scaled by the dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Budget {
    /// A fixed count, independent of the number of parameters.
    Fixed(usize),

    /// `k · N` for a problem with `N` parameters.
    PerParameter(usize),

    /// `p · (N + 1)`: a patience of `p` per simplex vertex.
    Patience(usize),
}

impl Budget {
    /// Resolves the budget for a problem with `n` parameters.
    ///
    /// Saturates at `usize::MAX` rather than overflowing.
    #[must_use]
    pub fn resolve(self, n: usize) -> usize {
        match self {
            Self::Fixed(count) => count,
            Self::PerParameter(k) => k.saturating_mul(n),
            Self::Patience(p) => p.saturating_mul(n.saturating_add(1)),
        }
    }

    /// Returns true if the budget allows nothing for any dimension.
    pub(super) fn is_empty(self) -> bool {
        match self {
            Self::Fixed(count) | Self::PerParameter(count) | Self::Patience(count) => count == 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_by_dimension() {
        assert_eq!(Budget::Fixed(50).resolve(4), 50);
        assert_eq!(Budget::PerParameter(200).resolve(3), 600);
        assert_eq!(Budget::Patience(250).resolve(3), 1000);
    }

    #[test]
    fn saturates_instead_of_overflowing() {
        assert_eq!(Budget::PerParameter(usize::MAX).resolve(2), usize::MAX);
        assert_eq!(Budget::Patience(usize::MAX).resolve(usize::MAX), usize::MAX);
    }

    #[test]
    fn zero_counts_are_empty() {
        assert!(Budget::Fixed(0).is_empty());
        assert!(Budget::PerParameter(0).is_empty());
        assert!(Budget::Patience(0).is_empty());
        assert!(!Budget::Patience(1).is_empty());
    }
}
