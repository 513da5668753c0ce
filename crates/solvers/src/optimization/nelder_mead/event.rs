use super::Vertex;

/// The step of the search that requested an evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Building the initial simplex.
    Initial,

    /// Reflecting the worst vertex through the centroid.
    Reflect,

    /// Extending a successful reflection further.
    Expand,

    /// Contracting toward a reflected point that beat only the worst vertex.
    ContractOutside,

    /// Contracting toward the worst vertex.
    ContractInside,

    /// Pulling every vertex toward the best one.
    Shrink,
}

/// Events emitted by the Nelder-Mead solver, one per objective evaluation.
///
/// Each event carries the phase that requested the evaluation and `best`,
/// the current best vertex. `best` is `None` only while the initial simplex
/// is being built and no finite cost has been seen yet.
#[derive(Debug, Clone, Copy)]
pub enum Event<'a, const N: usize> {
    /// The objective returned a finite cost.
    Evaluated {
        /// The evaluated vertex.
        vertex: &'a Vertex<N>,

        /// The step that requested the evaluation.
        phase: Phase,

        /// The current best vertex.
        best: Option<&'a Vertex<N>>,
    },

    /// The objective returned NaN or an infinity.
    ///
    /// The point already ranks behind every finite cost; observers do not
    /// need to return [`Action::AssumeWorse`](super::Action::AssumeWorse).
    NonFinite {
        /// The evaluated coordinates.
        x: &'a [f64; N],

        /// The raw objective value.
        cost: f64,

        /// The step that requested the evaluation.
        phase: Phase,

        /// The current best vertex.
        best: Option<&'a Vertex<N>>,
    },
}

impl<const N: usize> Event<'_, N> {
    /// Returns the coordinates that were evaluated.
    #[must_use]
    pub fn x(&self) -> &[f64; N] {
        match self {
            Self::Evaluated { vertex, .. } => &vertex.x,
            Self::NonFinite { x, .. } => x,
        }
    }

    /// Returns the raw objective value.
    #[must_use]
    pub fn cost(&self) -> f64 {
        match self {
            Self::Evaluated { vertex, .. } => vertex.cost,
            Self::NonFinite { cost, .. } => *cost,
        }
    }

    /// Returns the step that requested the evaluation.
    #[must_use]
    pub fn phase(&self) -> Phase {
        match self {
            Self::Evaluated { phase, .. } | Self::NonFinite { phase, .. } => *phase,
        }
    }

    /// Returns the current best vertex, if one exists.
    #[must_use]
    pub fn best(&self) -> Option<&Vertex<N>> {
        match self {
            Self::Evaluated { best, .. } | Self::NonFinite { best, .. } => *best,
        }
    }
}
