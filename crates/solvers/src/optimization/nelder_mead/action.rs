/// Actions an observer can take during a simplex search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the best vertex found so far.
    StopEarly,

    /// Rank this point as worse than every finite cost.
    ///
    /// The evaluation is treated exactly like a non-finite objective value:
    /// the point is never accepted as the best vertex, and the moves that
    /// depend on it route the simplex away from it.
    ///
    /// Use this for:
    /// - Rejecting points that are numerically valid but physically
    ///   meaningless (negative rates, out-of-range fractions).
    /// - Steering the search away from a region of parameter space.
    AssumeWorse,
}
