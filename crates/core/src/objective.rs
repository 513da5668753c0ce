/// The cost of a parameter vector for one problem instance.
///
/// An objective maps solver variables `x: [f64; N]` and a read-only reference
/// to problem data (observations, constants, weights) to a scalar cost, where
/// lower is better. Solvers never inspect or mutate the data; they forward it
/// verbatim on every evaluation, so one data record can be shared by many
/// concurrent searches.
///
/// The cost should be finite. Non-finite values (NaN, ±∞) are not errors:
/// solvers rank them as worse than any finite cost.
///
/// Closures with the signature `Fn(&[f64; N], &D) -> f64` implement this
/// trait automatically.
pub trait Objective<D: ?Sized, const N: usize> {
    /// Evaluates the cost at `x`.
    fn cost(&self, x: &[f64; N], data: &D) -> f64;
}

impl<D, F, const N: usize> Objective<D, N> for F
where
    D: ?Sized,
    F: Fn(&[f64; N], &D) -> f64,
{
    fn cost(&self, x: &[f64; N], data: &D) -> f64 {
        self(x, data)
    }
}
