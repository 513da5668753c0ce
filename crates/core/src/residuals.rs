use crate::Objective;

/// A model compared against observations, one residual per observation.
///
/// Residual `i` is typically `observation_i - model(x)_i`. Wrap an
/// implementation in [`SumOfSquares`] to obtain a least-squares [`Objective`].
pub trait Residuals<D: ?Sized, const N: usize> {
    /// Returns the number of observations in `data`.
    fn count(&self, data: &D) -> usize;

    /// Returns the residual of observation `index` at `x`.
    fn residual(&self, x: &[f64; N], data: &D, index: usize) -> f64;
}

/// Adapter that sums the squared residuals of a [`Residuals`] model.
///
/// The sum is accumulated in observation order, so repeated evaluations at
/// the same `x` are bit-identical.
pub struct SumOfSquares<R>(pub R);

impl<D, R, const N: usize> Objective<D, N> for SumOfSquares<R>
where
    D: ?Sized,
    R: Residuals<D, N>,
{
    fn cost(&self, x: &[f64; N], data: &D) -> f64 {
        (0..self.0.count(data))
            .map(|index| self.0.residual(x, data, index).powi(2))
            .sum()
    }
}
