use nmfit_core::Objective;

/// Adapter that negates the objective value.
///
/// Used to implement maximization by minimizing the negated objective.
pub struct NegateObjective<F>(pub F);

impl<D, F, const N: usize> Objective<D, N> for NegateObjective<F>
where
    D: ?Sized,
    F: Objective<D, N>,
{
    fn cost(&self, x: &[f64; N], data: &D) -> f64 {
        -self.0.cost(x, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn negate_objective_flips_sign() {
        let objective = |x: &[f64; 2], offset: &f64| x[0] - x[1] + offset;

        let original = objective.cost(&[1.0, 4.0], &1.0);
        let negated = NegateObjective(objective).cost(&[1.0, 4.0], &1.0);

        assert_relative_eq!(original, -2.0);
        assert_relative_eq!(negated, 2.0);
    }

    #[test]
    fn negation_keeps_nan() {
        let objective = |_: &[f64; 2], _: &()| f64::NAN;
        assert!(NegateObjective(objective).cost(&[0.0, 0.0], &()).is_nan());
    }
}
