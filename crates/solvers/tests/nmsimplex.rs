//! Behavior of the `nmsimplex` entry point, as seen by a caller that owns
//! one parameter vector per problem instance.

use std::thread;

use approx::assert_abs_diff_eq;
use nmfit_core::{Residuals, SumOfSquares};
use nmfit_solvers::{
    StatusCode, nmsimplex,
    optimization::nelder_mead::{Budget, CoefficientScheme, Config},
};

/// Samples of `y = a · exp(-k · t)` at `t = 0, 0.5, ..., 5.5`.
struct Decay {
    t: [f64; 12],
    y: [f64; 12],
}

impl Decay {
    fn sampled(a: f64, k: f64) -> Self {
        let t: [f64; 12] = std::array::from_fn(|i| 0.5 * i as f64);
        let y = t.map(|t| a * (-k * t).exp());
        Self { t, y }
    }
}

/// Residuals of an exponential decay model with parameters `[a, k]`.
struct DecayModel;

impl Residuals<Decay, 2> for DecayModel {
    fn count(&self, data: &Decay) -> usize {
        data.t.len()
    }

    fn residual(&self, x: &[f64; 2], data: &Decay, index: usize) -> f64 {
        data.y[index] - x[0] * (-x[1] * data.t[index]).exp()
    }
}

fn shifted_bowl(x: &[f64; 2], target: &[f64; 2]) -> f64 {
    (x[0] - target[0]).powi(2) + (x[1] - target[1]).powi(2)
}

#[test]
fn writes_optimum_back() {
    let mut params = [0.0, 0.0];

    let status = nmsimplex(&mut params, &[3.0, -1.0], shifted_bowl, &Config::default());

    assert_eq!(status, StatusCode::Converged);
    assert_abs_diff_eq!(params[0], 3.0, epsilon = 1e-5);
    assert_abs_diff_eq!(params[1], -1.0, epsilon = 1e-5);
}

#[test]
fn writes_best_point_back_when_budget_runs_out() {
    let mut params = [0.0, 0.0];
    let config = Config {
        max_evals: Budget::Fixed(10),
        ..Config::default()
    };

    let status = nmsimplex(&mut params, &[3.0, -1.0], shifted_bowl, &config);

    assert_eq!(status, StatusCode::BudgetExhausted);
    assert_ne!(params, [0.0, 0.0]);
    assert!(shifted_bowl(&params, &[3.0, -1.0]) < 10.0);
}

#[test]
fn fits_weighted_quadratic_in_four_dimensions() {
    let objective = |x: &[f64; 4], center: &[f64; 4]| -> f64 {
        x.iter()
            .zip(center)
            .zip([1.0, 2.0, 3.0, 4.0])
            .map(|((x, c), w)| w * (x - c).powi(2))
            .sum()
    };
    let center = [1.0, -1.0, 2.0, 0.5];

    for coefficients in [CoefficientScheme::Standard, CoefficientScheme::Adaptive] {
        let mut params = [0.0; 4];
        let config = Config {
            max_evals: Budget::Fixed(5000),
            max_iters: Budget::Fixed(5000),
            coefficients,
            ..Config::default()
        };

        let status = nmsimplex(&mut params, &center, objective, &config);

        assert_eq!(status, StatusCode::Converged);
        for (x, c) in params.iter().zip(center) {
            assert_abs_diff_eq!(*x, c, epsilon = 1e-5);
        }
    }
}

#[test]
fn fits_exponential_decay() {
    let data = Decay::sampled(2.0, 0.5);
    let mut params = [1.0, 1.0];

    let status = nmsimplex(&mut params, &data, SumOfSquares(DecayModel), &Config::default());

    assert_eq!(status, StatusCode::Converged);
    assert_abs_diff_eq!(params[0], 2.0, epsilon = 1e-4);
    assert_abs_diff_eq!(params[1], 0.5, epsilon = 1e-4);
}

#[test]
fn rejected_inputs_leave_params_unchanged() {
    let config = Config::default();

    let mut one = [4.0];
    let status = nmsimplex(&mut one, &(), |x: &[f64; 1], _: &()| x[0].powi(2), &config);
    assert_eq!(status, StatusCode::InvalidInput);
    assert_eq!(one, [4.0]);

    let mut empty: [f64; 0] = [];
    let status = nmsimplex(&mut empty, &(), |_: &[f64; 0], _: &()| 0.0, &config);
    assert_eq!(status, StatusCode::InvalidInput);

    let mut params = [1.0, f64::INFINITY];
    let status = nmsimplex(&mut params, &[3.0, -1.0], shifted_bowl, &config);
    assert_eq!(status, StatusCode::InvalidInput);
    assert_eq!(params, [1.0, f64::INFINITY]);

    let mut params = [1.0, 2.0];
    let invalid = Config {
        coord_tol: -1.0,
        ..config
    };
    let status = nmsimplex(&mut params, &[3.0, -1.0], shifted_bowl, &invalid);
    assert_eq!(status, StatusCode::InvalidInput);
    assert_eq!(params, [1.0, 2.0]);
}

#[test]
fn nan_objective_leaves_params_unchanged() {
    let mut params = [1.0, 2.0];

    let status = nmsimplex(&mut params, &(), |_: &[f64; 2], _: &()| f64::NAN, &Config::default());

    assert_eq!(status, StatusCode::InvalidInput);
    assert_eq!(params, [1.0, 2.0]);
}

#[test]
fn lanes_sharing_data_match_sequential_runs() {
    let lanes = [
        Decay::sampled(2.0, 0.5),
        Decay::sampled(1.5, 0.8),
        Decay::sampled(3.0, 0.3),
        Decay::sampled(0.5, 1.2),
    ];
    let config = Config::default();

    let sequential: Vec<_> = lanes
        .iter()
        .map(|data| {
            let mut params = [1.0, 1.0];
            let status = nmsimplex(&mut params, data, SumOfSquares(DecayModel), &config);
            (status, params)
        })
        .collect();

    let concurrent: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = lanes
            .iter()
            .map(|data| {
                scope.spawn(move || {
                    let mut params = [1.0, 1.0];
                    let status = nmsimplex(&mut params, data, SumOfSquares(DecayModel), &config);
                    (status, params)
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().expect("lane should not panic"))
            .collect()
    });

    for ((seq_status, seq_params), (par_status, par_params)) in sequential.iter().zip(&concurrent)
    {
        assert_eq!(seq_status, par_status);
        assert_eq!(seq_params.map(f64::to_bits), par_params.map(f64::to_bits));
    }

    let expected = [[2.0, 0.5], [1.5, 0.8], [3.0, 0.3], [0.5, 1.2]];
    for ((status, params), expected) in sequential.iter().zip(expected) {
        assert_eq!(*status, StatusCode::Converged);
        assert_abs_diff_eq!(params[0], expected[0], epsilon = 1e-4);
        assert_abs_diff_eq!(params[1], expected[1], epsilon = 1e-4);
    }
}
