//! Fits an exponential decay to several synthetic data sets, one lane each.
//!
//! Every lane runs its own simplex search on its own thread, sharing nothing
//! but the read-only observations.
//!
//! # Usage
//!
//! ```text
//! cargo run --example fit_decay
//! RUST_LOG=debug cargo run --example fit_decay
//! RUST_LOG=trace cargo run --example fit_decay
//! ```

use std::{error::Error, thread};

use log::info;
use nmfit_core::{Residuals, SumOfSquares};
use nmfit_observers::LogObserver;
use nmfit_solvers::optimization::nelder_mead::{self, Config, Solution};

const SAMPLES: usize = 24;

/// Noisy samples of `y = a · exp(-k · t)`.
struct Observations {
    t: [f64; SAMPLES],
    y: [f64; SAMPLES],
}

impl Observations {
    /// Samples the decay at `t = 0, 0.25, ...` with a small deterministic
    /// ripple standing in for measurement noise.
    fn synthetic(a: f64, k: f64, ripple: f64) -> Self {
        let t: [f64; SAMPLES] = std::array::from_fn(|i| 0.25 * i as f64);
        let y = std::array::from_fn(|i| a * (-k * t[i]).exp() + ripple * (3.0 * t[i]).sin());
        Self { t, y }
    }
}

/// Residuals of `y = x[0] · exp(-x[1] · t)`.
struct Decay;

impl Residuals<Observations, 2> for Decay {
    fn count(&self, data: &Observations) -> usize {
        data.t.len()
    }

    fn residual(&self, x: &[f64; 2], data: &Observations, index: usize) -> f64 {
        data.y[index] - x[0] * (-x[1] * data.t[index]).exp()
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    pretty_env_logger::init();

    let truths = [(2.0, 0.5), (1.5, 0.8), (3.0, 0.3), (0.5, 1.2)];
    let lanes: Vec<Observations> = truths
        .iter()
        .map(|&(a, k)| Observations::synthetic(a, k, 0.01))
        .collect();
    let labels: Vec<String> = (0..lanes.len()).map(|i| format!("lane {i}")).collect();
    let config = Config::default();

    let results: Vec<Result<Solution<2>, nelder_mead::Error>> = thread::scope(|scope| {
        let handles: Vec<_> = lanes
            .iter()
            .zip(&labels)
            .map(|(data, label)| {
                scope.spawn(move || {
                    let mut log = LogObserver::new(label);
                    nelder_mead::minimize([1.0, 1.0], data, SumOfSquares(Decay), &config, &mut log)
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().unwrap_or_else(|panic| std::panic::resume_unwind(panic)))
            .collect()
    });

    for ((label, (a, k)), result) in labels.iter().zip(truths).zip(results) {
        let solution = result?;
        info!(
            "{label}: {:?} after {} evals, a = {:.4} (true {a}), k = {:.4} (true {k}), cost {:.3e}",
            solution.status, solution.evals, solution.x[0], solution.x[1], solution.cost,
        );
        println!(
            "{label}: a = {:.4}, k = {:.4} ({:?})",
            solution.x[0], solution.x[1], solution.status
        );
    }

    Ok(())
}
