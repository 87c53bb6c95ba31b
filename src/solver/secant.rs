//! Derivative-free secant root finder

use log::{trace, warn};

use super::{Solution, SolverConfig};
use crate::error::{FinanceError, FinanceResult};

/// Relative and absolute offset used to place the second starting point
const SECOND_POINT_OFFSET: f64 = 1e-4;

/// Find a root of `f` starting from `x0` with the secant method.
///
/// The second starting point is `x0·(1+1e-4) ± 1e-4`. Iteration stops when
/// two successive iterates differ by less than `config.tolerance`.
///
/// A flat secant, a residual that cannot be evaluated, or running out of
/// iterations all fail with [`FinanceError::ConvergenceFailed`].
pub fn secant<F>(f: F, x0: f64, config: &SolverConfig) -> FinanceResult<Solution>
where
    F: Fn(f64) -> FinanceResult<f64>,
{
    let eval = |x: f64, iterations: u32| -> FinanceResult<f64> {
        match f(x) {
            Ok(value) if value.is_finite() => Ok(value),
            Ok(value) => Err(diverged(iterations, x, value)),
            Err(err) => {
                trace!("Residual undefined at {}: {}", x, err);
                Err(diverged(iterations, x, f64::NAN))
            }
        }
    };

    let offset = if x0 >= 0.0 {
        SECOND_POINT_OFFSET
    } else {
        -SECOND_POINT_OFFSET
    };

    let mut p0 = x0;
    let mut p1 = x0 * (1.0 + SECOND_POINT_OFFSET) + offset;
    let mut q0 = eval(p0, 0)?;
    let mut q1 = eval(p1, 0)?;

    // Keep the point with the smaller residual as the latest one
    if q1.abs() < q0.abs() {
        std::mem::swap(&mut p0, &mut p1);
        std::mem::swap(&mut q0, &mut q1);
    }

    for iteration in 1..=config.max_iterations {
        if q1 == q0 {
            return Err(diverged(iteration, p1, q1));
        }

        let p = if q1.abs() > q0.abs() {
            (-q0 / q1 * p1 + p0) / (1.0 - q0 / q1)
        } else {
            (-q1 / q0 * p0 + p1) / (1.0 - q1 / q0)
        };
        trace!("secant iteration {}: x = {}", iteration, p);

        if (p - p1).abs() < config.tolerance {
            let residual = eval(p, iteration)?;
            return Ok(Solution {
                value: p,
                iterations: iteration,
                residual,
            });
        }

        p0 = p1;
        q0 = q1;
        p1 = p;
        q1 = eval(p1, iteration)?;
    }

    Err(diverged(config.max_iterations, p1, q1))
}

fn diverged(iterations: u32, last: f64, residual: f64) -> FinanceError {
    warn!(
        "Secant solver stopped after {} iterations at {} (residual {})",
        iterations, last, residual
    );
    FinanceError::ConvergenceFailed {
        iterations,
        last,
        residual: residual.abs(),
    }
}
