//! 1D interpolation trait and implementations.

use qsa_core::{ensure, errors::Result, Real};

/// A 1D interpolation function `f: R → R` defined by a set of known points.
pub trait Interpolation1D: std::fmt::Debug + Send + Sync {
    /// Evaluate the interpolation at `x`.
    fn operator(&self, x: Real) -> Real;

    /// Return the lower bound of the interpolation domain.
    fn x_min(&self) -> Real;

    /// Return the upper bound of the interpolation domain.
    fn x_max(&self) -> Real;

    /// Return `true` if `x` is within the interpolation range.
    fn is_in_range(&self, x: Real) -> bool {
        x >= self.x_min() && x <= self.x_max()
    }
}

/// Behaviour outside `[x_min, x_max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Extrapolation {
    /// Extend the first and last segments.
    #[default]
    Linear,
    /// Hold the first and last values constant.
    Flat,
}

// ── Linear ────────────────────────────────────────────────────────────────────

/// Linear interpolation.
///
/// `f(x) = y[i] + (y[i+1] - y[i]) * (x - x[i]) / (x[i+1] - x[i])`
///
/// A single node gives a constant function.
#[derive(Debug, Clone)]
pub struct LinearInterpolation {
    xs: Vec<Real>,
    ys: Vec<Real>,
    extrapolation: Extrapolation,
}

impl LinearInterpolation {
    /// Construct a linear interpolation from strictly increasing `xs` and
    /// corresponding `ys`.
    ///
    /// # Errors
    /// Returns an error if the slices are empty, have different lengths, or
    /// `xs` is not strictly increasing.
    pub fn new(xs: &[Real], ys: &[Real]) -> Result<Self> {
        ensure!(!xs.is_empty(), "need at least 1 point for interpolation");
        ensure!(xs.len() == ys.len(), "xs and ys must have the same length");
        ensure!(
            xs.windows(2).all(|w| w[0] < w[1]),
            "xs must be strictly increasing"
        );
        Ok(Self {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
            extrapolation: Extrapolation::Linear,
        })
    }

    /// Use `extrapolation` outside the node range.
    pub fn with_extrapolation(mut self, extrapolation: Extrapolation) -> Self {
        self.extrapolation = extrapolation;
        self
    }

    /// Node abscissae.
    pub fn xs(&self) -> &[Real] {
        &self.xs
    }

    /// Node values.
    pub fn ys(&self) -> &[Real] {
        &self.ys
    }

    fn locate(&self, x: Real) -> usize {
        let n = self.xs.len();
        if x <= self.xs[0] {
            return 0;
        }
        if x >= self.xs[n - 1] {
            return n - 2;
        }
        // Index of the last node at or below x.
        self.xs.partition_point(|&xi| xi <= x) - 1
    }
}

impl Interpolation1D for LinearInterpolation {
    fn x_min(&self) -> Real {
        self.xs[0]
    }

    fn x_max(&self) -> Real {
        self.xs[self.xs.len() - 1]
    }

    fn operator(&self, x: Real) -> Real {
        let n = self.xs.len();
        if n == 1 {
            return self.ys[0];
        }
        if self.extrapolation == Extrapolation::Flat {
            if x <= self.xs[0] {
                return self.ys[0];
            }
            if x >= self.xs[n - 1] {
                return self.ys[n - 1];
            }
        }
        let i = self.locate(x);
        let dx = self.xs[i + 1] - self.xs[i];
        self.ys[i] + (x - self.xs[i]) * (self.ys[i + 1] - self.ys[i]) / dx
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    #[test]
    fn linear_interpolation() {
        let xs = [0.0, 1.0, 2.0];
        let ys = [0.0, 1.0, 4.0];
        let interp = LinearInterpolation::new(&xs, &ys).unwrap();
        assert_abs_diff_eq!(interp.operator(0.5), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(interp.operator(1.5), 2.5, epsilon = 1e-12);
        assert_abs_diff_eq!(interp.operator(1.0), 1.0, epsilon = 1e-12);
        // linear extrapolation by default
        assert_abs_diff_eq!(interp.operator(3.0), 7.0, epsilon = 1e-12);
        assert_abs_diff_eq!(interp.operator(-1.0), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn flat_extrapolation() {
        let interp = LinearInterpolation::new(&[0.0, 1.0, 2.0], &[0.0, 1.0, 4.0])
            .unwrap()
            .with_extrapolation(Extrapolation::Flat);
        assert_abs_diff_eq!(interp.operator(3.0), 4.0, epsilon = 1e-12);
        assert_abs_diff_eq!(interp.operator(-1.0), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(interp.operator(1.5), 2.5, epsilon = 1e-12);
        assert!(interp.is_in_range(2.0));
        assert!(!interp.is_in_range(2.5));
    }

    #[test]
    fn single_node_is_constant() {
        let interp = LinearInterpolation::new(&[5.0], &[0.07]).unwrap();
        assert_abs_diff_eq!(interp.operator(-10.0), 0.07);
        assert_abs_diff_eq!(interp.operator(10.0), 0.07);
    }

    #[test]
    fn rejects_bad_nodes() {
        assert!(LinearInterpolation::new(&[], &[]).is_err());
        assert!(LinearInterpolation::new(&[0.0, 1.0], &[1.0]).is_err());
        assert!(LinearInterpolation::new(&[0.0, 0.0], &[1.0, 2.0]).is_err());
        assert!(LinearInterpolation::new(&[1.0, 0.0], &[1.0, 2.0]).is_err());
    }

    proptest! {
        #[test]
        fn linear_stays_within_node_values(x in -5.0f64..15.0) {
            let interp = LinearInterpolation::new(&[0.0, 3.0, 10.0], &[0.05, 0.07, 0.06])
                .unwrap()
                .with_extrapolation(Extrapolation::Flat);
            let y = interp.operator(x);
            prop_assert!((0.05 - 1e-12..=0.07 + 1e-12).contains(&y));
        }
    }
}
