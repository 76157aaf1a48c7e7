//! Discretized one-dimensional Gaussian kernel.

use std::f64::consts::PI;

use crate::error::{CannyError, Result};

/// Gaussian weights for offsets `-radius..=radius`.
///
/// The raw weights are kept as sampled from the Gaussian density; their sum is
/// stored separately as [`norm`](Self::norm) and divided out by each
/// convolution, so a blurred sample is `Σ weight·sample / norm`.
///
/// # Examples
///
/// ```rust
/// use canny_edge::GaussianKernel;
///
/// let kernel = GaussianKernel::new(2, 1.0).unwrap();
/// assert_eq!(kernel.weights().len(), 5);
/// let total: f64 = kernel.normalized().iter().sum();
/// assert!((total - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GaussianKernel {
    radius: u32,
    sigma: f64,
    weights: Vec<f64>,
    norm: f64,
}

impl GaussianKernel {
    /// Samples the Gaussian of spread `sigma` at the integer offsets of a
    /// window of half-width `radius`.
    ///
    /// # Errors
    ///
    /// Returns [`CannyError::InvalidParameter`] if `radius` is zero or `sigma`
    /// is not a positive finite number.
    pub fn new(radius: u32, sigma: f64) -> Result<Self> {
        if radius == 0 {
            return Err(CannyError::invalid(
                "radius",
                f64::from(radius),
                "must be greater than 0",
            ));
        }
        if !(sigma.is_finite() && sigma > 0.0) {
            return Err(CannyError::invalid(
                "sigma",
                sigma,
                "must be a positive finite number",
            ));
        }

        let scale = 1.0 / ((2.0 * PI).sqrt() * sigma);
        let two_sigma_sq = 2.0 * sigma * sigma;
        let r = i64::from(radius);
        let weights: Vec<f64> = (-r..=r)
            .map(|x| {
                let x = x as f64;
                scale * (-(x * x) / two_sigma_sq).exp()
            })
            .collect();
        let norm = weights.iter().sum();

        Ok(Self {
            radius,
            sigma,
            weights,
            norm,
        })
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }

    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Number of taps, `2·radius + 1`.
    pub fn taps(&self) -> usize {
        self.weights.len()
    }

    /// Raw (unnormalized) weights, index `radius` is the center tap.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Sum of the raw weights.
    pub fn norm(&self) -> f64 {
        self.norm
    }

    /// Weights divided by [`norm`](Self::norm); they sum to one.
    pub fn normalized(&self) -> Vec<f64> {
        self.weights.iter().map(|w| w / self.norm).collect()
    }

    /// Side of the square window a kernel of `radius` needs.
    ///
    /// Saturates at `u32::MAX`, which no image can hold.
    pub(crate) fn window(radius: u32) -> u32 {
        radius.saturating_mul(2).saturating_add(1)
    }

    /// Weighted sum of `samples` (one per tap) divided by the norm.
    #[inline]
    pub(crate) fn apply<I>(&self, samples: I) -> f64
    where
        I: IntoIterator<Item = f64>,
    {
        let sum: f64 = self
            .weights
            .iter()
            .zip(samples)
            .map(|(w, s)| w * s)
            .sum();
        sum / self.norm
    }
}
