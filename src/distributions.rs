//! High level distributions
//!
//! [`IndependentTruncatedGaussian`] applies the scalar kernel of
//! [`crate::truncnorm`] independently across `d` dimensions and
//! broadcasts over batches. Inputs are either a length-`d` vector
//! ([`Array1`]) or an n×d batch ([`ndarray::Array2`], one sample per
//! row); outputs always have the input's shape. Dimensions never
//! couple, so entry `(i, j)` depends only on input `(i, j)` and the
//! parameters of dimension `j`.
use crate::error::{Error, Result};
use crate::truncnorm::TruncatedGaussian1D;
use ndarray::{Array, Array1, Axis, Dimension, Zip};

/// `d` mutually independent truncated Gaussians, one per dimension.
///
/// A value object: parameters are validated and frozen at
/// construction, evaluation methods are pure. The joint density
/// factorizes over dimensions; all methods return the per-dimension
/// factors and never a joint scalar.
#[derive(Clone, Debug, PartialEq)]
pub struct IndependentTruncatedGaussian {
    marginals: Vec<TruncatedGaussian1D>,
}

impl IndependentTruncatedGaussian {
    /// Builds the distribution from four equal-length parameter
    /// vectors.
    ///
    /// Fails with [`Error::ShapeMismatch`] when the lengths differ and
    /// [`Error::InvalidParameter`] when any single dimension violates
    /// `scale > 0`, `low < high` (the message names the dimension).
    pub fn new(
        loc: Array1<f64>,
        scale: Array1<f64>,
        low: Array1<f64>,
        high: Array1<f64>,
    ) -> Result<Self> {
        let d = loc.len();
        if scale.len() != d || low.len() != d || high.len() != d {
            return Err(Error::ShapeMismatch(format!(
                "parameter lengths differ: loc {}, scale {}, low {}, high {}",
                d,
                scale.len(),
                low.len(),
                high.len()
            )));
        }
        let mut marginals = Vec::with_capacity(d);
        for i in 0..d {
            let m = TruncatedGaussian1D::new(loc[i], scale[i], low[i], high[i]).map_err(
                |e| match e {
                    Error::InvalidParameter(msg) => {
                        Error::InvalidParameter(format!("dimension {}: {}", i, msg))
                    }
                    other => other,
                },
            )?;
            marginals.push(m);
        }
        Ok(Self { marginals })
    }

    /// Number of dimensions `d`.
    pub fn ndim(&self) -> usize {
        self.marginals.len()
    }

    /// The per-dimension kernels, in dimension order.
    pub fn marginals(&self) -> &[TruncatedGaussian1D] {
        &self.marginals
    }

    pub fn loc(&self) -> Array1<f64> {
        self.marginals.iter().map(|m| m.loc()).collect()
    }

    pub fn scale(&self) -> Array1<f64> {
        self.marginals.iter().map(|m| m.scale()).collect()
    }

    pub fn low(&self) -> Array1<f64> {
        self.marginals.iter().map(|m| m.low()).collect()
    }

    pub fn high(&self) -> Array1<f64> {
        self.marginals.iter().map(|m| m.high()).collect()
    }

    /// Per-dimension density. Entry `(i, j)` is the dimension-`j`
    /// kernel's pdf at `x[(i, j)]`; zero outside that dimension's
    /// truncation interval.
    pub fn pdf<D: Dimension>(&self, x: &Array<f64, D>) -> Result<Array<f64, D>> {
        self.map_lanes(x, TruncatedGaussian1D::pdf)
    }

    /// Per-dimension cumulative probability, saturating to 0/1 outside
    /// each dimension's truncation interval.
    pub fn cdf<D: Dimension>(&self, x: &Array<f64, D>) -> Result<Array<f64, D>> {
        self.map_lanes(x, TruncatedGaussian1D::cdf)
    }

    /// Per-dimension quantiles. Every entry of `p` must lie in
    /// `[0, 1]`; the whole batch is validated before anything is
    /// computed, so a [`Error::DomainError`] means no partial output.
    pub fn ppf<D: Dimension>(&self, p: &Array<f64, D>) -> Result<Array<f64, D>> {
        if let Some(bad) = p.iter().find(|v| !(0.0..=1.0).contains(*v)) {
            return Err(Error::DomainError(format!(
                "probability must lie in [0, 1], got {}",
                bad
            )));
        }
        self.map_lanes(p, TruncatedGaussian1D::quantile)
    }

    /// Applies a scalar kernel method along the trailing axis of a
    /// vector or batch, preserving shape.
    fn map_lanes<D: Dimension>(
        &self,
        x: &Array<f64, D>,
        f: impl Fn(&TruncatedGaussian1D, f64) -> f64,
    ) -> Result<Array<f64, D>> {
        let ndim = x.ndim();
        if ndim == 0 || ndim > 2 {
            return Err(Error::ShapeMismatch(format!(
                "input must be a length-d vector or an n×d batch, got {} axes",
                ndim
            )));
        }
        if x.shape()[ndim - 1] != self.ndim() {
            return Err(Error::ShapeMismatch(format!(
                "trailing axis is {}, distribution has {} dimensions",
                x.shape()[ndim - 1],
                self.ndim()
            )));
        }
        let mut out = Array::zeros(x.raw_dim());
        let axis = Axis(ndim - 1);
        Zip::from(out.lanes_mut(axis))
            .and(x.lanes(axis))
            .for_each(|mut o, lane| {
                for (j, m) in self.marginals.iter().enumerate() {
                    o[j] = f(m, lane[j]);
                }
            });
        Ok(out)
    }
}
