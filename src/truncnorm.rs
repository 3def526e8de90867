//! Scalar truncated Gaussian kernel.
//!
//! A Gaussian $N(\mu,\sigma^2)$ restricted to $[a,b]$ and renormalized.
//! With $\alpha=(a-\mu)/\sigma$, $\beta=(b-\mu)/\sigma$ and
//! $Z=\Phi(\beta)-\Phi(\alpha)$:
//!
//! $$ \mathrm{pdf}(x) = \frac{\phi((x-\mu)/\sigma)}{\sigma Z}, \qquad
//!    \mathrm{cdf}(x) = \frac{\Phi((x-\mu)/\sigma)-\Phi(\alpha)}{Z}, \qquad
//!    \mathrm{ppf}(p) = \mu + \sigma\,\Phi^{-1}(\Phi(\alpha) + pZ). $$
//!
//! The module's entire job is evaluating these without losing precision
//! when $[a,b]$ sits far out in a tail: $Z$ and all cdf numerators are
//! erfc differences on the small side ([`normal::normal_pr`]), and the
//! quantile is solved in whichever tail quantity stays small.
use crate::error::{Error, Result};
use crate::normal;

/// One truncated Gaussian dimension with cached normalization.
///
/// Immutable after construction; evaluation is pure.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TruncatedGaussian1D {
    loc: f64,
    scale: f64,
    low: f64,
    high: f64,
    alpha: f64,
    /// `Phi(alpha)` when the interval leans left or is central,
    /// `1 - Phi(alpha)` when it leans right (`flipped`). Kept on the
    /// small side so `ppf` never forms a probability near 1.
    tail_mass: f64,
    /// Z = Phi(beta) - Phi(alpha), always > 0.
    mass: f64,
    flipped: bool,
}

impl TruncatedGaussian1D {
    /// Builds the kernel, validating `scale > 0` and `low < high`.
    ///
    /// Fails with [`Error::InvalidParameter`] on invalid parameters and
    /// also when the interval lies so deep in one tail (beyond roughly
    /// 38 standard deviations) that its probability mass underflows to
    /// zero; the distribution is numerically degenerate there and is
    /// rejected eagerly instead of yielding NaN at evaluation time.
    pub fn new(loc: f64, scale: f64, low: f64, high: f64) -> Result<Self> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "scale must be finite and > 0, got {}",
                scale
            )));
        }
        if !(low < high) {
            return Err(Error::InvalidParameter(format!(
                "bounds must satisfy low < high, got [{}, {}]",
                low, high
            )));
        }
        let alpha = (low - loc) / scale;
        let beta = (high - loc) / scale;
        let mass = normal::normal_pr(alpha, beta);
        if mass <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "truncation interval [{}, {}] carries no probability mass \
                 at double precision",
                low, high
            )));
        }
        let flipped = alpha + beta > 0.;
        let tail_mass = if flipped {
            normal::cdf(-alpha) // survival function of alpha
        } else {
            normal::cdf(alpha)
        };
        Ok(Self {
            loc,
            scale,
            low,
            high,
            alpha,
            tail_mass,
            mass,
            flipped,
        })
    }

    pub fn loc(&self) -> f64 {
        self.loc
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    /// Density at `x`; zero outside `[low, high]`.
    pub fn pdf(&self, x: f64) -> f64 {
        if x < self.low || x > self.high {
            return 0.0;
        }
        let z = (x - self.loc) / self.scale;
        normal::pdf(z) / (self.scale * self.mass)
    }

    /// $\Pr(X \le x)$; saturates to 0 below `low` and 1 above `high`.
    pub fn cdf(&self, x: f64) -> f64 {
        if x < self.low {
            return 0.0;
        }
        if x > self.high {
            return 1.0;
        }
        let z = (x - self.loc) / self.scale;
        (normal::normal_pr(self.alpha, z) / self.mass).clamp(0.0, 1.0)
    }

    /// Quantile function, the exact algebraic inverse of
    /// [`cdf`](TruncatedGaussian1D::cdf).
    ///
    /// `ppf(0.0)` is `low` and `ppf(1.0)` is `high`; `p` outside
    /// `[0, 1]` is a [`Error::DomainError`].
    pub fn ppf(&self, p: f64) -> Result<f64> {
        if !(0.0..=1.0).contains(&p) {
            return Err(Error::DomainError(format!(
                "probability must lie in [0, 1], got {}",
                p
            )));
        }
        Ok(self.quantile(p))
    }

    /// Quantile with `p` already validated to `[0, 1]`.
    pub(crate) fn quantile(&self, p: f64) -> f64 {
        if p == 0.0 {
            return self.low;
        }
        if p == 1.0 {
            return self.high;
        }
        let x = if self.flipped {
            // solve on the survival side: sf(z) = sf(alpha) - p*Z,
            // so z = -probit(sf(alpha) - p*Z) with every term small
            let q = (self.tail_mass - p * self.mass).clamp(0.0, 1.0);
            self.loc - self.scale * normal::probit(q)
        } else {
            let q = (self.tail_mass + p * self.mass).clamp(0.0, 1.0);
            self.loc + self.scale * normal::probit(q)
        };
        // absorb the last ulp of rounding at the interval ends
        x.clamp(self.low, self.high)
    }
}
