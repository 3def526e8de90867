//! Standard normal primitives: $\phi$, $\Phi$, interval probabilities
//! and the probit function $\Phi^{-1}$.
//!
//! `cdf` and `normal_pr` are thin compositions of [`libm`]'s SunPro
//! `erfc`, which holds a few ulp of relative accuracy all the way into
//! the tails (out to $|z| \approx 38$, where $\Phi$ underflows).
//! `inverse_cdf` seeds with Acklam's minimax rational approximation and
//! polishes with Halley steps against `cdf`, which is what makes the
//! composed cdf/ppf round trips hold to better than 1e-12.
use crate::error::{Error, Result};
use libm::erfc;
use num::traits::FloatConst;

/// $\phi(z)$, the standard normal density.
pub fn pdf(z: f64) -> f64 {
    (-0.5 * z * z).exp() / f64::TAU().sqrt()
}

/// $\Phi(z) = \mathrm{erfc}(-z/\sqrt{2})/2$, accurate into both tails.
pub fn cdf(z: f64) -> f64 {
    0.5 * erfc(-z * f64::FRAC_1_SQRT_2())
}

/// Computes $\Pr(a<Z<b) = \Phi(b)-\Phi(a)$ where $Z\sim N(0,1)$.
///
/// The difference is taken between erfc evaluations with positive
/// arguments, chosen by the sign of `a + b`, so intervals far out in
/// either tail keep full relative precision instead of cancelling
/// against 1.
pub fn normal_pr(a: f64, b: f64) -> f64 {
    if a + b > 0. {
        // difference of survival probabilities, the smaller side here
        0.5 * (erfc(a * f64::FRAC_1_SQRT_2()) - erfc(b * f64::FRAC_1_SQRT_2()))
    } else {
        0.5 * (erfc(-b * f64::FRAC_1_SQRT_2()) - erfc(-a * f64::FRAC_1_SQRT_2()))
    }
}

/// $\Phi^{-1}(p)$ for `p` in `[0, 1]`.
///
/// `inverse_cdf(0.0)` is $-\infty$ and `inverse_cdf(1.0)` is $+\infty$;
/// anything outside `[0, 1]` (including NaN) is a
/// [`DomainError`](Error::DomainError).
pub fn inverse_cdf(p: f64) -> Result<f64> {
    if !(0.0..=1.0).contains(&p) {
        return Err(Error::DomainError(format!(
            "probability must lie in [0, 1], got {}",
            p
        )));
    }
    Ok(probit(p))
}

/// Total probit over `[0, 1]`; callers have already validated `p`.
pub(crate) fn probit(p: f64) -> f64 {
    debug_assert!((0.0..=1.0).contains(&p));
    if p == 0.0 {
        f64::NEG_INFINITY
    } else if p == 1.0 {
        f64::INFINITY
    } else if p > 0.5 {
        // 1 - p is exact for p >= 0.5, so the reflection loses nothing
        -probit_lower(1.0 - p)
    } else {
        probit_lower(p)
    }
}

/// Probit restricted to `p` in `(0, 0.5]`, where `cdf` evaluates on the
/// small side and the Halley residual `cdf(z) - p` carries full
/// relative precision.
fn probit_lower(p: f64) -> f64 {
    let mut z = acklam(p);
    for _ in 0..2 {
        let d = pdf(z);
        if d == 0.0 {
            break;
        }
        let t = (cdf(z) - p) / d;
        // Halley's method; cdf'' / cdf' = -z
        z -= t / (1.0 + 0.5 * z * t);
    }
    z
}

/// Acklam's rational approximation to $\Phi^{-1}$ on `(0, 0.5]`,
/// |error| < 1.15e-9. Used only as the refinement seed.
fn acklam(p: f64) -> f64 {
    const A: [f64; 6] = [
        -3.969_683_028_665_376e1,
        2.209_460_984_245_205e2,
        -2.759_285_104_469_687e2,
        1.383_577_518_672_69e2,
        -3.066_479_806_614_716e1,
        2.506_628_277_459_239e0,
    ];
    const B: [f64; 5] = [
        -5.447_609_879_822_406e1,
        1.615_858_368_580_409e2,
        -1.556_989_798_598_866e2,
        6.680_131_188_771_972e1,
        -1.328_068_155_288_572e1,
    ];
    const C: [f64; 6] = [
        -7.784_894_002_430_293e-3,
        -3.223_964_580_411_365e-1,
        -2.400_758_277_161_838e0,
        -2.549_732_539_343_734e0,
        4.374_664_141_464_968e0,
        2.938_163_982_698_783e0,
    ];
    const D: [f64; 4] = [
        7.784_695_709_041_462e-3,
        3.224_671_290_700_398e-1,
        2.445_134_137_142_996e0,
        3.754_408_661_907_416e0,
    ];
    const P_LOW: f64 = 0.02425;

    if p < P_LOW {
        let q = (-2.0 * p.ln()).sqrt();
        (((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5])
            / ((((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0)
    } else {
        let q = p - 0.5;
        let r = q * q;
        (((((A[0] * r + A[1]) * r + A[2]) * r + A[3]) * r + A[4]) * r + A[5]) * q
            / (((((B[0] * r + B[1]) * r + B[2]) * r + B[3]) * r + B[4]) * r + 1.0)
    }
}
