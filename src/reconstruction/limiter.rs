//! Two-sided slope limiters.

/// Limiter combining the one-sided differences on either side of a cell
/// into a single slope.
///
/// # Implementation Notes
///
/// - `limit(0, s) == 0` for every `s` (flat side gives no slope)
/// - Opposite signs give zero slope (no new extrema)
/// - Must be cheap: it runs once per velocity node, cell and direction
///
/// # Extending
///
/// To add a limiter, implement this trait and optionally add a variant to
/// [`StandardLimiter`].
pub trait SlopeLimiter: Send + Sync {
    /// Limited slope from the left and right one-sided differences.
    fn limit(&self, s_left: f64, s_right: f64) -> f64;

    /// Human-readable name for logging.
    fn name(&self) -> &'static str;
}

/// Van Leer limiter:
/// `(sign(sR) + sign(sL)) |sR| |sL| / (|sR| + |sL| + ε)`.
#[derive(Clone, Copy, Debug, Default)]
pub struct VanLeer;

impl SlopeLimiter for VanLeer {
    #[inline(always)]
    fn limit(&self, s_left: f64, s_right: f64) -> f64 {
        (s_right.signum() + s_left.signum()) * s_right.abs() * s_left.abs()
            / (s_right.abs() + s_left.abs() + f64::MIN_POSITIVE)
    }

    fn name(&self) -> &'static str {
        "van-leer"
    }
}

/// Minmod limiter: the smaller one-sided difference when both agree in sign.
#[derive(Clone, Copy, Debug, Default)]
pub struct Minmod;

impl SlopeLimiter for Minmod {
    #[inline(always)]
    fn limit(&self, s_left: f64, s_right: f64) -> f64 {
        if s_left * s_right <= 0.0 {
            0.0
        } else {
            s_left.signum() * s_left.abs().min(s_right.abs())
        }
    }

    fn name(&self) -> &'static str {
        "minmod"
    }
}

/// Zero slope everywhere (first-order upwind).
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstOrder;

impl SlopeLimiter for FirstOrder {
    #[inline(always)]
    fn limit(&self, _s_left: f64, _s_right: f64) -> f64 {
        0.0
    }

    fn name(&self) -> &'static str {
        "first-order"
    }
}

/// Enum over the built-in limiters, for configuration-driven selection
/// without dynamic dispatch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StandardLimiter {
    #[default]
    VanLeer,
    Minmod,
    FirstOrder,
}

impl SlopeLimiter for StandardLimiter {
    #[inline(always)]
    fn limit(&self, s_left: f64, s_right: f64) -> f64 {
        match self {
            StandardLimiter::VanLeer => VanLeer.limit(s_left, s_right),
            StandardLimiter::Minmod => Minmod.limit(s_left, s_right),
            StandardLimiter::FirstOrder => FirstOrder.limit(s_left, s_right),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            StandardLimiter::VanLeer => VanLeer.name(),
            StandardLimiter::Minmod => Minmod.name(),
            StandardLimiter::FirstOrder => FirstOrder.name(),
        }
    }
}
