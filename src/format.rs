// Big number formatting
//
// Renders large magnitudes as short strings for counters and scoreboards:
// "1.2K", "3.4M", or "1.2e6" when scientific notation is selected.
// The display mode is always passed in; nothing here reads global state.

use thiserror::Error;

/// Letter suffixes indexed by tier (tier 1 = thousands)
const SUFFIXES: [&str; 9] = ["K", "M", "B", "T", "q", "Q", "s", "S", "O"];

/// `1000^k` for every tier a finite f64 can reach (`1e309` is infinite).
/// Literals are correctly rounded, so a value written as `1e{3k}` divides
/// by its own tier to exactly `1.0`.
const TIER_POWERS: [f64; 103] = [
    1e0, 1e3, 1e6, 1e9, 1e12, 1e15, 1e18, 1e21, 1e24, 1e27, 1e30, 1e33, 1e36, 1e39, 1e42, 1e45,
    1e48, 1e51, 1e54, 1e57, 1e60, 1e63, 1e66, 1e69, 1e72, 1e75, 1e78, 1e81, 1e84, 1e87, 1e90,
    1e93, 1e96, 1e99, 1e102, 1e105, 1e108, 1e111, 1e114, 1e117, 1e120, 1e123, 1e126, 1e129,
    1e132, 1e135, 1e138, 1e141, 1e144, 1e147, 1e150, 1e153, 1e156, 1e159, 1e162, 1e165, 1e168,
    1e171, 1e174, 1e177, 1e180, 1e183, 1e186, 1e189, 1e192, 1e195, 1e198, 1e201, 1e204, 1e207,
    1e210, 1e213, 1e216, 1e219, 1e222, 1e225, 1e228, 1e231, 1e234, 1e237, 1e240, 1e243, 1e246,
    1e249, 1e252, 1e255, 1e258, 1e261, 1e264, 1e267, 1e270, 1e273, 1e276, 1e279, 1e282, 1e285,
    1e288, 1e291, 1e294, 1e297, 1e300, 1e303, 1e306,
];

/// Errors produced while formatting
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("invalid argument: cannot format non-finite value {0}")]
    InvalidArgument(f64),
}

/// How tiers above zero are rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisplayMode {
    /// Letter suffixes (K, M, B, ...), scientific past the suffix table
    #[default]
    Suffix,
    /// Always `{mantissa}e{exponent}`
    Scientific,
}

impl DisplayMode {
    /// Map the `scientific_notation` config flag to a mode
    pub fn from_scientific(scientific: bool) -> Self {
        if scientific {
            Self::Scientific
        } else {
            Self::Suffix
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Suffix => "suffix",
            Self::Scientific => "scientific",
        }
    }
}

/// Number of factor-of-1000 groupings divided out before display
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ScaleTier(u32);

impl ScaleTier {
    /// Largest tier `k` with `|magnitude| / 1000^k >= 1`, or tier 0.
    ///
    /// Only upward tiers exist: anything below 1000 in absolute value,
    /// including fractions, lands in tier 0.
    pub fn of(magnitude: f64) -> Self {
        let abs = magnitude.abs();
        let mut tier = 0;
        while tier + 1 < TIER_POWERS.len() && abs / TIER_POWERS[tier + 1] >= 1.0 {
            tier += 1;
        }
        Self(tier as u32)
    }

    pub fn index(&self) -> u32 {
        self.0
    }

    /// Decimal exponent of the tier (`k * 3`)
    pub fn exponent(&self) -> u32 {
        self.0 * 3
    }

    /// `1000^k`
    pub fn divisor(&self) -> f64 {
        TIER_POWERS[self.0 as usize]
    }

    /// Table suffix, or `None` for tier 0 and tiers past the table
    pub fn suffix(&self) -> Option<&'static str> {
        match self.0 {
            0 => None,
            k => SUFFIXES.get(k as usize - 1).copied(),
        }
    }
}

/// Formatter carrying its display mode
///
/// Hosts that let players toggle notation keep one of these and call
/// [`NumberFormatter::set_mode`] instead of flipping a global.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberFormatter {
    mode: DisplayMode,
}

impl NumberFormatter {
    pub fn new(mode: DisplayMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: DisplayMode) {
        self.mode = mode;
    }

    pub fn format(&self, magnitude: f64) -> Result<String, FormatError> {
        format_big_number(magnitude, self.mode)
    }
}

/// Format a magnitude as an abbreviated string
///
/// # Examples
/// ```
/// use gamekit::format::{format_big_number, DisplayMode};
///
/// assert_eq!(format_big_number(1_234_567.0, DisplayMode::Suffix).unwrap(), "1.2M");
/// assert_eq!(format_big_number(1000.0, DisplayMode::Scientific).unwrap(), "1.0e3");
/// assert_eq!(format_big_number(-5000.0, DisplayMode::Suffix).unwrap(), "-5.0K");
/// ```
pub fn format_big_number(magnitude: f64, mode: DisplayMode) -> Result<String, FormatError> {
    if !magnitude.is_finite() {
        return Err(FormatError::InvalidArgument(magnitude));
    }

    let tier = ScaleTier::of(magnitude);
    if tier.index() == 0 {
        return Ok(one_decimal(magnitude));
    }

    let mantissa = one_decimal(magnitude / tier.divisor());
    let formatted = match (mode, tier.suffix()) {
        (DisplayMode::Suffix, Some(suffix)) => format!("{mantissa}{suffix}"),
        // Scientific mode, or a tier the suffix table doesn't cover
        _ => format!("{mantissa}e{}", tier.exponent()),
    };

    tracing::trace!(magnitude, tier = tier.index(), %formatted, "formatted big number");
    Ok(formatted)
}

/// One fractional digit, rounding half away from zero
fn one_decimal(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    // -0.0 would otherwise print as "-0.0"
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{rounded:.1}")
}
