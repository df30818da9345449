// File: crates/graph-core/src/parse.rs
// Summary: Linear-function expression parser ("y = mx + b" -> slope/intercept).

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Coefficient pattern for `y = mx + b`. Group 1 is the slope token (may be
/// empty), group 2 the signed intercept term (may contain whitespace between
/// sign and digits).
static FUNCTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"y\s*=\s*([+-]?\d*\.?\d*)x\s*([+-]\s*\d+\.?\d*)?").expect("hardcoded pattern")
});

/// A parsed linear function `y = slope * x + intercept`.
/// Immutable once produced; both coefficients are finite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearFn {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFn {
    pub const fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    /// Evaluate the line equation at `x`.
    #[inline]
    pub fn eval(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// The input did not match the `y = mx + b` grammar.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("Invalid function format. Please enter in the form y = mx + b.")]
pub struct ParseError;

/// Parse a loosely formatted linear-function expression.
///
/// Defaulting rules:
/// - an empty, unparseable, or exactly-zero slope token yields slope 1.0
///   (the grammar cannot tell an omitted coefficient from a literal `0`,
///   so both resolve to 1.0),
/// - an absent intercept term yields intercept 0.0,
/// - whitespace between the intercept's sign and digits is stripped before
///   numeric conversion.
///
/// Pure: a given input always produces the same result and nothing else.
pub fn parse(input: &str) -> Result<LinearFn, ParseError> {
    let caps = FUNCTION_RE.captures(input).ok_or(ParseError)?;

    let slope = caps
        .get(1)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|v| *v != 0.0)
        .unwrap_or(1.0);

    let intercept = caps
        .get(2)
        .and_then(|m| {
            let compact: String = m.as_str().chars().filter(|c| !c.is_whitespace()).collect();
            compact.parse::<f64>().ok()
        })
        .unwrap_or(0.0);

    Ok(LinearFn::new(slope, intercept))
}
