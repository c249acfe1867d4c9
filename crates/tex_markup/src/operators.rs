//! Big operators and calculus notation
//!
//! Sums, products, integrals, derivatives and limits. Bounds, expressions and
//! variables are opaque `Display` values interpolated verbatim.

use crate::error::{MarkupError, Result};
use crate::{DEFAULT_ORDER, DEFAULT_VARIABLE};
use std::fmt::{self, Display};
use std::str::FromStr;
use tracing::debug;

/// `\sum_{lower}^{upper} expression`
///
/// `_variable` is accepted for call-site symmetry with [`integral`] but does
/// not appear in the output.
pub fn sum(
    lower: impl Display,
    upper: impl Display,
    _variable: impl Display,
    expression: impl Display,
) -> String {
    format!("\\sum_{{{}}}^{{{}}} {}", lower, upper, expression)
}

/// `\prod_{lower}^{upper} expression`; `_variable` is unused as in [`sum`].
pub fn product(
    lower: impl Display,
    upper: impl Display,
    _variable: impl Display,
    expression: impl Display,
) -> String {
    format!("\\prod_{{{}}}^{{{}}} {}", lower, upper, expression)
}

/// Definite integral with a trailing differential: `\int_{a}^{b} f d{x}`.
pub fn integral(
    lower: impl Display,
    upper: impl Display,
    expression: impl Display,
    variable: impl Display,
) -> String {
    format!(
        "\\int_{{{}}}^{{{}}} {} d{{{}}}",
        lower, upper, expression, variable
    )
}

/// [`integral`] over the default variable `x`.
pub fn integral_dx(lower: impl Display, upper: impl Display, expression: impl Display) -> String {
    integral(lower, upper, expression, DEFAULT_VARIABLE)
}

/// Derivative of `expression` with respect to `variable`.
///
/// Only `order == 1` selects the plain `\frac{d}{dx}` form. Every other
/// order, including zero and negative values, uses the general template
/// `\frac{d^n}{dx^n}` with `n` written as given.
pub fn derivative(expression: impl Display, variable: impl Display, order: i64) -> String {
    if order == 1 {
        return format!("\\frac{{d}}{{d{}}} {}", variable, expression);
    }
    if order < 1 {
        debug!(target: "tex_markup", order, "derivative rendered with non-positive order");
    }
    format!(
        "\\frac{{d^{}}}{{d{}^{}}} {}",
        order, variable, order, expression
    )
}

/// First derivative with respect to `x`.
pub fn derivative_dx(expression: impl Display) -> String {
    derivative(expression, DEFAULT_VARIABLE, DEFAULT_ORDER)
}

/// One-sided approach for [`limit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LimitDirection {
    Left,
    Right,
}

impl fmt::Display for LimitDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LimitDirection::Left => write!(f, "left"),
            LimitDirection::Right => write!(f, "right"),
        }
    }
}

impl FromStr for LimitDirection {
    type Err = MarkupError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "left" => Ok(LimitDirection::Left),
            "right" => Ok(LimitDirection::Right),
            other => Err(MarkupError::UnknownLimitDirection(other.to_string())),
        }
    }
}

/// `\lim_{variable \rightarrow value} expression`, with the direction
/// appended to the approached value as a superscript when given.
pub fn limit(
    expression: impl Display,
    variable: impl Display,
    value: impl Display,
    direction: Option<LimitDirection>,
) -> String {
    let mut symbol = format!("\\lim_{{{} \\rightarrow {}", variable, value);
    if let Some(dir) = direction {
        symbol.push_str(&format!("^{}", dir));
    }
    symbol.push('}');
    format!("{} {}", symbol, expression)
}
