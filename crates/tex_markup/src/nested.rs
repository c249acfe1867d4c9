//! Nested integrals and derivatives
//!
//! Both builders walk a borrowed term slice front to back: the head term
//! becomes the outermost operator and the tail is rendered recursively inside
//! it. The slice is never modified, so the same terms can be rendered any
//! number of times.

use crate::operators::integral;
use std::fmt::Display;
use tracing::trace;

/// Nested definite integrals over `(variable, lower, upper)` terms.
///
/// Each level wraps the inner result as [`integral`] does, so differentials
/// close in reverse order of the integral signs:
/// `[(x, 0, 1), (y, 0, 2)]` on `f` gives
/// `\int_{0}^{1} \int_{0}^{2} f d{y} d{x}`.
/// Differentials are separated by single spaces with no `\ ` thin-space
/// markers, so a one-term list renders exactly like [`integral`].
/// With no terms the expression is returned unchanged.
pub fn multi_integral<V, L, U>(terms: &[(V, L, U)], expression: impl Display) -> String
where
    V: Display,
    L: Display,
    U: Display,
{
    integral_level(terms, &expression, 0)
}

fn integral_level<V, L, U, E>(terms: &[(V, L, U)], expression: &E, depth: usize) -> String
where
    V: Display,
    L: Display,
    U: Display,
    E: Display + ?Sized,
{
    let Some(((variable, lower, upper), rest)) = terms.split_first() else {
        return expression.to_string();
    };
    trace!(target: "tex_markup", depth, %variable, "integral level");
    let inner = integral_level(rest, expression, depth + 1);
    integral(lower, upper, inner, variable)
}

/// Nested derivatives over `(variable, order)` terms.
///
/// The innermost operator applies directly to the expression; every outer
/// operator parenthesizes what it wraps. Orders other than 1 are written as
/// braced superscripts: `\frac{d^{2}}{dx^{2}}`.
/// With no terms the expression is returned unchanged.
pub fn multi_derivative<V>(terms: &[(V, i64)], expression: impl Display) -> String
where
    V: Display,
{
    derivative_level(terms, &expression, 0)
}

fn derivative_level<V, E>(terms: &[(V, i64)], expression: &E, depth: usize) -> String
where
    V: Display,
    E: Display + ?Sized,
{
    let Some(((variable, order), rest)) = terms.split_first() else {
        return expression.to_string();
    };
    trace!(target: "tex_markup", depth, %variable, order, "derivative level");

    let operator = if *order == 1 {
        format!("\\frac{{d}}{{d{}}}", variable)
    } else {
        format!("\\frac{{d^{{{}}}}}{{d{}^{{{}}}}}", order, variable, order)
    };

    let inner = derivative_level(rest, expression, depth + 1);
    if rest.is_empty() {
        format!("{} {}", operator, inner)
    } else {
        format!("{} ({})", operator, inner)
    }
}
