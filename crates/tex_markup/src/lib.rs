//! LaTeX markup builders for mathematical notation.
//!
//! Every function here is a pure string builder: it interpolates its inputs
//! into a LaTeX fragment and returns it. Nothing is parsed or validated, so
//! callers are free to pass any `Display` value as a bound, expression or
//! matrix element.
//!
//! ```
//! use tex_markup::{derivative, limit, render_matrix, LimitDirection, MatrixEnv};
//!
//! assert_eq!(
//!     render_matrix(&[[1, 2], [3, 4]], &MatrixEnv::default()),
//!     "\\begin{bmatrix}1 & 2 \\\\3 & 4 \\\\\\end{bmatrix}"
//! );
//! assert_eq!(derivative("x^2", "x", 2), "\\frac{d^2}{dx^2} x^2");
//! assert_eq!(
//!     limit("f(x)", "x", 0, Some(LimitDirection::Right)),
//!     "\\lim_{x \\rightarrow 0^right} f(x)"
//! );
//! ```

pub mod document;
pub mod error;
pub mod matrix;
pub mod nested;
pub mod operators;
pub mod piecewise;

pub use document::{itemized_list, section};
pub use error::MarkupError;
pub use matrix::{render_matrix, Matrix, MatrixEnv};
pub use nested::{multi_derivative, multi_integral};
pub use operators::{
    derivative, derivative_dx, integral, integral_dx, limit, product, sum, LimitDirection,
};
pub use piecewise::piecewise;

/// Variable used when a caller does not name one (integrals, derivatives).
pub const DEFAULT_VARIABLE: &str = "x";

/// Derivative order used when a caller does not give one.
pub const DEFAULT_ORDER: i64 = 1;

/// Values that know how to render themselves as a LaTeX fragment.
pub trait ToLatex {
    fn to_latex(&self) -> String;
}

impl<T: ToLatex + ?Sized> ToLatex for &T {
    fn to_latex(&self) -> String {
        (**self).to_latex()
    }
}
