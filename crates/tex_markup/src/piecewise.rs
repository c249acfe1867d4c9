//! Piecewise definitions in a `cases` environment.

use std::fmt::Display;

/// One line per `(expression, condition)` piece, in order:
///
/// ```text
/// \begin{cases}
/// x, & x \geq 0 \\
/// -x, & x < 0 \\
/// \end{cases}
/// ```
pub fn piecewise<I, E, C>(pieces: I) -> String
where
    I: IntoIterator<Item = (E, C)>,
    E: Display,
    C: Display,
{
    let mut latex = String::from("\\begin{cases}\n");
    for (expression, condition) in pieces {
        latex.push_str(&format!("{}, & {} \\\\\n", expression, condition));
    }
    latex.push_str("\\end{cases}");
    latex
}
