//! Matrix rendering
//!
//! Rows are emitted in order, elements joined by ` & ` and each row closed
//! by ` \\`. Row widths are not checked: a ragged matrix renders exactly as
//! given.

use crate::ToLatex;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// LaTeX matrix environment wrapping the rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum MatrixEnv {
    /// `matrix`: no delimiters
    Plain,
    /// `pmatrix`: parentheses
    PMatrix,
    /// `bmatrix`: square brackets
    #[default]
    BMatrix,
    /// `Bmatrix`: braces
    BraceMatrix,
    /// `vmatrix`: single bars (determinant)
    VMatrix,
    /// `Vmatrix`: double bars (norm)
    DoubleVMatrix,
    /// `smallmatrix`: inline-sized, no delimiters
    Small,
    /// Any other environment name, emitted verbatim
    Custom(String),
}

impl MatrixEnv {
    pub fn name(&self) -> &str {
        match self {
            MatrixEnv::Plain => "matrix",
            MatrixEnv::PMatrix => "pmatrix",
            MatrixEnv::BMatrix => "bmatrix",
            MatrixEnv::BraceMatrix => "Bmatrix",
            MatrixEnv::VMatrix => "vmatrix",
            MatrixEnv::DoubleVMatrix => "Vmatrix",
            MatrixEnv::Small => "smallmatrix",
            MatrixEnv::Custom(name) => name,
        }
    }
}

impl fmt::Display for MatrixEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MatrixEnv {
    type Err = Infallible;

    // Case-sensitive: amsmath distinguishes `vmatrix` from `Vmatrix`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "matrix" => MatrixEnv::Plain,
            "pmatrix" => MatrixEnv::PMatrix,
            "bmatrix" => MatrixEnv::BMatrix,
            "Bmatrix" => MatrixEnv::BraceMatrix,
            "vmatrix" => MatrixEnv::VMatrix,
            "Vmatrix" => MatrixEnv::DoubleVMatrix,
            "smallmatrix" => MatrixEnv::Small,
            other => MatrixEnv::Custom(other.to_string()),
        })
    }
}

/// Render rows of displayable elements inside `\begin{env}...\end{env}`.
pub fn render_matrix<I, R>(rows: I, env: &MatrixEnv) -> String
where
    I: IntoIterator<Item = R>,
    R: IntoIterator,
    R::Item: fmt::Display,
{
    let mut latex = format!("\\begin{{{}}}", env);
    for row in rows {
        let cells: Vec<String> = row.into_iter().map(|elem| elem.to_string()).collect();
        latex.push_str(&cells.join(" & "));
        latex.push_str(" \\\\");
    }
    latex.push_str(&format!("\\end{{{}}}", env));
    latex
}

/// Owned matrix value that renders through [`ToLatex`] and `Display`.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    pub rows: Vec<Vec<T>>,
    pub env: MatrixEnv,
}

impl<T> Matrix<T> {
    pub fn new(rows: Vec<Vec<T>>) -> Self {
        Self {
            rows,
            env: MatrixEnv::default(),
        }
    }

    pub fn with_env(mut self, env: MatrixEnv) -> Self {
        self.env = env;
        self
    }
}

impl<T: fmt::Display> ToLatex for Matrix<T> {
    fn to_latex(&self) -> String {
        render_matrix(&self.rows, &self.env)
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_latex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_default_env() {
        let rows = vec![vec![1, 2], vec![3, 4]];
        assert_eq!(
            render_matrix(&rows, &MatrixEnv::default()),
            "\\begin{bmatrix}1 & 2 \\\\3 & 4 \\\\\\end{bmatrix}"
        );
    }

    #[test]
    fn test_matrix_custom_env() {
        let rows = [["a", "b"]];
        assert_eq!(
            render_matrix(rows, &MatrixEnv::PMatrix),
            "\\begin{pmatrix}a & b \\\\\\end{pmatrix}"
        );
        assert_eq!(
            render_matrix(rows, &MatrixEnv::Custom("array".into())),
            "\\begin{array}a & b \\\\\\end{array}"
        );
    }

    #[test]
    fn test_matrix_ragged_rows_kept_as_given() {
        let rows: Vec<Vec<&str>> = vec![vec!["1"], vec!["2", "3", "4"], vec![]];
        assert_eq!(
            render_matrix(&rows, &MatrixEnv::Plain),
            "\\begin{matrix}1 \\\\2 & 3 & 4 \\\\ \\\\\\end{matrix}"
        );
    }

    #[test]
    fn test_matrix_no_rows() {
        let rows: Vec<Vec<i32>> = Vec::new();
        assert_eq!(
            render_matrix(&rows, &MatrixEnv::VMatrix),
            "\\begin{vmatrix}\\end{vmatrix}"
        );
    }

    #[test]
    fn test_env_names_parse_back() {
        for env in [
            MatrixEnv::Plain,
            MatrixEnv::PMatrix,
            MatrixEnv::BMatrix,
            MatrixEnv::BraceMatrix,
            MatrixEnv::VMatrix,
            MatrixEnv::DoubleVMatrix,
            MatrixEnv::Small,
        ] {
            assert_eq!(env.name().parse::<MatrixEnv>(), Ok(env.clone()));
        }
        assert_eq!(
            "aligned".parse::<MatrixEnv>(),
            Ok(MatrixEnv::Custom("aligned".to_string()))
        );
    }

    #[test]
    fn test_matrix_value_renders_like_function() {
        let m = Matrix::new(vec![vec![1.5, 0.0]]).with_env(MatrixEnv::BraceMatrix);
        assert_eq!(m.to_latex(), "\\begin{Bmatrix}1.5 & 0 \\\\\\end{Bmatrix}");
        assert_eq!(m.to_string(), m.to_latex());
    }
}
