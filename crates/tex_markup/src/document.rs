//! Document-level fragments: headings and lists.

use std::fmt::Display;

pub fn section(title: impl Display) -> String {
    format!("\\section{{{}}}", title)
}

/// `itemize` environment with one `\item` line per entry.
/// An empty input still yields the open/close pair.
pub fn itemized_list<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let mut latex = String::from("\\begin{itemize}");
    for item in items {
        latex.push_str(&format!("\n\\item {}", item));
    }
    latex.push_str("\n\\end{itemize}");
    latex
}
