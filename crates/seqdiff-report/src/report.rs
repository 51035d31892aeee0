//! Positional line comparison and report rendering.
//!
//! Line `i` of one text is compared only with line `i` of the other. There
//! is no alignment step: an inserted line shifts every following line and
//! each shifted position is reported.

use std::fmt;

use crate::lines::split_lines;

/// Leading text of the report header line.
pub const HEADER_PREFIX: &str = "Total de diferencias: ";

/// One line position where the two texts disagree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineDifference<'a> {
    /// 1-based position of the line.
    pub line_index: usize,
    /// Line from the first text, empty when that text is shorter.
    pub a: &'a str,
    /// Line from the second text, empty when that text is shorter.
    pub b: &'a str,
}

impl fmt::Display for LineDifference<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Diferencia en línea {} ===", self.line_index)?;
        writeln!(f, "A: {}", self.a)?;
        writeln!(f, "B: {}", self.b)?;
        writeln!(f)
    }
}

/// The result of comparing two texts line by line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DiffReport<'a> {
    differences: Vec<LineDifference<'a>>,
    lines_a: usize,
    lines_b: usize,
}

impl<'a> DiffReport<'a> {
    /// Differing positions in ascending `line_index` order.
    pub fn differences(&self) -> &[LineDifference<'a>] {
        &self.differences
    }

    /// Number of lines in the first text.
    pub fn lines_a(&self) -> usize {
        self.lines_a
    }

    /// Number of lines in the second text.
    pub fn lines_b(&self) -> usize {
        self.lines_b
    }

    /// Number of differing line positions.
    pub fn diff_count(&self) -> usize {
        self.differences.len()
    }

    /// Returns `true` if every line position matched.
    pub fn is_identical(&self) -> bool {
        self.differences.is_empty()
    }

    /// Number of positions that were compared.
    pub fn compared_lines(&self) -> usize {
        self.lines_a.max(self.lines_b)
    }

    /// Render the plain-text report.
    ///
    /// The header line is followed by a blank line and one four-line block
    /// per difference. Every line, blank ones included, ends with `\n`.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DiffReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{HEADER_PREFIX}{}", self.diff_count())?;
        writeln!(f)?;
        for difference in &self.differences {
            write!(f, "{difference}")?;
        }
        Ok(())
    }
}

/// Compare `text_a` and `text_b` position by position.
///
/// Lines are equal only if they are byte-for-byte identical; case and
/// whitespace are significant.
pub fn compare<'a>(text_a: &'a str, text_b: &'a str) -> DiffReport<'a> {
    let lines_a: Vec<&str> = split_lines(text_a).collect();
    let lines_b: Vec<&str> = split_lines(text_b).collect();
    let max_lines = lines_a.len().max(lines_b.len());

    let differences = (0..max_lines)
        .filter_map(|i| {
            let a = lines_a.get(i).copied().unwrap_or("");
            let b = lines_b.get(i).copied().unwrap_or("");
            (a != b).then_some(LineDifference {
                line_index: i + 1,
                a,
                b,
            })
        })
        .collect();

    DiffReport {
        differences,
        lines_a: lines_a.len(),
        lines_b: lines_b.len(),
    }
}

/// Compare two texts and render the report in one step.
///
/// ```
/// let report = seqdiff_report::build_diff_report("a\nb\nc", "a\nX\nc");
/// assert_eq!(
///     report,
///     "Total de diferencias: 1\n\n=== Diferencia en línea 2 ===\nA: b\nB: X\n\n"
/// );
/// ```
pub fn build_diff_report(text_a: &str, text_b: &str) -> String {
    compare(text_a, text_b).render()
}
