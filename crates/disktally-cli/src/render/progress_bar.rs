/// Textual progress bar redrawn in place while a scan runs.
///
/// ```text
/// |#########################                         | 50.00% Complete
/// ```
use std::io::{self, Write};

/// Number of cells between the bar's delimiters.
pub const BAR_WIDTH: usize = 50;

/// Render the bar for `percent`.
///
/// Filled cells are capped at [`BAR_WIDTH`]; the printed percentage is not,
/// so a tree that grew during the scan can read above 100%.
pub fn render_bar(percent: f64) -> String {
    let filled = ((percent / 100.0) * BAR_WIDTH as f64) as usize;
    let bar = "#".repeat(filled.min(BAR_WIDTH));
    format!("|{bar:<width$}| {percent:.2}% Complete", width = BAR_WIDTH)
}

/// Redraw the bar over the current line.
pub fn draw<W: Write>(out: &mut W, percent: f64) -> io::Result<()> {
    write!(out, "\r{}", render_bar(percent))?;
    out.flush()
}

/// Draw the final state of the bar and end the line.
pub fn finish<W: Write>(out: &mut W, percent: f64) -> io::Result<()> {
    writeln!(out, "\r{}", render_bar(percent))?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(line: &str) -> usize {
        line.chars().filter(|&c| c == '#').count()
    }

    #[test]
    fn empty_bar() {
        let line = render_bar(0.0);
        assert_eq!(line, format!("|{}| 0.00% Complete", " ".repeat(BAR_WIDTH)));
    }

    #[test]
    fn half_bar() {
        let line = render_bar(50.0);
        assert_eq!(cells(&line), 25);
        assert!(line.ends_with("| 50.00% Complete"));
        assert_eq!(line.find("| ").unwrap(), BAR_WIDTH + 1);
    }

    #[test]
    fn partial_cells_round_down() {
        assert_eq!(cells(&render_bar(3.9)), 1);
        assert_eq!(cells(&render_bar(99.99)), 49);
    }

    #[test]
    fn overflow_caps_cells_not_percent() {
        let line = render_bar(150.0);
        assert_eq!(cells(&line), BAR_WIDTH);
        assert!(line.ends_with("150.00% Complete"));
    }

    #[test]
    fn finish_ends_line() {
        let mut out = Vec::new();
        draw(&mut out, 10.0).unwrap();
        finish(&mut out, 100.0).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with('\r'));
        assert!(text.ends_with("100.00% Complete\n"));
        assert_eq!(text.matches('\r').count(), 2);
    }
}
