//! Terminal output utilities: ANSI formatting, status lines, table rendering.

use std::io::Write;

use chatline_commands::StatusLine;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

pub const RED: &str = "\x1b[31m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Check if the terminal supports color output.
pub fn supports_color() -> bool {
    std::env::var("NO_COLOR").is_err()
        && (std::env::var("COLORTERM").is_ok()
            || std::env::var("TERM")
                .map(|t| t != "dumb")
                .unwrap_or(false))
}

/// Strip ANSI escape codes from a string.
pub fn strip_ansi(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            for next in chars.by_ref() {
                if next == 'm' { break; }
            }
        } else {
            result.push(c);
        }
    }
    result
}

/// Print a formatted WARNING note.
pub fn note_warn(msg: &str) {
    if supports_color() {
        eprintln!("{YELLOW}{BOLD}⚠{RESET} {msg}");
    } else {
        eprintln!("WARN: {msg}");
    }
}

/// Print a formatted ERROR note.
pub fn note_error(msg: &str) {
    if supports_color() {
        eprintln!("{RED}{BOLD}✗{RESET} {msg}");
    } else {
        eprintln!("ERROR: {msg}");
    }
}

/// Render one chat-log line. Lines kept out of the public log are dimmed.
pub fn format_status_line(line: &StatusLine, color: bool) -> String {
    match (color, line.public_log) {
        (false, _) => line.text.clone(),
        (true, true) => format!("{CYAN}{}{RESET}", line.text),
        (true, false) => format!("{DIM}{}{RESET}", line.text),
    }
}

// ---------------------------------------------------------------------------
// Table rendering
// ---------------------------------------------------------------------------

/// Render a left-aligned table with the given headers and rows.
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let num_cols = headers.len();
    let mut widths: Vec<usize> = headers.iter().map(|h| strip_ansi(h).len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(num_cols) {
            widths[i] = widths[i].max(strip_ansi(cell).len());
        }
    }

    let mut out = String::new();

    let header_cells: Vec<String> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| pad_cell(h, widths[i]))
        .collect();
    out.push_str(&format!("  {}\n", header_cells.join("  ").trim_end()));

    let sep: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&format!("  {}\n", sep.join("  ")));

    for row in rows {
        let cells: Vec<String> = (0..num_cols)
            .map(|i| pad_cell(row.get(i).map(String::as_str).unwrap_or(""), widths[i]))
            .collect();
        out.push_str(&format!("  {}\n", cells.join("  ").trim_end()));
    }

    out
}

fn pad_cell(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(strip_ansi(s).len());
    format!("{s}{}", " ".repeat(pad))
}

/// Write a chunk and flush.
pub fn stream_write(writer: &mut impl Write, chunk: &str) -> std::io::Result<()> {
    writer.write_all(chunk.as_bytes())?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatline_commands::CommandResponse;

    #[test]
    fn strips_ansi() {
        let colored = format!("{CYAN}hello{RESET}");
        assert_eq!(strip_ansi(&colored), "hello");
    }

    #[test]
    fn renders_table() {
        let rows = vec![
            vec!["noctrl".to_string(), "nc".to_string()],
            vec!["who".to_string(), "w".to_string()],
        ];
        let table = render_table(&["Command", "Aliases"], &rows);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "  Command  Aliases");
        assert_eq!(lines[2], "  noctrl   nc");
    }

    #[test]
    fn status_lines_plain_without_color() {
        let mut r = CommandResponse::public("Sound on");
        r.push("Names hidden", false);
        assert_eq!(format_status_line(&r.lines[0], false), "Sound on");
        assert_eq!(strip_ansi(&format_status_line(&r.lines[1], true)), "Names hidden");
        assert!(format_status_line(&r.lines[1], true).starts_with(DIM));
    }
}
