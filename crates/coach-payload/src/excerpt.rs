//! Policy excerpt extraction from the tutor guidelines.
//!
//! The guidelines document opens its enforcement rules under the first
//! top-level (`# `) heading. The excerpt is everything after that heading up
//! to the next second-level (`## `) heading, trimmed.

/// Marker for a major heading (checked against the trimmed line).
pub const MAJOR_HEADING: &str = "# ";

/// Marker for a minor heading (checked against the trimmed line).
pub const MINOR_HEADING: &str = "## ";

/// Whether `c` ends a line. Besides `\n` this covers a lone `\r`, vertical
/// tab, form feed, the file/group/record separators, NEL, and the Unicode
/// line and paragraph separators.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c'..='\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Extract the policy excerpt from a guidelines document.
///
/// Recording starts after the first major heading and stops at the next
/// minor heading. Later major headings are skipped but do not restart or end
/// the excerpt. Returns an empty string when there is no major heading.
pub fn policy_excerpt(guidelines: &str) -> String {
    // `\r\n` is a single break.
    let normalized = guidelines.replace("\r\n", "\n");
    let mut lines: Vec<&str> = Vec::new();
    let mut recording = false;

    for line in normalized.split(is_line_break) {
        let trimmed = line.trim();
        if trimmed.starts_with(MAJOR_HEADING) {
            recording = true;
            continue;
        }
        if !recording {
            continue;
        }
        if trimmed.starts_with(MINOR_HEADING) {
            break;
        }
        lines.push(line);
    }

    lines.join("\n").trim().to_string()
}
