//! ANSI-aware display width
//!
//! Every width computation in the renderer goes through [`display_width`],
//! so colored content and colored inner boxes measure the same as their
//! plain text. Width is the number of code points left after escape
//! sequences are removed.

const ESC: char = '\x1b';

/// Remove ANSI escape sequences from a string.
///
/// A sequence starts at ESC and runs up to and including the next ASCII
/// letter, which covers SGR (`ESC[...m`) and the other CSI forms we emit.
pub fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_escape = false;

    for c in s.chars() {
        if c == ESC {
            in_escape = true;
            continue;
        }
        if in_escape {
            if c.is_ascii_alphabetic() {
                in_escape = false;
            }
            continue;
        }
        out.push(c);
    }

    out
}

/// Number of code points in the string once escapes are removed.
pub fn display_width(s: &str) -> usize {
    if !s.contains(ESC) {
        return s.chars().count();
    }
    strip_ansi(s).chars().count()
}

/// Widest line in the slice, zero for an empty slice.
pub fn max_line_width<S: AsRef<str>>(lines: &[S]) -> usize {
    lines
        .iter()
        .map(|line| display_width(line.as_ref()))
        .max()
        .unwrap_or(0)
}
