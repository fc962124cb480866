//! Detection of already-processed programs.
//!
//! Every rewritten program carries a sentinel comment so a second pass can
//! refuse to stack temperature changes on top of earlier ones.

/// Comment token marking a program that has already been woodgrained.
pub const WOODGRAIN_MARKER: &str = ";HAS_BEEN_WOODGRAINED";

/// Does this line carry the woodgrain marker?
///
/// The marker counts anywhere in the line, so markers that picked up a
/// prefix or trailing comment text are still detected.
pub fn is_woodgrained_line(line: &str) -> bool {
    line.contains(WOODGRAIN_MARKER)
}

/// Has this program already been woodgrained?
///
/// Returns false for an empty program.
pub fn has_been_woodgrained(lines: &[String]) -> bool {
    lines.iter().any(|line| is_woodgrained_line(line))
}
