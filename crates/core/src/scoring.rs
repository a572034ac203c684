//! Scoring - quadratic line-clear bonus
//!
//! Clearing `n` rows with one lock scores `100 * n²`, so multi-row clears pay
//! more than the same rows cleared one at a time.

use crate::types::LINE_CLEAR_BASE;

/// Points for clearing `lines` rows with a single lock
pub fn line_clear_score(lines: u32) -> u32 {
    LINE_CLEAR_BASE.saturating_mul(lines.saturating_mul(lines))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_clear_table() {
        assert_eq!(line_clear_score(0), 0);
        assert_eq!(line_clear_score(1), 100);
        assert_eq!(line_clear_score(2), 400);
        assert_eq!(line_clear_score(3), 900);
        assert_eq!(line_clear_score(4), 1600);
    }

    #[test]
    fn test_multi_clear_beats_singles() {
        assert!(line_clear_score(4) > 4 * line_clear_score(1));
    }

    #[test]
    fn test_saturates() {
        assert_eq!(line_clear_score(u32::MAX), u32::MAX);
    }
}
