//! Severity classification of backend log lines
//!
//! Backend lines look like `[timestamp] [account] [ACTION] [STATUS] text`.
//! Only the status marker matters here, and it is matched as a plain
//! case-sensitive substring anywhere in the line.

use crate::types::Severity;

/// Markers in priority order. The first one found wins.
const MARKERS: [(&str, Severity); 4] = [
    ("[SUCCESS]", Severity::Success),
    ("[ERROR]", Severity::Error),
    ("[WARNING]", Severity::Warning),
    ("[INFO]", Severity::Info),
];

/// Classify a raw log line.
pub fn classify(line: &str) -> Severity {
    MARKERS
        .iter()
        .find(|(marker, _)| line.contains(marker))
        .map(|(_, severity)| *severity)
        .unwrap_or(Severity::Neutral)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_markers() {
        assert_eq!(classify("[x] [LIKE] [SUCCESS] liked"), Severity::Success);
        assert_eq!(classify("[x] [LIKE] [ERROR] rate limited"), Severity::Error);
        assert_eq!(classify("[x] [LOGIN] [WARNING] challenge"), Severity::Warning);
        assert_eq!(classify("[SYSTEM] [INIT] [INFO] starting"), Severity::Info);
    }

    #[test]
    fn test_no_marker_is_neutral() {
        assert_eq!(classify("plain output"), Severity::Neutral);
        assert_eq!(classify(""), Severity::Neutral);
    }

    #[test]
    fn test_markers_are_case_sensitive() {
        assert_eq!(classify("[success] lowercase"), Severity::Neutral);
        assert_eq!(classify("[Error] mixed"), Severity::Neutral);
    }

    #[test]
    fn test_priority_is_independent_of_position() {
        // success beats error even when error comes first in the line
        assert_eq!(classify("[ERROR] retry [SUCCESS] done"), Severity::Success);
        assert_eq!(classify("[INFO] [WARNING]"), Severity::Warning);
        assert_eq!(classify("[INFO] [ERROR] [WARNING]"), Severity::Error);
        assert_eq!(
            classify("[INFO] [WARNING] [ERROR] [SUCCESS]"),
            Severity::Success
        );
    }

    #[test]
    fn test_marker_must_include_brackets() {
        assert_eq!(classify("SUCCESS without brackets"), Severity::Neutral);
        assert_eq!(classify("[SUCCESS"), Severity::Neutral);
    }
}
