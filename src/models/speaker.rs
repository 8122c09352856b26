use serde::{Deserialize, Serialize};

/// One party in the two-speaker interview model.
///
/// The model is deliberately closed: every speaker notation the normalizer
/// recognizes maps onto one of these two values, and anything else is
/// treated as unattributed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Speaker {
    Interviewer,
    Expert,
}

impl Speaker {
    /// Canonical label used in `Interviewer:` / `Expert:` prefixes
    pub fn label(&self) -> &'static str {
        match self {
            Speaker::Interviewer => "Interviewer",
            Speaker::Expert => "Expert",
        }
    }

    /// Parse a canonical label, ignoring case
    pub fn from_label(label: &str) -> Option<Self> {
        if label.eq_ignore_ascii_case("interviewer") {
            Some(Speaker::Interviewer)
        } else if label.eq_ignore_ascii_case("expert") {
            Some(Speaker::Expert)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Speaker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
