use std::fmt;

/// Binary label assigned to a series from its clinical score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Cancer,
    NonMalignant,
}

impl Label {
    /// Derives the label from a score against an inclusive threshold
    ///
    /// A score exactly equal to the threshold counts as cancer.
    pub fn from_score(score: f64, threshold: i64) -> Self {
        if score >= threshold as f64 {
            Label::Cancer
        } else {
            Label::NonMalignant
        }
    }

    /// Returns the output bucket directory name for this label
    pub fn dir_name(&self) -> &'static str {
        match self {
            Label::Cancer => "cancer",
            Label::NonMalignant => "nonmalignant",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dir_name())
    }
}
