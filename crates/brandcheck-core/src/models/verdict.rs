use serde::{Deserialize, Serialize};

/// Outcome of a single criterion evaluation.
///
/// Serialized as its integer score: `1`, `0`, or `-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i8", try_from = "i8")]
pub enum Verdict {
    Compliant,
    NonCompliant,
    /// The model answered in none of the recognized formats.
    /// Reported as `-1`, contributes nothing to the total.
    Unclear,
}

impl Verdict {
    pub fn from_bool(compliant: bool) -> Self {
        if compliant {
            Self::Compliant
        } else {
            Self::NonCompliant
        }
    }

    /// Raw score as reported: 1, 0, or -1.
    pub fn score(self) -> i8 {
        match self {
            Self::Compliant => 1,
            Self::NonCompliant => 0,
            Self::Unclear => -1,
        }
    }

    /// Contribution to the total score: `max(score, 0)`.
    pub fn contribution(self) -> u8 {
        self.score().max(0) as u8
    }

    pub fn is_compliant(self) -> bool {
        self == Self::Compliant
    }
}

impl From<Verdict> for i8 {
    fn from(v: Verdict) -> Self {
        v.score()
    }
}

impl TryFrom<i8> for Verdict {
    type Error = String;

    fn try_from(score: i8) -> Result<Self, Self::Error> {
        match score {
            1 => Ok(Self::Compliant),
            0 => Ok(Self::NonCompliant),
            -1 => Ok(Self::Unclear),
            other => Err(format!("verdict score out of range: {other}")),
        }
    }
}
