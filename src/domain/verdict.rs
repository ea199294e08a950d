//! The verdict table.

use std::fmt;
use std::str::FromStr;

use super::error::FormatError;

/// Reviewer outcome for a submitted assignment.
///
/// The set is closed: the remote API only ever reports these three codes, and
/// anything else is treated as an unknown verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// The reviewer accepted the work.
    Approved,
    /// The work has been picked up for review.
    Reviewing,
    /// The reviewer left remarks to address.
    Rejected,
}

impl Verdict {
    /// Every verdict, in table order.
    pub const ALL: [Verdict; 3] = [Verdict::Approved, Verdict::Reviewing, Verdict::Rejected];

    /// Status code as reported by the API.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Reviewing => "reviewing",
            Self::Rejected => "rejected",
        }
    }

    /// Human-readable phrase sent to the user.
    #[must_use]
    pub const fn phrase(self) -> &'static str {
        match self {
            Self::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Self::Reviewing => "Работа взята на проверку ревьюером.",
            Self::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }

    /// Look up a status code, returning `None` for anything outside the table.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|verdict| verdict.code() == code)
    }
}

impl FromStr for Verdict {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| FormatError::UnknownVerdict {
            status: s.to_string(),
        })
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
