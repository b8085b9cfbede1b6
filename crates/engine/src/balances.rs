//! Named balance sources and the balance set they live in.

use serde::{Deserialize, Serialize};

use crate::{error::EngineError, money::Money};

/// Where a transaction's value lives.
///
/// `Csc`, `Csp` and `Other` are non-physical balance buckets; `Cash` is the
/// physical drawer itself (its total is derived from denomination counts, not
/// stored as a balance).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    Csc,
    Csp,
    Other,
    #[default]
    Cash,
}

impl Source {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Csc => "csc",
            Self::Csp => "csp",
            Self::Other => "other",
            Self::Cash => "cash",
        }
    }
}

impl TryFrom<&str> for Source {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "csc" => Ok(Self::Csc),
            "csp" => Ok(Self::Csp),
            "other" => Ok(Self::Other),
            "cash" => Ok(Self::Cash),
            other => Err(EngineError::InvalidFormat(format!(
                "invalid source: {other}"
            ))),
        }
    }
}

/// The three named non-physical balances.
///
/// Each balance is non-negative: subtracts clamp at zero rather than going
/// negative (see [`Money::clamped_sub`]).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSet {
    pub csc: Money,
    pub csp: Money,
    pub other: Money,
}

impl BalanceSet {
    /// Sum of the three named balances (the physical drawer is not included).
    #[must_use]
    pub fn total(&self) -> Money {
        self.csc + self.csp + self.other
    }

    /// The balance for `source`, `None` for [`Source::Cash`].
    #[must_use]
    pub fn get(&self, source: Source) -> Option<Money> {
        match source {
            Source::Csc => Some(self.csc),
            Source::Csp => Some(self.csp),
            Source::Other => Some(self.other),
            Source::Cash => None,
        }
    }

    pub(crate) fn slot_mut(&mut self, source: Source) -> Option<&mut Money> {
        match source {
            Source::Csc => Some(&mut self.csc),
            Source::Csp => Some(&mut self.csp),
            Source::Other => Some(&mut self.other),
            Source::Cash => None,
        }
    }
}
