//! The fixed catalog of recognized Indian currency denominations and the
//! valuation of a drawer snapshot.
//!
//! The catalog is static: it is exposed for rendering but not configurable at
//! runtime. Note `10` and coin `coin10` are distinct ids that happen to share
//! a face value.

use crate::{drawer::CashCounts, money::Money};

/// Whether a denomination is a banknote or a coin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DenominationClass {
    Note,
    Coin,
}

impl DenominationClass {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Note => "note",
            Self::Coin => "coin",
        }
    }
}

/// A recognized unit of physical currency with a fixed face value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Denomination {
    pub id: &'static str,
    pub face_value: Money,
    pub class: DenominationClass,
}

const fn note(id: &'static str, rupees: i64) -> Denomination {
    Denomination {
        id,
        face_value: Money::from_rupees(rupees),
        class: DenominationClass::Note,
    }
}

const fn coin(id: &'static str, rupees: i64) -> Denomination {
    Denomination {
        id,
        face_value: Money::from_rupees(rupees),
        class: DenominationClass::Coin,
    }
}

/// Every denomination the engine recognizes, notes first, largest first.
pub const CATALOG: [Denomination; 11] = [
    note("2000", 2000),
    note("500", 500),
    note("200", 200),
    note("100", 100),
    note("50", 50),
    note("20", 20),
    note("10", 10),
    coin("coin10", 10),
    coin("coin5", 5),
    coin("coin2", 2),
    coin("coin1", 1),
];

/// Face value for a denomination id, `None` when the id is not recognized.
#[must_use]
pub fn face_value(id: &str) -> Option<Money> {
    CATALOG
        .iter()
        .find_map(|denomination| (denomination.id == id).then_some(denomination.face_value))
}

/// Total value of a drawer snapshot: the sum of `count × face_value` over
/// every recognized id.
///
/// Pure and total: entries with unrecognized ids contribute zero instead of
/// failing, so stale snapshots from old backups still value cleanly.
#[must_use]
pub fn value_of(counts: &CashCounts) -> Money {
    counts.iter().fold(Money::ZERO, |total, (id, count)| {
        match face_value(id) {
            Some(face) => total + Money::from_paise(face.paise() * *count as i64),
            None => total,
        }
    })
}
