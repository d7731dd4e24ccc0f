use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use thiserror::Error;

/// One scoring region of the board, numbered 1 through 62.
///
/// Codes 1..=20 are singles, 21..=40 doubles (20 + sector), 41..=60 triples
/// (40 + sector). Code 61 is the outer bull (25 points) and 62 the inner
/// bull (50 points).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(try_from = "u8", into = "u8")]
pub struct ThrowCode(u8);

pub const OUTER_BULL: ThrowCode = ThrowCode(61);
pub const INNER_BULL: ThrowCode = ThrowCode(62);

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ThrowCodeError {
    #[error("throw code out of range: {0}")]
    OutOfRange(u8),
    #[error("sector out of range: {0}")]
    BadSector(u8),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Multiplier {
    Single,
    Double,
    Triple,
}

impl Multiplier {
    #[must_use]
    pub fn factor(self) -> u32 {
        match self {
            Multiplier::Single => 1,
            Multiplier::Double => 2,
            Multiplier::Triple => 3,
        }
    }
}

struct ThrowEntry {
    label: String,
    points: u32,
}

static THROW_TABLE: OnceLock<Vec<ThrowEntry>> = OnceLock::new();

fn throw_table() -> &'static [ThrowEntry] {
    THROW_TABLE.get_or_init(|| {
        let mut table: Vec<ThrowEntry> = (1..=20u32)
            .map(|n| ThrowEntry {
                label: format!("S{n}"),
                points: n,
            })
            .collect();
        table.extend((1..=20u32).map(|n| ThrowEntry {
            label: format!("D{n}"),
            points: 2 * n,
        }));
        table.extend((1..=20u32).map(|n| ThrowEntry {
            label: format!("T{n}"),
            points: 3 * n,
        }));
        table.push(ThrowEntry {
            label: "25".to_string(),
            points: 25,
        });
        table.push(ThrowEntry {
            label: "Bull".to_string(),
            points: 50,
        });
        table
    })
}

impl ThrowCode {
    /// # Errors
    ///
    /// Will return `Err` if `sector` is not in `1..=20`.
    pub fn from_target(multiplier: Multiplier, sector: u8) -> Result<Self, ThrowCodeError> {
        if !(1..=20).contains(&sector) {
            return Err(ThrowCodeError::BadSector(sector));
        }
        let base = match multiplier {
            Multiplier::Single => 0,
            Multiplier::Double => 20,
            Multiplier::Triple => 40,
        };
        Ok(ThrowCode(base + sector))
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Short board notation, e.g. `S5`, `T20`, `25`, `Bull`.
    #[must_use]
    pub fn label(self) -> &'static str {
        &throw_table()[usize::from(self.0) - 1].label
    }

    #[must_use]
    pub fn points(self) -> u32 {
        throw_table()[usize::from(self.0) - 1].points
    }

    pub fn all() -> impl Iterator<Item = ThrowCode> {
        (1..=62).map(ThrowCode)
    }
}

impl TryFrom<u8> for ThrowCode {
    type Error = ThrowCodeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (1..=62).contains(&value) {
            Ok(ThrowCode(value))
        } else {
            Err(ThrowCodeError::OutOfRange(value))
        }
    }
}

impl From<ThrowCode> for u8 {
    fn from(code: ThrowCode) -> Self {
        code.0
    }
}
