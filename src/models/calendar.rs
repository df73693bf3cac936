//! Academic term calendar.
//!
//! Derives the upcoming term sequence from a reference date.
//!
//! # Slot Numbering
//! Terms are numbered the way course offerings are: odd slot numbers are
//! fall-type terms, even slot numbers are spring-type terms, and slot `n`
//! belongs to academic year `⌈n/2⌉`.
//!
//! The upcoming horizon starts from the slot number of the *next* term
//! (1 for fall, 2 for spring) and counts up from there, so labels restart
//! at year one on every call. This is a relative numbering, not a model of
//! the student's actual standing.
//!
//! # Month Rule
//! September through January belong to the fall-type term (the next term
//! is spring-type); February through August belong to the spring/summer
//! term (the next term is fall-type).

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Term type of an academic slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TermParity {
    /// Odd slot numbers.
    Fall,
    /// Even slot numbers.
    Spring,
}

impl TermParity {
    /// Parity of a slot number (odd → fall, even → spring).
    #[inline]
    pub fn of_slot(slot_number: u32) -> Self {
        if slot_number % 2 == 1 {
            Self::Fall
        } else {
            Self::Spring
        }
    }

    /// The alternating parity.
    #[inline]
    pub fn flip(self) -> Self {
        match self {
            Self::Fall => Self::Spring,
            Self::Spring => Self::Fall,
        }
    }

    /// Term name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Fall => "Fall",
            Self::Spring => "Spring",
        }
    }
}

impl fmt::Display for TermParity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One generated term of the planning horizon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermSlot {
    /// Position in the horizon (0-indexed).
    pub index: usize,
    /// Academic slot number.
    pub slot_number: u32,
    /// Term type.
    pub parity: TermParity,
    /// Human-readable label, e.g. `"Year 1 Spring"`.
    pub display_name: String,
}

/// Current/next term pair derived from a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermCalendar {
    /// Slot number of the term in progress (1 or 2).
    pub current_slot: u32,
    /// Slot number of the following term (2 or 1).
    pub next_slot: u32,
}

impl TermCalendar {
    /// Calendar for the given reference date.
    pub fn at(date: NaiveDate) -> Self {
        let month = date.month();
        if month >= 9 || month == 1 {
            Self {
                current_slot: 1,
                next_slot: 2,
            }
        } else {
            Self {
                current_slot: 2,
                next_slot: 1,
            }
        }
    }

    /// Calendar for the local system date.
    pub fn today() -> Self {
        Self::at(Local::now().date_naive())
    }

    /// Parity of the term in progress.
    pub fn current_parity(&self) -> TermParity {
        TermParity::of_slot(self.current_slot)
    }

    /// Parity of the following term.
    pub fn next_parity(&self) -> TermParity {
        TermParity::of_slot(self.next_slot)
    }

    /// Generates `count` consecutive terms starting from the next one.
    ///
    /// Parity alternates from term to term.
    pub fn upcoming(&self, count: usize) -> Vec<TermSlot> {
        (0..count)
            .map(|index| {
                let slot_number = self.next_slot + index as u32;
                TermSlot {
                    index,
                    slot_number,
                    parity: TermParity::of_slot(slot_number),
                    display_name: term_label(slot_number),
                }
            })
            .collect()
    }
}

/// Ordinal label for a slot number: `"Year ⌈n/2⌉ Fall|Spring"`.
///
/// Slot 0 has no academic year and is labelled `"Extracurricular"`.
pub fn term_label(slot_number: u32) -> String {
    if slot_number == 0 {
        return "Extracurricular".to_string();
    }
    let year = slot_number.div_ceil(2);
    format!("Year {year} {}", TermParity::of_slot(slot_number))
}
