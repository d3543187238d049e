//! Core data structures for line statistics.
//!
//! [`LanguageTotals`] holds the counters for one language. A [`Tally`] holds
//! one `LanguageTotals` per known language plus the unknown bucket, and is the
//! only thing the counter mutates during a scan.
//!
//! `total` is tracked on its own rather than derived: a line with code in
//! front of a comment increments both `code` and `comments`, so the three
//! categories can add up to more than `total`.

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign};

use crate::source::registry::LanguageId;

use super::classifier::LineClass;

/// Line and file counters for one language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageTotals {
    /// Physical lines read
    pub total: u64,
    /// Lines with code on them
    pub code: u64,
    /// Lines with a comment on them
    pub comments: u64,
    /// Lines holding nothing but a line terminator
    pub blanks: u64,
    /// Streams opened
    pub files: u64,
}

impl LanguageTotals {
    /// Create new zeroed totals.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one classified line.
    pub fn record(&mut self, class: LineClass) {
        self.total += 1;
        self.code += u64::from(class.code);
        self.comments += u64::from(class.comment);
        self.blanks += u64::from(class.blank);
    }

    /// Record one line without classifying it (unknown language).
    pub fn record_unclassified(&mut self) {
        self.total += 1;
    }
}

impl Add for LanguageTotals {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            total: self.total + other.total,
            code: self.code + other.code,
            comments: self.comments + other.comments,
            blanks: self.blanks + other.blanks,
            files: self.files + other.files,
        }
    }
}

impl AddAssign for LanguageTotals {
    fn add_assign(&mut self, other: Self) {
        self.total += other.total;
        self.code += other.code;
        self.comments += other.comments;
        self.blanks += other.blanks;
        self.files += other.files;
    }
}

/// Totals for every language of a registry, plus the unknown bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    known: Vec<LanguageTotals>,
    unknown: LanguageTotals,
}

impl Tally {
    /// Zeroed tally with one slot per known language.
    pub fn new(languages: usize) -> Self {
        Self {
            known: vec![LanguageTotals::new(); languages],
            unknown: LanguageTotals::new(),
        }
    }

    /// Number of known-language slots.
    pub fn len(&self) -> usize {
        self.known.len()
    }

    pub fn is_empty(&self) -> bool {
        self.known.is_empty()
    }

    /// Totals for a slot. Out-of-range ids read as zero.
    pub fn get(&self, id: LanguageId) -> LanguageTotals {
        match id {
            LanguageId::Known(idx) => self.known.get(idx).copied().unwrap_or_default(),
            LanguageId::Unknown => self.unknown,
        }
    }

    /// Mutable slot, grown on demand so a mismatched id never panics.
    pub fn slot_mut(&mut self, id: LanguageId) -> &mut LanguageTotals {
        match id {
            LanguageId::Known(idx) => {
                if idx >= self.known.len() {
                    self.known.resize(idx + 1, LanguageTotals::new());
                }
                &mut self.known[idx]
            }
            LanguageId::Unknown => &mut self.unknown,
        }
    }

    /// Every slot in table order, unknown bucket last.
    pub fn iter(&self) -> impl Iterator<Item = (LanguageId, &LanguageTotals)> {
        self.known
            .iter()
            .enumerate()
            .map(|(idx, totals)| (LanguageId::Known(idx), totals))
            .chain(std::iter::once((LanguageId::Unknown, &self.unknown)))
    }

    /// Index-wise sum of another tally into this one.
    pub fn merge(&mut self, other: &Tally) {
        for (id, totals) in other.iter() {
            *self.slot_mut(id) += *totals;
        }
    }

    /// Sum over every slot.
    pub fn grand_total(&self) -> LanguageTotals {
        self.iter()
            .fold(LanguageTotals::new(), |acc, (_, totals)| acc + *totals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn totals(total: u64, code: u64, comments: u64, blanks: u64, files: u64) -> LanguageTotals {
        LanguageTotals {
            total,
            code,
            comments,
            blanks,
            files,
        }
    }

    #[test]
    fn test_totals_default() {
        let t = LanguageTotals::new();
        assert_eq!(t, totals(0, 0, 0, 0, 0));
    }

    #[test]
    fn test_record_code_and_comment_line() {
        let mut t = LanguageTotals::new();
        t.record(LineClass {
            code: true,
            comment: true,
            blank: false,
        });
        assert_eq!(t, totals(1, 1, 1, 0, 0));
        // total is not the sum of the categories
        assert!(t.code + t.comments + t.blanks > t.total);
    }

    #[test]
    fn test_record_unclassified() {
        let mut t = LanguageTotals::new();
        t.record_unclassified();
        t.record_unclassified();
        assert_eq!(t, totals(2, 0, 0, 0, 0));
    }

    #[test]
    fn test_totals_add() {
        let sum = totals(10, 6, 3, 1, 1) + totals(5, 5, 0, 0, 2);
        assert_eq!(sum, totals(15, 11, 3, 1, 3));
    }

    #[test]
    fn test_tally_slots() {
        let mut tally = Tally::new(3);
        tally.slot_mut(LanguageId::Known(1)).files += 1;
        tally.slot_mut(LanguageId::Unknown).total += 4;

        assert_eq!(tally.get(LanguageId::Known(1)).files, 1);
        assert_eq!(tally.get(LanguageId::Unknown).total, 4);
        assert_eq!(tally.get(LanguageId::Known(99)), LanguageTotals::new());
        assert_eq!(tally.iter().count(), 4);
        assert_eq!(tally.iter().last().map(|(id, _)| id), Some(LanguageId::Unknown));
    }

    #[test]
    fn test_tally_merge() {
        let mut a = Tally::new(2);
        *a.slot_mut(LanguageId::Known(0)) = totals(10, 8, 1, 1, 1);
        let mut b = Tally::new(2);
        *b.slot_mut(LanguageId::Known(0)) = totals(4, 2, 2, 0, 1);
        *b.slot_mut(LanguageId::Unknown) = totals(7, 0, 0, 0, 1);

        a.merge(&b);

        assert_eq!(a.get(LanguageId::Known(0)), totals(14, 10, 3, 1, 2));
        assert_eq!(a.get(LanguageId::Unknown), totals(7, 0, 0, 0, 1));
        assert_eq!(a.grand_total(), totals(21, 10, 3, 1, 3));
    }
}
