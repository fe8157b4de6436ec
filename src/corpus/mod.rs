//! Ordered syllable sequence and its frequency queries
//!
//! During reduction repeated sound-types are kept as separate elements and
//! frequency is always counted over those raw occurrences. Counters on the
//! elements are only produced afterwards, by folding duplicates.

mod reduce;

use std::fmt;

use crate::syllable::Syllable;

pub use reduce::{MergeStep, ReductionOutcome, ReductionReport, SyllablePair};

/// Separator between syllables, for both reading and writing
pub const SEPARATOR: char = '.';

/// Ordered sequence of syllables, duplicates allowed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    syllables: Vec<Syllable>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, syllable: Syllable) {
        self.syllables.push(syllable);
    }

    pub fn len(&self) -> usize {
        self.syllables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.syllables.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Syllable> {
        self.syllables.iter()
    }

    pub fn as_slice(&self) -> &[Syllable] {
        &self.syllables
    }

    pub fn into_inner(self) -> Vec<Syllable> {
        self.syllables
    }

    /// Collapse every repeated sound-type onto its first occurrence.
    ///
    /// The survivor's counter absorbs the counter of each removed element,
    /// so on a raw sequence it ends up equal to the number of occurrences.
    /// Running it again changes nothing.
    pub fn fold_duplicates(&mut self) {
        let mut i = 0;
        while i < self.syllables.len() {
            let mut j = i + 1;
            while j < self.syllables.len() {
                if self.syllables[i] == self.syllables[j] {
                    let removed = self.syllables.remove(j);
                    let count = self.syllables[i].count() + removed.count();
                    self.syllables[i].set_count(count);
                } else {
                    j += 1;
                }
            }
            i += 1;
        }
    }

    /// Folded copy of the sequence, one element per sound-type
    pub fn occurrence_counts(&self) -> Corpus {
        let mut folded = self.clone();
        folded.fold_duplicates();
        folded
    }

    /// First occurrence of each sound-type, in sequence order
    pub fn distinct_types(&self) -> Vec<&Syllable> {
        let mut seen: Vec<&Syllable> = Vec::new();
        for syllable in &self.syllables {
            if !seen.contains(&syllable) {
                seen.push(syllable);
            }
        }
        seen
    }

    /// Number of structurally distinct sound-types, counters ignored
    pub fn count_distinct(&self) -> usize {
        self.distinct_types().len()
    }

    /// Raw occurrences of `syllable`'s sound-type
    pub fn frequency(&self, syllable: &Syllable) -> usize {
        self.syllables.iter().filter(|s| *s == syllable).count()
    }
}

impl From<Vec<Syllable>> for Corpus {
    fn from(syllables: Vec<Syllable>) -> Self {
        Self { syllables }
    }
}

impl FromIterator<Syllable> for Corpus {
    fn from_iter<I: IntoIterator<Item = Syllable>>(iter: I) -> Self {
        Self {
            syllables: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a Syllable;
    type IntoIter = std::slice::Iter<'a, Syllable>;

    fn into_iter(self) -> Self::IntoIter {
        self.syllables.iter()
    }
}

impl fmt::Display for Corpus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, syllable) in self.syllables.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", SEPARATOR)?;
            }
            write!(f, "{}", syllable)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phoneme::{Consonant, Vowel};
    use crate::syllable::ConsonantCluster;

    fn cv(onset: Consonant, nucleus: char) -> Syllable {
        Syllable::new(Vowel::from_symbol(nucleus).unwrap())
            .with_onset(ConsonantCluster::single(onset))
    }

    fn sample() -> Corpus {
        Corpus::from(vec![
            cv(Consonant::P, 'a'),
            cv(Consonant::B, 'a'),
            cv(Consonant::P, 'a'),
            cv(Consonant::P, 'a'),
            cv(Consonant::M, 'i'),
            cv(Consonant::B, 'a'),
        ])
    }

    #[test]
    fn test_count_distinct() {
        assert_eq!(sample().count_distinct(), 3);
        assert_eq!(Corpus::new().count_distinct(), 0);
    }

    #[test]
    fn test_distinct_types_keep_first_seen_order() {
        let corpus = sample();
        let rendered: Vec<String> = corpus.distinct_types().iter().map(|s| s.to_string()).collect();
        assert_eq!(rendered, vec!["pa", "ba", "mi"]);
    }

    #[test]
    fn test_fold_duplicates_counts_occurrences() {
        let mut corpus = sample();
        corpus.fold_duplicates();
        assert_eq!(corpus.len(), 3);
        let counts: Vec<u32> = corpus.iter().map(|s| s.count()).collect();
        assert_eq!(counts, vec![3, 2, 1]);
    }

    #[test]
    fn test_fold_handles_adjacent_duplicates() {
        let mut corpus = Corpus::from(vec![cv(Consonant::P, 'a'); 4]);
        corpus.fold_duplicates();
        assert_eq!(corpus.len(), 1);
        assert_eq!(corpus.as_slice()[0].count(), 4);
    }

    #[test]
    fn test_fold_is_idempotent() {
        let mut once = sample();
        once.fold_duplicates();
        let mut twice = once.clone();
        twice.fold_duplicates();
        assert_eq!(once, twice);
        let counts: Vec<u32> = twice.iter().map(|s| s.count()).collect();
        assert_eq!(counts, vec![3, 2, 1]);
        assert_eq!(twice.count_distinct(), twice.len());
    }

    #[test]
    fn test_occurrence_counts_leaves_source_untouched() {
        let corpus = sample();
        let folded = corpus.occurrence_counts();
        assert_eq!(corpus.len(), 6);
        assert_eq!(folded.len(), 3);
    }

    #[test]
    fn test_frequency_uses_raw_occurrences() {
        let mut corpus = sample();
        assert_eq!(corpus.frequency(&cv(Consonant::P, 'a')), 3);
        assert_eq!(corpus.frequency(&cv(Consonant::T, 'a')), 0);
        // counters are not consulted
        corpus.fold_duplicates();
        assert_eq!(corpus.frequency(&cv(Consonant::P, 'a')), 1);
    }

    #[test]
    fn test_display_joins_with_separator() {
        assert_eq!(sample().to_string(), "pa.ba.pa.pa.mi.ba");
        assert_eq!(Corpus::new().to_string(), "");
    }
}
