//! Iterative reduction of a corpus to a target number of sound-types
//!
//! Each iteration picks the globally closest pair of non-identical
//! syllables, lets the more frequent of the two survive and rewrites every
//! occurrence of the other one into it.

use serde::Serialize;

use super::Corpus;
use crate::config::ReducerConfig;
use crate::syllable::Syllable;

/// Two syllables selected for merging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyllablePair {
    pub first: Syllable,
    pub second: Syllable,
    pub distance: u32,
    /// No pair beat the threshold; the first two elements were taken instead
    pub fallback: bool,
}

impl SyllablePair {
    fn swapped(self) -> Self {
        Self {
            first: self.second,
            second: self.first,
            ..self
        }
    }
}

/// One merge performed by `Corpus::reduce_to`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergeStep {
    pub survivor: String,
    pub victim: String,
    pub distance: u32,
    pub survivor_occurrences: usize,
    pub victim_occurrences: usize,
    pub replaced: usize,
    pub fallback: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReductionOutcome {
    /// Distinct count is at or below the target
    Reached,
    /// No mergeable pair left before the target was reached
    Stalled,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReductionReport {
    pub target: usize,
    pub distinct_before: usize,
    pub distinct_after: usize,
    pub outcome: ReductionOutcome,
    pub steps: Vec<MergeStep>,
}

impl Corpus {
    /// Closest pair of structurally different syllables.
    ///
    /// Pairs are scanned in row-major order and only a strictly smaller
    /// distance replaces the current best, so the first pair found wins ties.
    /// A pair must beat `threshold`; when none does, the first two elements
    /// are returned with `fallback` set, whatever their distance. `None` when
    /// the corpus has fewer than two elements.
    pub fn find_closest_pair(&self, threshold: u32) -> Option<SyllablePair> {
        let syllables = self.as_slice();
        if syllables.len() < 2 {
            return None;
        }

        let mut best: Option<(usize, usize, u32)> = None;
        let mut bound = threshold;
        for i in 0..syllables.len() {
            for j in (i + 1)..syllables.len() {
                if syllables[i] == syllables[j] {
                    continue;
                }
                let distance = syllables[i].distance(&syllables[j]);
                if distance < bound {
                    bound = distance;
                    best = Some((i, j, distance));
                }
            }
        }

        let pair = match best {
            Some((i, j, distance)) => SyllablePair {
                first: syllables[i],
                second: syllables[j],
                distance,
                fallback: false,
            },
            None => SyllablePair {
                first: syllables[0],
                second: syllables[1],
                distance: syllables[0].distance(&syllables[1]),
                fallback: true,
            },
        };
        Some(pair)
    }

    /// Put the more frequent sound-type first; ties keep the given order.
    pub fn order_by_frequency(&self, pair: SyllablePair) -> SyllablePair {
        if self.frequency(&pair.second) > self.frequency(&pair.first) {
            pair.swapped()
        } else {
            pair
        }
    }

    /// Rewrite every occurrence of `victim`'s sound-type as `survivor`.
    ///
    /// Returns how many elements were rewritten.
    pub fn replace(&mut self, survivor: &Syllable, victim: &Syllable) -> usize {
        let mut replaced = 0;
        for syllable in self.syllables.iter_mut() {
            if *syllable == *victim {
                *syllable = survivor.sound_type();
                replaced += 1;
            }
        }
        replaced
    }

    /// Merge sound-types until at most `target` distinct ones remain.
    ///
    /// Every iteration removes exactly one sound-type. The loop stops early
    /// with `ReductionOutcome::Stalled` when no merge can make progress: the
    /// corpus holds fewer than two elements, or the fallback pair is made of
    /// two identical syllables.
    pub fn reduce_to(&mut self, target: usize, config: &ReducerConfig) -> ReductionReport {
        let distinct_before = self.count_distinct();
        let mut distinct = distinct_before;
        let mut steps = Vec::new();
        let mut outcome = ReductionOutcome::Reached;

        log::info!(
            "reducing {} syllables: {} distinct, target {}",
            self.len(),
            distinct,
            target
        );

        while distinct > target {
            let Some(pair) = self.find_closest_pair(config.merge_threshold) else {
                outcome = ReductionOutcome::Stalled;
                break;
            };
            if pair.first == pair.second {
                log::warn!(
                    "no pair below threshold {} and fallback pair '{}' is identical, stopping at {} distinct",
                    config.merge_threshold,
                    pair.first,
                    distinct
                );
                outcome = ReductionOutcome::Stalled;
                break;
            }
            if pair.fallback {
                log::warn!(
                    "no pair below threshold {}, merging first two syllables '{}' and '{}' (distance {})",
                    config.merge_threshold,
                    pair.first,
                    pair.second,
                    pair.distance
                );
            }

            let pair = self.order_by_frequency(pair);
            let survivor_occurrences = self.frequency(&pair.first);
            let victim_occurrences = self.frequency(&pair.second);
            let replaced = self.replace(&pair.first, &pair.second);

            log::debug!(
                "merged '{}' ({}x) into '{}' ({}x), distance {}",
                pair.second,
                victim_occurrences,
                pair.first,
                survivor_occurrences,
                pair.distance
            );

            steps.push(MergeStep {
                survivor: pair.first.to_string(),
                victim: pair.second.to_string(),
                distance: pair.distance,
                survivor_occurrences,
                victim_occurrences,
                replaced,
                fallback: pair.fallback,
            });

            let next = self.count_distinct();
            debug_assert_eq!(next + 1, distinct);
            distinct = next;
        }

        log::info!(
            "reduction finished after {} merges: {} distinct ({:?})",
            steps.len(),
            distinct,
            outcome
        );

        ReductionReport {
            target,
            distinct_before,
            distinct_after: distinct,
            outcome,
            steps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phoneme::{Consonant, Vowel};
    use crate::syllable::ConsonantCluster;

    fn v(c: char) -> Vowel {
        Vowel::from_symbol(c).unwrap()
    }

    fn cv(onset: Consonant, nucleus: char) -> Syllable {
        Syllable::new(v(nucleus)).with_onset(ConsonantCluster::single(onset))
    }

    #[test]
    fn test_closest_pair_skips_identical() {
        let corpus = Corpus::from(vec![
            cv(Consonant::P, 'a'),
            cv(Consonant::P, 'a'),
            cv(Consonant::B, 'a'),
        ]);
        let pair = corpus.find_closest_pair(43).unwrap();
        assert_eq!(pair.first, cv(Consonant::P, 'a'));
        assert_eq!(pair.second, cv(Consonant::B, 'a'));
        assert_eq!(pair.distance, 1);
        assert!(!pair.fallback);
    }

    #[test]
    fn test_closest_pair_first_found_wins_ties() {
        // ta-pa and ta-da are both at distance 1; ta-pa is scanned first
        let corpus = Corpus::from(vec![
            cv(Consonant::T, 'a'),
            cv(Consonant::P, 'a'),
            cv(Consonant::D, 'a'),
        ]);
        let pair = corpus.find_closest_pair(43).unwrap();
        assert_eq!(pair.first.to_string(), "ta");
        assert_eq!(pair.second.to_string(), "pa");
        assert_eq!(pair.distance, 1);

        // pa-ba is found before the later ba-da and ta-da ties
        let corpus = Corpus::from(vec![
            cv(Consonant::P, 'a'),
            cv(Consonant::B, 'a'),
            cv(Consonant::T, 'a'),
            cv(Consonant::D, 'a'),
        ]);
        let pair = corpus.find_closest_pair(43).unwrap();
        assert_eq!(pair.first.to_string(), "pa");
        assert_eq!(pair.second.to_string(), "ba");
    }

    #[test]
    fn test_closest_pair_picks_global_minimum() {
        let corpus = Corpus::from(vec![
            Syllable::new(v('a')),
            cv(Consonant::M, 'i'),
            cv(Consonant::P, 'u'),
            cv(Consonant::P, 'y'),
        ]);
        let pair = corpus.find_closest_pair(43).unwrap();
        assert_eq!(pair.first.to_string(), "pu");
        assert_eq!(pair.second.to_string(), "py");
        // u / y differ in backness only
        assert_eq!(pair.distance, 1);
    }

    #[test]
    fn test_closest_pair_fallback_ignores_threshold() {
        let corpus = Corpus::from(vec![
            Syllable::new(v('a')),
            cv(Consonant::P, 'a'),
            cv(Consonant::P, 'i'),
        ]);
        // pa-pi is at distance 2, nothing is below 1
        let pair = corpus.find_closest_pair(1).unwrap();
        assert!(pair.fallback);
        assert_eq!(pair.first.to_string(), "a");
        assert_eq!(pair.second.to_string(), "pa");
        assert_eq!(pair.distance, 12);
    }

    #[test]
    fn test_closest_pair_on_tiny_corpus() {
        assert!(Corpus::new().find_closest_pair(43).is_none());
        let single = Corpus::from(vec![cv(Consonant::P, 'a')]);
        assert!(single.find_closest_pair(43).is_none());
    }

    #[test]
    fn test_order_by_frequency_swaps_when_second_more_frequent() {
        let corpus = Corpus::from(vec![
            cv(Consonant::B, 'a'),
            cv(Consonant::P, 'a'),
            cv(Consonant::P, 'a'),
        ]);
        let pair = corpus.find_closest_pair(43).unwrap();
        assert_eq!(pair.first.to_string(), "ba");
        let ordered = corpus.order_by_frequency(pair);
        assert_eq!(ordered.first.to_string(), "pa");
        assert_eq!(ordered.second.to_string(), "ba");
        assert_eq!(ordered.distance, pair.distance);
    }

    #[test]
    fn test_order_by_frequency_keeps_order_on_tie() {
        let corpus = Corpus::from(vec![cv(Consonant::B, 'a'), cv(Consonant::P, 'a')]);
        let pair = corpus.find_closest_pair(43).unwrap();
        let ordered = corpus.order_by_frequency(pair);
        assert_eq!(ordered, pair);
    }

    #[test]
    fn test_replace_rewrites_every_victim() {
        let mut corpus = Corpus::from(vec![
            cv(Consonant::B, 'a'),
            cv(Consonant::P, 'a'),
            cv(Consonant::B, 'a'),
            cv(Consonant::M, 'i'),
        ]);
        let replaced = corpus.replace(&cv(Consonant::P, 'a'), &cv(Consonant::B, 'a'));
        assert_eq!(replaced, 2);
        assert_eq!(corpus.to_string(), "pa.pa.pa.mi");
    }

    #[test]
    fn test_reduce_merges_rare_into_frequent() {
        let mut corpus = Corpus::from(vec![
            cv(Consonant::P, 'a'),
            cv(Consonant::P, 'a'),
            cv(Consonant::B, 'a'),
        ]);
        let report = corpus.reduce_to(1, &ReducerConfig::default());
        assert_eq!(corpus.to_string(), "pa.pa.pa");
        assert_eq!(report.outcome, ReductionOutcome::Reached);
        assert_eq!(report.steps.len(), 1);
        assert_eq!(report.steps[0].survivor, "pa");
        assert_eq!(report.steps[0].victim, "ba");
        assert_eq!(report.steps[0].survivor_occurrences, 2);
        assert_eq!(report.steps[0].victim_occurrences, 1);
        assert_eq!(report.steps[0].replaced, 1);
    }

    #[test]
    fn test_reduce_already_at_target_is_noop() {
        let original = Corpus::from(vec![cv(Consonant::P, 'a'), cv(Consonant::M, 'i')]);
        let mut corpus = original.clone();
        let report = corpus.reduce_to(2, &ReducerConfig::default());
        assert_eq!(corpus, original);
        assert!(report.steps.is_empty());
        assert_eq!(report.outcome, ReductionOutcome::Reached);

        let report = corpus.reduce_to(5, &ReducerConfig::default());
        assert!(report.steps.is_empty());
    }

    #[test]
    fn test_reduce_decrements_distinct_count_by_one_per_step() {
        let mut corpus = Corpus::from(vec![
            cv(Consonant::P, 'a'),
            cv(Consonant::B, 'a'),
            cv(Consonant::T, 'u'),
            cv(Consonant::D, 'o'),
            Syllable::new(v('i')),
            cv(Consonant::M, 'e'),
            cv(Consonant::P, 'a'),
        ]);
        let report = corpus.reduce_to(2, &ReducerConfig::default());
        assert_eq!(report.distinct_before, 6);
        assert_eq!(report.distinct_after, 2);
        assert_eq!(report.steps.len(), 4);
        assert_eq!(corpus.count_distinct(), 2);
        assert_eq!(corpus.len(), 7);
    }

    #[test]
    fn test_reduce_stalls_on_identical_fallback() {
        // nothing is below a threshold of 1, and the first two elements are equal
        let config = ReducerConfig::default().with_merge_threshold(1);
        let mut corpus = Corpus::from(vec![
            cv(Consonant::P, 'a'),
            cv(Consonant::P, 'a'),
            Syllable::new(v('i')),
        ]);
        let report = corpus.reduce_to(1, &config);
        assert_eq!(report.outcome, ReductionOutcome::Stalled);
        assert!(report.steps.is_empty());
        assert_eq!(corpus.count_distinct(), 2);
    }

    #[test]
    fn test_reduce_uses_fallback_pair_beyond_threshold() {
        let config = ReducerConfig::default().with_merge_threshold(1);
        let mut corpus = Corpus::from(vec![Syllable::new(v('a')), cv(Consonant::P, 'i')]);
        let report = corpus.reduce_to(1, &config);
        assert_eq!(report.outcome, ReductionOutcome::Reached);
        assert!(report.steps[0].fallback);
        assert_eq!(corpus.to_string(), "a.a");
    }

    #[test]
    fn test_reduce_empty_and_singleton() {
        let mut empty = Corpus::new();
        let report = empty.reduce_to(1, &ReducerConfig::default());
        assert_eq!(report.outcome, ReductionOutcome::Reached);
        assert_eq!(report.distinct_after, 0);

        let mut single = Corpus::from(vec![cv(Consonant::P, 'a')]);
        let report = single.reduce_to(0, &ReducerConfig::default());
        assert_eq!(report.outcome, ReductionOutcome::Stalled);
        assert_eq!(single.len(), 1);
    }
}
