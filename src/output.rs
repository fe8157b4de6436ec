//! Rendering of reduction results

use serde::Serialize;

use crate::corpus::{Corpus, MergeStep, ReductionOutcome, ReductionReport};

/// Occurrences of one sound-type in the reduced sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SoundCount {
    pub syllable: String,
    pub count: u32,
}

/// Everything a run produced, in serializable form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReductionSummary {
    pub input: String,
    pub output: String,
    pub target: usize,
    pub distinct_before: usize,
    pub distinct_after: usize,
    pub outcome: ReductionOutcome,
    pub merges: Vec<MergeStep>,
    pub counts: Vec<SoundCount>,
}

impl ReductionSummary {
    pub fn new(input: &Corpus, output: &Corpus, report: ReductionReport) -> Self {
        Self {
            input: input.to_string(),
            output: output.to_string(),
            target: report.target,
            distinct_before: report.distinct_before,
            distinct_after: report.distinct_after,
            outcome: report.outcome,
            merges: report.steps,
            counts: sound_counts(output),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Per-type counts, first-seen order
pub fn sound_counts(corpus: &Corpus) -> Vec<SoundCount> {
    corpus
        .occurrence_counts()
        .iter()
        .map(|s| SoundCount {
            syllable: s.to_string(),
            count: s.count(),
        })
        .collect()
}

/// One `syllable<TAB>count` line per sound-type
pub fn render_counts(counts: &[SoundCount]) -> String {
    counts
        .iter()
        .map(|c| format!("{}\t{}", c.syllable, c.count))
        .collect::<Vec<_>>()
        .join("\n")
}
