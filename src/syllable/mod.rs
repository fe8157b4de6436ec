//! Syllables: optional onset, vowel nucleus, optional coda
//!
//! Two syllables are the same sound-type when onset, nucleus and coda match;
//! the occurrence counter never takes part in equality or hashing.

mod cluster;

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::phoneme::Vowel;

pub use cluster::{ConsonantCluster, ARITY_PENALTY};

/// Added when exactly one of two syllables has an onset (resp. a coda)
pub const PRESENCE_PENALTY: u32 = 12;

/// A syllable and its occurrence counter
#[derive(Debug, Clone, Copy)]
pub struct Syllable {
    onset: Option<ConsonantCluster>,
    nucleus: Vowel,
    coda: Option<ConsonantCluster>,
    count: u32,
}

impl Syllable {
    /// Largest value `distance` can return
    pub const MAX_DISTANCE: u32 = {
        let edge = if PRESENCE_PENALTY > ConsonantCluster::MAX_DISTANCE {
            PRESENCE_PENALTY
        } else {
            ConsonantCluster::MAX_DISTANCE
        };
        2 * edge + Vowel::MAX_DISTANCE
    };

    /// Bare nucleus, counter at 1
    pub fn new(nucleus: Vowel) -> Self {
        Self {
            onset: None,
            nucleus,
            coda: None,
            count: 1,
        }
    }

    pub fn with_onset(mut self, onset: ConsonantCluster) -> Self {
        self.onset = Some(onset);
        self
    }

    pub fn with_coda(mut self, coda: ConsonantCluster) -> Self {
        self.coda = Some(coda);
        self
    }

    pub fn onset(&self) -> Option<&ConsonantCluster> {
        self.onset.as_ref()
    }

    pub fn nucleus(&self) -> Vowel {
        self.nucleus
    }

    pub fn coda(&self) -> Option<&ConsonantCluster> {
        self.coda.as_ref()
    }

    /// Occurrences folded into this element
    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn set_count(&mut self, count: u32) {
        self.count = count;
    }

    /// Same phonetic content, counter reset to 1
    pub fn sound_type(&self) -> Syllable {
        Syllable { count: 1, ..*self }
    }

    pub fn onset_distance(&self, other: &Syllable) -> u32 {
        edge_distance(self.onset.as_ref(), other.onset.as_ref())
    }

    pub fn nucleus_distance(&self, other: &Syllable) -> u32 {
        self.nucleus.distance(other.nucleus)
    }

    pub fn coda_distance(&self, other: &Syllable) -> u32 {
        edge_distance(self.coda.as_ref(), other.coda.as_ref())
    }

    /// Onset term + nucleus term + coda term
    pub fn distance(&self, other: &Syllable) -> u32 {
        self.onset_distance(other) + self.nucleus_distance(other) + self.coda_distance(other)
    }
}

/// Cluster distance when both are present, `PRESENCE_PENALTY` when only one is
fn edge_distance(a: Option<&ConsonantCluster>, b: Option<&ConsonantCluster>) -> u32 {
    match (a, b) {
        (Some(a), Some(b)) => a.distance(b),
        (None, None) => 0,
        _ => PRESENCE_PENALTY,
    }
}

impl PartialEq for Syllable {
    fn eq(&self, other: &Self) -> bool {
        self.onset == other.onset && self.nucleus == other.nucleus && self.coda == other.coda
    }
}

impl Eq for Syllable {}

impl Hash for Syllable {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.onset.hash(state);
        self.nucleus.hash(state);
        self.coda.hash(state);
    }
}

impl fmt::Display for Syllable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(onset) = &self.onset {
            write!(f, "{}", onset)?;
        }
        write!(f, "{}", self.nucleus)?;
        if let Some(coda) = &self.coda {
            write!(f, "{}", coda)?;
        }
        Ok(())
    }
}
