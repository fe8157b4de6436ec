//! Syllable reading state machine

use super::ParseError;
use crate::corpus::{Corpus, SEPARATOR};
use crate::phoneme::{Consonant, Phoneme, Vowel};
use crate::syllable::{ConsonantCluster, Syllable};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Between syllables
    Empty,
    /// One or two onset consonants read
    Onset,
    /// Nucleus read, syllable is complete
    Nucleus,
    /// Nucleus and one or two coda consonants read
    Coda,
}

/// Outcome of reading a whole text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedText {
    pub corpus: Corpus,
    /// Why reading stopped before the end of the input, if it did
    pub stopped: Option<ParseError>,
}

impl ParsedText {
    pub fn is_complete(&self) -> bool {
        self.stopped.is_none()
    }
}

/// Reads `.`-separated syllables one character at a time
#[derive(Debug)]
pub struct SyllableFsm {
    state: State,
    onset: Option<ConsonantCluster>,
    nucleus: Option<Vowel>,
    coda: Option<ConsonantCluster>,
    /// Characters consumed so far
    position: usize,
    output: Corpus,
}

impl SyllableFsm {
    pub fn new() -> Self {
        Self {
            state: State::Empty,
            onset: None,
            nucleus: None,
            coda: None,
            position: 0,
            output: Corpus::new(),
        }
    }

    /// Feed one character
    pub fn feed(&mut self, c: char) -> Result<(), ParseError> {
        let position = self.position;
        self.position += 1;

        if c == SEPARATOR || c.is_whitespace() {
            return self.feed_boundary(position, c);
        }
        match Phoneme::from_symbol(c) {
            Some(Phoneme::Consonant(consonant)) => self.feed_consonant(position, consonant),
            Some(Phoneme::Vowel(vowel)) => self.feed_vowel(position, vowel),
            None => Err(ParseError::UnknownSymbol {
                symbol: c,
                position,
            }),
        }
    }

    fn feed_consonant(&mut self, position: usize, consonant: Consonant) -> Result<(), ParseError> {
        match self.state {
            State::Empty | State::Onset => {
                self.onset = Some(extend_cluster(self.onset, consonant, position)?);
                self.state = State::Onset;
            }
            State::Nucleus | State::Coda => {
                self.coda = Some(extend_cluster(self.coda, consonant, position)?);
                self.state = State::Coda;
            }
        }
        Ok(())
    }

    fn feed_vowel(&mut self, position: usize, vowel: Vowel) -> Result<(), ParseError> {
        match self.state {
            State::Empty | State::Onset => {
                self.nucleus = Some(vowel);
                self.state = State::Nucleus;
                Ok(())
            }
            // a second vowel needs a separator first
            State::Nucleus | State::Coda => Err(ParseError::ExpectedSeparator {
                symbol: vowel.symbol(),
                position,
            }),
        }
    }

    fn feed_boundary(&mut self, position: usize, c: char) -> Result<(), ParseError> {
        match self.state {
            State::Empty if c == SEPARATOR => Err(ParseError::EmptySyllable { position }),
            State::Empty => Ok(()),
            State::Onset => Err(ParseError::MissingNucleus { position }),
            State::Nucleus | State::Coda => {
                self.flush_current();
                Ok(())
            }
        }
    }

    /// Move the syllable under construction to the output if it has a nucleus
    fn flush_current(&mut self) {
        if let Some(nucleus) = self.nucleus {
            let mut syllable = Syllable::new(nucleus);
            if let Some(onset) = self.onset {
                syllable = syllable.with_onset(onset);
            }
            if let Some(coda) = self.coda {
                syllable = syllable.with_coda(coda);
            }
            self.output.push(syllable);
        }
        self.reset_state();
    }

    fn reset_state(&mut self) {
        self.state = State::Empty;
        self.onset = None;
        self.nucleus = None;
        self.coda = None;
    }

    /// Stop reading after `error`, keeping everything read so far
    pub fn abort(mut self, error: ParseError) -> ParsedText {
        self.flush_current();
        ParsedText {
            corpus: self.output,
            stopped: Some(error),
        }
    }

    /// End of input
    pub fn finish(mut self) -> ParsedText {
        if self.state == State::Onset {
            let position = self.position;
            return self.abort(ParseError::MissingNucleus { position });
        }
        self.flush_current();
        ParsedText {
            corpus: self.output,
            stopped: None,
        }
    }
}

impl Default for SyllableFsm {
    fn default() -> Self {
        Self::new()
    }
}

fn extend_cluster(
    cluster: Option<ConsonantCluster>,
    consonant: Consonant,
    position: usize,
) -> Result<ConsonantCluster, ParseError> {
    match cluster {
        None => Ok(ConsonantCluster::single(consonant)),
        Some(c) if c.secondary().is_none() => Ok(ConsonantCluster::pair(c.primary(), consonant)),
        Some(_) => Err(ParseError::ClusterTooLong { position }),
    }
}
