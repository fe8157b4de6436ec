//! Reading syllables from IPA text
//!
//! Syllables are written as up to two onset consonants, one vowel and up to
//! two coda consonants, separated by `.` (line breaks also separate). Reading
//! stops at the first position that cannot be decoded; whatever was read
//! before it is kept and the reason is reported alongside.

mod fsm;

use thiserror::Error;

pub use fsm::{ParsedText, SyllableFsm};

use crate::syllable::Syllable;

/// Why no valid syllable could be read at a position
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown symbol '{symbol}' at position {position}")]
    UnknownSymbol { symbol: char, position: usize },

    #[error("syllable without vowel nucleus at position {position}")]
    MissingNucleus { position: usize },

    #[error("more than two consonants in a cluster at position {position}")]
    ClusterTooLong { position: usize },

    #[error("expected a separator before '{symbol}' at position {position}")]
    ExpectedSeparator { symbol: char, position: usize },

    #[error("empty syllable at position {position}")]
    EmptySyllable { position: usize },

    #[error("expected a single syllable, found {count}")]
    MultipleSyllables { count: usize },
}

/// Read as many syllables as possible from `input`
pub fn parse_text(input: &str) -> ParsedText {
    let mut fsm = SyllableFsm::new();

    for c in input.chars() {
        if let Err(error) = fsm.feed(c) {
            log::debug!("stopped reading: {}", error);
            return fsm.abort(error);
        }
    }

    fsm.finish()
}

/// Read exactly one syllable; any leftover or undecodable input is an error
pub fn parse_syllable(input: &str) -> Result<Syllable, ParseError> {
    let parsed = parse_text(input);
    if let Some(error) = parsed.stopped {
        return Err(error);
    }
    let syllables = parsed.corpus.into_inner();
    match syllables.as_slice() {
        [single] => Ok(*single),
        [] => Err(ParseError::EmptySyllable { position: 0 }),
        many => Err(ParseError::MultipleSyllables { count: many.len() }),
    }
}
