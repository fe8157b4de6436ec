//! Phoneme catalogs with articulatory features
//!
//! Both catalogs are closed enums. Every entry has a unique IPA symbol and a
//! fixed set of categorical features; distances are the number of derived
//! binary traits on which two phonemes disagree.

mod consonant;
mod vowel;

pub use consonant::{Consonant, Manner, Place, Voicing};
pub use vowel::{Backness, Openness, Rounding, Vowel};

/// A single decoded symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phoneme {
    Consonant(Consonant),
    Vowel(Vowel),
}

impl Phoneme {
    /// Classify an IPA symbol; `None` for anything outside both catalogs
    pub fn from_symbol(c: char) -> Option<Phoneme> {
        Vowel::from_symbol(c)
            .map(Phoneme::Vowel)
            .or_else(|| Consonant::from_symbol(c).map(Phoneme::Consonant))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogs_do_not_overlap() {
        for v in Vowel::ALL {
            assert!(Consonant::from_symbol(v.symbol()).is_none());
        }
    }

    #[test]
    fn test_classify_symbol() {
        assert_eq!(Phoneme::from_symbol('a'), Some(Phoneme::Vowel(Vowel::OpenFrontUnrounded)));
        assert_eq!(Phoneme::from_symbol('p'), Some(Phoneme::Consonant(Consonant::P)));
        assert_eq!(Phoneme::from_symbol('.'), None);
        assert_eq!(Phoneme::from_symbol('X'), None);
    }
}
