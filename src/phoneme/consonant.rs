//! French consonant catalog and feature distance

use std::collections::HashMap;
use std::fmt;

use lazy_static::lazy_static;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Voicing {
    Voiced,
    Voiceless,
}

/// Place of articulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Place {
    Bilabial,
    Labiodental,
    Alveolar,
    Postalveolar,
    Palatal,
    Velar,
    Uvular,
    LabialVelar,
    LabialPalatal,
}

impl Place {
    /// Articulated with the lips
    pub fn is_labial(self) -> bool {
        matches!(
            self,
            Place::Bilabial | Place::Labiodental | Place::LabialVelar | Place::LabialPalatal
        )
    }

    /// Articulated with the tongue body
    pub fn is_dorsal(self) -> bool {
        matches!(
            self,
            Place::Palatal
                | Place::Velar
                | Place::Uvular
                | Place::LabialVelar
                | Place::LabialPalatal
        )
    }
}

/// Manner of articulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Manner {
    Plosive,
    Fricative,
    Nasal,
    Lateral,
    Trill,
    Approximant,
}

impl Manner {
    pub fn is_sonorant(self) -> bool {
        matches!(
            self,
            Manner::Nasal | Manner::Lateral | Manner::Trill | Manner::Approximant
        )
    }

    /// Airflow is never fully blocked
    pub fn is_continuant(self) -> bool {
        !matches!(self, Manner::Plosive | Manner::Nasal)
    }
}

/// Consonant phoneme (French inventory plus the alveolar trill)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Consonant {
    P,
    B,
    T,
    D,
    K,
    G,
    F,
    V,
    S,
    Z,
    Esh,
    Ezh,
    M,
    N,
    PalatalNasal,
    Eng,
    L,
    UvularR,
    AlveolarTrill,
    J,
    W,
    LabialPalatalGlide,
}

lazy_static! {
    static ref BY_SYMBOL: HashMap<char, Consonant> =
        Consonant::ALL.iter().map(|c| (c.symbol(), *c)).collect();
}

impl Consonant {
    pub const ALL: [Consonant; 22] = [
        Consonant::P,
        Consonant::B,
        Consonant::T,
        Consonant::D,
        Consonant::K,
        Consonant::G,
        Consonant::F,
        Consonant::V,
        Consonant::S,
        Consonant::Z,
        Consonant::Esh,
        Consonant::Ezh,
        Consonant::M,
        Consonant::N,
        Consonant::PalatalNasal,
        Consonant::Eng,
        Consonant::L,
        Consonant::UvularR,
        Consonant::AlveolarTrill,
        Consonant::J,
        Consonant::W,
        Consonant::LabialPalatalGlide,
    ];

    /// Largest value `distance` can return (five binary traits)
    pub const MAX_DISTANCE: u32 = 5;

    pub fn from_symbol(c: char) -> Option<Consonant> {
        BY_SYMBOL.get(&c).copied()
    }

    pub fn symbol(self) -> char {
        match self {
            Consonant::P => 'p',
            Consonant::B => 'b',
            Consonant::T => 't',
            Consonant::D => 'd',
            Consonant::K => 'k',
            Consonant::G => 'g',
            Consonant::F => 'f',
            Consonant::V => 'v',
            Consonant::S => 's',
            Consonant::Z => 'z',
            Consonant::Esh => '\u{0283}',                // ʃ
            Consonant::Ezh => '\u{0292}',                // ʒ
            Consonant::M => 'm',
            Consonant::N => 'n',
            Consonant::PalatalNasal => '\u{0272}',       // ɲ
            Consonant::Eng => '\u{014B}',                // ŋ
            Consonant::L => 'l',
            Consonant::UvularR => '\u{0281}',            // ʁ
            Consonant::AlveolarTrill => 'r',
            Consonant::J => 'j',
            Consonant::W => 'w',
            Consonant::LabialPalatalGlide => '\u{0265}', // ɥ
        }
    }

    /// (voicing, place, manner)
    fn features(self) -> (Voicing, Place, Manner) {
        use Manner::*;
        use Place::*;
        use Voicing::*;

        match self {
            Consonant::P => (Voiceless, Bilabial, Plosive),
            Consonant::B => (Voiced, Bilabial, Plosive),
            Consonant::T => (Voiceless, Alveolar, Plosive),
            Consonant::D => (Voiced, Alveolar, Plosive),
            Consonant::K => (Voiceless, Velar, Plosive),
            Consonant::G => (Voiced, Velar, Plosive),
            Consonant::F => (Voiceless, Labiodental, Fricative),
            Consonant::V => (Voiced, Labiodental, Fricative),
            Consonant::S => (Voiceless, Alveolar, Fricative),
            Consonant::Z => (Voiced, Alveolar, Fricative),
            Consonant::Esh => (Voiceless, Postalveolar, Fricative),
            Consonant::Ezh => (Voiced, Postalveolar, Fricative),
            Consonant::M => (Voiced, Bilabial, Nasal),
            Consonant::N => (Voiced, Alveolar, Nasal),
            Consonant::PalatalNasal => (Voiced, Palatal, Nasal),
            Consonant::Eng => (Voiced, Velar, Nasal),
            Consonant::L => (Voiced, Alveolar, Lateral),
            Consonant::UvularR => (Voiced, Uvular, Fricative),
            Consonant::AlveolarTrill => (Voiced, Alveolar, Trill),
            Consonant::J => (Voiced, Palatal, Approximant),
            Consonant::W => (Voiced, LabialVelar, Approximant),
            Consonant::LabialPalatalGlide => (Voiced, LabialPalatal, Approximant),
        }
    }

    pub fn voicing(self) -> Voicing {
        self.features().0
    }

    pub fn place(self) -> Place {
        self.features().1
    }

    pub fn manner(self) -> Manner {
        self.features().2
    }

    pub fn is_voiced(self) -> bool {
        self.voicing() == Voicing::Voiced
    }

    pub fn is_labial(self) -> bool {
        self.place().is_labial()
    }

    pub fn is_dorsal(self) -> bool {
        self.place().is_dorsal()
    }

    pub fn is_sonorant(self) -> bool {
        self.manner().is_sonorant()
    }

    pub fn is_continuant(self) -> bool {
        self.manner().is_continuant()
    }

    /// Number of disagreeing traits (0..=5)
    pub fn distance(self, other: Consonant) -> u32 {
        [
            self.is_voiced() != other.is_voiced(),
            self.is_labial() != other.is_labial(),
            self.is_dorsal() != other.is_dorsal(),
            self.is_sonorant() != other.is_sonorant(),
            self.is_continuant() != other.is_continuant(),
        ]
        .iter()
        .map(|&differs| u32::from(differs))
        .sum()
    }
}

impl fmt::Display for Consonant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
