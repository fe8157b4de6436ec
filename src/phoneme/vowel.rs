//! IPA vowel catalog and feature distance

use std::collections::HashMap;
use std::fmt;

use lazy_static::lazy_static;

/// Vertical tongue position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Openness {
    Closed,
    NearClosed,
    CloseMid,
    Mid,
    OpenMid,
    NearOpen,
    Open,
}

impl Openness {
    /// closed / near-closed
    pub fn is_high(self) -> bool {
        matches!(self, Openness::Closed | Openness::NearClosed)
    }

    /// open / near-open
    pub fn is_open(self) -> bool {
        matches!(self, Openness::Open | Openness::NearOpen)
    }
}

/// Horizontal tongue position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backness {
    Front,
    NearFront,
    Central,
    NearBack,
    Back,
}

impl Backness {
    /// near-back / back
    pub fn is_back(self) -> bool {
        matches!(self, Backness::NearBack | Backness::Back)
    }
}

/// Lip shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    Rounded,
    Unrounded,
    Unspecified,
}

impl Rounding {
    pub fn is_rounded(self) -> bool {
        matches!(self, Rounding::Rounded)
    }
}

/// Vowel phoneme from the fixed IPA catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vowel {
    CloseFrontUnrounded,
    CloseMidFrontUnrounded,
    OpenMidFrontUnrounded,
    OpenFrontUnrounded,
    OpenBackUnrounded,
    OpenMidBackRounded,
    CloseMidBackRounded,
    CloseBackRounded,
    CloseFrontRounded,
    CloseMidFrontRounded,
    OpenMidFrontRounded,
    OpenFrontRounded,
    OpenBackRounded,
    OpenMidBackUnrounded,
    CloseMidBackUnrounded,
    CloseBackUnrounded,
    CloseCentralUnrounded,
    CloseCentralRounded,
    NearCloseNearFrontUnrounded,
    NearCloseNearFrontRounded,
    NearCloseNearBackRounded,
    MidCentral,
    CloseMidCentralRounded,
    NearOpenCentral,
    NearOpenFrontUnrounded,
    OpenMidCentralUnrounded,
    OpenMidCentralRounded,
    CloseMidCentralUnrounded,
    OpenCentral,
}

lazy_static! {
    static ref BY_SYMBOL: HashMap<char, Vowel> =
        Vowel::ALL.iter().map(|v| (v.symbol(), *v)).collect();
}

impl Vowel {
    /// Catalog in declaration order
    pub const ALL: [Vowel; 29] = [
        Vowel::CloseFrontUnrounded,
        Vowel::CloseMidFrontUnrounded,
        Vowel::OpenMidFrontUnrounded,
        Vowel::OpenFrontUnrounded,
        Vowel::OpenBackUnrounded,
        Vowel::OpenMidBackRounded,
        Vowel::CloseMidBackRounded,
        Vowel::CloseBackRounded,
        Vowel::CloseFrontRounded,
        Vowel::CloseMidFrontRounded,
        Vowel::OpenMidFrontRounded,
        Vowel::OpenFrontRounded,
        Vowel::OpenBackRounded,
        Vowel::OpenMidBackUnrounded,
        Vowel::CloseMidBackUnrounded,
        Vowel::CloseBackUnrounded,
        Vowel::CloseCentralUnrounded,
        Vowel::CloseCentralRounded,
        Vowel::NearCloseNearFrontUnrounded,
        Vowel::NearCloseNearFrontRounded,
        Vowel::NearCloseNearBackRounded,
        Vowel::MidCentral,
        Vowel::CloseMidCentralRounded,
        Vowel::NearOpenCentral,
        Vowel::NearOpenFrontUnrounded,
        Vowel::OpenMidCentralUnrounded,
        Vowel::OpenMidCentralRounded,
        Vowel::CloseMidCentralUnrounded,
        Vowel::OpenCentral,
    ];

    /// Largest value `distance` can return (four binary traits)
    pub const MAX_DISTANCE: u32 = 4;

    /// Look up a vowel by its IPA symbol
    pub fn from_symbol(c: char) -> Option<Vowel> {
        BY_SYMBOL.get(&c).copied()
    }

    /// IPA symbol
    pub fn symbol(self) -> char {
        match self {
            Vowel::CloseFrontUnrounded => 'i',
            Vowel::CloseMidFrontUnrounded => 'e',
            Vowel::OpenMidFrontUnrounded => '\u{025B}',  // ɛ
            Vowel::OpenFrontUnrounded => 'a',
            Vowel::OpenBackUnrounded => '\u{0251}',      // ɑ
            Vowel::OpenMidBackRounded => '\u{0254}',     // ɔ
            Vowel::CloseMidBackRounded => 'o',
            Vowel::CloseBackRounded => 'u',
            Vowel::CloseFrontRounded => 'y',
            Vowel::CloseMidFrontRounded => '\u{00F8}',   // ø
            Vowel::OpenMidFrontRounded => '\u{0153}',    // œ
            Vowel::OpenFrontRounded => '\u{0276}',       // ɶ
            Vowel::OpenBackRounded => '\u{0252}',        // ɒ
            Vowel::OpenMidBackUnrounded => '\u{028C}',   // ʌ
            Vowel::CloseMidBackUnrounded => '\u{0264}',  // ɤ
            Vowel::CloseBackUnrounded => '\u{026F}',     // ɯ
            Vowel::CloseCentralUnrounded => '\u{0268}',  // ɨ
            Vowel::CloseCentralRounded => '\u{0289}',    // ʉ
            Vowel::NearCloseNearFrontUnrounded => '\u{026A}', // ɪ
            Vowel::NearCloseNearFrontRounded => '\u{028F}',   // ʏ
            Vowel::NearCloseNearBackRounded => '\u{028A}',    // ʊ
            Vowel::MidCentral => '\u{0259}',             // ə
            Vowel::CloseMidCentralRounded => '\u{0275}', // ɵ
            Vowel::NearOpenCentral => '\u{0250}',        // ɐ
            Vowel::NearOpenFrontUnrounded => '\u{00E6}', // æ
            Vowel::OpenMidCentralUnrounded => '\u{025C}', // ɜ
            Vowel::OpenMidCentralRounded => '\u{025E}',  // ɞ
            Vowel::CloseMidCentralUnrounded => '\u{0258}', // ɘ
            Vowel::OpenCentral => '\u{00E4}',            // ä
        }
    }

    /// (openness, backness, rounding)
    fn features(self) -> (Openness, Backness, Rounding) {
        use Backness::*;
        use Openness::*;
        use Rounding::*;

        match self {
            Vowel::CloseFrontUnrounded => (Closed, Front, Unrounded),
            Vowel::CloseMidFrontUnrounded => (CloseMid, Front, Unrounded),
            Vowel::OpenMidFrontUnrounded => (OpenMid, Front, Unrounded),
            Vowel::OpenFrontUnrounded => (Open, Front, Unrounded),
            Vowel::OpenBackUnrounded => (Open, Back, Unrounded),
            Vowel::OpenMidBackRounded => (OpenMid, Back, Rounded),
            Vowel::CloseMidBackRounded => (CloseMid, Back, Rounded),
            Vowel::CloseBackRounded => (Closed, Back, Rounded),
            Vowel::CloseFrontRounded => (Closed, Front, Rounded),
            Vowel::CloseMidFrontRounded => (CloseMid, Front, Rounded),
            Vowel::OpenMidFrontRounded => (OpenMid, Front, Rounded),
            Vowel::OpenFrontRounded => (Open, Front, Rounded),
            Vowel::OpenBackRounded => (Open, Back, Rounded),
            Vowel::OpenMidBackUnrounded => (OpenMid, Back, Unrounded),
            Vowel::CloseMidBackUnrounded => (CloseMid, Back, Unrounded),
            Vowel::CloseBackUnrounded => (Closed, Back, Unrounded),
            Vowel::CloseCentralUnrounded => (Closed, Central, Unrounded),
            Vowel::CloseCentralRounded => (Closed, Central, Rounded),
            Vowel::NearCloseNearFrontUnrounded => (NearClosed, NearFront, Unrounded),
            Vowel::NearCloseNearFrontRounded => (NearClosed, NearFront, Rounded),
            Vowel::NearCloseNearBackRounded => (NearClosed, NearBack, Rounded),
            Vowel::MidCentral => (Mid, Central, Unspecified),
            Vowel::CloseMidCentralRounded => (CloseMid, Central, Rounded),
            Vowel::NearOpenCentral => (NearOpen, Central, Unspecified),
            Vowel::NearOpenFrontUnrounded => (NearOpen, Front, Unrounded),
            Vowel::OpenMidCentralUnrounded => (OpenMid, Central, Unrounded),
            Vowel::OpenMidCentralRounded => (OpenMid, Central, Rounded),
            Vowel::CloseMidCentralUnrounded => (CloseMid, Central, Unrounded),
            Vowel::OpenCentral => (Open, Central, Unspecified),
        }
    }

    pub fn openness(self) -> Openness {
        self.features().0
    }

    pub fn backness(self) -> Backness {
        self.features().1
    }

    pub fn rounding(self) -> Rounding {
        self.features().2
    }

    pub fn is_back(self) -> bool {
        self.backness().is_back()
    }

    pub fn is_high(self) -> bool {
        self.openness().is_high()
    }

    pub fn is_open(self) -> bool {
        self.openness().is_open()
    }

    pub fn is_rounded(self) -> bool {
        self.rounding().is_rounded()
    }

    pub fn backness_distance(self, other: Vowel) -> u32 {
        u32::from(self.is_back() != other.is_back())
    }

    pub fn height_distance(self, other: Vowel) -> u32 {
        u32::from(self.is_high() != other.is_high())
    }

    pub fn rounding_distance(self, other: Vowel) -> u32 {
        u32::from(self.is_rounded() != other.is_rounded())
    }

    pub fn openness_distance(self, other: Vowel) -> u32 {
        u32::from(self.is_open() != other.is_open())
    }

    /// Number of disagreeing traits (0..=4)
    pub fn distance(self, other: Vowel) -> u32 {
        self.backness_distance(other)
            + self.height_distance(other)
            + self.rounding_distance(other)
            + self.openness_distance(other)
    }
}

impl fmt::Display for Vowel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
