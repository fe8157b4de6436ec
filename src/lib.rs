pub mod cli;
pub mod config;
pub mod corpus;
pub mod output;
pub mod parse;
pub mod phoneme;
pub mod syllable;

pub use config::ReducerConfig;
pub use corpus::{Corpus, ReductionOutcome, ReductionReport};
pub use parse::{parse_syllable, parse_text, ParseError, ParsedText};
pub use syllable::{ConsonantCluster, Syllable};
