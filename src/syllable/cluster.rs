//! Onset / coda consonant clusters

use std::fmt;

use crate::phoneme::Consonant;

/// Added when one cluster has a secondary consonant and the other does not
pub const ARITY_PENALTY: u32 = 6;

/// One or two consonants, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConsonantCluster {
    primary: Consonant,
    secondary: Option<Consonant>,
}

impl ConsonantCluster {
    /// Largest value `distance` can return
    pub const MAX_DISTANCE: u32 = {
        let mismatched = ARITY_PENALTY + Consonant::MAX_DISTANCE;
        let paired = 2 * Consonant::MAX_DISTANCE;
        if mismatched > paired {
            mismatched
        } else {
            paired
        }
    };

    pub fn single(primary: Consonant) -> Self {
        Self {
            primary,
            secondary: None,
        }
    }

    pub fn pair(primary: Consonant, secondary: Consonant) -> Self {
        Self {
            primary,
            secondary: Some(secondary),
        }
    }

    pub fn primary(&self) -> Consonant {
        self.primary
    }

    pub fn secondary(&self) -> Option<Consonant> {
        self.secondary
    }

    /// Number of consonants, 1 or 2
    pub fn arity(&self) -> usize {
        1 + usize::from(self.secondary.is_some())
    }

    /// Per-position phoneme distance; a size mismatch costs `ARITY_PENALTY`
    /// on top of the primary comparison.
    pub fn distance(&self, other: &ConsonantCluster) -> u32 {
        let secondary = match (self.secondary, other.secondary) {
            (Some(a), Some(b)) => a.distance(b),
            (None, None) => 0,
            _ => ARITY_PENALTY,
        };
        secondary + self.primary.distance(other.primary)
    }
}

impl fmt::Display for ConsonantCluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.primary)?;
        if let Some(secondary) = self.secondary {
            write!(f, "{}", secondary)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_clusters_compare_primary_only() {
        let p = ConsonantCluster::single(Consonant::P);
        let b = ConsonantCluster::single(Consonant::B);
        assert_eq!(p.distance(&b), 1);
        assert_eq!(p.distance(&p), 0);
    }

    #[test]
    fn test_arity_mismatch_adds_penalty_to_primary() {
        let p = ConsonantCluster::single(Consonant::P);
        let pr = ConsonantCluster::pair(Consonant::P, Consonant::UvularR);
        let br = ConsonantCluster::pair(Consonant::B, Consonant::UvularR);
        assert_eq!(p.distance(&pr), ARITY_PENALTY);
        assert_eq!(pr.distance(&p), ARITY_PENALTY);
        assert_eq!(br.distance(&p), ARITY_PENALTY + 1);
    }

    #[test]
    fn test_pairs_sum_both_positions() {
        let pl = ConsonantCluster::pair(Consonant::P, Consonant::L);
        let bl = ConsonantCluster::pair(Consonant::B, Consonant::L);
        let br = ConsonantCluster::pair(Consonant::B, Consonant::AlveolarTrill);
        assert_eq!(pl.distance(&bl), 1);
        // l and r share every trait
        assert_eq!(pl.distance(&br), 1);
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(
            ConsonantCluster::pair(Consonant::T, Consonant::S),
            ConsonantCluster::pair(Consonant::T, Consonant::S)
        );
        assert_ne!(
            ConsonantCluster::pair(Consonant::T, Consonant::S),
            ConsonantCluster::pair(Consonant::S, Consonant::T)
        );
        assert_ne!(
            ConsonantCluster::single(Consonant::T),
            ConsonantCluster::pair(Consonant::T, Consonant::S)
        );
    }

    #[test]
    fn test_max_distance() {
        assert_eq!(ConsonantCluster::MAX_DISTANCE, 11);
        assert_eq!(ConsonantCluster::single(Consonant::T).arity(), 1);
        assert_eq!(ConsonantCluster::pair(Consonant::T, Consonant::S).arity(), 2);
    }

    #[test]
    fn test_display() {
        assert_eq!(ConsonantCluster::pair(Consonant::P, Consonant::L).to_string(), "pl");
        assert_eq!(ConsonantCluster::single(Consonant::Esh).to_string(), "\u{0283}");
    }
}
