//! Officer generation.

use std::ops::RangeInclusive;

use rand::Rng;

use personnel::{PersonnelKind, PersonnelRecord};

use super::fields::{make_id, pick_random, random_date, random_full_name};
use crate::config::YearBounds;
use crate::errors::GenerationError;
use crate::vocabulary::Vocabulary;

/// Configuration for officer generation.
#[derive(Debug, Clone)]
pub struct OfficerGenConfig {
    /// Range of birth years.
    pub birth_years: RangeInclusive<i32>,
    /// Range of commission years, written in the enlistment column.
    pub commission_years: RangeInclusive<i32>,
}

impl Default for OfficerGenConfig {
    fn default() -> Self {
        Self {
            birth_years: YearBounds::OFFICER_BIRTH,
            commission_years: YearBounds::OFFICER_COMMISSION,
        }
    }
}

/// Generates officer records with sequential `S-` ids.
pub struct OfficerGenerator<'v> {
    config: OfficerGenConfig,
    vocabulary: &'v Vocabulary,
}

impl<'v> OfficerGenerator<'v> {
    pub fn new(vocabulary: &'v Vocabulary) -> Self {
        Self::with_config(vocabulary, OfficerGenConfig::default())
    }

    pub fn with_config(vocabulary: &'v Vocabulary, config: OfficerGenConfig) -> Self {
        Self { config, vocabulary }
    }

    /// Generates the record with the given 1-based sequence number.
    pub fn generate(
        &self,
        sequence: u32,
        rng: &mut impl Rng,
    ) -> Result<PersonnelRecord, GenerationError> {
        let full_name = random_full_name(rng, self.vocabulary)?;
        let rank = pick_random(rng, self.vocabulary.officer_ranks)?;
        let unit = pick_random(rng, self.vocabulary.units)?;
        let birth_date = random_date(rng, self.config.birth_years.clone())?;
        let enlistment_date = random_date(rng, self.config.commission_years.clone())?;
        let role = pick_random(rng, self.vocabulary.officer_roles)?;

        let kind = PersonnelKind::Officer {
            role: role.to_string(),
        };

        Ok(PersonnelRecord {
            id: make_id(sequence, kind.id_prefix()),
            full_name,
            rank: rank.to_string(),
            unit: unit.to_string(),
            birth_date,
            enlistment_date,
            kind,
        })
    }

    /// Generates records numbered `1..=count`, in order.
    pub fn generate_batch(
        &self,
        count: u32,
        rng: &mut impl Rng,
    ) -> Result<Vec<PersonnelRecord>, GenerationError> {
        (1..=count).map(|i| self.generate(i, rng)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_generate_officer() {
        let generator = OfficerGenerator::new(&Vocabulary::STANDARD);
        let mut rng = StdRng::seed_from_u64(21);
        let record = generator.generate(100, &mut rng).unwrap();

        assert_eq!(record.id, "S-100");
        assert!(
            Vocabulary::STANDARD
                .officer_ranks
                .iter()
                .any(|v| *v == record.rank)
        );
        assert!((1975..=1990).contains(&record.birth_date.year()));
        assert!((2000..=2015).contains(&record.enlistment_date.year()));
        assert_eq!(record.kind.tag(), "SiQuan");
        assert!(
            Vocabulary::STANDARD
                .officer_roles
                .iter()
                .any(|v| *v == record.kind.detail())
        );
    }

    #[test]
    fn test_id_prefix_follows_kind() {
        let generator = OfficerGenerator::new(&Vocabulary::STANDARD);
        let mut rng = StdRng::seed_from_u64(4);

        for record in generator.generate_batch(5, &mut rng).unwrap() {
            assert!(record.id.starts_with(record.kind.id_prefix()));
            assert_eq!(record.id.chars().next(), Some('S'));
        }
    }

    #[test]
    fn test_empty_role_table() {
        let vocabulary = Vocabulary {
            officer_roles: &[],
            ..Vocabulary::STANDARD
        };
        let generator = OfficerGenerator::new(&vocabulary);
        let mut rng = StdRng::seed_from_u64(21);

        assert!(matches!(
            generator.generate(1, &mut rng),
            Err(GenerationError::EmptyVocabulary)
        ));
    }
}
