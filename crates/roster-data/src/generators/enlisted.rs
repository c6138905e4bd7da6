//! Enlisted soldier generation.

use std::ops::RangeInclusive;

use rand::Rng;

use personnel::{PersonnelKind, PersonnelRecord};

use super::fields::{make_id, pick_random, random_date, random_full_name};
use crate::config::YearBounds;
use crate::errors::GenerationError;
use crate::vocabulary::Vocabulary;

/// Configuration for enlisted generation.
#[derive(Debug, Clone)]
pub struct EnlistedGenConfig {
    /// Range of birth years.
    pub birth_years: RangeInclusive<i32>,
    /// Range of enlistment years.
    pub enlistment_years: RangeInclusive<i32>,
}

impl Default for EnlistedGenConfig {
    fn default() -> Self {
        Self {
            birth_years: YearBounds::ENLISTED_BIRTH,
            enlistment_years: YearBounds::ENLISTED_ENLISTMENT,
        }
    }
}

/// Generates enlisted records with sequential `B-` ids.
pub struct EnlistedGenerator<'v> {
    config: EnlistedGenConfig,
    vocabulary: &'v Vocabulary,
}

impl<'v> EnlistedGenerator<'v> {
    /// Creates a generator with default configuration.
    pub fn new(vocabulary: &'v Vocabulary) -> Self {
        Self::with_config(vocabulary, EnlistedGenConfig::default())
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(vocabulary: &'v Vocabulary, config: EnlistedGenConfig) -> Self {
        Self { config, vocabulary }
    }

    /// Generates the record with the given 1-based sequence number.
    pub fn generate(
        &self,
        sequence: u32,
        rng: &mut impl Rng,
    ) -> Result<PersonnelRecord, GenerationError> {
        let full_name = random_full_name(rng, self.vocabulary)?;
        let rank = pick_random(rng, self.vocabulary.enlisted_ranks)?;
        let unit = pick_random(rng, self.vocabulary.units)?;
        let birth_date = random_date(rng, self.config.birth_years.clone())?;
        let enlistment_date = random_date(rng, self.config.enlistment_years.clone())?;
        let duty = pick_random(rng, self.vocabulary.enlisted_duties)?;

        let kind = PersonnelKind::Enlisted {
            duty: duty.to_string(),
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
