//! Fluent builder for complete rosters.

use std::time::Instant;

use rand::Rng;
use tracing::{debug, info};

use personnel::Roster;

use crate::config::RosterConfig;
use crate::errors::GenerationError;
use crate::generators::{EnlistedGenConfig, EnlistedGenerator, OfficerGenConfig, OfficerGenerator};
use crate::vocabulary::Vocabulary;

/// Builder for a roster of enlisted soldiers followed by officers.
///
/// # Example
///
/// ```rust
/// use roster_data::builders::RosterBuilder;
///
/// let mut rng = rand::thread_rng();
/// let roster = RosterBuilder::new().build(&mut rng)?;
///
/// assert_eq!(roster.len(), 400);
/// # Ok::<(), roster_data::errors::GenerationError>(())
/// ```
pub struct RosterBuilder<'v> {
    enlisted_count: u32,
    officer_count: u32,
    vocabulary: &'v Vocabulary,
    enlisted_config: EnlistedGenConfig,
    officer_config: OfficerGenConfig,
}

impl Default for RosterBuilder<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl RosterBuilder<'static> {
    /// Creates a builder for the standard 300 + 100 roster.
    pub fn new() -> Self {
        Self::from_config(&RosterConfig::default())
    }

    /// Creates a builder using the counts of `config`.
    pub fn from_config(config: &RosterConfig) -> Self {
        Self {
            enlisted_count: config.enlisted_count,
            officer_count: config.officer_count,
            vocabulary: &Vocabulary::STANDARD,
            enlisted_config: EnlistedGenConfig::default(),
            officer_config: OfficerGenConfig::default(),
        }
    }
}

impl<'v> RosterBuilder<'v> {
    /// Sets the number of enlisted records.
    pub fn with_enlisted(mut self, count: u32) -> Self {
        self.enlisted_count = count;
        self
    }

    /// Sets the number of officer records.
    pub fn with_officers(mut self, count: u32) -> Self {
        self.officer_count = count;
        self
    }

    /// Replaces the vocabulary tables.
    pub fn with_vocabulary<'w>(self, vocabulary: &'w Vocabulary) -> RosterBuilder<'w> {
        RosterBuilder {
            enlisted_count: self.enlisted_count,
            officer_count: self.officer_count,
            vocabulary,
            enlisted_config: self.enlisted_config,
            officer_config: self.officer_config,
        }
    }

    /// Sets the enlisted generation configuration.
    pub fn with_enlisted_config(mut self, config: EnlistedGenConfig) -> Self {
        self.enlisted_config = config;
        self
    }

    /// Sets the officer generation configuration.
    pub fn with_officer_config(mut self, config: OfficerGenConfig) -> Self {
        self.officer_config = config;
        self
    }

    /// Generates the roster: enlisted `B-001..` first, then officers `S-001..`.
    pub fn build(&self, rng: &mut impl Rng) -> Result<Roster, GenerationError> {
        let start_time = Instant::now();
        let total = self.enlisted_count as usize + self.officer_count as usize;
        let mut roster = Roster::with_capacity(total);

        let enlisted_gen =
            EnlistedGenerator::with_config(self.vocabulary, self.enlisted_config.clone());
        roster.extend(enlisted_gen.generate_batch(self.enlisted_count, rng)?);
        debug!("Generated {} enlisted records", self.enlisted_count);

        let officer_gen = OfficerGenerator::with_config(self.vocabulary, self.officer_config.clone());
        roster.extend(officer_gen.generate_batch(self.officer_count, rng)?);
        debug!("Generated {} officer records", self.officer_count);

        info!(
            enlisted = self.enlisted_count,
            officers = self.officer_count,
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "Roster generated"
        );

        Ok(roster)
    }
}
