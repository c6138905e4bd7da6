//! Random field synthesis shared by all record generators.

use std::ops::RangeInclusive;

use rand::Rng;
use rand::seq::SliceRandom;
use time::{Date, Month};

use crate::errors::GenerationError;
use crate::vocabulary::Vocabulary;

/// Highest generated day of month. Valid in every month, so no calendar checks.
pub const MAX_DAY: u8 = 28;

/// Picks one value uniformly at random.
pub fn pick_random<'a>(
    rng: &mut impl Rng,
    values: &[&'a str],
) -> Result<&'a str, GenerationError> {
    values
        .choose(rng)
        .copied()
        .ok_or(GenerationError::EmptyVocabulary)
}

/// Generates a date with day in `1..=28`, any month, and a year in `years`.
pub fn random_date(
    rng: &mut impl Rng,
    years: RangeInclusive<i32>,
) -> Result<Date, GenerationError> {
    if years.is_empty() {
        return Err(GenerationError::InvalidYearRange {
            start: *years.start(),
            end: *years.end(),
        });
    }

    let day = rng.gen_range(1..=MAX_DAY);
    let month = Month::try_from(rng.gen_range(1..=12u8))?;
    let year = rng.gen_range(years);

    Ok(Date::from_calendar_date(year, month, day)?)
}

/// Builds "Surname MiddleName GivenName" from three independent picks.
pub fn random_full_name(
    rng: &mut impl Rng,
    vocabulary: &Vocabulary,
) -> Result<String, GenerationError> {
    let surname = pick_random(rng, vocabulary.surnames)?;
    let middle = pick_random(rng, vocabulary.middle_names)?;
    let given = pick_random(rng, vocabulary.given_names)?;

    Ok(format!("{surname} {middle} {given}"))
}

/// Formats a sequential id as `<prefix>-<NNN>`.
///
/// Sequences of 1000 and above are printed at their natural width.
pub fn make_id(sequence: u32, prefix: char) -> String {
    format!("{prefix}-{sequence:03}")
}
