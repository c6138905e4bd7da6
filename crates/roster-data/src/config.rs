//! Configuration for roster generation.
//!
//! All values are fixed at compile time; the binary always runs with
//! [`RosterConfig::default`].

use std::ops::RangeInclusive;
use std::path::PathBuf;

/// File written by the roster binary, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "danhsach_quannhan.txt";

/// Number of enlisted records in a full roster.
pub const ENLISTED_COUNT: u32 = 300;

/// Number of officer records in a full roster.
pub const OFFICER_COUNT: u32 = 100;

/// Year bounds (inclusive) for generated dates.
pub struct YearBounds;

impl YearBounds {
    pub const ENLISTED_BIRTH: RangeInclusive<i32> = 1985..=2003;
    pub const ENLISTED_ENLISTMENT: RangeInclusive<i32> = 2010..=2023;
    pub const OFFICER_BIRTH: RangeInclusive<i32> = 1975..=1990;
    pub const OFFICER_COMMISSION: RangeInclusive<i32> = 2000..=2015;
}

/// Configuration for a generation run.
#[derive(Debug, Clone)]
pub struct RosterConfig {
    /// Number of enlisted records to generate.
    pub enlisted_count: u32,

    /// Number of officer records to generate.
    pub officer_count: u32,

    /// Destination of the CSV export.
    pub output_path: PathBuf,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            enlisted_count: ENLISTED_COUNT,
            officer_count: OFFICER_COUNT,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}
