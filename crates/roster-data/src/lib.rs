//! Synthetic personnel roster generation.
//!
//! This crate builds a roster of randomized enlisted and officer records
//! from fixed vocabularies and writes it to a comma-separated text file.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use roster_data::prelude::*;
//!
//! let mut rng = rand::thread_rng();
//! let roster = RosterBuilder::new().build(&mut rng)?;
//! export_roster(&roster, DEFAULT_OUTPUT_PATH)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod builders;
pub mod config;
pub mod errors;
pub mod export;
pub mod generators;
pub mod vocabulary;

// Re-export the record model
pub use personnel::{PersonnelKind, PersonnelRecord, Roster, serialize_to_line};

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::builders::RosterBuilder;
    pub use crate::config::{DEFAULT_OUTPUT_PATH, RosterConfig, YearBounds};
    pub use crate::errors::{ExportError, GenerationError};
    pub use crate::export::{export_roster, write_roster};
    pub use crate::generators::{
        EnlistedGenConfig, EnlistedGenerator, OfficerGenConfig, OfficerGenerator, make_id,
        pick_random, random_date,
    };
    pub use crate::vocabulary::Vocabulary;
    pub use crate::{PersonnelKind, PersonnelRecord, Roster, serialize_to_line};
}
