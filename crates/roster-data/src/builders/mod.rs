//! Fluent builder APIs for rosters.
//!
//! The [`RosterBuilder`] assembles the enlisted and officer blocks into a
//! single ordered [`personnel::Roster`].

mod roster;

pub use roster::RosterBuilder;
