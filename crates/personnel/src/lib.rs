//! Personnel record model.
//!
//! A roster holds two kinds of service members, enlisted soldiers and
//! officers. Both share the same six base fields and differ by one extra
//! field and the tag written at the end of their CSV line.

pub mod models;

pub use models::{
    CSV_HEADER, PersonnelKind, PersonnelRecord, Roster, format_date, serialize_to_line,
};
