//! Record generators.
//!
//! - [`fields`]: vocabulary picks, dates, names and ids
//! - [`EnlistedGenerator`]: enlisted soldiers (`B-` ids, tag `BinhSi`)
//! - [`OfficerGenerator`]: officers (`S-` ids, tag `SiQuan`)

pub mod enlisted;
pub mod fields;
pub mod officer;

pub use enlisted::{EnlistedGenConfig, EnlistedGenerator};
pub use fields::{make_id, pick_random, random_date, random_full_name};
pub use officer::{OfficerGenConfig, OfficerGenerator};
