//! Domain logic for the open-elective enrollment service.
//!
//! Everything in this crate is pure: enumerated domain constants, the
//! course-selection rule engine, the onboarding wizard step machine, and
//! academic-year derivation. No I/O, no database types.

pub mod academic_year;
pub mod catalog;
pub mod enrollment;
pub mod error;
pub mod types;
pub mod wizard;
