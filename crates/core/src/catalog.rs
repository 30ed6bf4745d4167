//! Enumerated domain constants for the course catalog and student profile.
//!
//! These are fixed domain values, defined statically and shared by the
//! validation rule sets, rather than discovered from live schema metadata.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Delivery mode
// ---------------------------------------------------------------------------

/// Delivery channel of a course. Affects which enrollment rules apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CourseMode {
    Online,
    Offline,
}

impl CourseMode {
    /// Parse a mode string from the database or wire format.
    pub fn from_str_db(s: &str) -> Result<Self, CoreError> {
        match s {
            "ONLINE" => Ok(Self::Online),
            "OFFLINE" => Ok(Self::Offline),
            _ => Err(CoreError::Validation(format!(
                "Invalid mode '{s}'. Must be one of: ONLINE, OFFLINE"
            ))),
        }
    }

    /// Convert to a database-compatible string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Online => "ONLINE",
            Self::Offline => "OFFLINE",
        }
    }
}

// ---------------------------------------------------------------------------
// Course category
// ---------------------------------------------------------------------------

/// Open-elective classification bucket. Every enrollment rule is evaluated
/// per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CourseCategory {
    /// Open Elective -- Technical.
    Oet,
    /// Open Elective -- Humanities and Management.
    Oehm,
}

impl CourseCategory {
    pub fn from_str_db(s: &str) -> Result<Self, CoreError> {
        match s {
            "OET" => Ok(Self::Oet),
            "OEHM" => Ok(Self::Oehm),
            _ => Err(CoreError::Validation(format!(
                "Invalid type '{s}'. Must be one of: OET, OEHM"
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Oet => "OET",
            Self::Oehm => "OEHM",
        }
    }
}

// ---------------------------------------------------------------------------
// Academic branch
// ---------------------------------------------------------------------------

/// Academic branches offered by the department.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Branch {
    It,
    Comps,
    Extc,
}

impl Branch {
    /// Wire/database names of every branch, for validation messages.
    pub const ALL: [&'static str; 3] = ["IT", "COMPS", "EXTC"];

    pub fn from_str_db(s: &str) -> Result<Self, CoreError> {
        match s {
            "IT" => Ok(Self::It),
            "COMPS" => Ok(Self::Comps),
            "EXTC" => Ok(Self::Extc),
            _ => Err(CoreError::Validation(format!(
                "Invalid branch '{s}'. Must be one of: IT, COMPS, EXTC"
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::It => "IT",
            Self::Comps => "COMPS",
            Self::Extc => "EXTC",
        }
    }
}

// ---------------------------------------------------------------------------
// Semester
// ---------------------------------------------------------------------------

/// Semesters eligible for open-elective enrollment. `VII` is the terminal
/// semester: OEHM courses are not offered in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Semester {
    V,
    Vi,
    Vii,
}

impl Semester {
    pub const ALL: [&'static str; 3] = ["V", "VI", "VII"];

    pub fn from_str_db(s: &str) -> Result<Self, CoreError> {
        match s {
            "V" => Ok(Self::V),
            "VI" => Ok(Self::Vi),
            "VII" => Ok(Self::Vii),
            _ => Err(CoreError::Validation(format!(
                "Invalid semester '{s}'. Must be one of: V, VI, VII"
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::V => "V",
            Self::Vi => "VI",
            Self::Vii => "VII",
        }
    }

    /// The terminal semester gets a reduced wizard and relaxed category
    /// pairing rules (OEHM is not offered).
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Vii)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
