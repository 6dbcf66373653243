//! Record types shared by the request and tenant stores
//!
//! Wire names follow the backend exactly: camelCase for maintenance
//! requests, lowercase one-word fields for tenants.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle state of a maintenance request.
///
/// The only transition is `Pending` to `Completed`; a completed request
/// never becomes pending again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Awaiting maintenance work
    Pending,

    /// Work finished
    Completed,
}

/// Urgency levels recognized by the projection ordering.
///
/// Records carry urgency as free text; this enum defines the total order
/// used when sorting. Strings outside the recognized set rank after every
/// known level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    /// Needs attention immediately
    Urgent,

    /// Default level for new requests
    Moderate,

    /// Can wait
    Low,
}

impl Urgency {
    /// Parse a wire value; `"medium"` is accepted as an alias for moderate
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "urgent" => Some(Urgency::Urgent),
            "moderate" | "medium" => Some(Urgency::Moderate),
            "low" => Some(Urgency::Low),
            _ => None,
        }
    }

    /// Convert the level to its canonical string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Urgent => "urgent",
            Urgency::Moderate => "moderate",
            Urgency::Low => "low",
        }
    }

    /// Ascending sort rank for a wire value; unrecognized strings sort last
    pub fn rank_of(value: &str) -> u8 {
        match Self::parse(value) {
            Some(Urgency::Urgent) => 0,
            Some(Urgency::Moderate) => 1,
            Some(Urgency::Low) => 2,
            None => 3,
        }
    }
}

/// Canonical area labels offered by the request form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Area {
    Kitchen,
    Bathroom,
    LivingRoom,
    Bedroom,
}

impl Area {
    /// Convert the area to its display label
    pub fn as_str(&self) -> &'static str {
        match self {
            Area::Kitchen => "Kitchen",
            Area::Bathroom => "Bathroom",
            Area::LivingRoom => "Living Room",
            Area::Bedroom => "Bedroom",
        }
    }
}

/// A maintenance request record as stored by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRequest {
    /// Opaque identifier, unique within the collection
    pub id: String,

    /// Free-form unit label; not validated against a unit registry
    pub apartment_number: String,

    /// Area of the apartment, stored as free text
    pub area: String,

    /// Description of the issue
    pub description: String,

    /// Creation timestamp; never mutated afterwards
    pub date_time: DateTime<Utc>,

    /// Transient object reference to an uploaded photo. Only meaningful for
    /// the lifetime of the creating session; it is not a stable URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,

    /// Lifecycle state
    pub status: Status,

    /// Urgency as free text; see [`Urgency`] for the ordering
    pub urgency: String,

    /// Staff comment persisted by the backend
    #[serde(default)]
    pub comment: Option<String>,
}

/// A tenant record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tenant {
    /// Opaque identifier, unique within the collection
    pub tenant_id: String,
    pub name: String,
    pub phone: String,
    pub email: String,

    /// Check-in date string; opaque to this client
    #[serde(rename = "checkin")]
    pub check_in: String,

    /// Check-out date string; opaque to this client
    #[serde(rename = "checkout")]
    pub check_out: String,

    /// The only field mutable after creation, via the move operation
    #[serde(rename = "apartmentnumber")]
    pub apartment_number: String,
}

/// Form input for a new maintenance request.
///
/// `area` and `description` are required; the photo is an optional
/// session-local object reference.
#[derive(Debug, Clone, Default)]
pub struct NewRequest {
    pub apartment_number: String,
    pub area: String,
    pub description: String,
    pub photo: Option<String>,
}

/// Form input for a new tenant record. All fields are required.
#[derive(Debug, Clone, Default)]
pub struct NewTenant {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub check_in: String,
    pub check_out: String,
    pub apartment_number: String,
}
