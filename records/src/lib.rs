//! Shared data-transfer types for the client/backend boundary.
//!
//! This crate owns the JSON shapes exchanged with the external artifact API.
//! The backend is the source of truth for every record here; the client only
//! holds transient display-scoped copies, so these types stay plain serde
//! structs with no behavior beyond wire-string parsing.

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when a wire string does not name a known enum variant.
#[derive(Debug, thiserror::Error)]
#[error("unknown {kind} label: {value}")]
pub struct ParseLabelError {
    /// Which enumeration was being parsed (e.g. `"status"`).
    pub kind: &'static str,
    /// The offending input.
    pub value: String,
}

/// Lifecycle status of an artifact, assigned and transitioned server-side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ArtifactStatus {
    #[default]
    Draft,
    Submitted,
    Approved,
    Published,
    ChangesRequested,
}

impl ArtifactStatus {
    /// Wire label for this status, as the backend serializes it.
    #[must_use]
    pub fn as_label(self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Submitted => "SUBMITTED",
            Self::Approved => "APPROVED",
            Self::Published => "PUBLISHED",
            Self::ChangesRequested => "CHANGES_REQUESTED",
        }
    }

    /// All statuses, in the order form dropdowns present them.
    #[must_use]
    pub fn all() -> [Self; 5] {
        [
            Self::Draft,
            Self::Submitted,
            Self::Approved,
            Self::Published,
            Self::ChangesRequested,
        ]
    }
}

impl fmt::Display for ArtifactStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}

impl FromStr for ArtifactStatus {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DRAFT" => Ok(Self::Draft),
            "SUBMITTED" => Ok(Self::Submitted),
            "APPROVED" => Ok(Self::Approved),
            "PUBLISHED" => Ok(Self::Published),
            "CHANGES_REQUESTED" => Ok(Self::ChangesRequested),
            other => Err(ParseLabelError {
                kind: "status",
                value: other.to_owned(),
            }),
        }
    }
}

/// Geographic region attached to a user account at registration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Region {
    Africa,
    Asia,
    Australia,
    #[default]
    Europe,
    NorthAmerica,
    SouthAmerica,
}

impl Region {
    /// Wire label for this region.
    #[must_use]
    pub fn as_label(self) -> &'static str {
        match self {
            Self::Africa => "AFRICA",
            Self::Asia => "ASIA",
            Self::Australia => "AUSTRALIA",
            Self::Europe => "EUROPE",
            Self::NorthAmerica => "NORTH_AMERICA",
            Self::SouthAmerica => "SOUTH_AMERICA",
        }
    }

    /// All regions, in the order form dropdowns present them.
    #[must_use]
    pub fn all() -> [Self; 6] {
        [
            Self::Africa,
            Self::Asia,
            Self::Australia,
            Self::Europe,
            Self::NorthAmerica,
            Self::SouthAmerica,
        ]
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}

impl FromStr for Region {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AFRICA" => Ok(Self::Africa),
            "ASIA" => Ok(Self::Asia),
            "AUSTRALIA" => Ok(Self::Australia),
            "EUROPE" => Ok(Self::Europe),
            "NORTH_AMERICA" => Ok(Self::NorthAmerica),
            "SOUTH_AMERICA" => Ok(Self::SouthAmerica),
            other => Err(ParseLabelError {
                kind: "region",
                value: other.to_owned(),
            }),
        }
    }
}

/// An artifact record as the backend returns it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Artifact {
    /// Server-assigned unique identifier.
    pub id: String,
    pub title: String,
    pub summary: String,
    pub content: String,
    #[serde(default)]
    pub status: ArtifactStatus,
    /// Absolute URL of the attached file, when one was uploaded.
    #[serde(default)]
    pub file_url: Option<String>,
    /// Owner user id; opaque display data on the client.
    #[serde(default)]
    pub created_by: Option<String>,
    /// Creation timestamp string; opaque display data on the client.
    #[serde(default)]
    pub created_on: Option<String>,
}

/// Editable artifact fields collected by the create/update forms.
///
/// The optional file attachment travels alongside this as multipart form
/// data, not inside it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ArtifactDraft {
    pub title: String,
    pub summary: String,
    pub content: String,
    pub status: ArtifactStatus,
}

/// The authenticated user's identity, from `GET /api/profile`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub region: Region,
}

/// Bearer credentials issued by `POST /api/login`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
}

/// Registration payload for `POST /api/register`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegisterPayload {
    pub name: String,
    pub email: String,
    pub password: String,
    pub region: Region,
}

/// Error envelope some backend routes return inside an HTTP 200 body.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
    #[serde(default)]
    pub status_code: Option<u16>,
}
