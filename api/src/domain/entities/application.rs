//! Adoption application entity
//!
//! The only collection that grows at runtime. Applications are accepted
//! as submitted: every field may be missing and nothing is validated here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier for an application, assigned sequentially by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApplicationId(pub i64);

impl From<i64> for ApplicationId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored adoption application
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Application {
    pub id: ApplicationId,
    /// Loose reference; the pet is not required to exist
    pub pet_id: Option<i64>,
    pub applicant_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Data needed to record a new application
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewApplication {
    pub pet_id: Option<i64>,
    pub applicant_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
}

impl NewApplication {
    pub fn into_application(self, id: ApplicationId, created_at: DateTime<Utc>) -> Application {
        Application {
            id,
            pet_id: self.pet_id,
            applicant_name: self.applicant_name,
            email: self.email,
            phone: self.phone,
            message: self.message,
            created_at,
        }
    }
}
