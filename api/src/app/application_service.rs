//! Application service
//!
//! Records adoption applications. No validation, deduplication or
//! follow-up workflow: insert and acknowledge.

use std::sync::Arc;

use crate::domain::entities::{Application, NewApplication};
use crate::domain::ports::ApplicationRepository;
use crate::error::AppError;

/// Service for submitting adoption applications
pub struct ApplicationService<AR>
where
    AR: ApplicationRepository + ?Sized,
{
    applications: Arc<AR>,
}

impl<AR> ApplicationService<AR>
where
    AR: ApplicationRepository + ?Sized,
{
    pub fn new(applications: Arc<AR>) -> Self {
        Self { applications }
    }

    /// Store the application as submitted and return it with its assigned id
    pub async fn submit(&self, application: NewApplication) -> Result<Application, AppError> {
        let application = self.applications.create(&application).await?;

        tracing::info!(
            application_id = %application.id,
            pet_id = ?application.pet_id,
            "Adoption application received"
        );

        Ok(application)
    }
}
