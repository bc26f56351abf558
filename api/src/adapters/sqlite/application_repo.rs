//! SQLite adapter for ApplicationRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, NotSet, Set};

use super::{db_err, SqliteStore};
use crate::domain::entities::{Application, ApplicationId, NewApplication};
use crate::domain::ports::ApplicationRepository;
use crate::entity::applications;
use crate::error::DomainError;

#[async_trait]
impl ApplicationRepository for SqliteStore {
    async fn create(&self, application: &NewApplication) -> Result<Application, DomainError> {
        let model = applications::ActiveModel {
            id: NotSet,
            pet_id: Set(application.pet_id),
            applicant_name: Set(application.applicant_name.clone()),
            email: Set(application.email.clone()),
            phone: Set(application.phone.clone()),
            message: Set(application.message.clone()),
            created_at: Set(Utc::now()),
        };

        let result = model.insert(&self.db).await.map_err(db_err)?;

        Ok(result.into())
    }
}

impl From<applications::Model> for Application {
    fn from(model: applications::Model) -> Self {
        Application {
            id: ApplicationId(model.id),
            pet_id: model.pet_id,
            applicant_name: model.applicant_name,
            email: model.email,
            phone: model.phone,
            message: model.message,
            created_at: model.created_at,
        }
    }
}
