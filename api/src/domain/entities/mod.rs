//! Domain entities
//!
//! Pure domain models for the shelter catalog and adoption applications.
//! These are separate from the SeaORM table models in the `entity` module.

pub mod application;
pub mod catalog;
pub mod pet;

pub use application::{Application, ApplicationId, NewApplication};
pub use catalog::{
    Guide, NewGuide, NewPartner, NewProduct, NewStory, NewTip, Partner, Product, Story, Tip,
};
pub use pet::{NewPet, Pet, PetId, PetStatus};
