//! Pet domain entity
//!
//! An adoptable animal in the shelter catalog. Pets are created only by
//! seeding and are never updated through the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier for a pet, assigned by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PetId(pub i64);

impl From<i64> for PetId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for PetId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(PetId)
            .map_err(|_| format!("Invalid pet id: {}", s))
    }
}

/// Adoption status of a pet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PetStatus {
    #[default]
    Available,
    Adopted,
}

impl std::fmt::Display for PetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PetStatus::Available => write!(f, "available"),
            PetStatus::Adopted => write!(f, "adopted"),
        }
    }
}

impl std::str::FromStr for PetStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "available" => Ok(PetStatus::Available),
            "adopted" => Ok(PetStatus::Adopted),
            _ => Err(format!("Unknown pet status: {}", s)),
        }
    }
}

/// A pet as served by the catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pet {
    pub id: PetId,
    pub name: String,
    /// Species label ("狗", "猫"); the front end filters on it
    #[serde(rename = "type")]
    pub species: String,
    pub breed: String,
    /// Free text, e.g. "6个月" or "2.5岁"
    pub age: String,
    pub gender: String,
    pub description: String,
    pub image_url: String,
    pub status: PetStatus,
    pub created_at: DateTime<Utc>,
}

/// Seed data for a pet; the store assigns id and timestamp
#[derive(Debug, Clone, PartialEq)]
pub struct NewPet {
    pub name: String,
    pub species: String,
    pub breed: String,
    pub age: String,
    pub gender: String,
    pub description: String,
    pub image_url: String,
}

impl NewPet {
    /// Materialize the seed record with a store-assigned id and timestamp
    pub fn into_pet(self, id: PetId, created_at: DateTime<Utc>) -> Pet {
        Pet {
            id,
            name: self.name,
            species: self.species,
            breed: self.breed,
            age: self.age,
            gender: self.gender,
            description: self.description,
            image_url: self.image_url,
            status: PetStatus::Available,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pet_id_from_str() {
        assert_eq!("42".parse::<PetId>().unwrap(), PetId(42));
        assert_eq!(" 7 ".parse::<PetId>().unwrap(), PetId(7));
        assert!("abc".parse::<PetId>().is_err());
        assert!("".parse::<PetId>().is_err());
    }

    #[test]
    fn pet_status_from_str() {
        assert_eq!(
            "available".parse::<PetStatus>().unwrap(),
            PetStatus::Available
        );
        assert_eq!("Adopted".parse::<PetStatus>().unwrap(), PetStatus::Adopted);
        assert!("lost".parse::<PetStatus>().is_err());
    }

    #[test]
    fn pet_serializes_species_as_type() {
        let pet = NewPet {
            name: "豆豆".to_string(),
            species: "狗".to_string(),
            breed: "金毛".to_string(),
            age: "2岁".to_string(),
            gender: "公".to_string(),
            description: "性格温顺".to_string(),
            image_url: "https://images.unsplash.com/x".to_string(),
        }
        .into_pet(PetId(1), Utc::now());

        let json = serde_json::to_value(&pet).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["type"], "狗");
        assert_eq!(json["status"], "available");
        assert!(json.get("species").is_none());
    }
}
