//! Catalog content entities
//!
//! Flat display records served alongside pets: adoption stories, care tips,
//! charity shop products, adoption guides and partner organisations.
//! Ids are unique per collection and carry no relations.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A successful adoption story
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Story {
    pub id: i64,
    pub title: String,
    pub content: String,
    /// Display label only, not a reference to a pet row
    pub pet_name: String,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewStory {
    pub title: String,
    pub content: String,
    pub pet_name: String,
    pub image_url: String,
}

impl NewStory {
    pub fn into_story(self, id: i64, created_at: DateTime<Utc>) -> Story {
        Story {
            id,
            title: self.title,
            content: self.content,
            pet_name: self.pet_name,
            image_url: self.image_url,
            created_at,
        }
    }
}

/// A pet care tip
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tip {
    pub id: i64,
    pub category: String,
    pub title: String,
    pub content: String,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewTip {
    pub category: String,
    pub title: String,
    pub content: String,
    pub image_url: String,
}

impl NewTip {
    pub fn into_tip(self, id: i64, created_at: DateTime<Utc>) -> Tip {
        Tip {
            id,
            category: self.category,
            title: self.title,
            content: self.content,
            image_url: self.image_url,
            created_at,
        }
    }
}

/// A charity shop product
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    /// Price in yuan
    pub price: f64,
    pub description: String,
    pub image_url: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub description: String,
    pub image_url: String,
    pub category: String,
}

impl NewProduct {
    pub fn into_product(self, id: i64, created_at: DateTime<Utc>) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
            description: self.description,
            image_url: self.image_url,
            category: self.category,
            created_at,
        }
    }
}

/// One section of the adoption guide, shown in `order_num` order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Guide {
    pub id: i64,
    pub title: String,
    pub content: String,
    /// Front-end icon name
    pub icon: String,
    pub order_num: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGuide {
    pub title: String,
    pub content: String,
    pub icon: String,
    pub order_num: i32,
}

impl NewGuide {
    pub fn into_guide(self, id: i64) -> Guide {
        Guide {
            id,
            title: self.title,
            content: self.content,
            icon: self.icon,
            order_num: self.order_num,
        }
    }
}

/// A partner organisation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Partner {
    pub id: i64,
    pub name: String,
    pub logo_url: String,
    pub description: String,
    pub website: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPartner {
    pub name: String,
    pub logo_url: String,
    pub description: String,
    pub website: String,
}

impl NewPartner {
    pub fn into_partner(self, id: i64) -> Partner {
        Partner {
            id,
            name: self.name,
            logo_url: self.logo_url,
            description: self.description,
            website: self.website,
        }
    }
}
