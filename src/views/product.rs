use crate::models;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Tourist-facing projection; internal ownership fields stay server-side.
#[derive(Debug, Serialize, Default)]
pub struct Public {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub quantity: i32,
    pub image: String,
    pub seller: String,
    pub average_rating: f64,
    pub total_ratings: i32,
}

impl From<models::Product> for Public {
    fn from(product: models::Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            quantity: product.quantity,
            image: product.image,
            seller: product.seller,
            average_rating: product.average_rating,
            total_ratings: product.total_ratings,
        }
    }
}

#[derive(Debug, Serialize, Default)]
pub struct Admin {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub quantity: i32,
    pub image: String,
    pub seller: String,
    pub owner_id: String,
    pub archived: bool,
    pub sales: i32,
    pub average_rating: f64,
    pub total_ratings: i32,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<models::Product> for Admin {
    fn from(product: models::Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            quantity: product.quantity,
            image: product.image,
            seller: product.seller,
            owner_id: product.owner_id,
            archived: product.archived,
            sales: product.sales,
            average_rating: product.average_rating,
            total_ratings: product.total_ratings,
            created_at: Some(product.created_at),
            updated_at: Some(product.updated_at),
        }
    }
}
