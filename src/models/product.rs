use crate::helpers::catalog::CatalogItem;
use chrono::{DateTime, Utc};
use serde_derive::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub quantity: i32,
    pub image: String, // URL or base64 data URI
    pub seller: String,
    pub owner_id: String, // external user id recorded at creation
    pub archived: bool,
    pub sales: i32,
    pub average_rating: f64,
    pub total_ratings: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CatalogItem for Product {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn seller(&self) -> Option<&str> {
        Some(&self.seller)
    }

    fn price(&self) -> Option<f64> {
        Some(self.price)
    }

    fn quantity(&self) -> Option<i64> {
        Some(self.quantity as i64)
    }

    fn rating(&self) -> Option<f64> {
        Some(self.average_rating)
    }
}
