use chrono::{DateTime, Utc};
use serde_derive::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Purchase {
    pub id: i32,
    pub user_id: String,
    pub product_id: i32,
    pub quantity: i32,
    pub unit_price: f64, // price at the time of purchase
    pub purchased_at: DateTime<Utc>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct CartItem {
    pub id: i32,
    pub user_id: String,
    pub product_id: i32,
    pub quantity: i32,
    pub added_at: DateTime<Utc>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct WishlistEntry {
    pub id: i32,
    pub user_id: String,
    pub product_id: i32,
    pub added_at: DateTime<Utc>,
}
