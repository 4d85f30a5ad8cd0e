use crate::helpers::catalog::CatalogItem;
use chrono::{DateTime, Utc};
use serde_derive::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Museum {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub pictures: Value, // array of picture URLs
    pub location: String,
    pub opening_hours: String,
    pub ticket_price_foreigner: f64,
    pub ticket_price_native: f64,
    pub ticket_price_student: f64,
    pub tags: Value, // free-text tag strings, not keyed to museum_tag
    pub rating: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CatalogItem for Museum {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    // The tourist-facing listing filters on the foreigner ticket price.
    fn price(&self) -> Option<f64> {
        Some(self.ticket_price_foreigner)
    }

    fn rating(&self) -> Option<f64> {
        self.rating
    }
}
