use crate::models;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize, Default)]
pub struct Item {
    pub id: i32,
    pub reviewer: String,
    pub rate: i32,
    pub comment: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<models::Review> for Item {
    fn from(review: models::Review) -> Self {
        Self {
            id: review.id,
            reviewer: review.reviewer,
            rate: review.rate,
            comment: review.comment,
            created_at: Some(review.created_at),
        }
    }
}

/// Review listing plus the aggregate computed on read; used for targets
/// that carry no stored aggregate columns.
#[derive(Debug, Serialize, Default)]
pub struct Listing {
    pub average_rating: f64,
    pub total_ratings: i32,
    pub reviews: Vec<Item>,
}

impl From<Vec<models::Review>> for Listing {
    fn from(reviews: Vec<models::Review>) -> Self {
        let rates: Vec<i32> = reviews.iter().map(|review| review.rate).collect();
        let summary = models::RatingSummary::of(&rates);

        Self {
            average_rating: summary.average_rating,
            total_ratings: summary.total_ratings,
            reviews: reviews.into_iter().map(Into::into).collect(),
        }
    }
}
