use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What a review is attached to. Products live in this database; the
/// other targets are external entities referenced by id only.
#[derive(sqlx::Type, Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[sqlx(rename_all = "snake_case", type_name = "text")]
#[serde(rename_all = "snake_case")]
pub enum ReviewTarget {
    Product,
    Activity,
    Itinerary,
    TourGuide,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Review {
    pub id: i32,
    pub target_type: ReviewTarget,
    pub target_id: i32,
    pub reviewer: String,
    pub rate: i32, // 1..=5
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct RatingSummary {
    pub average_rating: f64,
    pub total_ratings: i32,
}

impl RatingSummary {
    /// Arithmetic mean over every stored rate; all reviews weigh equally
    /// forever.
    pub fn of(rates: &[i32]) -> Self {
        if rates.is_empty() {
            return Self::default();
        }
        let total = rates.len() as i32;
        let sum: i64 = rates.iter().map(|r| *r as i64).sum();
        Self {
            average_rating: sum as f64 / total as f64,
            total_ratings: total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_of_no_rates_is_zero() {
        let summary = RatingSummary::of(&[]);
        assert_eq!(summary.total_ratings, 0);
        assert_eq!(summary.average_rating, 0.0);
    }

    #[test]
    fn summary_counts_and_averages() {
        let mut rates = Vec::new();
        for (n, rate) in [5, 3, 4, 1, 5].iter().enumerate() {
            rates.push(*rate);
            let summary = RatingSummary::of(&rates);
            assert_eq!(summary.total_ratings, n as i32 + 1);
            let expected =
                rates.iter().map(|r| *r as f64).sum::<f64>() / rates.len() as f64;
            assert!((summary.average_rating - expected).abs() < 1e-9);
        }
    }
}
