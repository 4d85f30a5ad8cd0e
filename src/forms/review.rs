use crate::models;
use serde::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Serialize, Deserialize, Debug, Validate)]
pub struct ReviewForm {
    #[validate(min_length = 1)]
    pub user_id: String,
    #[validate(min_length = 1)]
    #[validate(max_length = 200)]
    pub reviewer: String,
    #[validate(minimum = 1)]
    #[validate(maximum = 5)]
    pub rate: i32,
    #[validate(max_length = 1000)]
    pub comment: Option<String>,
}

impl ReviewForm {
    pub fn into_review(self, target_type: models::ReviewTarget, target_id: i32) -> models::Review {
        models::Review {
            id: 0,
            target_type,
            target_id,
            reviewer: self.reviewer,
            rate: self.rate,
            comment: self.comment.unwrap_or_default(),
            created_at: chrono::Utc::now(),
        }
    }
}
