use crate::models;
use serde::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Serialize, Deserialize, Debug, Validate)]
pub struct MuseumTagForm {
    pub kind: models::TagKind,
    #[validate(max_length = 200)]
    pub historical_period: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Validate)]
pub struct PreferenceTagForm {
    #[validate(min_length = 1)]
    #[validate(max_length = 200)]
    pub name: String,
    #[validate(max_length = 1000)]
    pub description: Option<String>,
}
