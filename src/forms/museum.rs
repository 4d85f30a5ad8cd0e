use crate::models;
use serde::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Serialize, Deserialize, Debug, Validate)]
pub struct MuseumForm {
    #[validate(min_length = 1)]
    #[validate(max_length = 200)]
    pub name: String,
    #[validate(max_length = 5000)]
    pub description: Option<String>,
    pub pictures: Option<Vec<String>>,
    #[validate(min_length = 1)]
    pub location: String,
    #[validate(max_length = 500)]
    pub opening_hours: Option<String>,
    #[validate(minimum = 0.0)]
    pub ticket_price_foreigner: f64,
    #[validate(minimum = 0.0)]
    pub ticket_price_native: f64,
    #[validate(minimum = 0.0)]
    pub ticket_price_student: f64,
    pub tags: Option<Vec<String>>,
    #[validate(minimum = 0.0)]
    #[validate(maximum = 5.0)]
    pub rating: Option<f64>,
}

impl From<&MuseumForm> for models::Museum {
    fn from(form: &MuseumForm) -> Self {
        let mut museum = models::Museum::default();
        museum.name = form.name.clone();
        museum.description = form.description.clone().unwrap_or_default();
        museum.pictures = serde_json::json!(form.pictures.clone().unwrap_or_default());
        museum.location = form.location.clone();
        museum.opening_hours = form.opening_hours.clone().unwrap_or_default();
        museum.ticket_price_foreigner = form.ticket_price_foreigner;
        museum.ticket_price_native = form.ticket_price_native;
        museum.ticket_price_student = form.ticket_price_student;
        museum.tags = serde_json::json!(form.tags.clone().unwrap_or_default());
        museum.rating = form.rating;

        museum
    }
}
