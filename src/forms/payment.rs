use serde::{Deserialize, Serialize};
use serde_valid::Validate;

/// Amount arrives in major currency units; the connector converts to
/// minor units before submitting.
#[derive(Serialize, Deserialize, Debug, Validate)]
pub struct PaymentForm {
    #[validate(min_length = 1)]
    pub payment_method_id: String,
    #[validate(exclusive_minimum = 0.0)]
    pub amount: f64,
    pub currency: Option<String>,
}
