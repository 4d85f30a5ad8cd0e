use crate::connectors::PaymentIntent;
use serde::Serialize;

/// The payment endpoint keeps its own envelope: the client checks
/// `success` explicitly rather than relying on the HTTP status.
#[derive(Debug, Serialize)]
pub struct PaymentResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intent: Option<PaymentIntent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PaymentResponse {
    pub fn succeeded(intent: PaymentIntent) -> Self {
        Self {
            success: true,
            intent: Some(intent),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            intent: None,
            error: Some(error.into()),
        }
    }
}
