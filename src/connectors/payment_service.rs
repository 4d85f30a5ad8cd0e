use super::errors::ConnectorError;
use crate::configuration::PaymentSettings;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// The processor's intent object, passed back to the client as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentIntent {
    pub id: String,
    pub status: String,
    pub amount: i64, // minor units
    pub currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,
}

#[derive(Debug, Clone)]
pub struct PaymentIntentRequest {
    pub payment_method_id: String,
    pub amount_major: f64,
    pub currency: String,
}

/// Major currency units to the processor's minor units.
pub fn to_minor_units(amount_major: f64) -> i64 {
    (amount_major * 100.0).round() as i64
}

#[async_trait]
pub trait PaymentConnector: Send + Sync {
    /// Submits a confirm-immediately intent; redirect-based payment
    /// methods are disabled. No retry and no idempotency key, so a
    /// double-submit creates two charges.
    async fn create_intent(
        &self,
        request: PaymentIntentRequest,
    ) -> Result<PaymentIntent, ConnectorError>;
}

pub struct PaymentClient {
    http: reqwest::Client,
    settings: PaymentSettings,
}

#[derive(Debug, Deserialize)]
struct ProcessorErrorBody {
    error: ProcessorErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ProcessorErrorDetail {
    message: String,
}

impl PaymentClient {
    pub fn new(settings: &PaymentSettings) -> Result<Self, ConnectorError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|err| ConnectorError::Internal(format!("HTTP client build failed: {}", err)))?;

        Ok(Self {
            http,
            settings: settings.clone(),
        })
    }
}

#[async_trait]
impl PaymentConnector for PaymentClient {
    #[tracing::instrument(name = "Create payment intent.", skip(self, request))]
    async fn create_intent(
        &self,
        request: PaymentIntentRequest,
    ) -> Result<PaymentIntent, ConnectorError> {
        let amount = to_minor_units(request.amount_major);
        let params = [
            ("amount", amount.to_string()),
            ("currency", request.currency.clone()),
            ("payment_method", request.payment_method_id.clone()),
            ("confirm", "true".to_string()),
            ("automatic_payment_methods[enabled]", "true".to_string()),
            (
                "automatic_payment_methods[allow_redirects]",
                "never".to_string(),
            ),
        ];

        let response = self
            .http
            .post(format!("{}/v1/payment_intents", self.settings.base_url))
            .bearer_auth(&self.settings.secret_key)
            .form(&params)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return response.json::<PaymentIntent>().await.map_err(|err| {
                ConnectorError::InvalidResponse(format!("Intent decode failed: {}", err))
            });
        }

        let message = response
            .json::<ProcessorErrorBody>()
            .await
            .map(|body| body.error.message)
            .unwrap_or_else(|_| format!("Payment processor returned {}", status));

        match status.as_u16() {
            401 | 403 => Err(ConnectorError::Unauthorized(message)),
            402 | 400 => Err(ConnectorError::Declined(message)),
            _ => Err(ConnectorError::HttpError(message)),
        }
    }
}

pub mod mock {
    use super::*;

    /// Stand-in processor for route tests: confirms everything, or
    /// declines everything when constructed with `declining`.
    pub struct MockPaymentConnector {
        decline_with: Option<String>,
    }

    impl MockPaymentConnector {
        pub fn confirming() -> Self {
            Self { decline_with: None }
        }

        pub fn declining(message: impl Into<String>) -> Self {
            Self {
                decline_with: Some(message.into()),
            }
        }
    }

    #[async_trait]
    impl PaymentConnector for MockPaymentConnector {
        async fn create_intent(
            &self,
            request: PaymentIntentRequest,
        ) -> Result<PaymentIntent, ConnectorError> {
            if let Some(message) = &self.decline_with {
                return Err(ConnectorError::Declined(message.clone()));
            }

            Ok(PaymentIntent {
                id: "pi_mock".to_string(),
                status: "succeeded".to_string(),
                amount: to_minor_units(request.amount_major),
                currency: request.currency,
                client_secret: None,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_convert_to_minor_units() {
        assert_eq!(to_minor_units(10.0), 1000);
        assert_eq!(to_minor_units(0.99), 99);
        // float-representation edge: 19.99 * 100 is 1998.9999...
        assert_eq!(to_minor_units(19.99), 1999);
    }
}
