use crate::configuration::Settings;
use crate::connectors::{PaymentConnector, PaymentIntentRequest};
use crate::forms;
use crate::helpers::JsonResponse;
use crate::views::payment::PaymentResponse;
use actix_web::{post, web, Responder, Result};
use serde_valid::Validate;
use std::sync::Arc;

/// Direct pass-through to the payment processor. Declines come back as a
/// 200 with `success: false`; the client checks the body, not the status.
#[tracing::instrument(name = "Create payment.", skip(connector, settings))]
#[post("")]
pub async fn handler(
    form: web::Json<forms::PaymentForm>,
    connector: web::Data<Arc<dyn PaymentConnector>>,
    settings: web::Data<Settings>,
) -> Result<impl Responder> {
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<PaymentResponse>::build().form_error(errors.to_string()));
    }

    let form = form.into_inner();
    let request = PaymentIntentRequest {
        payment_method_id: form.payment_method_id,
        amount_major: form.amount,
        currency: form
            .currency
            .unwrap_or_else(|| settings.payment.currency.clone()),
    };

    let response = match connector.create_intent(request).await {
        Ok(intent) => PaymentResponse::succeeded(intent),
        Err(err) => {
            tracing::error!("Payment intent failed: {}", err);
            PaymentResponse::failed(err.to_string())
        }
    };

    Ok(web::Json(response))
}
