mod common;

use serde_json::json;
use tripmarket::configuration::{get_configuration, PaymentSettings};
use tripmarket::connectors::{PaymentClient, PaymentConnector, PaymentIntentRequest};
use wiremock::matchers::{body_string_contains, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings_for(server: &MockServer) -> PaymentSettings {
    PaymentSettings {
        base_url: server.uri(),
        secret_key: "sk_test_123".to_string(),
        currency: "usd".to_string(),
        timeout_secs: 5,
    }
}

#[tokio::test]
async fn client_submits_minor_units_and_decodes_the_intent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/payment_intents"))
        .and(header_exists("authorization"))
        .and(body_string_contains("amount=1999"))
        .and(body_string_contains("payment_method=pm_card"))
        .and(body_string_contains("confirm=true"))
        .and(body_string_contains("allow_redirects%5D=never"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "pi_123",
            "status": "succeeded",
            "amount": 1999,
            "currency": "usd"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = PaymentClient::new(&settings_for(&mock_server)).unwrap();
    let intent = client
        .create_intent(PaymentIntentRequest {
            payment_method_id: "pm_card".to_string(),
            amount_major: 19.99,
            currency: "usd".to_string(),
        })
        .await
        .expect("intent should be created");

    assert_eq!(intent.id, "pi_123");
    assert_eq!(intent.status, "succeeded");
    assert_eq!(intent.amount, 1999);
}

#[tokio::test]
async fn client_surfaces_the_processor_decline_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/payment_intents"))
        .respond_with(ResponseTemplate::new(402).set_body_json(json!({
            "error": { "message": "Your card was declined." }
        })))
        .mount(&mock_server)
        .await;

    let client = PaymentClient::new(&settings_for(&mock_server)).unwrap();
    let err = client
        .create_intent(PaymentIntentRequest {
            payment_method_id: "pm_bad".to_string(),
            amount_major: 10.0,
            currency: "usd".to_string(),
        })
        .await
        .expect_err("decline should be an error");

    assert_eq!(err.to_string(), "Your card was declined.");
}

#[tokio::test]
async fn payment_route_reports_failure_in_the_body() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/payment_intents"))
        .respond_with(ResponseTemplate::new(402).set_body_json(json!({
            "error": { "message": "Your card was declined." }
        })))
        .mount(&mock_server)
        .await;

    let mut configuration = get_configuration().expect("Failed to get configuration");
    configuration.payment = settings_for(&mock_server);
    let app = match common::spawn_app_with_configuration(configuration).await {
        Some(app) => app,
        None => return,
    };
    let client = reqwest::Client::new();

    let response = client
        .post(&format!("{}/payments", &app.address))
        .json(&json!({ "payment_method_id": "pm_bad", "amount": 10.0 }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Your card was declined.");
}
