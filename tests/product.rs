mod common;

use common::TestApp;
use serde_json::json;

fn product_body(name: &str, price: f64) -> serde_json::Value {
    json!({
        "name": name,
        "description": "Hand-painted papyrus souvenir",
        "price": price,
        "quantity": 50,
        "image": "https://cdn.example.com/papyrus.jpg",
        "seller": "Nile Crafts",
        "owner_id": "seller-7"
    })
}

async fn create_product(app: &TestApp, client: &reqwest::Client, name: &str, price: f64) -> i64 {
    let response = client
        .post(&format!("{}/products", &app.address))
        .json(&product_body(name, price))
        .send()
        .await
        .expect("Failed to execute request.");
    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.unwrap();
    body["id"].as_i64().expect("missing product id")
}

/// Puts one unit in the cart and checks out, leaving a purchase record.
async fn buy_product(app: &TestApp, client: &reqwest::Client, user_id: &str, product_id: i64) {
    let response = client
        .post(&format!("{}/products/cart/{}", &app.address, user_id))
        .json(&json!({ "product_id": product_id, "quantity": 1 }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let response = client
        .post(&format!("{}/products/checkout/{}", &app.address, user_id))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
}

#[tokio::test]
async fn archive_toggle_roundtrips_and_touches_nothing_else() {
    let app = match common::spawn_app().await {
        Some(app) => app,
        None => return,
    };
    let client = reqwest::Client::new();
    let id = create_product(&app, &client, "Scarab charm", 7.5).await;

    let before: serde_json::Value = client
        .get(&format!("{}/products/{}", &app.address, id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    // archive: gone from the public list
    let response = client
        .patch(&format!("{}/products/{}/toggleArchive", &app.address, id))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["item"]["archived"], true);

    let listing: serde_json::Value = client
        .get(&format!("{}/products", &app.address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(listing["list"]
        .as_array()
        .unwrap()
        .iter()
        .all(|p| p["id"].as_i64() != Some(id)));

    // still visible to the admin listing
    let admin: serde_json::Value = client
        .get(&format!("{}/admin/products", &app.address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(admin["list"]
        .as_array()
        .unwrap()
        .iter()
        .any(|p| p["id"].as_i64() == Some(id)));

    // unarchive: flag back to the original, other fields untouched
    let response = client
        .patch(&format!("{}/products/{}/toggleArchive", &app.address, id))
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["item"]["archived"], false);

    let after: serde_json::Value = client
        .get(&format!("{}/products/{}", &app.address, id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(before["item"], after["item"]);
}

#[tokio::test]
async fn review_without_purchase_is_rejected() {
    let app = match common::spawn_app().await {
        Some(app) => app,
        None => return,
    };
    let client = reqwest::Client::new();
    let id = create_product(&app, &client, "Papyrus print", 12.0).await;

    let response = client
        .post(&format!("{}/products/{}/reviews", &app.address, id))
        .json(&json!({
            "user_id": "tourist-1",
            "reviewer": "Sam",
            "rate": 5,
            "comment": "Lovely"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 403);
}

#[tokio::test]
async fn reviews_update_the_stored_aggregate() {
    let app = match common::spawn_app().await {
        Some(app) => app,
        None => return,
    };
    let client = reqwest::Client::new();
    let id = create_product(&app, &client, "Alabaster cat", 30.0).await;

    for (n, (user, rate)) in [("t-1", 5), ("t-2", 3), ("t-3", 4)].into_iter().enumerate() {
        buy_product(&app, &client, user, id).await;

        let response = client
            .post(&format!("{}/products/{}/reviews", &app.address, id))
            .json(&json!({
                "user_id": user,
                "reviewer": user,
                "rate": rate,
                "comment": "ok"
            }))
            .send()
            .await
            .unwrap();
        assert!(response.status().is_success());

        let body: serde_json::Value = client
            .get(&format!("{}/products/{}", &app.address, id))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(body["item"]["total_ratings"].as_i64(), Some(n as i64 + 1));
    }

    let body: serde_json::Value = client
        .get(&format!("{}/products/{}", &app.address, id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let average = body["item"]["average_rating"].as_f64().unwrap();
    assert!((average - 4.0).abs() < 1e-9);

    // listing endpoint agrees with the stored aggregate
    let listing: serde_json::Value = client
        .get(&format!("{}/products/{}/reviews", &app.address, id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(listing["item"]["total_ratings"].as_i64(), Some(3));
    assert!((listing["item"]["average_rating"].as_f64().unwrap() - 4.0).abs() < 1e-9);
}

#[tokio::test]
async fn catalog_filter_combines_search_and_price_bound() {
    let app = match common::spawn_app().await {
        Some(app) => app,
        None => return,
    };
    let client = reqwest::Client::new();

    create_product(&app, &client, "Plain shirt", 8.0).await;
    create_product(&app, &client, "Premium shirt", 80.0).await;
    create_product(&app, &client, "Straw hat", 8.0).await;

    let body: serde_json::Value = client
        .get(&format!(
            "{}/products?search=SHIRT&price_max=10",
            &app.address
        ))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let list = body["list"].as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["name"], "Plain shirt");
    assert!(list[0]["price"].as_f64().unwrap() <= 10.0);
}

#[tokio::test]
async fn wishlist_toggles_membership() {
    let app = match common::spawn_app().await {
        Some(app) => app,
        None => return,
    };
    let client = reqwest::Client::new();
    let id = create_product(&app, &client, "Bookmark", 2.0).await;

    let toggle = || {
        client
            .post(&format!("{}/products/wishlist/tourist-9", &app.address))
            .json(&json!({ "product_id": id }))
            .send()
    };

    let response = toggle().await.unwrap();
    assert!(response.status().is_success());

    let body: serde_json::Value = client
        .get(&format!("{}/products/wishlist/tourist-9", &app.address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["list"].as_array().unwrap().len(), 1);

    let response = toggle().await.unwrap();
    assert!(response.status().is_success());

    let body: serde_json::Value = client
        .get(&format!("{}/products/wishlist/tourist-9", &app.address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["list"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn checkout_moves_cart_into_history_and_counts_the_sale() {
    let app = match common::spawn_app().await {
        Some(app) => app,
        None => return,
    };
    let client = reqwest::Client::new();
    let id = create_product(&app, &client, "Basalt obelisk", 45.0).await;

    buy_product(&app, &client, "tourist-4", id).await;

    // cart is cleared
    let cart: serde_json::Value = client
        .get(&format!("{}/products/cart/tourist-4", &app.address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(cart["list"].as_array().unwrap().len(), 0);

    // purchase shows up in the tourist history at the purchase-time price
    let history: serde_json::Value = client
        .get(&format!("{}/tourist/touristHistory/tourist-4", &app.address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let list = history["list"].as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["product_id"].as_i64(), Some(id));
    assert_eq!(list[0]["unit_price"].as_f64(), Some(45.0));

    // sales counter and stock reflect the sale
    let admin: serde_json::Value = client
        .get(&format!("{}/admin/products", &app.address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let product = admin["list"]
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["id"].as_i64() == Some(id))
        .unwrap();
    assert_eq!(product["sales"].as_i64(), Some(1));
    assert_eq!(product["quantity"].as_i64(), Some(49));

    // checking out an empty cart is a client error
    let response = client
        .post(&format!("{}/products/checkout/tourist-4", &app.address))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);
}
