use crate::models;
use sqlx::PgPool;
use tracing::Instrument;

pub async fn insert(
    pool: &PgPool,
    mut purchase: models::Purchase,
) -> Result<models::Purchase, String> {
    let query_span = tracing::info_span!("Saving purchase record into the database");
    sqlx::query_as::<_, models::Purchase>(
        r#"
        INSERT INTO purchase (user_id, product_id, quantity, unit_price, purchased_at)
        VALUES ($1, $2, $3, $4, NOW() at time zone 'utc')
        RETURNING *
        "#,
    )
    .bind(&purchase.user_id)
    .bind(purchase.product_id)
    .bind(purchase.quantity)
    .bind(purchase.unit_price)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map(|result| {
        purchase.id = result.id;
        purchase.purchased_at = result.purchased_at;
        purchase
    })
    .map_err(|err| {
        tracing::error!("Failed to execute query: {:?}", err);
        "Failed to insert".to_string()
    })
}

pub async fn fetch_by_user(pool: &PgPool, user_id: &str) -> Result<Vec<models::Purchase>, String> {
    let query_span = tracing::info_span!("Fetch purchases by user id.");
    sqlx::query_as::<_, models::Purchase>(
        r#"
        SELECT * FROM purchase
        WHERE user_id = $1
        ORDER BY purchased_at DESC, id DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch purchases, error: {:?}", err);
        "Could not fetch data".to_string()
    })
}

/// The purchase-gate lookup: has this user ever bought this product.
pub async fn exists(pool: &PgPool, user_id: &str, product_id: i32) -> Result<bool, String> {
    let query_span = tracing::info_span!("Check purchase record existence.");
    sqlx::query_scalar::<_, i64>(
        r#"SELECT COUNT(*) FROM purchase WHERE user_id = $1 AND product_id = $2"#,
    )
    .bind(user_id)
    .bind(product_id)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map(|count| count > 0)
    .map_err(|err| {
        tracing::error!("Failed to check purchase record, error: {:?}", err);
        "Could not fetch data".to_string()
    })
}
