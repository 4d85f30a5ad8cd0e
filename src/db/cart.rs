use crate::models;
use sqlx::PgPool;
use tracing::Instrument;

/// One row per (user, product); re-adding a product replaces the quantity.
pub async fn upsert(
    pool: &PgPool,
    user_id: &str,
    product_id: i32,
    quantity: i32,
) -> Result<models::CartItem, String> {
    let query_span = tracing::info_span!("Upserting cart item.");
    sqlx::query_as::<_, models::CartItem>(
        r#"
        INSERT INTO cart_item (user_id, product_id, quantity, added_at)
        VALUES ($1, $2, $3, NOW() at time zone 'utc')
        ON CONFLICT (user_id, product_id) DO UPDATE SET quantity = EXCLUDED.quantity
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(product_id)
    .bind(quantity)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to upsert cart item: {:?}", err);
        "Failed to insert".to_string()
    })
}

pub async fn fetch_by_user(pool: &PgPool, user_id: &str) -> Result<Vec<models::CartItem>, String> {
    let query_span = tracing::info_span!("Fetch cart by user id.");
    sqlx::query_as::<_, models::CartItem>(
        r#"SELECT * FROM cart_item WHERE user_id = $1 ORDER BY added_at ASC, id ASC"#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch cart, error: {:?}", err);
        "Could not fetch data".to_string()
    })
}

#[tracing::instrument(name = "Remove cart item.")]
pub async fn delete(pool: &PgPool, user_id: &str, product_id: i32) -> Result<bool, String> {
    sqlx::query("DELETE FROM cart_item WHERE user_id = $1 AND product_id = $2")
        .bind(user_id)
        .bind(product_id)
        .execute(pool)
        .await
        .map(|result| result.rows_affected() > 0)
        .map_err(|err| {
            tracing::error!("Failed to remove cart item: {:?}", err);
            "Failed to delete".to_string()
        })
}

#[tracing::instrument(name = "Clear cart.")]
pub async fn clear(pool: &PgPool, user_id: &str) -> Result<(), String> {
    sqlx::query("DELETE FROM cart_item WHERE user_id = $1")
        .bind(user_id)
        .execute(pool)
        .await
        .map(|_| ())
        .map_err(|err| {
            tracing::error!("Failed to clear cart: {:?}", err);
            "Failed to delete".to_string()
        })
}
