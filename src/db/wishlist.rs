use crate::models;
use sqlx::PgPool;
use tracing::Instrument;

pub async fn exists(pool: &PgPool, user_id: &str, product_id: i32) -> Result<bool, String> {
    let query_span = tracing::info_span!("Check wishlist entry existence.");
    sqlx::query_scalar::<_, i64>(
        r#"SELECT COUNT(*) FROM wishlist_entry WHERE user_id = $1 AND product_id = $2"#,
    )
    .bind(user_id)
    .bind(product_id)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map(|count| count > 0)
    .map_err(|err| {
        tracing::error!("Failed to check wishlist entry, error: {:?}", err);
        "Could not fetch data".to_string()
    })
}

pub async fn insert(
    pool: &PgPool,
    user_id: &str,
    product_id: i32,
) -> Result<models::WishlistEntry, String> {
    let query_span = tracing::info_span!("Saving wishlist entry.");
    sqlx::query_as::<_, models::WishlistEntry>(
        r#"
        INSERT INTO wishlist_entry (user_id, product_id, added_at)
        VALUES ($1, $2, NOW() at time zone 'utc')
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(product_id)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to insert wishlist entry: {:?}", err);
        "Failed to insert".to_string()
    })
}

pub async fn fetch_by_user(
    pool: &PgPool,
    user_id: &str,
) -> Result<Vec<models::WishlistEntry>, String> {
    let query_span = tracing::info_span!("Fetch wishlist by user id.");
    sqlx::query_as::<_, models::WishlistEntry>(
        r#"SELECT * FROM wishlist_entry WHERE user_id = $1 ORDER BY added_at ASC, id ASC"#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch wishlist, error: {:?}", err);
        "Could not fetch data".to_string()
    })
}

#[tracing::instrument(name = "Remove wishlist entry.")]
pub async fn delete(pool: &PgPool, user_id: &str, product_id: i32) -> Result<bool, String> {
    sqlx::query("DELETE FROM wishlist_entry WHERE user_id = $1 AND product_id = $2")
        .bind(user_id)
        .bind(product_id)
        .execute(pool)
        .await
        .map(|result| result.rows_affected() > 0)
        .map_err(|err| {
            tracing::error!("Failed to remove wishlist entry: {:?}", err);
            "Failed to delete".to_string()
        })
}
