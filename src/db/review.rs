use crate::models;
use sqlx::PgPool;
use tracing::Instrument;

pub async fn insert(pool: &PgPool, mut review: models::Review) -> Result<models::Review, String> {
    let query_span = tracing::info_span!("Saving new review into the database");
    sqlx::query_as::<_, models::Review>(
        r#"
        INSERT INTO review (target_type, target_id, reviewer, rate, comment, created_at)
        VALUES ($1, $2, $3, $4, $5, NOW() at time zone 'utc')
        RETURNING *
        "#,
    )
    .bind(review.target_type)
    .bind(review.target_id)
    .bind(&review.reviewer)
    .bind(review.rate)
    .bind(&review.comment)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map(|result| {
        review.id = result.id;
        review.created_at = result.created_at;
        review
    })
    .map_err(|err| {
        tracing::error!("Failed to execute query: {:?}", err);
        "Failed to insert".to_string()
    })
}

pub async fn fetch_by_target(
    pool: &PgPool,
    target_type: models::ReviewTarget,
    target_id: i32,
) -> Result<Vec<models::Review>, String> {
    let query_span = tracing::info_span!("Fetch reviews by target.");
    sqlx::query_as::<_, models::Review>(
        r#"
        SELECT * FROM review
        WHERE target_type = $1 AND target_id = $2
        ORDER BY created_at ASC, id ASC
        "#,
    )
    .bind(target_type)
    .bind(target_id)
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch reviews, error: {:?}", err);
        "Could not fetch data".to_string()
    })
}

/// Just the rate values, oldest first; feeds the aggregate recompute.
pub async fn fetch_rates(
    pool: &PgPool,
    target_type: models::ReviewTarget,
    target_id: i32,
) -> Result<Vec<i32>, String> {
    let query_span = tracing::info_span!("Fetch review rates by target.");
    sqlx::query_scalar::<_, i32>(
        r#"
        SELECT rate FROM review
        WHERE target_type = $1 AND target_id = $2
        ORDER BY created_at ASC, id ASC
        "#,
    )
    .bind(target_type)
    .bind(target_id)
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch review rates, error: {:?}", err);
        "Could not fetch data".to_string()
    })
}
