use crate::models;
use sqlx::PgPool;
use tracing::Instrument;

pub async fn insert_museum_tag(
    pool: &PgPool,
    kind: models::TagKind,
    historical_period: Option<String>,
) -> Result<models::MuseumTag, String> {
    let query_span = tracing::info_span!("Saving museum tag.");
    sqlx::query_as::<_, models::MuseumTag>(
        r#"
        INSERT INTO museum_tag (kind, historical_period)
        VALUES ($1, $2)
        RETURNING *
        "#,
    )
    .bind(kind)
    .bind(historical_period)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to insert museum tag: {:?}", err);
        "Failed to insert".to_string()
    })
}

pub async fn fetch_museum_tags(pool: &PgPool) -> Result<Vec<models::MuseumTag>, String> {
    let query_span = tracing::info_span!("Fetch museum tags.");
    sqlx::query_as::<_, models::MuseumTag>(r#"SELECT * FROM museum_tag ORDER BY id"#)
        .fetch_all(pool)
        .instrument(query_span)
        .await
        .map_err(|err| {
            tracing::error!("Failed to fetch museum tags, error: {:?}", err);
            "Could not fetch data".to_string()
        })
}

#[tracing::instrument(name = "Delete museum tag.")]
pub async fn delete_museum_tag(pool: &PgPool, id: i32) -> Result<bool, String> {
    sqlx::query("DELETE FROM museum_tag WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await
        .map(|result| result.rows_affected() > 0)
        .map_err(|err| {
            tracing::error!("Failed to delete museum tag: {:?}", err);
            "Failed to delete".to_string()
        })
}

pub async fn insert_preference_tag(
    pool: &PgPool,
    name: &str,
    description: &str,
) -> Result<models::PreferenceTag, String> {
    let query_span = tracing::info_span!("Saving preference tag.");
    sqlx::query_as::<_, models::PreferenceTag>(
        r#"
        INSERT INTO preference_tag (name, description)
        VALUES ($1, $2)
        RETURNING *
        "#,
    )
    .bind(name)
    .bind(description)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to insert preference tag: {:?}", err);
        "Failed to insert".to_string()
    })
}

pub async fn fetch_preference_tags(pool: &PgPool) -> Result<Vec<models::PreferenceTag>, String> {
    let query_span = tracing::info_span!("Fetch preference tags.");
    sqlx::query_as::<_, models::PreferenceTag>(r#"SELECT * FROM preference_tag ORDER BY id"#)
        .fetch_all(pool)
        .instrument(query_span)
        .await
        .map_err(|err| {
            tracing::error!("Failed to fetch preference tags, error: {:?}", err);
            "Could not fetch data".to_string()
        })
}

#[tracing::instrument(name = "Delete preference tag.")]
pub async fn delete_preference_tag(pool: &PgPool, id: i32) -> Result<bool, String> {
    sqlx::query("DELETE FROM preference_tag WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await
        .map(|result| result.rows_affected() > 0)
        .map_err(|err| {
            tracing::error!("Failed to delete preference tag: {:?}", err);
            "Failed to delete".to_string()
        })
}
