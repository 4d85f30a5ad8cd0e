use crate::models;
use sqlx::PgPool;
use tracing::Instrument;

pub async fn fetch(pool: &PgPool, id: i32) -> Result<Option<models::Museum>, String> {
    let query_span = tracing::info_span!("Fetch museum by id.");
    sqlx::query_as::<_, models::Museum>(r#"SELECT * FROM museum WHERE id = $1 LIMIT 1"#)
        .bind(id)
        .fetch_optional(pool)
        .instrument(query_span)
        .await
        .map_err(|err| {
            tracing::error!("Failed to fetch museum, error: {:?}", err);
            "Could not fetch data".to_string()
        })
}

pub async fn fetch_all(pool: &PgPool) -> Result<Vec<models::Museum>, String> {
    let query_span = tracing::info_span!("Fetch all museums.");
    sqlx::query_as::<_, models::Museum>(r#"SELECT * FROM museum ORDER BY id"#)
        .fetch_all(pool)
        .instrument(query_span)
        .await
        .map_err(|err| {
            tracing::error!("Failed to fetch museums, error: {:?}", err);
            "Could not fetch data".to_string()
        })
}

pub async fn insert(pool: &PgPool, mut museum: models::Museum) -> Result<models::Museum, String> {
    let query_span = tracing::info_span!("Saving new museum into the database");
    sqlx::query_as::<_, models::Museum>(
        r#"
        INSERT INTO museum (name, description, pictures, location, opening_hours,
                            ticket_price_foreigner, ticket_price_native, ticket_price_student,
                            tags, rating, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10,
                NOW() at time zone 'utc', NOW() at time zone 'utc')
        RETURNING *
        "#,
    )
    .bind(&museum.name)
    .bind(&museum.description)
    .bind(&museum.pictures)
    .bind(&museum.location)
    .bind(&museum.opening_hours)
    .bind(museum.ticket_price_foreigner)
    .bind(museum.ticket_price_native)
    .bind(museum.ticket_price_student)
    .bind(&museum.tags)
    .bind(museum.rating)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map(|result| {
        museum.id = result.id;
        museum.created_at = result.created_at;
        museum.updated_at = result.updated_at;
        museum
    })
    .map_err(|err| {
        tracing::error!("Failed to execute query: {:?}", err);
        "Failed to insert".to_string()
    })
}

pub async fn update(pool: &PgPool, mut museum: models::Museum) -> Result<models::Museum, String> {
    let query_span = tracing::info_span!("Updating museum");
    sqlx::query_as::<_, models::Museum>(
        r#"
        UPDATE museum
        SET
            name = $2,
            description = $3,
            pictures = $4,
            location = $5,
            opening_hours = $6,
            ticket_price_foreigner = $7,
            ticket_price_native = $8,
            ticket_price_student = $9,
            tags = $10,
            rating = $11,
            updated_at = NOW() at time zone 'utc'
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(museum.id)
    .bind(&museum.name)
    .bind(&museum.description)
    .bind(&museum.pictures)
    .bind(&museum.location)
    .bind(&museum.opening_hours)
    .bind(museum.ticket_price_foreigner)
    .bind(museum.ticket_price_native)
    .bind(museum.ticket_price_student)
    .bind(&museum.tags)
    .bind(museum.rating)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map(|result| {
        museum.updated_at = result.updated_at;
        museum
    })
    .map_err(|err| {
        tracing::error!("Failed to execute query: {:?}", err);
        "Could not update".to_string()
    })
}

#[tracing::instrument(name = "Delete museum.")]
pub async fn delete(pool: &PgPool, id: i32) -> Result<bool, String> {
    sqlx::query("DELETE FROM museum WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await
        .map(|result| result.rows_affected() > 0)
        .map_err(|err| {
            tracing::error!("Failed to delete museum: {:?}", err);
            "Failed to delete museum".to_string()
        })
}
