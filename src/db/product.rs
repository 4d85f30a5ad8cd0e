use crate::models;
use sqlx::PgPool;
use tracing::Instrument;

pub async fn fetch(pool: &PgPool, id: i32) -> Result<Option<models::Product>, String> {
    let query_span = tracing::info_span!("Fetch product by id.");
    sqlx::query_as::<_, models::Product>(r#"SELECT * FROM product WHERE id = $1 LIMIT 1"#)
        .bind(id)
        .fetch_optional(pool)
        .instrument(query_span)
        .await
        .map_err(|err| {
            tracing::error!("Failed to fetch product, error: {:?}", err);
            "Could not fetch data".to_string()
        })
}

/// Admin listing, archived included.
pub async fn fetch_all(pool: &PgPool) -> Result<Vec<models::Product>, String> {
    let query_span = tracing::info_span!("Fetch all products.");
    sqlx::query_as::<_, models::Product>(r#"SELECT * FROM product ORDER BY id"#)
        .fetch_all(pool)
        .instrument(query_span)
        .await
        .map_err(|err| {
            tracing::error!("Failed to fetch products, error: {:?}", err);
            "Could not fetch data".to_string()
        })
}

/// Tourist-facing listing, archived excluded unconditionally.
pub async fn fetch_published(pool: &PgPool) -> Result<Vec<models::Product>, String> {
    let query_span = tracing::info_span!("Fetch published products.");
    sqlx::query_as::<_, models::Product>(
        r#"SELECT * FROM product WHERE archived = FALSE ORDER BY id"#,
    )
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch products, error: {:?}", err);
        "Could not fetch data".to_string()
    })
}

pub async fn insert(pool: &PgPool, product: models::Product) -> Result<models::Product, String> {
    let query_span = tracing::info_span!("Saving new product into the database");
    sqlx::query_as::<_, models::Product>(
        r#"
        INSERT INTO product (name, description, price, quantity, image, seller, owner_id,
                             archived, sales, average_rating, total_ratings,
                             created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, FALSE, 0, 0, 0,
                NOW() at time zone 'utc', NOW() at time zone 'utc')
        RETURNING *
        "#,
    )
    .bind(&product.name)
    .bind(&product.description)
    .bind(product.price)
    .bind(product.quantity)
    .bind(&product.image)
    .bind(&product.seller)
    .bind(&product.owner_id)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to execute query: {:?}", err);
        "Failed to insert".to_string()
    })
}

/// Full-document PUT; the archive flag and counters are not touched here.
pub async fn update(pool: &PgPool, product: models::Product) -> Result<models::Product, String> {
    let query_span = tracing::info_span!("Updating product");
    sqlx::query_as::<_, models::Product>(
        r#"
        UPDATE product
        SET
            name = $2,
            description = $3,
            price = $4,
            quantity = $5,
            image = $6,
            seller = $7,
            updated_at = NOW() at time zone 'utc'
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(product.id)
    .bind(&product.name)
    .bind(&product.description)
    .bind(product.price)
    .bind(product.quantity)
    .bind(&product.image)
    .bind(&product.seller)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to execute query: {:?}", err);
        "Could not update".to_string()
    })
}

/// Flips the archived flag and nothing else; carts, wishlists and past
/// purchases keep whatever references they hold.
pub async fn toggle_archive(pool: &PgPool, id: i32) -> Result<models::Product, String> {
    let query_span = tracing::info_span!("Toggling product archive flag.");
    sqlx::query_as::<_, models::Product>(
        r#"
        UPDATE product
        SET archived = NOT archived, updated_at = NOW() at time zone 'utc'
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to toggle archive: {:?}", err);
        "Could not update".to_string()
    })
}

/// Reads every stored rate back and recomputes the aggregate columns,
/// the same read-then-recompute the original system performs.
pub async fn refresh_rating(pool: &PgPool, id: i32) -> Result<models::Product, String> {
    let rates = crate::db::review::fetch_rates(pool, models::ReviewTarget::Product, id).await?;
    let summary = models::RatingSummary::of(&rates);

    let query_span = tracing::info_span!("Storing recomputed product rating.");
    sqlx::query_as::<_, models::Product>(
        r#"
        UPDATE product
        SET average_rating = $2, total_ratings = $3
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(summary.average_rating)
    .bind(summary.total_ratings)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to store product rating: {:?}", err);
        "Could not update".to_string()
    })
}

/// Checkout bookkeeping: bump the sales counter, draw down stock.
pub async fn record_sale(pool: &PgPool, id: i32, quantity: i32) -> Result<(), String> {
    let query_span = tracing::info_span!("Recording product sale.");
    sqlx::query(
        r#"
        UPDATE product
        SET sales = sales + $2, quantity = quantity - $2
        WHERE id = $1
        "#,
    )
    .bind(id)
    .bind(quantity)
    .execute(pool)
    .instrument(query_span)
    .await
    .map(|_| ())
    .map_err(|err| {
        tracing::error!("Failed to record sale: {:?}", err);
        "Could not update".to_string()
    })
}

#[tracing::instrument(name = "Delete product.")]
pub async fn delete(pool: &PgPool, id: i32) -> Result<bool, String> {
    sqlx::query("DELETE FROM product WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await
        .map(|result| result.rows_affected() > 0)
        .map_err(|err| {
            tracing::error!("Failed to delete product: {:?}", err);
            "Failed to delete product".to_string()
        })
}
