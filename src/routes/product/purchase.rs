use crate::db;
use crate::helpers::JsonResponse;
use actix_web::{get, web, Responder, Result};
use sqlx::PgPool;

/// The UI calls this before showing the review form; the review endpoint
/// re-checks on its own.
#[tracing::instrument(name = "Check purchase record.")]
#[get("/check-purchase/{user_id}/{product_id}")]
pub async fn check(
    path: web::Path<(String, i32)>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let (user_id, product_id) = path.into_inner();

    db::purchase::exists(pg_pool.get_ref(), &user_id, product_id)
        .await
        .map(|purchased| {
            JsonResponse::build()
                .set_item(serde_json::json!({ "purchased": purchased }))
                .ok("OK")
        })
        .map_err(|err| JsonResponse::<serde_json::Value>::build().internal_server_error(err))
}
