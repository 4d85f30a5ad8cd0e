use crate::db;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{get, web, Responder, Result};
use sqlx::PgPool;

#[tracing::instrument(name = "Get tourist purchase history.")]
#[get("/touristHistory/{user_id}")]
pub async fn list(
    path: web::Path<(String,)>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let user_id = path.into_inner().0;

    db::purchase::fetch_by_user(pg_pool.get_ref(), &user_id)
        .await
        .map(|purchases| JsonResponse::build().set_list(purchases).ok("OK"))
        .map_err(|err| JsonResponse::<models::Purchase>::build().internal_server_error(err))
}
