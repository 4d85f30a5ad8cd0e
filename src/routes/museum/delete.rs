use crate::db;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{delete, web, Responder, Result};
use sqlx::PgPool;

#[tracing::instrument(name = "Delete museum.")]
#[delete("/{id}")]
pub async fn item(
    path: web::Path<(i32,)>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let id = path.0;
    let museum = db::museum::fetch(pg_pool.get_ref(), id)
        .await
        .map_err(|err| JsonResponse::<models::Museum>::build().internal_server_error(err))
        .and_then(|museum| match museum {
            Some(museum) => Ok(museum),
            None => Err(JsonResponse::<models::Museum>::build().not_found("not found")),
        })?;

    db::museum::delete(pg_pool.get_ref(), museum.id)
        .await
        .map_err(|err| JsonResponse::<models::Museum>::build().internal_server_error(err))
        .and_then(|deleted| match deleted {
            true => Ok(JsonResponse::<models::Museum>::build().ok("Deleted")),
            false => Err(JsonResponse::<models::Museum>::build().bad_request("Could not delete")),
        })
}
