use crate::db;
use crate::helpers::JsonResponse;
use crate::views;
use actix_web::{delete, web, Responder, Result};
use sqlx::PgPool;

/// Hard delete by the seller; the archive flag is the soft alternative.
#[tracing::instrument(name = "Seller delete product.")]
#[delete("/seller-delete/{id}")]
pub async fn seller(
    path: web::Path<(i32,)>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let id = path.0;
    let product = db::product::fetch(pg_pool.get_ref(), id)
        .await
        .map_err(|err| JsonResponse::<views::product::Admin>::build().internal_server_error(err))
        .and_then(|product| match product {
            Some(product) => Ok(product),
            None => Err(JsonResponse::<views::product::Admin>::build().not_found("not found")),
        })?;

    db::product::delete(pg_pool.get_ref(), product.id)
        .await
        .map_err(|err| JsonResponse::<views::product::Admin>::build().internal_server_error(err))
        .and_then(|deleted| match deleted {
            true => Ok(JsonResponse::<views::product::Admin>::build().ok("Deleted")),
            false => {
                Err(JsonResponse::<views::product::Admin>::build().bad_request("Could not delete"))
            }
        })
}
