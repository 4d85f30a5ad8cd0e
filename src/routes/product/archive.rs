use crate::db;
use crate::helpers::JsonResponse;
use crate::views;
use actix_web::{patch, web, Responder, Result};
use sqlx::PgPool;

#[tracing::instrument(name = "Toggle product archive flag.")]
#[patch("/{id}/toggleArchive")]
pub async fn toggle(
    path: web::Path<(i32,)>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let id = path.0;
    db::product::fetch(pg_pool.get_ref(), id)
        .await
        .map_err(|err| JsonResponse::<views::product::Admin>::build().internal_server_error(err))
        .and_then(|product| match product {
            Some(product) => Ok(product),
            None => Err(JsonResponse::<views::product::Admin>::build().not_found("not found")),
        })?;

    db::product::toggle_archive(pg_pool.get_ref(), id)
        .await
        .map(|product| {
            let message = if product.archived {
                "Archived"
            } else {
                "Unarchived"
            };
            JsonResponse::build()
                .set_item(views::product::Admin::from(product))
                .ok(message)
        })
        .map_err(|err| JsonResponse::<views::product::Admin>::build().internal_server_error(err))
}
