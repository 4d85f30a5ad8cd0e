use crate::db;
use crate::helpers::catalog::CatalogQuery;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{get, web, Responder, Result};
use sqlx::PgPool;

#[tracing::instrument(name = "Get museum.")]
#[get("/{id}")]
pub async fn item(
    path: web::Path<(i32,)>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let id = path.0;
    db::museum::fetch(pg_pool.get_ref(), id)
        .await
        .map_err(|err| JsonResponse::<models::Museum>::build().internal_server_error(err))
        .and_then(|museum| match museum {
            Some(museum) => Ok(JsonResponse::build().set_item(museum).ok("OK")),
            None => Err(JsonResponse::<models::Museum>::build().not_found("not found")),
        })
}

#[tracing::instrument(name = "List museums.")]
#[get("")]
pub async fn list(
    query: web::Query<CatalogQuery>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    db::museum::fetch_all(pg_pool.get_ref())
        .await
        .map(|museums| {
            let museums = query.apply(museums);
            JsonResponse::build().set_list(museums).ok("OK")
        })
        .map_err(|err| JsonResponse::<models::Museum>::build().internal_server_error(err))
}
