use crate::db;
use crate::helpers::catalog::CatalogQuery;
use crate::helpers::JsonResponse;
use crate::views;
use actix_web::{get, web, Responder, Result};
use sqlx::PgPool;

#[tracing::instrument(name = "Get product.")]
#[get("/{id}")]
pub async fn item(
    path: web::Path<(i32,)>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let id = path.0;
    db::product::fetch(pg_pool.get_ref(), id)
        .await
        .map_err(|err| JsonResponse::<views::product::Public>::build().internal_server_error(err))
        .and_then(|product| match product {
            Some(product) => Ok(JsonResponse::build()
                .set_item(views::product::Public::from(product))
                .ok("OK")),
            None => Err(JsonResponse::<views::product::Public>::build().not_found("not found")),
        })
}

/// Tourist-facing listing; archived products never appear here.
#[tracing::instrument(name = "List products.")]
#[get("")]
pub async fn list(
    query: web::Query<CatalogQuery>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    db::product::fetch_published(pg_pool.get_ref())
        .await
        .map(|products| {
            let products = query
                .apply(products)
                .into_iter()
                .map(views::product::Public::from)
                .collect::<Vec<views::product::Public>>();

            JsonResponse::build().set_list(products).ok("OK")
        })
        .map_err(|err| JsonResponse::<views::product::Public>::build().internal_server_error(err))
}

/// Admin listing shows everything, archived included.
#[tracing::instrument(name = "Admin list products.")]
#[get("")]
pub async fn admin_list(
    query: web::Query<CatalogQuery>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    db::product::fetch_all(pg_pool.get_ref())
        .await
        .map(|products| {
            let products = query
                .apply(products)
                .into_iter()
                .map(views::product::Admin::from)
                .collect::<Vec<views::product::Admin>>();

            JsonResponse::build().set_list(products).ok("OK")
        })
        .map_err(|err| JsonResponse::<views::product::Admin>::build().internal_server_error(err))
}
