use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{get, post, web, Responder, Result};
use sqlx::PgPool;

/// Toggle semantics: present entries are removed, absent ones added.
#[tracing::instrument(name = "Toggle wishlist entry.")]
#[post("/wishlist/{user_id}")]
pub async fn toggle(
    path: web::Path<(String,)>,
    form: web::Json<forms::WishlistForm>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let user_id = path.into_inner().0;
    let product_id = form.product_id;

    db::product::fetch(pg_pool.get_ref(), product_id)
        .await
        .map_err(|err| JsonResponse::<models::WishlistEntry>::build().internal_server_error(err))
        .and_then(|product| match product {
            Some(product) => Ok(product),
            None => Err(JsonResponse::<models::WishlistEntry>::build().not_found("not found")),
        })?;

    let listed = db::wishlist::exists(pg_pool.get_ref(), &user_id, product_id)
        .await
        .map_err(|err| JsonResponse::<models::WishlistEntry>::build().internal_server_error(err))?;

    if listed {
        db::wishlist::delete(pg_pool.get_ref(), &user_id, product_id)
            .await
            .map_err(|err| {
                JsonResponse::<models::WishlistEntry>::build().internal_server_error(err)
            })?;
        return Ok(JsonResponse::<models::WishlistEntry>::build().ok("Removed"));
    }

    db::wishlist::insert(pg_pool.get_ref(), &user_id, product_id)
        .await
        .map(|entry| JsonResponse::build().set_item(entry).ok("Added"))
        .map_err(|err| JsonResponse::<models::WishlistEntry>::build().internal_server_error(err))
}

#[tracing::instrument(name = "Get wishlist.")]
#[get("/wishlist/{user_id}")]
pub async fn list(
    path: web::Path<(String,)>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let user_id = path.into_inner().0;

    db::wishlist::fetch_by_user(pg_pool.get_ref(), &user_id)
        .await
        .map(|entries| JsonResponse::build().set_list(entries).ok("OK"))
        .map_err(|err| JsonResponse::<models::WishlistEntry>::build().internal_server_error(err))
}
