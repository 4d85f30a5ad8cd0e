use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{delete, get, post, web, Responder, Result};
use serde_valid::Validate;
use sqlx::PgPool;

#[tracing::instrument(name = "Add product to cart.")]
#[post("/cart/{user_id}")]
pub async fn add(
    path: web::Path<(String,)>,
    form: web::Json<forms::CartItemForm>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<models::CartItem>::build().form_error(errors.to_string()));
    }

    let user_id = path.into_inner().0;

    db::product::fetch(pg_pool.get_ref(), form.product_id)
        .await
        .map_err(|err| JsonResponse::<models::CartItem>::build().internal_server_error(err))
        .and_then(|product| match product {
            Some(product) => Ok(product),
            None => Err(JsonResponse::<models::CartItem>::build().not_found("not found")),
        })?;

    db::cart::upsert(pg_pool.get_ref(), &user_id, form.product_id, form.quantity)
        .await
        .map(|item| JsonResponse::build().set_item(item).ok("Saved"))
        .map_err(|err| JsonResponse::<models::CartItem>::build().internal_server_error(err))
}

#[tracing::instrument(name = "Get cart.")]
#[get("/cart/{user_id}")]
pub async fn list(
    path: web::Path<(String,)>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let user_id = path.into_inner().0;

    db::cart::fetch_by_user(pg_pool.get_ref(), &user_id)
        .await
        .map(|items| JsonResponse::build().set_list(items).ok("OK"))
        .map_err(|err| JsonResponse::<models::CartItem>::build().internal_server_error(err))
}

#[tracing::instrument(name = "Remove product from cart.")]
#[delete("/cart/{user_id}/{product_id}")]
pub async fn remove(
    path: web::Path<(String, i32)>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let (user_id, product_id) = path.into_inner();

    db::cart::delete(pg_pool.get_ref(), &user_id, product_id)
        .await
        .map_err(|err| JsonResponse::<models::CartItem>::build().internal_server_error(err))
        .and_then(|removed| match removed {
            true => Ok(JsonResponse::<models::CartItem>::build().ok("Removed")),
            false => Err(JsonResponse::<models::CartItem>::build().not_found("not found")),
        })
}
