use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use crate::views;
use actix_web::{put, web, Responder, Result};
use serde_valid::Validate;
use sqlx::PgPool;

#[tracing::instrument(name = "Update product.")]
#[put("/{id}")]
pub async fn item(
    path: web::Path<(i32,)>,
    form: web::Json<forms::ProductForm>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let id = path.0;
    let product_row = db::product::fetch(pg_pool.get_ref(), id)
        .await
        .map_err(|err| JsonResponse::<views::product::Admin>::build().internal_server_error(err))
        .and_then(|product| match product {
            Some(product) => Ok(product),
            None => Err(JsonResponse::<views::product::Admin>::build().not_found("not found")),
        })?;

    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<views::product::Admin>::build().form_error(errors.to_string()));
    }
    if let Some(err) = form.image_error() {
        return Err(JsonResponse::<views::product::Admin>::build().form_error(err));
    }

    // Full-document PUT; archive state and counters stay as they are.
    let mut product: models::Product = (&*form).into();
    product.id = product_row.id;
    product.owner_id = product_row.owner_id;

    db::product::update(pg_pool.get_ref(), product)
        .await
        .map(|product| {
            JsonResponse::build()
                .set_item(views::product::Admin::from(product))
                .ok("Saved")
        })
        .map_err(|err| JsonResponse::<views::product::Admin>::build().internal_server_error(err))
}
