use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use crate::views;
use actix_web::{post, web, Responder, Result};
use serde_valid::Validate;
use sqlx::PgPool;

#[tracing::instrument(name = "Add product.")]
#[post("")]
pub async fn item(
    form: web::Json<forms::ProductForm>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<views::product::Admin>::build().form_error(errors.to_string()));
    }
    if let Some(err) = form.image_error() {
        return Err(JsonResponse::<views::product::Admin>::build().form_error(err));
    }

    let product: models::Product = (&*form).into();

    db::product::insert(pg_pool.get_ref(), product)
        .await
        .map(|product| {
            JsonResponse::build()
                .set_id(product.id)
                .set_item(views::product::Admin::from(product))
                .ok("Saved")
        })
        .map_err(|err| JsonResponse::<views::product::Admin>::build().internal_server_error(err))
}
