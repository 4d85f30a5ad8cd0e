use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use crate::views;
use actix_web::{get, post, web, Responder, Result};
use serde_valid::Validate;
use sqlx::PgPool;

/// Purchase-gated: the gate is enforced here, not only in the UI.
#[tracing::instrument(name = "Add product review.")]
#[post("/{id}/reviews")]
pub async fn add(
    path: web::Path<(i32,)>,
    form: web::Json<forms::ReviewForm>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let product_id = path.0;
    db::product::fetch(pg_pool.get_ref(), product_id)
        .await
        .map_err(|err| JsonResponse::<views::review::Item>::build().internal_server_error(err))
        .and_then(|product| match product {
            Some(product) => Ok(product),
            None => Err(JsonResponse::<views::review::Item>::build().not_found("not found")),
        })?;

    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<views::review::Item>::build().form_error(errors.to_string()));
    }

    let purchased = db::purchase::exists(pg_pool.get_ref(), &form.user_id, product_id)
        .await
        .map_err(|err| JsonResponse::<views::review::Item>::build().internal_server_error(err))?;
    if !purchased {
        return Err(JsonResponse::<views::review::Item>::build()
            .forbidden("No purchase record for this product"));
    }

    let review = form
        .into_inner()
        .into_review(models::ReviewTarget::Product, product_id);

    let review = db::review::insert(pg_pool.get_ref(), review)
        .await
        .map_err(|err| JsonResponse::<views::review::Item>::build().internal_server_error(err))?;

    // Recompute the stored aggregate from the full review list.
    db::product::refresh_rating(pg_pool.get_ref(), product_id)
        .await
        .map_err(|err| JsonResponse::<views::review::Item>::build().internal_server_error(err))?;

    Ok(JsonResponse::build()
        .set_id(review.id)
        .set_item(views::review::Item::from(review))
        .ok("Saved"))
}

#[tracing::instrument(name = "List product reviews.")]
#[get("/{id}/reviews")]
pub async fn list(
    path: web::Path<(i32,)>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let product_id = path.0;
    db::review::fetch_by_target(pg_pool.get_ref(), models::ReviewTarget::Product, product_id)
        .await
        .map(|reviews| {
            JsonResponse::build()
                .set_item(views::review::Listing::from(reviews))
                .ok("OK")
        })
        .map_err(|err| JsonResponse::<views::review::Listing>::build().internal_server_error(err))
}
