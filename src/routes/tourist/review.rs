use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use crate::views;
use actix_web::{get, post, web, Responder, Result};
use serde_valid::Validate;
use sqlx::PgPool;

/// Activities, itineraries and tour guides live in other services; their
/// reviews share one insert path, dispatched on the target tag. Only
/// product reviews are purchase-gated.
async fn add_for_target(
    target_type: models::ReviewTarget,
    target_id: i32,
    form: forms::ReviewForm,
    pg_pool: &PgPool,
) -> Result<actix_web::HttpResponse> {
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<views::review::Item>::build().form_error(errors.to_string()));
    }

    let review = form.into_review(target_type, target_id);

    db::review::insert(pg_pool, review)
        .await
        .map(|review| {
            JsonResponse::build()
                .set_id(review.id)
                .set_item(views::review::Item::from(review))
                .ok("Saved")
        })
        .map_err(|err| JsonResponse::<views::review::Item>::build().internal_server_error(err))
}

#[tracing::instrument(name = "Add activity review.")]
#[post("/activities/{id}/reviews")]
pub async fn add_activity(
    path: web::Path<(i32,)>,
    form: web::Json<forms::ReviewForm>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    add_for_target(
        models::ReviewTarget::Activity,
        path.0,
        form.into_inner(),
        pg_pool.get_ref(),
    )
    .await
}

#[tracing::instrument(name = "List activity reviews.")]
#[get("/activities/{id}/reviews")]
pub async fn list_activity(
    path: web::Path<(i32,)>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    db::review::fetch_by_target(pg_pool.get_ref(), models::ReviewTarget::Activity, path.0)
        .await
        .map(|reviews| {
            JsonResponse::build()
                .set_item(views::review::Listing::from(reviews))
                .ok("OK")
        })
        .map_err(|err| JsonResponse::<views::review::Listing>::build().internal_server_error(err))
}

#[tracing::instrument(name = "Add itinerary review.")]
#[post("/itineraries/{id}/reviews")]
pub async fn add_itinerary(
    path: web::Path<(i32,)>,
    form: web::Json<forms::ReviewForm>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    add_for_target(
        models::ReviewTarget::Itinerary,
        path.0,
        form.into_inner(),
        pg_pool.get_ref(),
    )
    .await
}

#[tracing::instrument(name = "Add tour guide review.")]
#[post("/tourGuides/{id}/reviews")]
pub async fn add_tour_guide(
    path: web::Path<(i32,)>,
    form: web::Json<forms::ReviewForm>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    add_for_target(
        models::ReviewTarget::TourGuide,
        path.0,
        form.into_inner(),
        pg_pool.get_ref(),
    )
    .await
}
