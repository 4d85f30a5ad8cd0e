use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{delete, get, post, web, Responder, Result};
use serde_valid::Validate;
use sqlx::PgPool;

#[tracing::instrument(name = "Add museum tag.")]
#[post("")]
pub async fn add(
    form: web::Json<forms::MuseumTagForm>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<models::MuseumTag>::build().form_error(errors.to_string()));
    }

    let form = form.into_inner();
    db::tag::insert_museum_tag(pg_pool.get_ref(), form.kind, form.historical_period)
        .await
        .map(|tag| JsonResponse::build().set_item(tag).ok("Saved"))
        .map_err(|err| JsonResponse::<models::MuseumTag>::build().internal_server_error(err))
}

#[tracing::instrument(name = "List museum tags.")]
#[get("")]
pub async fn list(pg_pool: web::Data<PgPool>) -> Result<impl Responder> {
    db::tag::fetch_museum_tags(pg_pool.get_ref())
        .await
        .map(|tags| JsonResponse::build().set_list(tags).ok("OK"))
        .map_err(|err| JsonResponse::<models::MuseumTag>::build().internal_server_error(err))
}

#[tracing::instrument(name = "Delete museum tag.")]
#[delete("/{id}")]
pub async fn remove(
    path: web::Path<(i32,)>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    db::tag::delete_museum_tag(pg_pool.get_ref(), path.0)
        .await
        .map_err(|err| JsonResponse::<models::MuseumTag>::build().internal_server_error(err))
        .and_then(|deleted| match deleted {
            true => Ok(JsonResponse::<models::MuseumTag>::build().ok("Deleted")),
            false => Err(JsonResponse::<models::MuseumTag>::build().not_found("not found")),
        })
}
