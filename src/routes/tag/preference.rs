use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{delete, get, post, web, Responder, Result};
use serde_valid::Validate;
use sqlx::PgPool;

#[tracing::instrument(name = "Add preference tag.")]
#[post("")]
pub async fn add(
    form: web::Json<forms::PreferenceTagForm>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<models::PreferenceTag>::build().form_error(errors.to_string()));
    }

    db::tag::insert_preference_tag(
        pg_pool.get_ref(),
        &form.name,
        form.description.as_deref().unwrap_or_default(),
    )
    .await
    .map(|tag| JsonResponse::build().set_item(tag).ok("Saved"))
    .map_err(|err| JsonResponse::<models::PreferenceTag>::build().internal_server_error(err))
}

#[tracing::instrument(name = "List preference tags.")]
#[get("")]
pub async fn list(pg_pool: web::Data<PgPool>) -> Result<impl Responder> {
    db::tag::fetch_preference_tags(pg_pool.get_ref())
        .await
        .map(|tags| JsonResponse::build().set_list(tags).ok("OK"))
        .map_err(|err| JsonResponse::<models::PreferenceTag>::build().internal_server_error(err))
}

#[tracing::instrument(name = "Delete preference tag.")]
#[delete("/{id}")]
pub async fn remove(
    path: web::Path<(i32,)>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    db::tag::delete_preference_tag(pg_pool.get_ref(), path.0)
        .await
        .map_err(|err| JsonResponse::<models::PreferenceTag>::build().internal_server_error(err))
        .and_then(|deleted| match deleted {
            true => Ok(JsonResponse::<models::PreferenceTag>::build().ok("Deleted")),
            false => Err(JsonResponse::<models::PreferenceTag>::build().not_found("not found")),
        })
}
