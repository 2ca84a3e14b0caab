//! Handlers for items: the leaf entities with an image and a JSON property blob.

use axum::extract::State;
use axum::Json;
use planboard_core::property::{validate_property, EMPTY_PROPERTY};
use planboard_core::types::DbId;
use planboard_db::models::item::{CreateItem, UpdateItem};
use planboard_db::repositories::ItemRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::extract::{AppPath, FormData};
use crate::response::Ack;
use crate::state::AppState;
use crate::upload::store_image;

/// Name and raw property text of one item.
#[derive(Debug, Serialize)]
pub struct ItemProperty {
    pub name: String,
    pub property: String,
}

/// Response of `GET /item/{id}/property`.
///
/// A missing item is reported in-band with `success: false`, not as a 404.
#[derive(Debug, Serialize)]
pub struct PropertyResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<ItemProperty>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
}

/// Read the `property` field. An absent field means an empty object; anything
/// sent must parse as JSON, so an empty string is refused.
fn property_field(form: &FormData) -> AppResult<String> {
    match form.text("property") {
        None => Ok(EMPTY_PROPERTY.to_string()),
        Some(raw) => {
            validate_property(raw)?;
            Ok(raw.to_string())
        }
    }
}

/// POST /create
///
/// Multipart (or urlencoded) form with `name`, optional `property` and an
/// optional `image` file. Refused or missing images fall back to the
/// configured placeholder.
pub async fn create(State(state): State<AppState>, form: FormData) -> AppResult<Json<Ack>> {
    let name = form.required("name")?.to_string();
    let property = property_field(&form)?;

    let upload = &state.config.upload;
    let image_url = store_image(upload, form.file("image"))
        .await?
        .unwrap_or_else(|| upload.default_image.clone());

    let item = ItemRepo::create(
        &state.pool,
        &CreateItem {
            name,
            image_url,
            property,
        },
    )
    .await?;
    tracing::info!(item_id = item.id, image_url = %item.image_url, "Item created");

    Ok(Json(Ack::ok()))
}

/// POST /edit
///
/// Without a new accepted image the stored `image_url` is kept. The property
/// is always rewritten, to `{}` when the field is absent.
pub async fn edit(State(state): State<AppState>, form: FormData) -> AppResult<Json<Ack>> {
    let id = form.required_id("id")?;
    let name = form.required("name")?.to_string();
    let property = property_field(&form)?;

    let upload = &state.config.upload;
    let image_url = match store_image(upload, form.file("image")).await? {
        Some(url) => url,
        None => ItemRepo::find_image_url(&state.pool, id)
            .await?
            .unwrap_or_else(|| upload.default_image.clone()),
    };

    let updated = ItemRepo::update(
        &state.pool,
        id,
        &UpdateItem {
            name,
            image_url,
            property,
        },
    )
    .await?;

    if updated {
        tracing::info!(item_id = id, "Item updated");
    } else {
        tracing::warn!(item_id = id, "Edit matched no item");
    }

    Ok(Json(Ack::ok()))
}

/// GET /item/{id}/property
pub async fn get_property(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<PropertyResponse>> {
    let item = ItemRepo::find_by_id(&state.pool, id).await?;

    let response = match item {
        Some(item) if item.property.as_deref().is_some_and(|p| !p.is_empty()) => {
            PropertyResponse {
                success: true,
                item: Some(ItemProperty {
                    name: item.name,
                    property: item.property.unwrap_or_default(),
                }),
                error: None,
            }
        }
        _ => PropertyResponse {
            success: false,
            item: None,
            error: Some("No property found."),
        },
    };
    Ok(Json(response))
}

/// POST /delete
///
/// Deleting an id that does not exist still succeeds.
pub async fn delete(State(state): State<AppState>, form: FormData) -> AppResult<Json<Ack>> {
    let id = form.required_id("id")?;

    let deleted = ItemRepo::delete(&state.pool, id).await?;
    tracing::info!(item_id = id, deleted, "Item delete requested");

    Ok(Json(Ack::ok()))
}
