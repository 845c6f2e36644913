use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Extension, Path, Query, State};
use metaverse_security::SecurityContext;
use spaces_sdk::{ElementPatch, NewAvatar, NewElement, NewMap, NewSpace, NewSpaceElement};
use tracing::debug;
use uuid::Uuid;

use super::dto::{
    AddElementRequest, AvatarsResponse, BulkMetadataQuery, BulkMetadataResponse,
    CreateAvatarRequest, CreateAvatarResponse, CreateElementRequest, CreateMapRequest,
    CreateSpaceRequest, CreateSpaceResponse, CurrentUserResponse, DeleteElementRequest,
    ElementsResponse, GetSpaceResponse, IdResponse, MessageResponse, SpacesListResponse,
    UpdateElementRequest, UpdateMetadataRequest,
};
use super::error::ApiResult;
use crate::domain::service::AppServices;

type Services = State<Arc<AppServices>>;

/// Ids arrive as free-form strings. Anything that is not a UUID becomes the
/// nil id, which matches no row, so the caller sees the same outcome as for
/// an unknown id.
fn parse_id(raw: &str) -> Uuid {
    Uuid::parse_str(raw.trim()).unwrap_or_else(|_| {
        debug!(raw, "malformed id");
        Uuid::nil()
    })
}

pub async fn create_space(
    State(svc): Services,
    Extension(ctx): Extension<SecurityContext>,
    body: Result<Json<CreateSpaceRequest>, JsonRejection>,
) -> ApiResult<Json<CreateSpaceResponse>> {
    let Json(req) = body?;
    let new_space = NewSpace {
        name: req.name,
        dimensions: req.dimensions,
        map_id: req.map_id.as_deref().map(parse_id),
    };
    let space_id = svc.provisioning.create_space(&ctx, new_space).await?;
    Ok(Json(CreateSpaceResponse { space_id }))
}

pub async fn delete_space(
    State(svc): Services,
    Extension(ctx): Extension<SecurityContext>,
    Path(space_id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    svc.spaces.delete_space(&ctx, parse_id(&space_id)).await?;
    Ok(Json(MessageResponse::new("Space deleted")))
}

pub async fn get_space(
    State(svc): Services,
    Extension(ctx): Extension<SecurityContext>,
    Path(space_id): Path<String>,
) -> ApiResult<Json<GetSpaceResponse>> {
    let detail = svc.spaces.get_space(&ctx, parse_id(&space_id)).await?;
    Ok(Json(GetSpaceResponse {
        space: detail.into(),
    }))
}

pub async fn list_spaces(
    State(svc): Services,
    Extension(ctx): Extension<SecurityContext>,
) -> ApiResult<Json<SpacesListResponse>> {
    let spaces = svc.spaces.list_spaces(&ctx).await?;
    Ok(Json(SpacesListResponse {
        spaces: spaces.into_iter().map(Into::into).collect(),
    }))
}

pub async fn add_element(
    State(svc): Services,
    Extension(ctx): Extension<SecurityContext>,
    body: Result<Json<AddElementRequest>, JsonRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Json(req) = body?;
    let new_element = NewSpaceElement {
        space_id: parse_id(&req.space_id),
        element_id: parse_id(&req.element_id),
        x: req.x,
        y: req.y,
    };
    svc.spaces.add_element(&ctx, new_element).await?;
    Ok(Json(MessageResponse::new("Element added to space")))
}

pub async fn delete_element(
    State(svc): Services,
    Extension(ctx): Extension<SecurityContext>,
    body: Result<Json<DeleteElementRequest>, JsonRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Json(req) = body?;
    svc.spaces.delete_element(&ctx, parse_id(&req.id)).await?;
    Ok(Json(MessageResponse::new("Element deleted")))
}

pub async fn list_elements(State(svc): Services) -> ApiResult<Json<ElementsResponse>> {
    let elements = svc.catalog.list_elements().await?;
    Ok(Json(ElementsResponse {
        elements: elements.into_iter().map(Into::into).collect(),
    }))
}

pub async fn list_avatars(State(svc): Services) -> ApiResult<Json<AvatarsResponse>> {
    let avatars = svc.catalog.list_avatars().await?;
    Ok(Json(AvatarsResponse {
        avatars: avatars.into_iter().map(Into::into).collect(),
    }))
}

// ── Users ───────────────────────────────────────────────────────────

pub async fn update_metadata(
    State(svc): Services,
    Extension(ctx): Extension<SecurityContext>,
    body: Result<Json<UpdateMetadataRequest>, JsonRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Json(req) = body?;
    svc.users.update_avatar(&ctx, parse_id(&req.avatar_id)).await?;
    Ok(Json(MessageResponse::new("Metadata updated")))
}

pub async fn bulk_metadata(
    State(svc): Services,
    Query(query): Query<BulkMetadataQuery>,
) -> ApiResult<Json<BulkMetadataResponse>> {
    let found = svc.users.user_avatars(&query.user_ids()).await?;
    Ok(Json(BulkMetadataResponse {
        avatars: found.into_iter().map(Into::into).collect(),
    }))
}

pub async fn current_user(
    State(svc): Services,
    Extension(ctx): Extension<SecurityContext>,
) -> ApiResult<Json<CurrentUserResponse>> {
    let user = svc.users.current_user(&ctx).await?;
    Ok(Json(user.into()))
}

// ── Admin ───────────────────────────────────────────────────────────

pub async fn create_element(
    State(svc): Services,
    Extension(ctx): Extension<SecurityContext>,
    body: Result<Json<CreateElementRequest>, JsonRejection>,
) -> ApiResult<Json<IdResponse>> {
    let Json(req) = body?;
    let id = svc
        .catalog
        .create_element(
            &ctx,
            NewElement {
                image_url: req.image_url,
                width: req.width,
                height: req.height,
                is_static: req.is_static,
            },
        )
        .await?;
    Ok(Json(IdResponse { id }))
}

pub async fn update_element(
    State(svc): Services,
    Extension(ctx): Extension<SecurityContext>,
    Path(element_id): Path<String>,
    body: Result<Json<UpdateElementRequest>, JsonRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Json(req) = body?;
    svc.catalog
        .update_element(
            &ctx,
            parse_id(&element_id),
            ElementPatch {
                image_url: req.image_url,
            },
        )
        .await?;
    Ok(Json(MessageResponse::new("Element updated successfully")))
}

pub async fn create_avatar(
    State(svc): Services,
    Extension(ctx): Extension<SecurityContext>,
    body: Result<Json<CreateAvatarRequest>, JsonRejection>,
) -> ApiResult<Json<CreateAvatarResponse>> {
    let Json(req) = body?;
    let avatar_id = svc
        .catalog
        .create_avatar(
            &ctx,
            NewAvatar {
                name: req.name,
                image_url: req.image_url,
            },
        )
        .await?;
    Ok(Json(CreateAvatarResponse { avatar_id }))
}

pub async fn create_map(
    State(svc): Services,
    Extension(ctx): Extension<SecurityContext>,
    body: Result<Json<CreateMapRequest>, JsonRejection>,
) -> ApiResult<Json<IdResponse>> {
    let Json(req) = body?;
    let id = svc
        .catalog
        .create_map(
            &ctx,
            NewMap {
                name: req.name,
                thumbnail: req.thumbnail,
                dimensions: req.dimensions,
                default_elements: req.default_elements.into_iter().map(Into::into).collect(),
            },
        )
        .await?;
    Ok(Json(IdResponse { id }))
}
