//! Wire types. Field names are camelCase on the wire.

use serde::{Deserialize, Serialize};
use spaces_sdk::{
    Avatar, CurrentUser, Element, MapElement, PlacedElement, Space, SpaceDetail, UserAvatar,
};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct IdResponse {
    pub id: Uuid,
}

// ── Spaces ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSpaceRequest {
    pub name: String,
    pub dimensions: String,
    #[serde(default)]
    pub map_id: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSpaceResponse {
    pub space_id: Uuid,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddElementRequest {
    pub space_id: String,
    pub element_id: String,
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeleteElementRequest {
    pub id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SpaceSummaryDto {
    pub id: Uuid,
    pub name: String,
    pub thumbnail: Option<String>,
    pub dimensions: String,
}

impl From<Space> for SpaceSummaryDto {
    fn from(s: Space) -> Self {
        Self {
            dimensions: s.dimensions().to_string(),
            id: s.id,
            name: s.name,
            thumbnail: s.thumbnail,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SpacesListResponse {
    pub spaces: Vec<SpaceSummaryDto>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlacedElementDto {
    pub id: Uuid,
    pub x: i32,
    pub y: i32,
    pub element: ElementDto,
}

impl From<PlacedElement> for PlacedElementDto {
    fn from(p: PlacedElement) -> Self {
        Self {
            id: p.id,
            x: p.x,
            y: p.y,
            element: p.element.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SpaceDetailDto {
    pub id: Uuid,
    pub name: String,
    pub thumbnail: Option<String>,
    pub dimensions: String,
    pub elements: Vec<PlacedElementDto>,
}

impl From<SpaceDetail> for SpaceDetailDto {
    fn from(d: SpaceDetail) -> Self {
        Self {
            dimensions: d.space.dimensions().to_string(),
            id: d.space.id,
            name: d.space.name,
            thumbnail: d.space.thumbnail,
            elements: d.elements.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GetSpaceResponse {
    pub space: SpaceDetailDto,
}

// ── Catalog ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementDto {
    pub id: Uuid,
    pub image_url: String,
    pub width: i32,
    pub height: i32,
    #[serde(rename = "static")]
    pub is_static: bool,
}

impl From<Element> for ElementDto {
    fn from(e: Element) -> Self {
        Self {
            id: e.id,
            image_url: e.image_url,
            width: e.width,
            height: e.height,
            is_static: e.is_static,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ElementsResponse {
    pub elements: Vec<ElementDto>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvatarDto {
    pub id: Uuid,
    pub name: String,
    pub image_url: String,
}

impl From<Avatar> for AvatarDto {
    fn from(a: Avatar) -> Self {
        Self {
            id: a.id,
            name: a.name,
            image_url: a.image_url,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AvatarsResponse {
    pub avatars: Vec<AvatarDto>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateElementRequest {
    pub image_url: String,
    pub width: i32,
    pub height: i32,
    #[serde(rename = "static", default)]
    pub is_static: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateElementRequest {
    pub image_url: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAvatarRequest {
    pub name: String,
    pub image_url: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAvatarResponse {
    pub avatar_id: Uuid,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapElementDto {
    pub element_id: Uuid,
    pub x: i32,
    pub y: i32,
}

impl From<MapElementDto> for MapElement {
    fn from(d: MapElementDto) -> Self {
        Self {
            element_id: d.element_id,
            x: d.x,
            y: d.y,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMapRequest {
    pub name: String,
    pub thumbnail: String,
    pub dimensions: String,
    #[serde(default)]
    pub default_elements: Vec<MapElementDto>,
}

// ── Users ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMetadataRequest {
    pub avatar_id: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BulkMetadataQuery {
    /// `[id1,id2,...]`; brackets are optional.
    pub ids: Option<String>,
}

impl BulkMetadataQuery {
    /// Well-formed ids in request order. Malformed entries are dropped.
    #[must_use]
    pub fn user_ids(&self) -> Vec<Uuid> {
        let raw = self.ids.as_deref().unwrap_or_default().trim();
        let raw = raw.strip_prefix('[').unwrap_or(raw);
        let raw = raw.strip_suffix(']').unwrap_or(raw);
        raw.split(',')
            .filter_map(|part| Uuid::parse_str(part.trim().trim_matches('"')).ok())
            .collect()
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAvatarDto {
    pub user_id: Uuid,
    /// Image URL of the chosen avatar, under its historical key.
    pub avatar_id: Option<String>,
}

impl From<UserAvatar> for UserAvatarDto {
    fn from(u: UserAvatar) -> Self {
        Self {
            user_id: u.user_id,
            avatar_id: u.image_url,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BulkMetadataResponse {
    pub avatars: Vec<UserAvatarDto>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUserResponse {
    pub id: Uuid,
    pub avatar_id: Option<String>,
    #[serde(rename = "type")]
    pub role: String,
}

impl From<CurrentUser> for CurrentUserResponse {
    fn from(u: CurrentUser) -> Self {
        Self {
            id: u.id,
            avatar_id: u.avatar_image_url,
            role: u.role.to_string(),
        }
    }
}
