//! Spaces SDK
//!
//! - [`SpacesClientV1`] - in-process client for other modules
//! - [`models`] - spaces, placed elements, catalog entries, map templates and
//!   user avatar metadata
//! - [`SpacesError`] - errors surfaced to SDK consumers
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod api;
pub mod errors;
pub mod models;

pub use api::SpacesClientV1;
pub use errors::SpacesError;
pub use models::{
    Avatar, CurrentUser, Dimensions, DimensionsParseError, Element, ElementPatch, MapElement,
    MapTemplate, NewAvatar, NewElement, NewMap, NewSpace, NewSpaceElement, PlacedElement, Space,
    SpaceDetail, SpaceElement, UserAvatar,
};
