//! Entity <-> SDK model conversions.

use spaces_sdk::{Avatar, Element, MapElement, Space, SpaceElement};

use super::entity::{avatar, element, map_element, space, space_element};

impl From<space::Model> for Space {
    fn from(m: space::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            thumbnail: m.thumbnail,
            width: m.width,
            height: m.height,
            creator_id: m.creator_id,
        }
    }
}

impl From<space_element::Model> for SpaceElement {
    fn from(m: space_element::Model) -> Self {
        Self {
            id: m.id,
            space_id: m.space_id,
            element_id: m.element_id,
            x: m.x,
            y: m.y,
        }
    }
}

impl From<element::Model> for Element {
    fn from(m: element::Model) -> Self {
        Self {
            id: m.id,
            image_url: m.image_url,
            width: m.width,
            height: m.height,
            is_static: m.is_static,
        }
    }
}

impl From<avatar::Model> for Avatar {
    fn from(m: avatar::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            image_url: m.image_url,
        }
    }
}

impl From<map_element::Model> for MapElement {
    fn from(m: map_element::Model) -> Self {
        Self {
            element_id: m.element_id,
            x: m.x,
            y: m.y,
        }
    }
}

pub(super) fn space_active(s: Space) -> space::ActiveModel {
    use sea_orm::Set;

    space::ActiveModel {
        id: Set(s.id),
        name: Set(s.name),
        thumbnail: Set(s.thumbnail),
        width: Set(s.width),
        height: Set(s.height),
        creator_id: Set(s.creator_id),
    }
}

pub(super) fn space_element_active(e: SpaceElement) -> space_element::ActiveModel {
    use sea_orm::Set;

    space_element::ActiveModel {
        id: Set(e.id),
        space_id: Set(e.space_id),
        element_id: Set(e.element_id),
        x: Set(e.x),
        y: Set(e.y),
    }
}
