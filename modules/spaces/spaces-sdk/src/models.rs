use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use metaverse_security::Role;
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

static DIMENSIONS_RE: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^([0-9]{1,4})x([0-9]{1,4})$"));

/// Canvas size written as `WxH`, each side 1–4 decimal digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Dimensions {
    pub width: i32,
    pub height: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("dimensions must look like `WxH` with 1-4 digits per side, got `{0}`")]
pub struct DimensionsParseError(pub String);

impl Dimensions {
    #[must_use]
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Inclusive bounds check: the edges themselves are inside.
    #[must_use]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x <= self.width && y <= self.height
    }
}

impl FromStr for Dimensions {
    type Err = DimensionsParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || DimensionsParseError(s.to_owned());
        let re = DIMENSIONS_RE.as_ref().map_err(|_| err())?;
        let caps = re.captures(s).ok_or_else(err)?;
        let width = caps[1].parse().map_err(|_| err())?;
        let height = caps[2].parse().map_err(|_| err())?;
        Ok(Self { width, height })
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl TryFrom<String> for Dimensions {
    type Error = DimensionsParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Dimensions> for String {
    fn from(value: Dimensions) -> Self {
        value.to_string()
    }
}

/// A bounded canvas owned by its creator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Space {
    pub id: Uuid,
    pub name: String,
    pub thumbnail: Option<String>,
    pub width: i32,
    pub height: i32,
    pub creator_id: Uuid,
}

impl Space {
    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }
}

/// Input for space creation.
///
/// `dimensions` stays raw so malformed input surfaces as a validation error
/// from the service. It is ignored when `map_id` is set.
#[derive(Debug, Clone)]
pub struct NewSpace {
    pub name: String,
    pub dimensions: String,
    pub map_id: Option<Uuid>,
}

/// A placed instance of a catalog element inside a space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpaceElement {
    pub id: Uuid,
    pub space_id: Uuid,
    pub element_id: Uuid,
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone)]
pub struct NewSpaceElement {
    pub space_id: Uuid,
    pub element_id: Uuid,
    pub x: i32,
    pub y: i32,
}

/// Placed element joined with its catalog definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedElement {
    pub id: Uuid,
    pub x: i32,
    pub y: i32,
    pub element: Element,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpaceDetail {
    pub space: Space,
    pub elements: Vec<PlacedElement>,
}

/// Catalog element definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub id: Uuid,
    pub image_url: String,
    pub width: i32,
    pub height: i32,
    /// Non-interactive background element.
    pub is_static: bool,
}

#[derive(Debug, Clone)]
pub struct NewElement {
    pub image_url: String,
    pub width: i32,
    pub height: i32,
    pub is_static: bool,
}

#[derive(Debug, Clone)]
pub struct ElementPatch {
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Avatar {
    pub id: Uuid,
    pub name: String,
    pub image_url: String,
}

#[derive(Debug, Clone)]
pub struct NewAvatar {
    pub name: String,
    pub image_url: String,
}

/// One default placement of a map template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapElement {
    pub element_id: Uuid,
    pub x: i32,
    pub y: i32,
}

/// Reusable template: canvas size plus ordered default placements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapTemplate {
    pub id: Uuid,
    pub name: String,
    pub thumbnail: String,
    pub width: i32,
    pub height: i32,
    pub default_elements: Vec<MapElement>,
}

#[derive(Debug, Clone)]
pub struct NewMap {
    pub name: String,
    pub thumbnail: String,
    pub dimensions: String,
    pub default_elements: Vec<MapElement>,
}

/// Avatar choice of one user, as returned by bulk metadata lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAvatar {
    pub user_id: Uuid,
    /// Image of the chosen avatar; `None` when none was chosen.
    pub image_url: Option<String>,
}

/// The caller's identity plus their stored metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: Uuid,
    pub role: Role,
    pub avatar_image_url: Option<String>,
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_dimensions() {
        for (raw, w, h) in [("200x150", 200, 150), ("1x1", 1, 1), ("9999x0", 9999, 0), ("0100x7", 100, 7)] {
            let d: Dimensions = raw.parse().unwrap();
            assert_eq!((d.width, d.height), (w, h), "{raw}");
        }
    }

    #[test]
    fn rejects_malformed_dimensions() {
        for raw in ["", "100", "x100", "100x", "10000x1", "1x10000", "-1x5", "1 x 1", "1X1", "1x1x1", "axb"] {
            assert!(raw.parse::<Dimensions>().is_err(), "{raw}");
        }
    }

    #[test]
    fn display_matches_wire_format() {
        assert_eq!(Dimensions::new(50, 40).to_string(), "50x40");
    }

    #[test]
    fn serde_uses_string_form() {
        let json = serde_json::to_string(&Dimensions::new(3, 4)).unwrap();
        assert_eq!(json, "\"3x4\"");
        let back: Dimensions = serde_json::from_str("\"12x34\"").unwrap();
        assert_eq!(back, Dimensions::new(12, 34));
        assert!(serde_json::from_str::<Dimensions>("\"12-34\"").is_err());
    }

    #[test]
    fn bounds_are_inclusive() {
        let d = Dimensions::new(100, 100);
        assert!(d.contains(0, 0));
        assert!(d.contains(100, 100));
        assert!(!d.contains(101, 100));
        assert!(!d.contains(100, 101));
        assert!(!d.contains(-1, 0));
        assert!(!d.contains(0, -1));
    }
}
