//! Placement rules for elements inside a space.

use spaces_sdk::{Dimensions, Space};

use crate::domain::error::DomainError;

/// Fails iff `x < 0 || y < 0 || x > width || y > height`.
pub fn validate_placement(space: &Space, x: i32, y: i32) -> Result<(), DomainError> {
    validate_within(space.width, space.height, x, y)
}

/// Same rule against bare bounds (used for map template entries).
pub fn validate_within(width: i32, height: i32, x: i32, y: i32) -> Result<(), DomainError> {
    if !Dimensions::new(width, height).contains(x, y) {
        return Err(DomainError::OutOfBounds {
            x,
            y,
            width,
            height,
        });
    }
    Ok(())
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn space(width: i32, height: i32) -> Space {
        Space {
            id: Uuid::now_v7(),
            name: "room".to_owned(),
            thumbnail: None,
            width,
            height,
            creator_id: Uuid::now_v7(),
        }
    }

    #[test]
    fn edge_is_inside() {
        let s = space(100, 100);
        assert!(validate_placement(&s, 100, 100).is_ok());
        assert!(validate_placement(&s, 0, 0).is_ok());
    }

    #[test]
    fn past_the_edge_is_out_of_bounds() {
        let s = space(100, 100);
        for (x, y) in [(101, 0), (0, 101), (-1, 0), (0, -1)] {
            let err = validate_placement(&s, x, y).unwrap_err();
            assert!(
                matches!(err, DomainError::OutOfBounds { width: 100, height: 100, .. }),
                "({x}, {y})"
            );
        }
    }
}
