use crate::model::{Crs, SdgError};

/// no reprojection is done, so two geometry sets must share a crs before
/// they are compared. a known mismatch is an error, an unknown crs only
/// warrants a warning.
pub fn ensure_same_crs(left_name: &str, left: Crs, right_name: &str, right: Crs) -> Result<(), SdgError> {
    if left.conflicts_with(&right) {
        return Err(SdgError::CrsMismatch {
            left_name: left_name.to_string(),
            left,
            right_name: right_name.to_string(),
            right,
        });
    }
    if left == Crs::Unknown || right == Crs::Unknown {
        log::warn!(
            "cannot confirm that {left_name} ({left}) and {right_name} ({right}) share a coordinate system"
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BRITISH_NATIONAL_GRID, WGS84};

    #[test]
    fn test_ensure_same_crs() {
        assert!(ensure_same_crs("stops", BRITISH_NATIONAL_GRID, "centroids", BRITISH_NATIONAL_GRID).is_ok());
        assert!(ensure_same_crs("stops", BRITISH_NATIONAL_GRID, "centroids", Crs::Unknown).is_ok());
        assert!(matches!(
            ensure_same_crs("stops", WGS84, "boundaries", BRITISH_NATIONAL_GRID),
            Err(SdgError::CrsMismatch { .. })
        ));
    }
}
