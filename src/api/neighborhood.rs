use serde::{Deserialize, Serialize};

/// The cell hashes adjacent to a center hash.
///
/// A direction is `None` when stepping that way would leave the coordinate
/// range, so cells on the poles and on the antimeridian have partial
/// neighborhoods. Diagonals are present only when both of their cardinal
/// directions are.
///
/// # Example
///
/// ```
/// use geohash_rs::{GeoHasher, GeohashError};
///
/// # fn main() -> Result<(), GeohashError> {
/// let hasher = GeoHasher::base32(3)?;
/// let neighborhood = hasher.neighbors("wtw")?;
///
/// assert_eq!(neighborhood.center, "wtw");
/// assert_eq!(neighborhood.north, Some("wty".to_string()));
/// assert_eq!(neighborhood.southwest, Some("wtm".to_string()));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Neighborhood {
    /// The hash the neighborhood was built around
    pub center: String,
    /// Cell towards the north pole
    pub north: Option<String>,
    /// Cell towards the south pole
    pub south: Option<String>,
    /// Cell towards increasing longitude
    pub east: Option<String>,
    /// Cell towards decreasing longitude
    pub west: Option<String>,
    /// Diagonal cell to the north-west
    pub northwest: Option<String>,
    /// Diagonal cell to the north-east
    pub northeast: Option<String>,
    /// Diagonal cell to the south-west
    pub southwest: Option<String>,
    /// Diagonal cell to the south-east
    pub southeast: Option<String>,
}

impl Neighborhood {
    pub(crate) fn new(center: String) -> Self {
        Self {
            center,
            north: None,
            south: None,
            east: None,
            west: None,
            northwest: None,
            northeast: None,
            southwest: None,
            southeast: None,
        }
    }

    /// Returns the neighborhood as a row-major 3x3 grid, north row first,
    /// with the center hash in the middle slot.
    pub fn to_array(&self) -> [Option<String>; 9] {
        [
            self.northwest.clone(),
            self.north.clone(),
            self.northeast.clone(),
            self.west.clone(),
            Some(self.center.clone()),
            self.east.clone(),
            self.southwest.clone(),
            self.south.clone(),
            self.southeast.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_empty() {
        let neighborhood = Neighborhood::new("wtw".to_string());
        assert_eq!(neighborhood.center, "wtw");
        assert_eq!(neighborhood.north, None);
        assert_eq!(neighborhood.southeast, None);
    }

    #[test]
    fn test_to_array_is_row_major() {
        let mut neighborhood = Neighborhood::new("c".to_string());
        neighborhood.north = Some("n".to_string());
        neighborhood.west = Some("w".to_string());
        neighborhood.southeast = Some("se".to_string());

        let grid = neighborhood.to_array();
        assert_eq!(grid[1], Some("n".to_string()));
        assert_eq!(grid[3], Some("w".to_string()));
        assert_eq!(grid[4], Some("c".to_string()));
        assert_eq!(grid[8], Some("se".to_string()));
        assert_eq!(grid[0], None);
    }
}
