use serde::{Deserialize, Serialize};
use std::fmt;

/// Par latitud/longitud. En el wire viaja como `[lat, lon]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Formato `[lat, lon]` que espera Leaflet
    pub fn as_lat_lng(&self) -> [f64; 2] {
        [self.latitude, self.longitude]
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from(pair: [f64; 2]) -> Self {
        Self::new(pair[0], pair[1])
    }
}

impl From<Coordinate> for [f64; 2] {
    fn from(coordinate: Coordinate) -> Self {
        coordinate.as_lat_lng()
    }
}

/// `"<lat>, <lon>"`, el texto que se usa como ubicación de partida
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_from_pair() {
        let coordinate: Coordinate = serde_json::from_str("[51.5, -0.1]").unwrap();
        assert_eq!(coordinate, Coordinate::new(51.5, -0.1));
    }

    #[test]
    fn test_serializes_as_pair() {
        let json = serde_json::to_string(&Coordinate::new(51.6, -0.12)).unwrap();
        assert_eq!(json, "[51.6,-0.12]");
    }

    #[test]
    fn test_display_matches_start_location_format() {
        assert_eq!(Coordinate::new(51.505, -0.09).to_string(), "51.505, -0.09");
    }
}
