use serde_json::json;
use crate::models::{Coordinate, Eta, RouteResponse, RouteResult};

/// Respuesta de ruta de ejemplo (Londres, dos caminos)
pub(crate) fn sample_response(eta: &str) -> RouteResponse {
    RouteResponse {
        route: RouteResult {
            optimized_time: 12.0,
            non_optimized_time: 20.0,
            start: Coordinate::new(51.5, -0.1),
            destination: Coordinate::new(51.6, -0.12),
            optimized_path: vec![Coordinate::new(51.5, -0.1), Coordinate::new(51.6, -0.12)],
            non_optimized_path: vec![
                Coordinate::new(51.5, -0.1),
                Coordinate::new(51.55, -0.11),
                Coordinate::new(51.6, -0.12),
            ],
        },
        traffic: json!({ "level": "heavy" }),
        eta: Eta::new(eta),
    }
}
