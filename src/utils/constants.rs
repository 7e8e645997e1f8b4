/// Ruta precalculada: `GET /route?start=...`
pub const ROUTE_PATH: &str = "/route";

/// Hospitales cercanos: `GET /nearby_hospitals?location=...`
pub const HOSPITALS_PATH: &str = "/nearby_hospitals";

/// Contenedores de los mapas en el DOM
pub const BASE_MAP_ID: &str = "base-map";
pub const ROUTE_MAP_ID: &str = "route-map";

pub const START_MARKER_LABEL: &str = "Ambulance Starting Location";
pub const DESTINATION_MARKER_LABEL: &str = "Nearest Hospital";
