// ============================================================================
// ROUTE VIEW STATE - Snapshot inmutable + transiciones puras
// ============================================================================
// Cada operación de la vista es una función `&self -> Self`.
// Nada aquí toca el navegador ni la red.
// ============================================================================

use std::fmt;
use crate::models::{Coordinate, Eta, Hospital, RouteOutcome, RouteResponse};

/// Estado completo de la vista de rutas
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RouteViewState {
    pub start_location: String,
    pub route: Option<RouteOutcome>,
    pub eta: Eta,
    pub dark_mode: bool,
    pub hospitals: Vec<Hospital>,
}

impl RouteViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Posición obtenida por geolocalización
    pub fn with_located_start(&self, position: Coordinate) -> Self {
        self.with_start_location(position.to_string())
    }

    /// Texto tecleado por el usuario (se guarda tal cual)
    pub fn with_start_location(&self, text: impl Into<String>) -> Self {
        Self {
            start_location: text.into(),
            ..self.clone()
        }
    }

    /// Respuesta de ruta exitosa: ruta, tráfico y ETA se reemplazan juntos
    pub fn with_route_response(&self, response: RouteResponse) -> Self {
        let (outcome, eta) = response.into_parts();
        Self {
            route: Some(outcome),
            eta,
            ..self.clone()
        }
    }

    /// Búsqueda de hospitales exitosa: la lista se reemplaza entera
    pub fn with_hospitals(&self, hospitals: Vec<Hospital>) -> Self {
        Self {
            hospitals,
            ..self.clone()
        }
    }

    pub fn toggled_dark_mode(&self) -> Self {
        Self {
            dark_mode: !self.dark_mode,
            ..self.clone()
        }
    }

    /// Home/Route: limpia ruta, ubicación y hospitales. ETA y dark mode se quedan.
    pub fn reset(&self) -> Self {
        Self {
            start_location: String::new(),
            route: None,
            hospitals: Vec::new(),
            ..self.clone()
        }
    }

    /// El formulario solo se muestra mientras no hay ruta
    pub fn shows_route_form(&self) -> bool {
        self.route.is_none()
    }

    pub fn has_hospitals(&self) -> bool {
        !self.hospitals.is_empty()
    }
}

/// Qué acción necesitaba la ubicación de partida
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    MissingRouteStart,
    MissingSearchLocation,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingRouteStart => {
                write!(f, "Please enter the ambulance's starting location.")
            }
            ValidationError::MissingSearchLocation => write!(f, "Please enter a location first."),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Solo se rechaza el texto vacío; espacios cuentan como entrada
pub fn require_location(location: &str, missing: ValidationError) -> Result<&str, ValidationError> {
    if location.is_empty() {
        Err(missing)
    } else {
        Ok(location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::sample_response;

    #[test]
    fn test_initial_state_is_empty() {
        let state = RouteViewState::new();
        assert_eq!(state.start_location, "");
        assert!(state.route.is_none());
        assert!(state.eta.is_empty());
        assert!(!state.dark_mode);
        assert!(state.hospitals.is_empty());
        assert!(state.shows_route_form());
    }

    #[test]
    fn test_located_start_is_formatted() {
        let state = RouteViewState::new().with_located_start(Coordinate::new(51.505, -0.09));
        assert_eq!(state.start_location, "51.505, -0.09");
    }

    #[test]
    fn test_route_response_is_stored_unmodified() {
        let response = sample_response("15");
        let state = RouteViewState::new()
            .with_start_location("123 Main St")
            .with_route_response(response.clone());

        let outcome = state.route.as_ref().unwrap();
        assert_eq!(outcome.route, response.route);
        assert_eq!(outcome.traffic, response.traffic);
        assert_eq!(state.eta, Eta::new("15"));
        assert_eq!(state.start_location, "123 Main St");
        assert!(!state.shows_route_form());
    }

    #[test]
    fn test_reset_keeps_eta_and_dark_mode() {
        let state = RouteViewState::new()
            .with_start_location("51.5, -0.1")
            .with_route_response(sample_response("15"))
            .with_hospitals(vec![Hospital::named("Royal London")])
            .toggled_dark_mode();

        let reset = state.reset();
        assert_eq!(reset.start_location, "");
        assert!(reset.route.is_none());
        assert!(reset.hospitals.is_empty());
        assert_eq!(reset.eta, Eta::new("15"));
        assert!(reset.dark_mode);
        assert!(reset.shows_route_form());
    }

    #[test]
    fn test_toggle_dark_mode_twice_is_identity() {
        let state = RouteViewState::new()
            .with_start_location("somewhere")
            .with_hospitals(vec![Hospital::named("A")]);

        let once = state.toggled_dark_mode();
        assert!(once.dark_mode);
        assert_eq!(once.hospitals, state.hospitals);
        assert_eq!(once.start_location, state.start_location);

        assert_eq!(once.toggled_dark_mode(), state);
    }

    #[test]
    fn test_hospitals_are_replaced_wholesale() {
        let state = RouteViewState::new()
            .with_hospitals(vec![Hospital::named("A"), Hospital::named("B")])
            .with_hospitals(vec![Hospital::named("C")]);
        assert_eq!(state.hospitals, vec![Hospital::named("C")]);
        assert!(state.has_hospitals());
    }

    #[test]
    fn test_later_arrival_overwrites_earlier_one() {
        let first = sample_response("15");
        let mut second = sample_response("9");
        second.route.optimized_time = 7.0;

        // la segunda respuesta llega antes que la primera
        let state = RouteViewState::new()
            .with_route_response(second)
            .with_route_response(first.clone());

        assert_eq!(state.route.unwrap().route, first.route);
        assert_eq!(state.eta, Eta::new("15"));
    }

    #[test]
    fn test_require_location() {
        assert_eq!(
            require_location("", ValidationError::MissingRouteStart),
            Err(ValidationError::MissingRouteStart)
        );
        assert_eq!(require_location(" ", ValidationError::MissingRouteStart), Ok(" "));
        assert_eq!(
            ValidationError::MissingSearchLocation.to_string(),
            "Please enter a location first."
        );
    }
}
