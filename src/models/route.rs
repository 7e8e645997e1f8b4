use serde::{Deserialize, Serialize};
use std::fmt;
use crate::models::Coordinate;

/// Ruta precalculada devuelta por `GET /route`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteResult {
    pub optimized_time: f64,
    pub non_optimized_time: f64,
    pub start: Coordinate,
    pub destination: Coordinate,
    pub optimized_path: Vec<Coordinate>,
    pub non_optimized_path: Vec<Coordinate>,
}

/// Cuerpo completo de `GET /route`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteResponse {
    pub route: RouteResult,
    /// Anotaciones de tráfico, opacas (no se renderizan todavía)
    #[serde(default)]
    pub traffic: serde_json::Value,
    #[serde(default)]
    pub eta: Eta,
}

/// Ruta + tráfico, se guardan siempre juntos
#[derive(Debug, Clone, PartialEq)]
pub struct RouteOutcome {
    pub route: RouteResult,
    pub traffic: serde_json::Value,
}

impl RouteResponse {
    /// Separar el resultado de la ETA (la ETA sobrevive al reset)
    pub fn into_parts(self) -> (RouteOutcome, Eta) {
        (
            RouteOutcome {
                route: self.route,
                traffic: self.traffic,
            },
            self.eta,
        )
    }
}

/// ETA en minutos, lista para mostrar. El servicio la manda como texto o número.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "EtaWire")]
pub struct Eta(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum EtaWire {
    Text(String),
    Minutes(f64),
    Missing(()),
}

impl From<EtaWire> for Eta {
    fn from(wire: EtaWire) -> Self {
        match wire {
            EtaWire::Text(text) => Eta(text),
            EtaWire::Minutes(minutes) => Eta(minutes.to_string()),
            EtaWire::Missing(()) => Eta::default(),
        }
    }
}

impl Eta {
    pub fn new(text: impl Into<String>) -> Self {
        Eta(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Eta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
