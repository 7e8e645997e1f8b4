use serde::{Deserialize, Serialize};

/// Hospital cercano. Solo se muestra `name`, el resto se conserva tal cual.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hospital {
    pub name: String,
    #[serde(flatten)]
    pub details: serde_json::Map<String, serde_json::Value>,
}

impl Hospital {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            details: serde_json::Map::new(),
        }
    }
}

/// Cuerpo de `GET /nearby_hospitals`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HospitalsResponse {
    pub hospitals: Vec<Hospital>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extra_fields_are_passed_through() {
        let body = json!({
            "hospitals": [
                { "name": "St Thomas' Hospital", "distance_km": 1.2, "beds": 840 },
                { "name": "Guy's Hospital" }
            ]
        });

        let response: HospitalsResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.hospitals.len(), 2);
        assert_eq!(response.hospitals[0].name, "St Thomas' Hospital");
        assert_eq!(response.hospitals[0].details.get("beds"), Some(&json!(840)));
        assert!(response.hospitals[1].details.is_empty());
    }

    #[test]
    fn test_order_is_preserved() {
        let body = json!({ "hospitals": [{ "name": "B" }, { "name": "A" }, { "name": "C" }] });
        let response: HospitalsResponse = serde_json::from_value(body).unwrap();
        let names: Vec<_> = response.hospitals.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_hospital_without_name_is_rejected() {
        let body = json!({ "hospitals": [{ "distance_km": 2.0 }] });
        assert!(serde_json::from_value::<HospitalsResponse>(body).is_err());
    }
}
