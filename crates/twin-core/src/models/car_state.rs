//! Car state record and submission input

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One immutable snapshot of the simulated car, as stored and served.
///
/// `id` and `timestamp` are assigned by the store; everything else comes from
/// the caller. Field names serialize in camelCase to match the wire format
/// consumed by the simulation frontend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarState {
    /// Store-assigned unique identifier
    pub id: String,
    /// Whether the engine is running
    pub engine_running: bool,
    /// Gear selector position (P, R, N, D, 1..6, ...) - opaque short string
    pub current_gear: String,
    /// Vehicle speed in mph
    pub speed: f64,
    /// Engine speed in revolutions per minute
    pub rpm: f64,
    /// Body color (e.g. hex color) - opaque
    pub car_color: String,
    /// Caller-supplied session correlation key
    pub session_id: String,
    /// Engine temperature in degrees Celsius
    pub temperature: f64,
    /// Fuel level in percent
    pub fuel: f64,
    /// Odometer reading in miles
    pub mileage: f64,
    /// Creation time, assigned once by the store
    pub timestamp: DateTime<Utc>,
}

/// Caller-submitted car state, before the store assigns identity.
///
/// The six core fields are required; `temperature`, `fuel` and `mileage`
/// default to the simulation's idle values when omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarStateInput {
    pub engine_running: bool,
    pub current_gear: String,
    pub speed: f64,
    pub rpm: f64,
    pub car_color: String,
    pub session_id: String,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default = "default_fuel")]
    pub fuel: f64,
    #[serde(default)]
    pub mileage: f64,
}

fn default_temperature() -> f64 {
    85.0
}

fn default_fuel() -> f64 {
    60.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_input_defaults_supplemental_fields() {
        let input: CarStateInput = serde_json::from_value(json!({
            "engineRunning": true,
            "currentGear": "D",
            "speed": 45,
            "rpm": 2500,
            "carColor": "#ff6b6b",
            "sessionId": "session-1"
        }))
        .unwrap();

        assert_eq!(input.temperature, 85.0);
        assert_eq!(input.fuel, 60.0);
        assert_eq!(input.mileage, 0.0);
    }

    #[test]
    fn test_input_rejects_missing_required_field() {
        // No sessionId
        let result = serde_json::from_value::<CarStateInput>(json!({
            "engineRunning": true,
            "currentGear": "D",
            "speed": 45,
            "rpm": 2500,
            "carColor": "#ff6b6b"
        }));

        assert!(result.is_err());
    }

    #[test]
    fn test_record_serializes_in_camel_case() {
        let record = CarState {
            id: "state-1".to_string(),
            engine_running: true,
            current_gear: "D".to_string(),
            speed: 45.0,
            rpm: 2500.0,
            car_color: "#ff6b6b".to_string(),
            session_id: "session-1".to_string(),
            temperature: 85.0,
            fuel: 60.0,
            mileage: 0.0,
            timestamp: Utc::now(),
        };

        let value = serde_json::to_value(&record).unwrap();
        for key in [
            "id",
            "engineRunning",
            "currentGear",
            "speed",
            "rpm",
            "carColor",
            "sessionId",
            "temperature",
            "fuel",
            "mileage",
            "timestamp",
        ] {
            assert!(value.get(key).is_some(), "missing key {}", key);
        }
    }
}
