use crate::errors::{AppError, AppResult};
use serde::Serialize;
use serde_json::Value;

/// Canonical geographic coordinate captured at marking time.
///
/// Raw payloads arrive in two historical shapes, `{latitude, longitude}`
/// and `{lat, lng}`; everything past the ingestion boundary only ever
/// sees this struct. A missing location is `None`, never `(0, 0)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    /// Validated constructor: rejects non-finite and out-of-range values.
    pub fn new(lat: f64, lng: f64) -> AppResult<Self> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(AppError::InvalidCoordinate(format!("latitude {}", lat)));
        }
        if !lng.is_finite() || !(-180.0..=180.0).contains(&lng) {
            return Err(AppError::InvalidCoordinate(format!("longitude {}", lng)));
        }
        Ok(Self { lat, lng })
    }
}

/// Normalize a raw location payload into the canonical shape.
///
/// Accepts `{latitude, longitude}` or `{lat, lng}`; `null` or a payload
/// with neither pair yields `None`.
pub fn normalize_location(raw: &Value) -> Option<GeoPoint> {
    let obj = raw.as_object()?;

    let lat = obj
        .get("lat")
        .or_else(|| obj.get("latitude"))
        .and_then(Value::as_f64)?;
    let lng = obj
        .get("lng")
        .or_else(|| obj.get("longitude"))
        .and_then(Value::as_f64)?;

    GeoPoint::new(lat, lng).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn both_shapes_normalize_to_same_point() {
        let a = normalize_location(&json!({"latitude": 10.0, "longitude": 20.0}));
        let b = normalize_location(&json!({"lat": 10.0, "lng": 20.0}));
        assert_eq!(a, b);
        assert_eq!(a, Some(GeoPoint { lat: 10.0, lng: 20.0 }));
    }

    #[test]
    fn absent_location_is_none() {
        assert_eq!(normalize_location(&Value::Null), None);
        assert_eq!(normalize_location(&json!({})), None);
        assert_eq!(normalize_location(&json!({"lat": 10.0})), None);
    }

    #[test]
    fn out_of_range_rejected() {
        assert_eq!(normalize_location(&json!({"lat": 91.0, "lng": 0.0})), None);
        assert!(GeoPoint::new(0.0, 181.0).is_err());
        assert!(GeoPoint::new(f64::NAN, 0.0).is_err());
        assert!(GeoPoint::new(14.62, -90.52).is_ok());
    }
}
