//! Query-panel form state: date range, magnitude, depth, and location.
//!
//! DESIGN
//! ======
//! Numeric inputs are clamped on every write so the form never holds an
//! out-of-range value. Location is held as the text shown in the N/E fields,
//! so a map click and manual typing feed the same parse on submit.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use crate::net::types::Coordinate;

pub const MAGNITUDE_MIN: f64 = 3.0;
pub const MAGNITUDE_MAX: f64 = 9.5;
pub const DEPTH_MIN_KM: f64 = 0.0;
/// Earth's mean radius; deeper is meaningless.
pub const DEPTH_MAX_KM: f64 = 6371.0;

pub const DEFAULT_MAGNITUDE: f64 = 6.0;
pub const DEFAULT_DEPTH_KM: f64 = 10.0;

#[derive(Clone, Debug, PartialEq)]
pub struct QueryForm {
    pub start_date: String,
    pub end_date: String,
    pub magnitude: f64,
    pub depth: f64,
    pub latitude: String,
    pub longitude: String,
}

impl Default for QueryForm {
    fn default() -> Self {
        Self {
            start_date: String::new(),
            end_date: String::new(),
            magnitude: DEFAULT_MAGNITUDE,
            depth: DEFAULT_DEPTH_KM,
            latitude: String::new(),
            longitude: String::new(),
        }
    }
}

/// Why the location fields cannot produce a coordinate.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LocationError {
    #[error("Select a location on the map first.")]
    Missing,
    #[error("Latitude must be a number between -90 and 90.")]
    InvalidLatitude,
    #[error("Longitude must be a number between -180 and 180.")]
    InvalidLongitude,
}

impl QueryForm {
    /// Store a magnitude, clamped to `[3.0, 9.5]`. Non-numbers are ignored.
    pub fn set_magnitude(&mut self, value: f64) {
        if value.is_finite() {
            self.magnitude = value.clamp(MAGNITUDE_MIN, MAGNITUDE_MAX);
        }
    }

    /// Store a depth in km, clamped to `[0, 6371]`. Non-numbers are ignored.
    pub fn set_depth(&mut self, value: f64) {
        if value.is_finite() {
            self.depth = value.clamp(DEPTH_MIN_KM, DEPTH_MAX_KM);
        }
    }

    /// Parse text input and store it as magnitude; unparseable text is ignored.
    pub fn set_magnitude_text(&mut self, raw: &str) {
        if let Ok(value) = raw.trim().parse::<f64>() {
            self.set_magnitude(value);
        }
    }

    pub fn set_depth_text(&mut self, raw: &str) {
        if let Ok(value) = raw.trim().parse::<f64>() {
            self.set_depth(value);
        }
    }

    /// Fill the location fields from a map click.
    pub fn set_coordinate(&mut self, coordinate: Coordinate) {
        self.latitude = format_coordinate_field(coordinate.latitude);
        self.longitude = format_coordinate_field(coordinate.longitude);
    }

    /// Resolve the location fields into a coordinate.
    ///
    /// # Errors
    ///
    /// `Missing` when either field is blank, `InvalidLatitude`/`InvalidLongitude`
    /// when a field does not parse or is out of range.
    pub fn coordinate(&self) -> Result<Coordinate, LocationError> {
        let lat_raw = self.latitude.trim();
        let lng_raw = self.longitude.trim();
        if lat_raw.is_empty() || lng_raw.is_empty() {
            return Err(LocationError::Missing);
        }
        let latitude = lat_raw
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && (-90.0..=90.0).contains(v))
            .ok_or(LocationError::InvalidLatitude)?;
        let longitude = lng_raw
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && (-180.0..=180.0).contains(v))
            .ok_or(LocationError::InvalidLongitude)?;
        Ok(Coordinate { latitude, longitude })
    }

    /// Date recorded with a history entry: the start date, else `today`.
    pub fn history_date(&self, today: &str) -> String {
        let start = self.start_date.trim();
        if start.is_empty() { today.to_owned() } else { start.to_owned() }
    }
}

/// Four-decimal text used in the location fields.
pub fn format_coordinate_field(value: f64) -> String {
    format!("{value:.4}")
}
