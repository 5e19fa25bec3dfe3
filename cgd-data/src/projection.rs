//! Spherical Mercator projection (EPSG:4326 degrees to EPSG:3857 meters).

use cgd_cases::record::CaseRecord;
use log::debug;
use serde::Serialize;
use std::f64::consts::FRAC_PI_4;

/// WGS84 semi-major axis, the sphere radius Web Mercator uses.
pub const EARTH_RADIUS_M: f64 = 6_378_137.0;

/// Latitude at which Web Mercator's square world ends.
///
/// Beyond it `y` grows without bound, so inputs are clamped here.
pub const MAX_LATITUDE: f64 = 85.051_128_78;

/// Half the width of the projected world, in meters.
pub const HALF_WORLD_M: f64 = std::f64::consts::PI * EARTH_RADIUS_M;

/// Project `(latitude, longitude)` in degrees to `(x, y)` in meters.
pub fn project(latitude: f64, longitude: f64) -> (f64, f64) {
    let phi = latitude.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
    let lambda = longitude.to_radians();
    let x = EARTH_RADIUS_M * lambda;
    let y = EARTH_RADIUS_M * (FRAC_PI_4 + phi / 2.0).tan().ln();
    (x, y)
}

/// A case record placed on the Web Mercator plane.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectedRecord {
    #[serde(flatten)]
    record: CaseRecord,
    x: f64,
    y: f64,
}

impl ProjectedRecord {
    pub fn new(record: CaseRecord) -> Self {
        if record.latitude.abs() > MAX_LATITUDE {
            debug!(
                "[CGD] projection: Clamping latitude {} for {}",
                record.latitude,
                record.place_name()
            );
        }
        let (x, y) = project(record.latitude, record.longitude);
        Self { record, x, y }
    }

    pub fn record(&self) -> &CaseRecord {
        &self.record
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }
}

/// Project every record, preserving order.
pub fn project_all(records: Vec<CaseRecord>) -> Vec<ProjectedRecord> {
    records.into_iter().map(ProjectedRecord::new).collect()
}
