//! Presentation settings handed to the map renderer.
//!
//! Everything here is plain data that serializes to the JSON config the
//! D3 renderer reads; the renderer itself owns no defaults.

use crate::classify::ClassifiedRecord;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// CartoDB Positron basemap tiles.
pub const TILE_URL: &str = "https://a.basemaps.cartocdn.com/light_all/{z}/{x}/{y}.png";

/// Title shown above the map and on the color bar.
pub const MAP_TITLE: &str = "COVID-19 Geo Dashboard";
pub const COLOR_BAR_TITLE: &str = "Confirmed Cases";

/// Sequential color palettes understood by the renderer (256 steps each).
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum Palette {
    Viridis,
    Plasma,
}

/// How points are drawn.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Serialize, Deserialize)]
pub enum ViewMode {
    /// Small translucent points.
    #[default]
    Scatter,
    /// Larger outlined points colored by intensity.
    Choropleth,
}

impl ViewMode {
    pub const OPTIONS: [ViewMode; 2] = [ViewMode::Scatter, ViewMode::Choropleth];

    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::Scatter => "Scatter",
            ViewMode::Choropleth => "Choropleth",
        }
    }

    pub fn style(&self) -> MapStyle {
        match self {
            ViewMode::Scatter => MapStyle {
                palette: Palette::Viridis,
                point_size: 8.0,
                alpha: 0.6,
                line_color: None,
                line_width: 0.0,
                nan_color: None,
            },
            ViewMode::Choropleth => MapStyle {
                palette: Palette::Plasma,
                point_size: 12.0,
                alpha: 0.8,
                line_color: Some("white".to_string()),
                line_width: 0.5,
                nan_color: Some("blue".to_string()),
            },
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ViewMode::OPTIONS
            .into_iter()
            .find(|mode| mode.label() == s.trim())
            .ok_or_else(|| format!("unknown view mode {:?}", s))
    }
}

/// Point appearance for one view mode.
#[derive(Debug, PartialEq, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapStyle {
    pub palette: Palette,
    pub point_size: f64,
    pub alpha: f64,
    pub line_color: Option<String>,
    pub line_width: f64,
    pub nan_color: Option<String>,
}

/// Linear mapping from confirmed counts onto a palette.
#[derive(Debug, PartialEq, Clone, Copy, Serialize)]
pub struct ColorScale {
    pub palette: Palette,
    pub low: f64,
    pub high: f64,
}

impl ColorScale {
    /// Span the min and max confirmed count of the whole record set, so
    /// colors stay comparable as the selection changes. Blank counts are
    /// left out; they are drawn in the style's NaN color.
    pub fn from_records(palette: Palette, records: &[ClassifiedRecord]) -> Option<ColorScale> {
        let counts = || records.iter().filter_map(|r| r.confirmed());
        let low = counts().min()?;
        let high = counts().max()?;
        Some(ColorScale {
            palette,
            low: low as f64,
            high: high as f64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::ProjectedRecord;
    use cgd_cases::record::CaseRecord;
    use chrono::NaiveDate;

    fn classified(confirmed: Option<u64>) -> ClassifiedRecord {
        ClassifiedRecord::new(ProjectedRecord::new(CaseRecord {
            region: None,
            country: "India".to_string(),
            latitude: 20.5937,
            longitude: 78.9629,
            date: NaiveDate::from_ymd_opt(2020, 4, 1).unwrap(),
            confirmed,
            deaths: None,
            recovered: None,
        }))
    }

    #[test]
    fn test_scale_spans_records() {
        let records = vec![
            classified(Some(50)),
            classified(None),
            classified(Some(10)),
            classified(Some(250)),
        ];
        let scale = ColorScale::from_records(Palette::Viridis, &records).unwrap();
        assert_eq!(scale.low, 10.0);
        assert_eq!(scale.high, 250.0);
        assert!(ColorScale::from_records(Palette::Plasma, &[]).is_none());
    }

    #[test]
    fn test_no_counts_no_scale() {
        let records = vec![classified(None), classified(None)];
        assert!(ColorScale::from_records(Palette::Plasma, &records).is_none());
    }

    #[test]
    fn test_view_modes() {
        assert_eq!(ViewMode::default(), ViewMode::Scatter);
        assert_eq!(ViewMode::Scatter.style().palette, Palette::Viridis);
        let choropleth = ViewMode::Choropleth.style();
        assert_eq!(choropleth.palette, Palette::Plasma);
        assert_eq!(choropleth.point_size, 12.0);
        assert_eq!(choropleth.line_color.as_deref(), Some("white"));
        assert_eq!("Choropleth".parse::<ViewMode>().unwrap(), ViewMode::Choropleth);
        assert!("Heatmap".parse::<ViewMode>().is_err());
    }
}
