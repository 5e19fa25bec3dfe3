//! Serializable payloads for the point-map renderer.
//!
//! The renderer receives two JSON documents: the points to draw and a
//! config describing how to draw them. Both are built here so the WASM
//! dashboard and the CLI `snapshot` command emit identical output.

use crate::classify::ClassifiedRecord;
use crate::filter::{FilterEngine, Selection};
use crate::style::{ColorScale, MapStyle, ViewMode, COLOR_BAR_TITLE, MAP_TITLE, TILE_URL};
use cgd_cases::record::count_cell;
use cgd_cases::risk::RiskCategory;
use cgd_utils::dates::format_date;
use serde::Serialize;

/// One label/value line of a hover tooltip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TooltipLine {
    pub label: &'static str,
    pub value: String,
}

/// A point on the map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapPoint {
    pub x: f64,
    pub y: f64,
    /// `null` in JSON when the count was blank
    pub confirmed: Option<u64>,
    pub risk: RiskCategory,
    pub tooltip: Vec<TooltipLine>,
}

impl From<&ClassifiedRecord> for MapPoint {
    fn from(classified: &ClassifiedRecord) -> Self {
        let projected = classified.projected();
        MapPoint {
            x: projected.x(),
            y: projected.y(),
            confirmed: classified.confirmed(),
            risk: classified.risk(),
            tooltip: tooltip_lines(classified),
        }
    }
}

/// Tooltip rows in display order.
pub fn tooltip_lines(classified: &ClassifiedRecord) -> Vec<TooltipLine> {
    let record = classified.record();
    let line = |label, value: String| TooltipLine { label, value };
    vec![
        line("Country", record.country.clone()),
        line("Province/State", record.region.clone().unwrap_or_default()),
        line("Confirmed Cases", count_cell(record.confirmed)),
        line("Deaths", count_cell(record.deaths)),
        line("Recovered", count_cell(record.recovered)),
        line("Date", format_date(&record.date)),
        line(
            "Location",
            format!("({}, {})", record.latitude, record.longitude),
        ),
    ]
}

/// Static description of how to draw the map.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapConfig {
    pub title: &'static str,
    pub color_bar_title: &'static str,
    pub tile_url: &'static str,
    pub view_mode: ViewMode,
    pub style: MapStyle,
    /// `None` when there is nothing to scale against
    pub color_scale: Option<ColorScale>,
}

impl MapConfig {
    /// The color scale covers every record, not just the displayed ones.
    pub fn new(view_mode: ViewMode, records: &[ClassifiedRecord]) -> Self {
        let style = view_mode.style();
        MapConfig {
            title: MAP_TITLE,
            color_bar_title: COLOR_BAR_TITLE,
            tile_url: TILE_URL,
            view_mode,
            color_scale: ColorScale::from_records(style.palette, records),
            style,
        }
    }
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderPayload {
    pub selection: Selection,
    pub points: Vec<MapPoint>,
    pub config: MapConfig,
}

impl RenderPayload {
    pub fn from_engine(engine: &FilterEngine, view_mode: ViewMode) -> Self {
        RenderPayload {
            selection: engine.selection(),
            points: engine.displayed().into_iter().map(MapPoint::from).collect(),
            config: MapConfig::new(view_mode, engine.records()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::RiskFilter;
    use crate::pipeline::prepare;
    use cgd_cases::record::CaseRecord;
    use chrono::NaiveDate;

    fn records() -> Vec<CaseRecord> {
        let date = NaiveDate::from_ymd_opt(2020, 3, 1).unwrap();
        vec![
            CaseRecord {
                region: Some("Hubei".to_string()),
                country: "China".to_string(),
                latitude: 30.9756,
                longitude: 112.2707,
                date,
                confirmed: Some(66907),
                deaths: Some(2803),
                recovered: Some(31536),
            },
            CaseRecord {
                region: None,
                country: "Iran".to_string(),
                latitude: 32.0,
                longitude: 53.0,
                date,
                confirmed: Some(978),
                deaths: Some(54),
                recovered: None,
            },
        ]
    }

    #[test]
    fn test_tooltip_lines() {
        let classified = prepare(records());
        let lines = tooltip_lines(&classified[0]);
        let labels: Vec<&str> = lines.iter().map(|l| l.label).collect();
        assert_eq!(
            labels,
            vec![
                "Country",
                "Province/State",
                "Confirmed Cases",
                "Deaths",
                "Recovered",
                "Date",
                "Location"
            ]
        );
        assert_eq!(lines[5].value, "2020-03-01");
        assert_eq!(lines[6].value, "(30.9756, 112.2707)");
        assert_eq!(tooltip_lines(&classified[1])[1].value, "");
        assert_eq!(tooltip_lines(&classified[1])[4].value, "");
    }

    #[test]
    fn test_blank_confirmed_serializes_null() {
        let mut records = records();
        records[1].confirmed = None;
        let engine = FilterEngine::new(prepare(records)).unwrap();
        let payload = RenderPayload::from_engine(&engine, ViewMode::Choropleth);

        let json = serde_json::to_value(&payload.points).unwrap();
        assert_eq!(json[0]["confirmed"], 66907);
        assert!(json[1]["confirmed"].is_null());
        assert_eq!(json[1]["risk"], "Low");
        assert_eq!(payload.config.style.nan_color.as_deref(), Some("blue"));
        let scale = payload.config.color_scale.unwrap();
        assert_eq!((scale.low, scale.high), (66907.0, 66907.0));
    }

    #[test]
    fn test_payload_from_engine() {
        let mut engine = FilterEngine::new(prepare(records())).unwrap();
        assert!(engine.select_risk(RiskFilter::Low));
        let payload = RenderPayload::from_engine(&engine, ViewMode::Choropleth);

        assert_eq!(payload.points.len(), 1);
        assert_eq!(payload.points[0].risk, RiskCategory::Low);
        let scale = payload.config.color_scale.unwrap();
        assert_eq!((scale.low, scale.high), (978.0, 66907.0));
        assert_eq!(payload.config.style, ViewMode::Choropleth.style());
    }
}
