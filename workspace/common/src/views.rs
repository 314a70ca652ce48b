use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::forecast::ForecastView;
use crate::overview::OverviewView;
use crate::scatter::ScatterView;

/// The three mutually exclusive display modes of the dashboard.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Overview,
    Prediction,
    #[serde(rename = "3d")]
    Scatter3d,
}

/// The dispatch payload of the single-endpoint view selector, tagged by
/// the mode that produced it.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum DashboardView {
    Overview { overview: OverviewView },
    Prediction { prediction: ForecastView },
    #[serde(rename = "3d")]
    Scatter3d { scatter: ScatterView },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_mode_wire_names() {
        let mode: ViewMode = serde_json::from_str("\"overview\"").unwrap();
        assert_eq!(mode, ViewMode::Overview);
        let mode: ViewMode = serde_json::from_str("\"prediction\"").unwrap();
        assert_eq!(mode, ViewMode::Prediction);
        let mode: ViewMode = serde_json::from_str("\"3d\"").unwrap();
        assert_eq!(mode, ViewMode::Scatter3d);
    }

    #[test]
    fn test_dashboard_view_mode_tag() {
        let view = DashboardView::Scatter3d {
            scatter: ScatterView { points: vec![] },
        };
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["mode"], "3d");
    }
}
