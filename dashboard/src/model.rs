use serde::Serialize;
use simulator::Channel;

/// Latest-value summary for one channel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardView {
    pub channel: Channel,
    pub label: String,
    /// `None` until the first tick
    pub value: Option<f64>,
    /// Pre-formatted "value unit", empty when there is no value
    pub text: String,
    pub unit: String,
    pub color: String,
}

/// Which vertical axis a series is plotted against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AxisRef {
    #[serde(rename = "y")]
    Primary,
    #[serde(rename = "y2")]
    Secondary,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: String,
    /// "left" or "right"
    pub side: String,
    /// Axis this one is drawn on top of, if any
    pub overlaying: Option<AxisRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub channel: Channel,
    pub name: String,
    pub y: Vec<f64>,
    pub color: String,
    pub width: u32,
    pub mode: String,
    pub axis: AxisRef,
}

/// Dual-axis time series over the whole rolling window
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartView {
    pub time: Vec<String>,
    pub series: Vec<Series>,
    pub y_axis: Axis,
    pub y_axis2: Axis,
}

/// Everything published to viewers after one tick
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    /// Tick that produced this view, 0 before the first tick
    pub tick: u64,
    pub cards: Vec<CardView>,
    pub chart: ChartView,
}
