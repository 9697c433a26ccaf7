use crate::model::{Axis, AxisRef, CardView, ChartView, DashboardView, Series};
use crate::window::RollingWindow;
use simulator::Channel;

const LINE_WIDTH: u32 = 4;

/// Derives the cards and chart for the current window. Pure read: the same
/// window always yields the same view.
pub fn derive(window: &RollingWindow, tick: u64) -> DashboardView {
    DashboardView {
        tick,
        cards: Channel::ALL
            .iter()
            .map(|&channel| card(window, channel))
            .collect(),
        chart: chart(window),
    }
}

pub fn card(window: &RollingWindow, channel: Channel) -> CardView {
    let spec = channel.spec();
    let value = window.latest().map(|p| p.reading.get(channel));
    let text = value
        .map(|v| format!("{} {}", channel.format(v), spec.unit))
        .unwrap_or_default();

    CardView {
        channel,
        label: spec.label.to_string(),
        value,
        text,
        unit: spec.unit.to_string(),
        color: spec.color.to_string(),
    }
}

pub fn chart(window: &RollingWindow) -> ChartView {
    let temperature = Series {
        channel: Channel::Temperature,
        name: "Temp °C".to_string(),
        y: window.series(Channel::Temperature),
        color: Channel::Temperature.spec().color.to_string(),
        width: LINE_WIDTH,
        mode: "lines+markers".to_string(),
        axis: AxisRef::Primary,
    };
    let humidity = Series {
        channel: Channel::Humidity,
        name: "Hum %".to_string(),
        y: window.series(Channel::Humidity),
        color: Channel::Humidity.spec().color.to_string(),
        width: LINE_WIDTH,
        mode: "lines".to_string(),
        axis: AxisRef::Secondary,
    };

    ChartView {
        time: window.time_labels(),
        series: vec![temperature, humidity],
        y_axis: Axis {
            title: "Température (°C)".to_string(),
            side: "left".to_string(),
            overlaying: None,
        },
        y_axis2: Axis {
            title: "Humidité (%)".to_string(),
            side: "right".to_string(),
            overlaying: Some(AxisRef::Primary),
        },
    }
}
