use serde::{Deserialize, Serialize};

/// Static description of one monitored quantity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelSpec {
    /// Card heading shown on the dashboard
    pub label: &'static str,
    pub unit: &'static str,
    /// Accent color, CSS hex
    pub color: &'static str,
    /// Inclusive generation range
    pub min: f64,
    pub max: f64,
    /// Number of decimals kept after rounding
    pub precision: u32,
}

const TEMPERATURE: ChannelSpec = ChannelSpec {
    label: "TEMPÉRATURE",
    unit: "°C",
    color: "#ff4d4d",
    min: 20.0,
    max: 26.0,
    precision: 1,
};

const HUMIDITY: ChannelSpec = ChannelSpec {
    label: "HUMIDITÉ",
    unit: "%",
    color: "#33ccff",
    min: 40.0,
    max: 55.0,
    precision: 1,
};

const CO2: ChannelSpec = ChannelSpec {
    label: "CO2",
    unit: "ppm",
    color: "#00ffcc",
    min: 400.0,
    max: 900.0,
    precision: 0,
};

const HYDROGEN: ChannelSpec = ChannelSpec {
    label: "H2",
    unit: "ppm",
    color: "#ffcc00",
    min: 0.0,
    max: 5.0,
    precision: 2,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Temperature,
    Humidity,
    Co2,
    Hydrogen,
}

impl Channel {
    /// Display order of the summary cards
    pub const ALL: [Channel; 4] = [
        Channel::Temperature,
        Channel::Humidity,
        Channel::Co2,
        Channel::Hydrogen,
    ];

    pub fn spec(self) -> &'static ChannelSpec {
        match self {
            Channel::Temperature => &TEMPERATURE,
            Channel::Humidity => &HUMIDITY,
            Channel::Co2 => &CO2,
            Channel::Hydrogen => &HYDROGEN,
        }
    }

    /// Rounds a raw value to this channel's precision
    pub fn round(self, value: f64) -> f64 {
        let scale = 10_f64.powi(self.spec().precision as i32);
        (value * scale).round() / scale
    }

    /// Formats a value in its shortest rounded form: integers for
    /// whole-number channels, at least one decimal otherwise
    pub fn format(self, value: f64) -> String {
        let rounded = self.round(value);
        if self.spec().precision == 0 {
            format!("{}", rounded as i64)
        } else if rounded.fract() == 0.0 {
            format!("{:.1}", rounded)
        } else {
            format!("{}", rounded)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_precision() {
        assert_eq!(Channel::Temperature.round(23.46), 23.5);
        assert_eq!(Channel::Humidity.round(41.04), 41.0);
        assert_eq!(Channel::Co2.round(612.7), 613.0);
        assert_eq!(Channel::Hydrogen.round(1.234), 1.23);
    }

    #[test]
    fn test_format_shortest_rounded_form() {
        assert_eq!(Channel::Temperature.format(23.0), "23.0");
        assert_eq!(Channel::Humidity.format(47.3), "47.3");
        assert_eq!(Channel::Co2.format(613.0), "613");
        assert_eq!(Channel::Hydrogen.format(1.5), "1.5");
        assert_eq!(Channel::Hydrogen.format(2.0), "2.0");
        assert_eq!(Channel::Hydrogen.format(0.1), "0.1");
        assert_eq!(Channel::Hydrogen.format(4.27), "4.27");
    }

    #[test]
    fn test_units_and_colors() {
        assert_eq!(Channel::Temperature.spec().unit, "°C");
        assert_eq!(Channel::Humidity.spec().unit, "%");
        assert_eq!(Channel::Co2.spec().unit, "ppm");
        assert_eq!(Channel::Hydrogen.spec().color, "#ffcc00");
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Channel::Co2).unwrap();
        assert_eq!(json, "\"co2\"");
    }
}
