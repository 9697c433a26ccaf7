use crate::channel::Channel;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// One value per channel, all taken on the same tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub temperature: f64,
    pub humidity: f64,
    pub co2: f64,
    pub hydrogen: f64,
}

impl Reading {
    pub fn get(&self, channel: Channel) -> f64 {
        match channel {
            Channel::Temperature => self.temperature,
            Channel::Humidity => self.humidity,
            Channel::Co2 => self.co2,
            Channel::Hydrogen => self.hydrogen,
        }
    }

    /// Builds a reading by asking `f` for every channel
    pub fn from_fn(mut f: impl FnMut(Channel) -> f64) -> Self {
        Self {
            temperature: f(Channel::Temperature),
            humidity: f(Channel::Humidity),
            co2: f(Channel::Co2),
            hydrogen: f(Channel::Hydrogen),
        }
    }
}

/// Draws a fresh reading, uniform over each channel's range and rounded to
/// its precision.
pub fn synthesize(rng: &mut impl Rng) -> Reading {
    Reading::from_fn(|channel| {
        let spec = channel.spec();
        channel.round(rng.gen_range(spec.min..=spec.max))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_values_within_range() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..1000 {
            let reading = synthesize(&mut rng);
            for channel in Channel::ALL {
                let spec = channel.spec();
                let value = reading.get(channel);
                assert!(
                    value >= spec.min && value <= spec.max,
                    "{:?} value {} out of [{}, {}]",
                    channel,
                    value,
                    spec.min,
                    spec.max
                );
            }
        }
    }

    #[test]
    fn test_values_rounded_to_precision() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..1000 {
            let reading = synthesize(&mut rng);
            for channel in Channel::ALL {
                let value = reading.get(channel);
                assert_eq!(channel.round(value), value);
            }
            assert_eq!(reading.co2.fract(), 0.0);
        }
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let mut a = StdRng::seed_from_u64(1234);
        let mut b = StdRng::seed_from_u64(1234);

        for _ in 0..20 {
            assert_eq!(synthesize(&mut a), synthesize(&mut b));
        }
    }

    #[test]
    fn test_get_matches_fields() {
        let reading = Reading {
            temperature: 21.5,
            humidity: 44.0,
            co2: 512.0,
            hydrogen: 3.21,
        };

        assert_eq!(reading.get(Channel::Temperature), 21.5);
        assert_eq!(reading.get(Channel::Humidity), 44.0);
        assert_eq!(reading.get(Channel::Co2), 512.0);
        assert_eq!(reading.get(Channel::Hydrogen), 3.21);
    }
}
