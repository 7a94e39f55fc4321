//! Profit Rate
//!
//! The fixed set of margins a quote can carry.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Tolerance used when matching a raw fraction against the allowed rates
const RATE_EPSILON: f64 = 1e-9;

/// Target margin applied on top of the subtotal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProfitRate {
    /// 20%
    #[default]
    Twenty,
    /// 25%
    TwentyFive,
    /// 30%
    Thirty,
}

impl ProfitRate {
    /// All selectable rates, in display order
    pub const ALL: [ProfitRate; 3] = [
        ProfitRate::Twenty,
        ProfitRate::TwentyFive,
        ProfitRate::Thirty,
    ];

    pub fn as_fraction(&self) -> f64 {
        match self {
            ProfitRate::Twenty => 0.20,
            ProfitRate::TwentyFive => 0.25,
            ProfitRate::Thirty => 0.30,
        }
    }

    /// Coerce a raw fraction into the allowed set; anything else is 20%
    pub fn from_fraction(value: f64) -> Self {
        Self::ALL
            .into_iter()
            .find(|rate| (rate.as_fraction() - value).abs() < RATE_EPSILON)
            .unwrap_or_default()
    }

    /// Parse a form value such as `"0.25"`; unparseable input is 20%
    pub fn parse(raw: &str) -> Self {
        raw.trim()
            .parse::<f64>()
            .map(Self::from_fraction)
            .unwrap_or_default()
    }

    /// Label shown in the margin selector
    pub fn label(&self) -> &'static str {
        match self {
            ProfitRate::Twenty => "20%",
            ProfitRate::TwentyFive => "25%",
            ProfitRate::Thirty => "30%",
        }
    }
}

impl Serialize for ProfitRate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_fraction())
    }
}

impl<'de> Deserialize<'de> for ProfitRate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        f64::deserialize(deserializer).map(ProfitRate::from_fraction)
    }
}
