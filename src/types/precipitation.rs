use serde::{Deserialize, Serialize};

/// Precipitation type, from the forecast's `pcat` parameter.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrecipitationCategory {
    /// Code 0
    #[default]
    None,
    /// Code 1
    Snow,
    /// Code 2
    SnowAndRain,
    /// Code 3
    Rain,
    /// Code 4
    Drizzle,
    /// Code 5
    FreezingRain,
    /// Code 6
    FreezingDrizzle,
}

impl PrecipitationCategory {
    /// Converts a `pcat` code. Unknown codes fall back to [`PrecipitationCategory::None`].
    ///
    /// ```
    /// use smhi::PrecipitationCategory;
    ///
    /// assert_eq!(PrecipitationCategory::from_code(3), PrecipitationCategory::Rain);
    /// assert_eq!(PrecipitationCategory::from_code(42), PrecipitationCategory::None);
    /// ```
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => PrecipitationCategory::Snow,
            2 => PrecipitationCategory::SnowAndRain,
            3 => PrecipitationCategory::Rain,
            4 => PrecipitationCategory::Drizzle,
            5 => PrecipitationCategory::FreezingRain,
            6 => PrecipitationCategory::FreezingDrizzle,
            _ => PrecipitationCategory::None,
        }
    }
}
