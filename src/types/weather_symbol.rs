//! Defines the `WeatherSymbol` enum, mapping the forecast's `Wsymb2` codes to
//! descriptive variants.

use serde::{Deserialize, Serialize};

/// The general weather appearance reported by the point forecast.
///
/// The forecast encodes this as the `Wsymb2` parameter, an integer between 1
/// and 27. Use [`WeatherSymbol::from_code`] to convert.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherSymbol {
    /// Code 1
    ClearSky = 1,
    /// Code 2
    NearlyClearSky = 2,
    /// Code 3
    VariableCloudiness = 3,
    /// Code 4
    HalfclearSky = 4,
    /// Code 5
    CloudySky = 5,
    /// Code 6
    Overcast = 6,
    /// Code 7
    Fog = 7,
    /// Code 8
    LightRainShowers = 8,
    /// Code 9
    ModerateRainShowers = 9,
    /// Code 10
    HeavyRainShowers = 10,
    /// Code 11
    Thunderstorm = 11,
    /// Code 12
    LightSleetShowers = 12,
    /// Code 13
    ModerateSleetShowers = 13,
    /// Code 14
    HeavySleetShowers = 14,
    /// Code 15
    LightSnowShowers = 15,
    /// Code 16
    ModerateSnowShowers = 16,
    /// Code 17
    HeavySnowShowers = 17,
    /// Code 18
    LightRain = 18,
    /// Code 19
    ModerateRain = 19,
    /// Code 20
    HeavyRain = 20,
    /// Code 21
    Thunder = 21,
    /// Code 22
    LightSleet = 22,
    /// Code 23
    ModerateSleet = 23,
    /// Code 24
    HeavySleet = 24,
    /// Code 25
    LightSnowfall = 25,
    /// Code 26
    ModerateSnowfall = 26,
    /// Code 27
    HeavySnowfall = 27,
}

impl WeatherSymbol {
    /// Converts a `Wsymb2` code into a `WeatherSymbol`.
    ///
    /// Returns `None` for anything outside 1..=27, including 0 and negative codes.
    ///
    /// ```
    /// use smhi::WeatherSymbol;
    ///
    /// assert_eq!(WeatherSymbol::from_code(7), Some(WeatherSymbol::Fog));
    /// assert_eq!(WeatherSymbol::from_code(0), None);
    /// assert_eq!(WeatherSymbol::from_code(28), None);
    /// ```
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(WeatherSymbol::ClearSky),
            2 => Some(WeatherSymbol::NearlyClearSky),
            3 => Some(WeatherSymbol::VariableCloudiness),
            4 => Some(WeatherSymbol::HalfclearSky),
            5 => Some(WeatherSymbol::CloudySky),
            6 => Some(WeatherSymbol::Overcast),
            7 => Some(WeatherSymbol::Fog),
            8 => Some(WeatherSymbol::LightRainShowers),
            9 => Some(WeatherSymbol::ModerateRainShowers),
            10 => Some(WeatherSymbol::HeavyRainShowers),
            11 => Some(WeatherSymbol::Thunderstorm),
            12 => Some(WeatherSymbol::LightSleetShowers),
            13 => Some(WeatherSymbol::ModerateSleetShowers),
            14 => Some(WeatherSymbol::HeavySleetShowers),
            15 => Some(WeatherSymbol::LightSnowShowers),
            16 => Some(WeatherSymbol::ModerateSnowShowers),
            17 => Some(WeatherSymbol::HeavySnowShowers),
            18 => Some(WeatherSymbol::LightRain),
            19 => Some(WeatherSymbol::ModerateRain),
            20 => Some(WeatherSymbol::HeavyRain),
            21 => Some(WeatherSymbol::Thunder),
            22 => Some(WeatherSymbol::LightSleet),
            23 => Some(WeatherSymbol::ModerateSleet),
            24 => Some(WeatherSymbol::HeavySleet),
            25 => Some(WeatherSymbol::LightSnowfall),
            26 => Some(WeatherSymbol::ModerateSnowfall),
            27 => Some(WeatherSymbol::HeavySnowfall),
            _ => None,
        }
    }

    /// The numeric `Wsymb2` code of this symbol.
    pub fn code(self) -> i64 {
        self as i64
    }
}
