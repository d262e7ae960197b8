use bon::Builder;
use serde::{Deserialize, Serialize};

/// Color of a face or hand stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Default accent color for the face and all hands.
    pub const CYAN: Color = Color::new(0x00, 0xff, 0xff);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn as_tuple(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}

/// Style configuration for the clock face.
///
/// Every field has a default, so `ClockFaceConfig::builder().build()` yields
/// a usable clock. The same struct deserializes from a TOML style file where
/// any subset of fields may be given; omitted fields keep their defaults.
///
/// Hand length ratios are relative to the face radius and the back-tail
/// ratio is relative to the hour-hand radius. Ratios are expected to be
/// positive and typically at most 1.0; out-of-range values are not rejected,
/// they just draw a degenerate or oversized hand.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockFaceConfig {
    // Window configuration
    #[builder(default = "Clock".to_string())]
    pub title: String,
    #[builder(default = 300)]
    pub window_width: usize,
    #[builder(default = 300)]
    pub window_height: usize,
    /// Redraw cap in frames per second; 20 fps gives the 50 ms tick cadence.
    #[builder(default = 20.0)]
    pub max_framerate: f64,

    // Hand lengths relative to the face radius
    #[builder(default = 0.85)]
    pub sec_hand_len_ratio: f32,
    #[builder(default = 0.8)]
    pub min_hand_len_ratio: f32,
    #[builder(default = 0.5)]
    pub hour_hand_len_ratio: f32,
    /// Back-tail length relative to the hour-hand radius, shared by all hands.
    #[builder(default = 0.5)]
    pub back_tail_ratio: f32,

    // Stroke thicknesses in pixels; the minute hand shares the face stroke
    #[builder(default = 15.0)]
    pub face_thickness: f32,
    #[builder(default = 10.0)]
    pub sec_hand_thickness: f32,
    #[builder(default = 25.0)]
    pub hour_hand_thickness: f32,

    // Colors (kept last so the TOML tables follow the scalar fields)
    #[builder(default = Color::CYAN)]
    pub face_color: Color,
    /// Fill for the face disc; `None` leaves the face transparent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_fill_color: Option<Color>,
    #[builder(default = Color::CYAN)]
    pub sec_hand_color: Color,
    #[builder(default = Color::CYAN)]
    pub min_hand_color: Color,
    #[builder(default = Color::CYAN)]
    pub hour_hand_color: Color,
}

impl Default for ClockFaceConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ClockFaceConfig {
    /// Parse a TOML style file.
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = ClockFaceConfig::default();
        assert!((config.sec_hand_len_ratio - 0.85).abs() < 1e-6);
        assert!((config.min_hand_len_ratio - 0.8).abs() < 1e-6);
        assert!((config.hour_hand_len_ratio - 0.5).abs() < 1e-6);
        assert!((config.back_tail_ratio - 0.5).abs() < 1e-6);
        assert!((config.face_thickness - 15.0).abs() < 1e-6);
        assert!((config.sec_hand_thickness - 10.0).abs() < 1e-6);
        assert!((config.hour_hand_thickness - 25.0).abs() < 1e-6);
        assert!((config.max_framerate - 20.0).abs() < 1e-6);
        assert_eq!(config.face_color, Color::CYAN);
        assert_eq!(config.sec_hand_color, Color::CYAN);
        assert!(config.face_fill_color.is_none());
    }

    #[test]
    fn style_file_overrides_only_named_fields() {
        let text = r#"
            sec_hand_len_ratio = 0.9
            face_fill_color = { r = 16, g = 16, b = 32 }
            hour_hand_color = { r = 255, g = 160, b = 0 }
        "#;
        let config = ClockFaceConfig::from_toml_str(text).unwrap();
        assert!((config.sec_hand_len_ratio - 0.9).abs() < 1e-6);
        assert_eq!(config.face_fill_color, Some(Color::new(16, 16, 32)));
        assert_eq!(config.hour_hand_color, Color::new(255, 160, 0));
        assert!((config.min_hand_len_ratio - 0.8).abs() < 1e-6);
        assert_eq!(config.min_hand_color, Color::CYAN);
    }

    #[test]
    fn config_round_trips_through_toml() {
        let config = ClockFaceConfig::builder()
            .title("bench".to_string())
            .face_fill_color(Color::new(8, 8, 8))
            .build();
        let serialized = toml::to_string(&config).unwrap();
        let parsed = ClockFaceConfig::from_toml_str(&serialized).unwrap();
        assert_eq!(parsed.title, "bench");
        assert_eq!(parsed.face_fill_color, Some(Color::new(8, 8, 8)));
    }
}
