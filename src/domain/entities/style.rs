//! Visual rendering parameters attached to a QR code record.

use serde::{Deserialize, Serialize};

/// QR error-correction level, from lowest to highest redundancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EcLevel {
    L,
    M,
    Q,
    H,
}

/// Rendering parameters for a QR image.
///
/// Inert data carried alongside the record so external renderers can draw
/// the code consistently. The service never interprets these values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QrStyle {
    pub fg_color: String,
    pub bg_color: String,
    pub level: EcLevel,
    pub include_margin: bool,
    pub size: u32,
}

impl Default for QrStyle {
    fn default() -> Self {
        Self {
            fg_color: "#000000".to_string(),
            bg_color: "#ffffff".to_string(),
            level: EcLevel::M,
            include_margin: true,
            size: 256,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_wire_names_are_camel_case() {
        let style = QrStyle::default();
        let value = serde_json::to_value(&style).unwrap();

        assert_eq!(value["fgColor"], "#000000");
        assert_eq!(value["bgColor"], "#ffffff");
        assert_eq!(value["level"], "M");
        assert_eq!(value["includeMargin"], true);
        assert_eq!(value["size"], 256);
    }

    #[test]
    fn test_level_round_trip() {
        for (level, name) in [
            (EcLevel::L, "\"L\""),
            (EcLevel::M, "\"M\""),
            (EcLevel::Q, "\"Q\""),
            (EcLevel::H, "\"H\""),
        ] {
            assert_eq!(serde_json::to_string(&level).unwrap(), name);
            assert_eq!(serde_json::from_str::<EcLevel>(name).unwrap(), level);
        }
    }
}
