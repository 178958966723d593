use serde::Deserialize;

use crate::error::ConfigError;

/// Tunables of the page behaviour.
///
/// Pages may override any subset through a JSON document; missing fields keep
/// their defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Viewport widths above this use the desktop navigation.
    pub mobile_breakpoint: f64,
    pub scroll_top_threshold: f64,
    /// Added to the scroll position before looking up the current section.
    pub active_section_offset: f64,
    pub anchor_gap: f64,
    pub toast_show_delay_ms: u32,
    pub toast_visible_ms: u32,
    pub toast_removal_ms: u32,
    pub press_animation_ms: u32,
    pub form_submit_delay_ms: u32,
    pub search_debounce_ms: u32,
    pub resize_debounce_ms: u32,
    pub slide_in_stagger_ms: u32,
    pub phone: String,
    pub whatsapp_number: String,
    pub order_message: String,
    pub gallery_base_path: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint: 1023.0,
            scroll_top_threshold: 300.0,
            active_section_offset: 100.0,
            anchor_gap: 20.0,
            toast_show_delay_ms: 100,
            toast_visible_ms: 3000,
            toast_removal_ms: 300,
            press_animation_ms: 150,
            form_submit_delay_ms: 2000,
            search_debounce_ms: 150,
            resize_debounce_ms: 100,
            slide_in_stagger_ms: 100,
            phone: "0555219684".to_string(),
            whatsapp_number: "213555219684".to_string(),
            order_message: "Bonjour, je souhaite passer une commande.".to_string(),
            gallery_base_path: "images/instagram/".to_string(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.mobile_breakpoint.is_nan() || self.mobile_breakpoint <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "mobile_breakpoint must be positive, got {}",
                self.mobile_breakpoint
            )));
        }
        if self.scroll_top_threshold < 0.0 {
            return Err(ConfigError::Invalid(
                "scroll_top_threshold must not be negative".to_string(),
            ));
        }
        if self.phone.trim().is_empty() || self.whatsapp_number.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "phone and whatsapp_number are required".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.mobile_breakpoint, 1023.0);
        assert_eq!(config.scroll_top_threshold, 300.0);
        assert_eq!(config.toast_visible_ms, 3000);
        assert_eq!(config.form_submit_delay_ms, 2000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_override() {
        let config = SiteConfig::from_json(r#"{"mobile_breakpoint": 768, "phone": "0123"}"#).unwrap();
        assert_eq!(config.mobile_breakpoint, 768.0);
        assert_eq!(config.phone, "0123");
        assert_eq!(config.whatsapp_number, "213555219684");
        assert_eq!(config.press_animation_ms, 150);
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(SiteConfig::from_json("{}").unwrap(), SiteConfig::default());
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            SiteConfig::from_json("{not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            SiteConfig::from_json(r#"{"mobile_breakpoint": 0}"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            SiteConfig::from_json(r#"{"phone": "  "}"#),
            Err(ConfigError::Invalid(_))
        ));
    }
}
