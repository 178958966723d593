use leptos::document;
use shared::{SiteConfig, SiteError};

/// Id of the optional `<script type="application/json">` holding overrides.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

/// Page configuration, falling back to the defaults when the page provides
/// none or provides something unusable.
pub fn load_site_config() -> SiteConfig {
    match read_site_config() {
        Ok(Some(config)) => {
            log::debug!("loaded site config from #{}", CONFIG_ELEMENT_ID);
            config
        }
        Ok(None) => SiteConfig::default(),
        Err(err) => {
            log::warn!("ignoring #{}: {}", CONFIG_ELEMENT_ID, err);
            SiteConfig::default()
        }
    }
}

fn read_site_config() -> Result<Option<SiteConfig>, SiteError> {
    let Some(element) = document().get_element_by_id(CONFIG_ELEMENT_ID) else {
        return Ok(None);
    };
    let json = element.text_content().unwrap_or_default();
    Ok(Some(SiteConfig::from_json(&json)?))
}
