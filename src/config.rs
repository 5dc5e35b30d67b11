//! Restaurant identity and contact details.
//!
//! Defaults are compiled in. A page can override any field with an embedded
//! `<script id="site-config" type="application/json">` block.

use serde::Deserialize;
use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlScriptElement};

pub const CONFIG_SCRIPT_ID: &str = "site-config";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse site config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Phone number for tel: link must be digits only, got {0:?}")]
    InvalidPhone(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub name: String,
    pub brand: String,
    pub logo: String,
    pub tagline: String,
    pub subline: String,
    pub street: String,
    pub city_line: String,
    pub phone_display: String,
    pub phone_tel: String,
    pub hours: Vec<String>,
    pub instagram_handle: String,
    pub instagram_url: String,
    pub map_embed_url: String,
    pub map_title: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "Woodon".into(),
            brand: "WOODON".into(),
            logo: "/logo.jpg".into(),
            tagline: "Authentic Korean BBQ Experience".into(),
            subline: "Premium cuts grilled at your table in Kingston, Ontario".into(),
            street: "371 Princess Street".into(),
            city_line: "Kingston, Ontario K7L 1B9".into(),
            phone_display: "(613) 542-6066".into(),
            phone_tel: "6135426066".into(),
            hours: vec![
                "Monday: 4:00 PM - 10:00 PM".into(),
                "Tuesday - Sunday: 12:00 PM - 10:00 PM".into(),
            ],
            instagram_handle: "@woo.don_kingston".into(),
            instagram_url: "https://www.instagram.com/woo.don_kingston/".into(),
            map_embed_url: "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d2857.6895!2d-76.4885!3d44.2315!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x4cd2ab0fcb7c96cf%3A0x4c5b1e0f8c7c0f0!2s371%20Princess%20St%2C%20Kingston%2C%20ON%20K7L%201B9!5e0!3m2!1sen!2sca!4v1700000000000!5m2!1sen!2sca".into(),
            map_title: "Woodon Korean BBQ Location".into(),
        }
    }
}

impl SiteConfig {
    /// Parses an override document. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let cfg: SiteConfig = serde_json::from_str(json)?;
        if cfg.phone_tel.is_empty() || !cfg.phone_tel.chars().all(|c| c.is_ascii_digit()) {
            return Err(ConfigError::InvalidPhone(cfg.phone_tel));
        }
        Ok(cfg)
    }

    pub fn tel_href(&self) -> String {
        format!("tel:{}", self.phone_tel)
    }
}

fn read_embedded_json(script_id: &str) -> Option<String> {
    let doc = window()?.document()?;
    let el = doc.get_element_by_id(script_id)?;
    let script = el.dyn_into::<HtmlScriptElement>().ok()?;
    script.text().ok()
}

/// Loads the site config from the page, falling back to defaults.
pub fn load() -> SiteConfig {
    let Some(json) = read_embedded_json(CONFIG_SCRIPT_ID) else {
        return SiteConfig::default();
    };
    if json.trim().is_empty() {
        return SiteConfig::default();
    }

    match SiteConfig::from_json(&json) {
        Ok(cfg) => cfg,
        Err(e) => {
            gloo::console::error!(format!("{e}; using built-in site config"));
            SiteConfig::default()
        }
    }
}
