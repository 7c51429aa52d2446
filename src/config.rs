use serde::{Deserialize, Serialize};

use crate::domain::currency::Currency;
use crate::domain::errors::InfrastructureError;
use crate::domain::logging::LogLevel;

/// Id of the optional `<script type="application/json">` element holding
/// overrides for [`AppConfig`].
pub const CONFIG_ELEMENT_ID: &str = "inventory-config";

pub const STEAM_ECONOMY_IMAGE_BASE: &str = "https://community.fastly.steamstatic.com/economy/image/";

const SAMPLE_ICON: &str = "-9a81dlWLwJ2UUGcVs_nsVtzdOEdtWwKGZZLQHTxDZ7I56KU0Zwwo4NUX4oFJZEHLbXH5ApeO4YmlhxYQknCRvCo04DEVlxkKgpot621FAR17P7NdTRH-t26q4SZlvD7PYTQgXtu5Mx2gv2PrdSijAWwqkVtN272JIGdJw46YVrYqVO3xLy-gJC9u5vByCBh6ygi7WGdwUKTYdRD8A";

/// Page settings. Every field has a default, so an override only needs to
/// name what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub sample_item_count: usize,
    pub item_image_url: String,
    pub avatar_url: String,
    pub banner_url: String,
    pub default_currency: Currency,
    pub log_level: LogLevel,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sample_item_count: 12,
            item_image_url: economy_image_url(SAMPLE_ICON),
            avatar_url: "https://avatars.fastly.steamstatic.com/fa31773ad3befce64be98fc74a8371ffa53069ec_full.jpg"
                .to_string(),
            banner_url: "https://steaminventory.ru/background.png".to_string(),
            default_currency: Currency::default(),
            log_level: LogLevel::for_build(),
        }
    }
}

impl AppConfig {
    pub fn from_json(raw: &str) -> Result<Self, InfrastructureError> {
        serde_json::from_str(raw).map_err(|e| InfrastructureError::ConfigParse(e.to_string()))
    }
}

/// Full 360px image URL for a Steam economy icon hash
pub fn economy_image_url(icon: &str) -> String {
    format!("{}{}/360fx360f", STEAM_ECONOMY_IMAGE_BASE, icon)
}
