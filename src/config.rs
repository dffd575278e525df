//! Slot machine settings
//!
//! The host page may embed a JSON document in `<script id="slot-config"
//! type="application/json">`; any field it leaves out keeps its default.

use serde::{Deserialize, Serialize};

/// Id of the optional config element in the host page
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub const CONFIG_ELEMENT_ID: &str = "slot-config";

pub const DEFAULT_ALPHABET: [&str; 13] = [
    "💖", "🐱", "✨", "🌈", "🦄", "🌼", "🐶", "💎", "🌷", "🐣", "🦊", "🐇", "🌺",
];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlotConfig {
    /// Symbols each reel cycles through
    pub alphabet: Vec<String>,
    /// Number of slots in the row, fixed once the widget mounts
    pub slot_count: usize,
    /// Milliseconds between ticks
    pub spin_delay_ms: u32,
    /// Ticks per stop stage
    pub stop_ticks: u32,
}

impl Default for SlotConfig {
    fn default() -> Self {
        Self {
            alphabet: DEFAULT_ALPHABET.iter().map(|s| s.to_string()).collect(),
            slot_count: 3,
            spin_delay_ms: 100,
            stop_ticks: 5,
        }
    }
}

impl SlotConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: SlotConfig =
            serde_json::from_str(json).map_err(|e| format!("Invalid slot config: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.alphabet.is_empty() {
            return Err("Slot alphabet must not be empty".to_string());
        }
        if self.spin_delay_ms == 0 {
            return Err("Spin delay must be at least 1ms".to_string());
        }
        Ok(())
    }

    /// What slot `index` shows before the first spin
    pub fn initial_symbols(&self) -> Vec<String> {
        (0..self.slot_count)
            .map(|i| self.alphabet[i % self.alphabet.len()].clone())
            .collect()
    }
}

/// Load the config embedded in the page, falling back to defaults
pub fn load_config() -> SlotConfig {
    #[cfg(target_arch = "wasm32")]
    {
        let text = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        if let Some(text) = text {
            match SlotConfig::from_json(&text) {
                Ok(config) => {
                    log::info!(
                        "Loaded slot config: {} slots, {} symbols",
                        config.slot_count,
                        config.alphabet.len()
                    );
                    return config;
                }
                Err(e) => log::warn!("{}, using defaults", e),
            }
        }
    }

    SlotConfig::default()
}
