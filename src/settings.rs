//! Scene tuning and reveal settings
//!
//! Read once at start-up from an optional JSON block embedded in the page.
//! Nothing is ever written back.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::scene::SceneKind;

/// Hero particle field tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroSettings {
    pub count: usize,
    /// Particles closer than this are linked
    pub link_distance: f64,
    /// Link opacity at zero distance
    pub link_opacity: f64,
}

impl Default for HeroSettings {
    fn default() -> Self {
        Self {
            count: PARTICLE_COUNT,
            link_distance: LINK_DISTANCE,
            link_opacity: LINK_OPACITY,
        }
    }
}

/// Philosophy wave tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhilosophySettings {
    pub curves: usize,
    /// Horizontal sample spacing (px)
    pub step: f64,
    pub time_step: f64,
    pub alpha: f64,
}

impl Default for PhilosophySettings {
    fn default() -> Self {
        Self {
            curves: WAVE_CURVES,
            step: WAVE_STEP,
            time_step: WAVE_TIME_STEP,
            alpha: WAVE_ALPHA,
        }
    }
}

/// Service polygon tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    pub count: usize,
    pub alpha: f64,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            count: SHAPE_COUNT,
            alpha: SHAPE_ALPHA,
        }
    }
}

/// Process ribbon tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessSettings {
    pub count: usize,
    /// Horizontal sample spacing (px)
    pub spacing: f64,
    pub alpha: f64,
}

impl Default for ProcessSettings {
    fn default() -> Self {
        Self {
            count: RIBBON_COUNT,
            spacing: RIBBON_SPACING,
            alpha: RIBBON_ALPHA,
        }
    }
}

/// Portfolio grid tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioSettings {
    /// Cell size (px)
    pub cell: f64,
    /// Drift per frame (px)
    pub drift: f64,
    pub dot_radius: f64,
}

impl Default for PortfolioSettings {
    fn default() -> Self {
        Self {
            cell: GRID_CELL,
            drift: GRID_DRIFT,
            dot_radius: GRID_DOT_RADIUS,
        }
    }
}

/// Contact orb tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactSettings {
    pub count: usize,
}

impl Default for ContactSettings {
    fn default() -> Self {
        Self { count: ORB_COUNT }
    }
}

/// Scroll reveal tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealSettings {
    /// Intersection ratio that counts as "entered"
    pub threshold: f64,
    /// Trigger this many px before the viewport bottom
    pub bottom_margin: u32,
    /// Delay between reveals in one notification batch (ms)
    pub stagger_ms: u32,
}

impl Default for RevealSettings {
    fn default() -> Self {
        Self {
            threshold: REVEAL_THRESHOLD,
            bottom_margin: REVEAL_BOTTOM_MARGIN,
            stagger_ms: REVEAL_STAGGER_MS,
        }
    }
}

impl RevealSettings {
    /// `rootMargin` for the intersection observer
    pub fn root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", self.bottom_margin)
    }
}

/// All backdrop settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Scenes to start (others are left untouched)
    pub enabled: Vec<SceneKind>,
    pub hero: HeroSettings,
    pub philosophy: PhilosophySettings,
    pub service: ServiceSettings,
    pub process: ProcessSettings,
    pub portfolio: PortfolioSettings,
    pub contact: ContactSettings,
    pub reveal: RevealSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            enabled: SceneKind::ALL.to_vec(),
            hero: HeroSettings::default(),
            philosophy: PhilosophySettings::default(),
            service: ServiceSettings::default(),
            process: ProcessSettings::default(),
            portfolio: PortfolioSettings::default(),
            contact: ContactSettings::default(),
            reveal: RevealSettings::default(),
        }
    }
}

impl Settings {
    /// Id of the `<script type="application/json">` element holding overrides
    pub const ELEMENT_ID: &'static str = "backdrop-settings";

    /// Parse settings from JSON; omitted fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn is_enabled(&self, kind: SceneKind) -> bool {
        self.enabled.contains(&kind)
    }

    /// Load settings from the page (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let json = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::ELEMENT_ID))
            .and_then(|el| el.text_content());

        if let Some(json) = json {
            match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from #{}", Self::ELEMENT_ID);
                    return settings;
                }
                Err(e) => log::warn!("Ignoring malformed #{}: {}", Self::ELEMENT_ID, e),
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
