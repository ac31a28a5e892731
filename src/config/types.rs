// Configuration type definitions

use serde::Deserialize;

pub const DEFAULT_BLUR_GRACE_MS: u64 = 200;
pub const DEFAULT_PLACEHOLDER: &str = "Type to search...";
pub const DEFAULT_MAX_VISIBLE_SUGGESTIONS: usize = 8;

/// How the final selection is written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Lines,
    Json,
}

/// Search field configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    /// Delay before a blur clears focus and highlight (0 clears at once)
    #[serde(default = "default_blur_grace_ms")]
    pub blur_grace_ms: u64,
    /// Park blurs while a suggestion row is held down by the mouse
    #[serde(default = "default_pointer_guard")]
    pub pointer_guard: bool,
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
    #[serde(default = "default_max_visible_suggestions")]
    pub max_visible_suggestions: usize,
}

fn default_blur_grace_ms() -> u64 {
    DEFAULT_BLUR_GRACE_MS
}

fn default_pointer_guard() -> bool {
    true
}

fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER.to_string()
}

fn default_max_visible_suggestions() -> usize {
    DEFAULT_MAX_VISIBLE_SUGGESTIONS
}

impl Default for InputConfig {
    fn default() -> Self {
        InputConfig {
            blur_grace_ms: DEFAULT_BLUR_GRACE_MS,
            pointer_guard: true,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            max_visible_suggestions: DEFAULT_MAX_VISIBLE_SUGGESTIONS,
        }
    }
}

/// Output configuration section
#[derive(Debug, Clone, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
}
