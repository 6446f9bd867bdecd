use once_cell::sync::Lazy;
use regex::Regex;

use crate::doc::model::Fields;

/// Embed URL template base of the video provider.
pub const EMBED_BASE: &str = "https://player.vimeo.com/video";

static VIDEO_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{6,}").expect("static pattern"));

/// Extract a numeric video id from a provider URL.
///
/// The id is the first run of 6 or more digits anywhere in the URL.
/// Malformed URLs simply yield `None`; the caller renders a placeholder.
pub fn extract_video_id(url: &str) -> Option<&str> {
    VIDEO_ID.find(url).map(|m| m.as_str())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Playback flags carried into the embed URL, each independently defaulted.
pub struct EmbedFlags {
    /// Start playback automatically (default true).
    pub autoplay: bool,
    /// Start muted (default true; autoplay requires it in practice).
    pub muted: bool,
    /// Loop the clip (default false).
    pub looped: bool,
}

impl Default for EmbedFlags {
    fn default() -> Self {
        Self {
            autoplay: true,
            muted: true,
            looped: false,
        }
    }
}

impl EmbedFlags {
    /// Read flags from a video config object, keeping per-field defaults for
    /// absent or non-boolean values.
    pub fn from_fields(fields: &Fields) -> Self {
        let defaults = Self::default();
        let flag = |name: &str, default: bool| {
            fields.get(name).and_then(|v| v.as_bool()).unwrap_or(default)
        };
        Self {
            autoplay: flag("autoplay", defaults.autoplay),
            muted: flag("muted", defaults.muted),
            looped: flag("loop", defaults.looped),
        }
    }
}

/// Build the provider embed URL for an extracted video id.
pub fn embed_url(id: &str, flags: EmbedFlags) -> String {
    format!(
        "{EMBED_BASE}/{id}?autoplay={}&muted={}&loop={}&playsinline=1",
        flags.autoplay as u8, flags.muted as u8, flags.looped as u8
    )
}

#[cfg(test)]
#[path = "../../tests/unit/render/video.rs"]
mod tests;
