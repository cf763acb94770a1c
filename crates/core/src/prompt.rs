//! Prompt composition for AI design-concept generation.
//!
//! Turns a structured [`DesignBrief`] into the natural-language prompt sent
//! to the image provider. Pure and deterministic: same brief, same prompt.

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of a tattoo description in characters.
pub const MAX_DESCRIPTION_LENGTH: usize = 2_000;

/// Every prompt opens with this prefix followed by the user's description.
pub const PROMPT_PREFIX: &str = "Anime tattoo design: ";

/// Fixed quality suffix appended to every prompt.
pub const QUALITY_SUFFIX: &str =
    "tattoo flash art, clean lines, high contrast, white background, professional tattoo design";

/// Clause appended when the client asks for black and grey work.
pub const BLACK_GREY_CLAUSE: &str = "black and grey ink only, smooth monochrome shading";

/// Clause appended when the client asks for color work.
pub const COLOR_CLAUSE: &str = "vibrant saturated colors";

/// Anime art style -> prompt phrase.
///
/// Unrecognized values are passed through verbatim rather than rejected, so
/// a style the frontend has not caught up with still produces a usable
/// prompt.
pub const ANIME_STYLE_PHRASES: [(&str, &str); 6] = [
    ("shonen", "dynamic shonen manga style with bold action linework"),
    ("shoujo", "soft shoujo style with delicate flowing lines"),
    ("chibi", "cute chibi style with rounded exaggerated proportions"),
    ("ghibli", "Studio Ghibli inspired painterly style"),
    ("realistic", "semi-realistic anime style with detailed shading"),
    ("minimalist", "minimalist anime style with simple clean shapes"),
];

/// Tattoo technique -> prompt phrase. Same pass-through policy as above.
pub const TATTOO_STYLE_PHRASES: [(&str, &str); 6] = [
    ("traditional", "bold traditional tattoo style with heavy outlines"),
    ("neo-traditional", "neo-traditional tattoo style with rich color depth"),
    ("watercolor", "watercolor tattoo style with soft paint splashes"),
    ("blackwork", "blackwork tattoo style with solid black fields"),
    ("linework", "fine linework tattoo style"),
    ("dotwork", "dotwork tattoo style with stippled shading"),
];

// ---------------------------------------------------------------------------
// Brief
// ---------------------------------------------------------------------------

/// A design request as submitted by the client. Transient: lives for one
/// request and is never persisted.
///
/// The design endpoints speak camelCase; `default` keeps a missing
/// `description` deserializable so the handler can answer with a specific
/// validation message instead of a serde rejection.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DesignBrief {
    /// Free-text description of the tattoo idea. Required.
    pub description: String,
    /// Anime art style key (see [`ANIME_STYLE_PHRASES`]).
    pub anime_style: Option<String>,
    /// Tattoo technique key (see [`TATTOO_STYLE_PHRASES`]).
    pub tattoo_style: Option<String>,
    /// Body placement, echoed back in the response only.
    pub placement: Option<String>,
    /// Size category (see [`crate::estimate`]).
    pub size: Option<String>,
    /// `"color"` or `"black-grey"`.
    pub color_preference: Option<String>,
}

// ---------------------------------------------------------------------------
// Composition
// ---------------------------------------------------------------------------

/// Look up a style key in a phrase table, falling back to the raw key.
fn style_phrase<'a>(table: &[(&'a str, &'a str)], key: &'a str) -> &'a str {
    table
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, phrase)| *phrase)
        .unwrap_or(key)
}

/// Compose the generation prompt for a brief.
///
/// The result always contains the description verbatim and always ends with
/// [`QUALITY_SUFFIX`]. Empty optional fields contribute nothing.
pub fn build_prompt(brief: &DesignBrief) -> String {
    let mut prompt = format!("{PROMPT_PREFIX}{}", brief.description);

    if let Some(style) = non_empty(&brief.anime_style) {
        prompt.push_str(", ");
        prompt.push_str(style_phrase(&ANIME_STYLE_PHRASES, style));
    }

    if let Some(style) = non_empty(&brief.tattoo_style) {
        prompt.push_str(", ");
        prompt.push_str(style_phrase(&TATTOO_STYLE_PHRASES, style));
    }

    match non_empty(&brief.color_preference) {
        Some("black-grey") => {
            prompt.push_str(", ");
            prompt.push_str(BLACK_GREY_CLAUSE);
        }
        Some("color") => {
            prompt.push_str(", ");
            prompt.push_str(COLOR_CLAUSE);
        }
        _ => {}
    }

    prompt.push_str(", ");
    prompt.push_str(QUALITY_SUFFIX);
    prompt
}

/// Treat `None` and whitespace-only strings alike.
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

// ---------------------------------------------------------------------------
// Style option listing (backs GET /design/styles)
// ---------------------------------------------------------------------------

/// Supported anime style keys, in table order.
pub fn anime_style_keys() -> Vec<&'static str> {
    ANIME_STYLE_PHRASES.iter().map(|(k, _)| *k).collect()
}

/// Supported tattoo style keys, in table order.
pub fn tattoo_style_keys() -> Vec<&'static str> {
    TATTOO_STYLE_PHRASES.iter().map(|(k, _)| *k).collect()
}

/// Supported color preference values.
pub const COLOR_PREFERENCES: [&str; 2] = ["color", "black-grey"];

/// Body placements offered by the design tool. Free-text placements are
/// accepted too; this list only feeds the form.
pub const PLACEMENTS: [&str; 9] = [
    "forearm",
    "upper-arm",
    "shoulder",
    "back",
    "chest",
    "thigh",
    "calf",
    "ankle",
    "wrist",
];

#[cfg(test)]
mod tests {
    use super::*;

    fn brief(description: &str) -> DesignBrief {
        DesignBrief {
            description: description.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn prompt_contains_description_and_suffix() {
        let p = build_prompt(&brief("dragon on shoulder"));
        assert!(p.contains("dragon on shoulder"));
        assert!(p.ends_with(QUALITY_SUFFIX));
    }

    #[test]
    fn prompt_starts_with_prefix_and_description() {
        let p = build_prompt(&brief("dragon on shoulder"));
        assert!(p.starts_with("Anime tattoo design: dragon on shoulder"));
    }

    #[test]
    fn recognized_anime_style_maps_to_phrase() {
        let mut b = brief("koi fish");
        b.anime_style = Some("ghibli".into());
        let p = build_prompt(&b);
        assert!(p.contains("Studio Ghibli inspired painterly style"));
        // The raw key must not appear on its own between commas.
        assert!(!p.contains(", ghibli,"));
    }

    #[test]
    fn unrecognized_anime_style_passes_through() {
        let mut b = brief("koi fish");
        b.anime_style = Some("cyberpunk".into());
        let p = build_prompt(&b);
        assert!(p.contains("cyberpunk"));
    }

    #[test]
    fn recognized_tattoo_style_maps_to_phrase() {
        let mut b = brief("koi fish");
        b.tattoo_style = Some("dotwork".into());
        let p = build_prompt(&b);
        assert!(p.contains("dotwork tattoo style with stippled shading"));
    }

    #[test]
    fn black_grey_clause_excludes_color_clause() {
        let mut b = brief("wolf");
        b.color_preference = Some("black-grey".into());
        let p = build_prompt(&b);
        assert!(p.contains(BLACK_GREY_CLAUSE));
        assert!(!p.contains(COLOR_CLAUSE));
    }

    #[test]
    fn color_clause_excludes_black_grey_clause() {
        let mut b = brief("wolf");
        b.color_preference = Some("color".into());
        let p = build_prompt(&b);
        assert!(p.contains(COLOR_CLAUSE));
        assert!(!p.contains(BLACK_GREY_CLAUSE));
    }

    #[test]
    fn absent_color_preference_adds_neither_clause() {
        let p = build_prompt(&brief("wolf"));
        assert!(!p.contains(COLOR_CLAUSE));
        assert!(!p.contains(BLACK_GREY_CLAUSE));
    }

    #[test]
    fn unknown_color_preference_adds_neither_clause() {
        let mut b = brief("wolf");
        b.color_preference = Some("sepia".into());
        let p = build_prompt(&b);
        assert!(!p.contains(COLOR_CLAUSE));
        assert!(!p.contains(BLACK_GREY_CLAUSE));
    }

    #[test]
    fn whitespace_only_style_is_ignored() {
        let mut b = brief("wolf");
        b.anime_style = Some("   ".into());
        let p = build_prompt(&b);
        assert_eq!(p, build_prompt(&brief("wolf")));
    }

    #[test]
    fn all_recognized_styles_map() {
        for (key, phrase) in ANIME_STYLE_PHRASES {
            let mut b = brief("fox spirit");
            b.anime_style = Some(key.to_string());
            let p = build_prompt(&b);
            assert!(p.contains(phrase), "style {key} should map to its phrase");
        }
        for (key, phrase) in TATTOO_STYLE_PHRASES {
            let mut b = brief("fox spirit");
            b.tattoo_style = Some(key.to_string());
            let p = build_prompt(&b);
            assert!(p.contains(phrase), "style {key} should map to its phrase");
        }
    }
}
