//! Handlers for the `/design` resource: AI concept generation and the
//! static style listings the design tool's form is built from.

use axum::extract::State;
use axum::Json;
use rand::Rng;
use serde::Serialize;

use inkami_core::estimate::{estimate_for, SizeCategory};
use inkami_core::prompt::{
    anime_style_keys, build_prompt, tattoo_style_keys, DesignBrief, COLOR_PREFERENCES, PLACEMENTS,
};
use inkami_core::validation::validate_description;

use crate::error::AppResult;
use crate::middleware::rate_limit::RateLimited;
use crate::state::AppState;

/// Defaults echoed in the concept when the client leaves a field blank.
/// These are display values; the estimator applies its own fallback.
const DEFAULT_ANIME_STYLE: &str = "custom";
const DEFAULT_TATTOO_STYLE: &str = "custom";
const DEFAULT_PLACEMENT: &str = "not specified";
const DEFAULT_SIZE: &str = "medium";
const DEFAULT_COLOR: &str = "color";

/// Upper bound (exclusive) for the provider seed. Variety only; the value
/// has no correctness weight.
const SEED_RANGE: u64 = 1_000_000_000;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// A generated design concept. Transient: returned directly, never stored.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedConcept {
    pub prompt: String,
    /// Direct URL or inline base64 data URI. Never empty on success.
    pub image_url: String,
    pub anime_style: String,
    pub tattoo_style: String,
    pub placement: String,
    pub size: String,
    pub color_preference: String,
    pub estimated_time: String,
    pub estimated_price: String,
}

/// Envelope for `POST /design/generate`.
#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub success: bool,
    pub concept: GeneratedConcept,
}

/// Static enumerations for `GET /design/styles`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleOptions {
    pub anime_styles: Vec<&'static str>,
    pub tattoo_styles: Vec<&'static str>,
    pub sizes: Vec<&'static str>,
    pub color_preferences: Vec<&'static str>,
    pub placements: Vec<&'static str>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/design/generate
///
/// Validate the brief, compose the prompt, run the provider chain, and
/// shape the concept. Validation happens before any outbound call.
pub async fn generate(
    State(state): State<AppState>,
    _guard: RateLimited,
    Json(brief): Json<DesignBrief>,
) -> AppResult<Json<GenerateResponse>> {
    validate_description(&brief.description)?;

    let prompt = build_prompt(&brief);
    let seed: u64 = rand::rng().random_range(0..SEED_RANGE);

    let image = state.image_provider.generate(&prompt, seed).await?;

    let estimate = estimate_for(brief.size.as_deref());

    let concept = GeneratedConcept {
        prompt,
        image_url: image.image_url,
        anime_style: echo_or(&brief.anime_style, DEFAULT_ANIME_STYLE),
        tattoo_style: echo_or(&brief.tattoo_style, DEFAULT_TATTOO_STYLE),
        placement: echo_or(&brief.placement, DEFAULT_PLACEMENT),
        size: echo_or(&brief.size, DEFAULT_SIZE),
        color_preference: echo_or(&brief.color_preference, DEFAULT_COLOR),
        estimated_time: estimate.time.to_string(),
        estimated_price: estimate.price.to_string(),
    };

    Ok(Json(GenerateResponse {
        success: true,
        concept,
    }))
}

/// GET /api/v1/design/styles
///
/// The supported style/size/color enumerations, straight from the static
/// tables in `inkami_core`.
pub async fn styles() -> Json<StyleOptions> {
    Json(StyleOptions {
        anime_styles: anime_style_keys(),
        tattoo_styles: tattoo_style_keys(),
        sizes: SizeCategory::all().iter().map(|s| s.as_str()).collect(),
        color_preferences: COLOR_PREFERENCES.to_vec(),
        placements: PLACEMENTS.to_vec(),
    })
}

/// Echo an optional field, substituting the display default when blank.
fn echo_or(value: &Option<String>, default: &str) -> String {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(default)
        .to_string()
}
