//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Text assets are loaded at compile time using `include_str!`.

use crate::models::PortfolioData;

// =============================================================================
// Text Assets (loaded at compile time)
// =============================================================================

/// Full welcome banner for wide terminals.
pub const BANNER: &str = include_str!("../assets/text/banner.txt");

/// Compact welcome banner for narrow terminals.
pub const BANNER_COMPACT: &str = include_str!("../assets/text/banner_compact.txt");

/// Help text for the `help` command.
pub const HELP_TEXT: &str = include_str!("../assets/text/help.txt");

/// Static output of the `/bin/hack` executable.
pub const HACK_BANNER: &str = include_str!("../assets/text/hack_banner.txt");

/// Built-in portfolio dataset, used whenever the remote store is
/// unreachable or incomplete.
const FALLBACK_JSON: &str = include_str!("../assets/data/portfolio.json");

/// Parse the embedded dataset. The asset is compiled in, so a parse failure
/// is a build defect rather than a runtime condition.
pub fn fallback_data() -> PortfolioData {
    serde_json::from_str(FALLBACK_JSON).expect("embedded portfolio dataset must be valid JSON")
}

// =============================================================================
// Application Metadata
// =============================================================================

/// Username shown in the prompt (`mohamedsalem:/path$ `).
pub const USER: &str = "mohamedsalem";

// =============================================================================
// Network Configuration
// =============================================================================

/// Endpoint serving the portfolio dataset as a single JSON document.
pub const DATA_URL: &str =
    "https://mohamedsalem-portfolio-default-rtdb.firebaseio.com/portfolio.json";

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: u32 = 10_000;

// =============================================================================
// Terminal Configuration
// =============================================================================

/// Terminals narrower than this get the compact banner.
pub const COMPACT_BANNER_MAX_COLS: usize = 70;

/// Upper bound on how long an animation may suppress the prompt before the
/// session restores it anyway.
pub const ANIMATION_FALLBACK_MS: u32 = 30_000;

/// Window during which repeated Ctrl+C presses are coalesced.
pub const INTERRUPT_DEBOUNCE_MS: u32 = 200;

// =============================================================================
// Matrix Effect Configuration
// =============================================================================

/// Number of falling glyph columns spawned by the matrix effect.
pub const MATRIX_COLUMNS: u32 = 50;
