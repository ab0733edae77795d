//! # Portfolio Shared Crate
//!
//! Data tables, constants and pure helpers shared by the portfolio engine
//! (compiled to WASM) and any native tooling that renders or checks the same
//! content. Everything here is deterministic and free of I/O.
//!
//! ## Architecture
//!
//! ```text
//! shared crate (this)
//!   |
//!   +-- data        static project/home/about/skills/contact tables
//!   +-- validation  chainable validator for project records
//!   |
//!   +-- folio-engine (depends on shared, compiled to WASM)
//!         - builds the card catalog from `data::projects()`
//!         - wasm_bindgen lives in the engine crate, NOT here
//! ```

pub mod data;
pub mod validation;

// ============================================
// Constants
//
// Values both the engine and the page markup
// must agree on. Timing constants live in the
// engine's config, not here.
// ============================================

/// Image shown when a project has no images of its own.
pub const FALLBACK_IMAGE: &str = "./assets/images/default.png";

/// Hash prefix of a project deep link: `#projects/<slug>`.
pub const PROJECT_HASH_PREFIX: &str = "#projects/";

/// Section id that hosts the project grid.
pub const PROJECTS_SECTION: &str = "projects";

/// Filter value that matches every category.
pub const FILTER_ALL: &str = "all";

// ============================================
// Computation Helpers
// ============================================

/// Cubic ease-in-out over `t` in 0..1.
pub fn ease_in_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

// ============================================
// String Helpers
// ============================================

/// Derive a URL-safe slug from a project title: lower-cased, every run of
/// characters outside `[a-z0-9]` collapsed to a single `-`, no leading or
/// trailing dashes.
pub fn format_project_slug(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;
    for c in title.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }
    slug
}

/// Escape text for safe embedding in HTML element content or a quoted
/// attribute value.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Upper-case the first character ("backend" -> "Backend").
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// ============================================
// Tests
// ============================================
