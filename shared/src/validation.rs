// =============================================================================
// Record Validation: Chainable Validator Builder
// =============================================================================
//
// Project records are checked once, when the engine builds its catalog.
//
//   1. CHAINABLE BUILDER (multi-rule fields):
//
//        let result = validate(&record.title)
//            .required()
//            .max_length(120)
//            .finish();
//
//      Once any validator in the chain fails, the rest are skipped. The final
//      `.finish()` returns `Result<(), String>` with the first error message.
//
//   2. RECORD CHECK:
//
//        validate_project(&record)?;
//
//      Runs every field rule and prefixes the failing field's name.
//
// =============================================================================

use crate::data::ProjectRecord;

/// Longest title accepted for a project card.
pub const MAX_TITLE_LEN: usize = 120;

/// Longest slug accepted in a `#projects/<slug>` hash.
pub const MAX_SLUG_LEN: usize = 96;

// -----------------------------------------------------------------------------
// Chainable Validator
// -----------------------------------------------------------------------------

/// A chainable validator that keeps the first error encountered.
pub struct Validator<'a> {
    value: &'a str,
    result: Result<(), String>,
}

/// Start a validation chain for the given value.
pub fn validate(value: &str) -> Validator<'_> {
    Validator {
        value,
        result: Ok(()),
    }
}

impl<'a> Validator<'a> {
    fn fail(self, msg: String) -> Self {
        Validator {
            value: self.value,
            result: Err(msg),
        }
    }

    /// Fails if the value is empty (after trimming).
    pub fn required(self) -> Self {
        if self.result.is_err() {
            return self;
        }
        if self.value.trim().is_empty() {
            return self.fail("This field is required".to_string());
        }
        self
    }

    /// Fails if the value has more than `n` characters.
    pub fn max_length(self, n: usize) -> Self {
        if self.result.is_err() {
            return self;
        }
        if self.value.chars().count() > n {
            return self.fail(format!("Must be at most {} characters", n));
        }
        self
    }

    /// Fails unless the value is a lower-case hyphenated identifier:
    /// `[a-z0-9]` runs joined by single dashes.
    pub fn slug(self) -> Self {
        if self.result.is_err() {
            return self;
        }
        let v = self.value;
        if !is_slug(v) {
            return self.fail(format!("\"{}\" is not a valid slug", v));
        }
        self
    }

    /// Fails unless the value looks like a link target the page can use:
    /// an absolute http(s) URL, a `mailto:` address, a root/relative path,
    /// or an in-page anchor.
    pub fn link_target(self) -> Self {
        if self.result.is_err() {
            return self;
        }
        let v = self.value;
        let valid = v.starts_with("https://")
            || v.starts_with("http://")
            || v.starts_with("mailto:")
            || v.starts_with('/')
            || v.starts_with("./")
            || v.starts_with('#');
        if !valid || v.chars().any(char::is_whitespace) {
            return self.fail(format!("\"{}\" is not a usable link", v));
        }
        self
    }

    /// Consume the validator and return the accumulated result.
    pub fn finish(self) -> Result<(), String> {
        self.result
    }
}

// =============================================================================
// Standalone functions
// =============================================================================

/// True if `s` is `[a-z0-9]+(-[a-z0-9]+)*`.
pub fn is_slug(s: &str) -> bool {
    !s.is_empty()
        && s.split('-').all(|part| {
            !part.is_empty()
                && part
                    .bytes()
                    .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
        })
}

/// Check every field of a project record. The error names the field.
pub fn validate_project(record: &ProjectRecord) -> Result<(), String> {
    validate(&record.title)
        .required()
        .max_length(MAX_TITLE_LEN)
        .finish()
        .map_err(|e| format!("title: {e}"))?;

    let slug = record.slug();
    validate(&slug)
        .required()
        .max_length(MAX_SLUG_LEN)
        .slug()
        .finish()
        .map_err(|e| format!("slug: {e}"))?;

    for (i, image) in record.images.iter().enumerate() {
        validate(image)
            .required()
            .link_target()
            .finish()
            .map_err(|e| format!("images[{i}]: {e}"))?;
    }

    for (i, link) in record.links.iter().enumerate() {
        validate(&link.url)
            .required()
            .link_target()
            .finish()
            .map_err(|e| format!("links[{i}].url: {e}"))?;
    }

    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
