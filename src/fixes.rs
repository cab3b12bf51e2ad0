//! Replacement content for the files the fixer overwrites.
//!
//! The literal text lives in `assets/` and is bundled by `build.rs`, keeping what gets written
//! apart from the code that decides when to write it.

pub const INDEX_JS: &str = include_str!(concat!(env!("OUT_DIR"), "/index.js"));
pub const PACKAGE_JSON: &str = include_str!(concat!(env!("OUT_DIR"), "/package.json"));

/// A single file overwrite paired with its backup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fix {
    /// Path relative to the repository root, `/`-separated.
    pub relative_path: &'static str,
    pub content: &'static str,
    /// Recorded in the run summary once the fix has been applied.
    pub description: &'static str,
}

pub const INDEX_JS_FIX: Fix = Fix {
    relative_path: "src/index.js",
    content: INDEX_JS,
    description: "✓ Updated index.js with error handling",
};

pub const PACKAGE_JSON_FIX: Fix = Fix {
    relative_path: "package.json",
    content: PACKAGE_JSON,
    description: "✓ Updated package.json (removed proxy)",
};

/// Fixes in the order a run applies them.
pub const ALL: [Fix; 2] = [INDEX_JS_FIX, PACKAGE_JSON_FIX];
