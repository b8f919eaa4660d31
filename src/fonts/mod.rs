//! Process-wide font registry for the report documents.
//!
//! The reports carry Korean label text, so the bundled family must cover CJK
//! glyphs.  Fonts are loaded from disk exactly once and shared read-only
//! across all report-generation calls.

use std::env;
use std::io;
use std::path::{Path, PathBuf};

use genpdf::error::Error;
use genpdf::fonts::{self, FontData, FontFamily};
use once_cell::sync::OnceCell;

/// Name of the bundled font family.
pub const DEFAULT_FONT_FAMILY_NAME: &str = "NotoSansKR";

/// Environment variable that overrides the bundled font directory.
pub const FONT_DIR_ENV: &str = "ANALYTICS_PDF_FONTS_DIR";

const FONT_FILES: &[&str] = &[
    "NotoSansKR-Regular.ttf",
    "NotoSansKR-Bold.ttf",
    "NotoSansKR-Italic.ttf",
    "NotoSansKR-BoldItalic.ttf",
];

static REGISTRY: OnceCell<FontFamily<FontData>> = OnceCell::new();

fn font_directory() -> PathBuf {
    match env::var_os(FONT_DIR_ENV) {
        Some(dir) => PathBuf::from(dir),
        None => PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets/fonts"),
    }
}

fn ensure_directory_exists(path: &Path) -> Result<(), Error> {
    if path.exists() {
        Ok(())
    } else {
        Err(Error::new(
            format!(
                "Font directory missing at {}. See assets/fonts/README.md for setup.",
                path.display()
            ),
            io::Error::new(io::ErrorKind::NotFound, "font directory not found"),
        ))
    }
}

fn ensure_required_fonts_present(path: &Path) -> Result<(), Error> {
    let missing: Vec<_> = FONT_FILES
        .iter()
        .map(|name| path.join(name))
        .filter(|candidate| !candidate.is_file())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        let display_list = missing
            .iter()
            .map(|path| path.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");

        Err(Error::new(
            format!(
                "Missing font files: {}. See assets/fonts/README.md for instructions.",
                display_list
            ),
            io::Error::new(io::ErrorKind::NotFound, "bundled fonts missing"),
        ))
    }
}

fn load_font_family() -> Result<FontFamily<FontData>, Error> {
    let directory = font_directory();
    ensure_directory_exists(&directory)?;
    ensure_required_fonts_present(&directory)?;

    fonts::from_files(&directory, DEFAULT_FONT_FAMILY_NAME, None).map_err(|err| {
        Error::new(
            format!(
                "Failed to load font family '{}' from {}: {}",
                DEFAULT_FONT_FAMILY_NAME,
                directory.display(),
                err
            ),
            io::Error::new(io::ErrorKind::Other, err.to_string()),
        )
    })
}

/// Returns the shared font family, loading it from disk on first use.
///
/// Subsequent calls clone the cached family; the registry itself is never
/// mutated after initialization.
pub fn shared_font_family() -> Result<FontFamily<FontData>, Error> {
    REGISTRY.get_or_try_init(load_font_family).cloned()
}

/// Indicates whether all font files required by the default family are present.
pub fn fonts_available() -> bool {
    let directory = font_directory();
    directory.exists()
        && FONT_FILES
            .iter()
            .map(|name| directory.join(name))
            .all(|path| path.is_file())
}
