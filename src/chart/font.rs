//! Font registration for chart text
//!
//! `plotters` draws text through `ab_glyph`, which needs the font bytes
//! registered up front. A configured font file is tried first; the DejaVu
//! Sans copy compiled into the binary is used when it is unset or
//! unusable. Registration happens once per process.

use plotters::style::{register_font, FontStyle};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use super::ChartError;

/// Family name the chart text is drawn with
pub const FONT_FAMILY: &str = "sans-serif";

/// DejaVu Sans, see `assets/fonts/DejaVuSans-LICENSE.txt`
static BUNDLED_FONT: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");

/// Where the registered font came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSource {
    File(PathBuf),
    Bundled,
}

impl fmt::Display for FontSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Bundled => f.write_str("bundled DejaVu Sans"),
        }
    }
}

static REGISTERED: OnceLock<Result<FontSource, String>> = OnceLock::new();

fn try_register_file(path: &Path) -> bool {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Font not readable, using bundled font");
            return false;
        }
    };

    // plotters keeps a reference for the lifetime of the process
    let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
    match register_font(FONT_FAMILY, FontStyle::Normal, bytes) {
        Ok(()) => true,
        Err(_) => {
            tracing::warn!(path = %path.display(), error = "InvalidFont", "Invalid font file, using bundled font");
            false
        }
    }
}

fn register(configured: Option<&Path>) -> Result<FontSource, String> {
    if let Some(path) = configured {
        if try_register_file(path) {
            return Ok(FontSource::File(path.to_path_buf()));
        }
    }

    register_font(FONT_FAMILY, FontStyle::Normal, BUNDLED_FONT)
        .map(|()| FontSource::Bundled)
        .map_err(|_| "InvalidFont".to_string())
}

/// Register the chart font, returning where it was loaded from
///
/// Only the first call's `configured` path is considered.
pub fn ensure_registered(configured: Option<&Path>) -> Result<FontSource, ChartError> {
    REGISTERED
        .get_or_init(|| {
            let source = register(configured);
            if let Ok(source) = &source {
                tracing::debug!(font = %source, "Registered chart font");
            }
            source
        })
        .clone()
        .map_err(ChartError::Font)
}
