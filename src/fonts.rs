//! Font acquisition with an ordered fallback chain.
//!
//! Candidates are tried as title/subtitle pairs in order. A pair is only
//! accepted when both faces read and parse; otherwise the next pair is
//! tried. When nothing on disk works the embedded DejaVu faces are used,
//! which are compiled into the binary and always available.

use std::fmt;
use std::path::{Path, PathBuf};

use ab_glyph::FontArc;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

static EMBEDDED_BOLD: &[u8] = include_bytes!("../assets/fonts/DejaVuSans-Bold.ttf");
static EMBEDDED_REGULAR: &[u8] = include_bytes!("../assets/fonts/DejaVuSans.ttf");

/// Which face of a [`FontSet`] a text run uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontRole {
    Title,
    Subtitle,
}

/// A title/subtitle pair of font files to try
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontCandidate {
    pub title: PathBuf,
    pub subtitle: PathBuf,
}

impl FontCandidate {
    pub fn new(title: impl Into<PathBuf>, subtitle: impl Into<PathBuf>) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
        }
    }
}

/// The system locations probed before falling back to the embedded faces.
pub fn default_candidates() -> Vec<FontCandidate> {
    vec![
        FontCandidate::new(
            "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
            "/System/Library/Fonts/Supplemental/Arial.ttf",
        ),
        FontCandidate::new("/Library/Fonts/Arial Bold.ttf", "/Library/Fonts/Arial.ttf"),
    ]
}

/// Where the faces of a loaded [`FontSet`] came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontOrigin {
    /// Index into the candidate list plus the pair that loaded
    Candidate(usize, FontCandidate),
    /// The faces compiled into the binary
    Embedded,
}

impl fmt::Display for FontOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontOrigin::Candidate(idx, c) => write!(
                f,
                "candidate #{} ({} / {})",
                idx,
                c.title.display(),
                c.subtitle.display()
            ),
            FontOrigin::Embedded => write!(f, "embedded DejaVu Sans"),
        }
    }
}

/// The two faces used to draw a thumbnail
#[derive(Clone)]
pub struct FontSet {
    pub title: FontArc,
    pub subtitle: FontArc,
    pub origin: FontOrigin,
}

impl fmt::Debug for FontSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontSet").field("origin", &self.origin).finish_non_exhaustive()
    }
}

impl FontSet {
    /// Walk `candidates` in order and return the first pair that loads,
    /// falling back to the embedded faces.
    pub fn load(candidates: &[FontCandidate]) -> Result<Self> {
        for (idx, candidate) in candidates.iter().enumerate() {
            match load_pair(candidate) {
                Some((title, subtitle)) => {
                    let origin = FontOrigin::Candidate(idx, candidate.clone());
                    info!("using fonts from {}", origin);
                    return Ok(Self { title, subtitle, origin });
                }
                None => debug!("font candidate #{} unavailable, trying next", idx),
            }
        }
        let set = Self::embedded()?;
        info!("using fonts from {}", set.origin);
        Ok(set)
    }

    /// The embedded pair: DejaVu Sans Bold for the title, DejaVu Sans for the subtitle.
    pub fn embedded() -> Result<Self> {
        let title = FontArc::try_from_slice(EMBEDDED_BOLD)
            .map_err(|e| Error::FontParse(format!("embedded bold face: {}", e)))?;
        let subtitle = FontArc::try_from_slice(EMBEDDED_REGULAR)
            .map_err(|e| Error::FontParse(format!("embedded regular face: {}", e)))?;
        Ok(Self {
            title,
            subtitle,
            origin: FontOrigin::Embedded,
        })
    }

    pub fn face(&self, role: FontRole) -> &FontArc {
        match role {
            FontRole::Title => &self.title,
            FontRole::Subtitle => &self.subtitle,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.origin == FontOrigin::Embedded
    }
}

fn load_pair(candidate: &FontCandidate) -> Option<(FontArc, FontArc)> {
    let title = load_face(&candidate.title)?;
    let subtitle = load_face(&candidate.subtitle)?;
    Some((title, subtitle))
}

fn load_face(path: &Path) -> Option<FontArc> {
    let data = match std::fs::read(path) {
        Ok(data) => data,
        Err(e) => {
            debug!("cannot read font {}: {}", path.display(), e);
            return None;
        }
    };
    match FontArc::try_from_vec(data) {
        Ok(font) => Some(font),
        Err(e) => {
            debug!("cannot parse font {}: {}", path.display(), e);
            None
        }
    }
}
