// Deck loading - the fixed, ordered slide sequence
//
// Slides are authored ahead of time in a TOML file and never created or
// destroyed by the carousel; the controller only ever reads their count and
// the renderer their content. Without a deck path we fall back to a bundled
// sample deck so the binary demos itself out of the box.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::Path;

/// One testimonial panel
#[derive(Debug, Clone, Deserialize)]
pub struct Slide {
    /// Who said it
    pub author: String,
    /// Optional role/affiliation shown under the author
    #[serde(default)]
    pub role: Option<String>,
    /// The testimonial text
    pub quote: String,
}

/// The ordered slide sequence, fixed before the carousel initializes
#[derive(Debug, Clone, Deserialize)]
pub struct Deck {
    /// Deck title for the title bar
    #[serde(default = "default_title")]
    pub title: String,
    pub slides: Vec<Slide>,
}

fn default_title() -> String {
    "Testimonials".to_string()
}

impl Deck {
    /// Load a deck from a TOML file.
    ///
    /// A deck with zero slides is a configuration error: the carousel's
    /// cyclic index arithmetic is undefined over an empty sequence, so we
    /// refuse it here before the UI ever starts.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read deck file {}", path.display()))?;
        let deck: Deck = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse deck file {}", path.display()))?;

        if deck.is_empty() {
            bail!("Deck {} contains no slides", path.display());
        }

        Ok(deck)
    }

    /// Bundled sample deck, used when no deck file is given
    pub fn sample() -> Self {
        let slides = [
            (
                "Maya R.",
                Some("Engineering Lead, Fathom"),
                "We replaced three internal dashboards with one vitrine deck \
                 on the office TV. Nobody has asked for the old ones back.",
            ),
            (
                "Jonas K.",
                Some("Freelance Consultant"),
                "Client quotes on a loop during my talks. Five seconds per \
                 slide is exactly right.",
            ),
            (
                "Priya S.",
                None,
                "I press one key and it stops so I can read. That is the \
                 whole feature set I wanted.",
            ),
            (
                "Ale M.",
                Some("Developer Advocate"),
                "It runs in a terminal, which means it runs everywhere we \
                 ship terminals. Which is everywhere.",
            ),
        ];

        Self {
            title: "What people say".to_string(),
            slides: slides
                .into_iter()
                .map(|(author, role, quote)| Slide {
                    author: author.to_string(),
                    role: role.map(str::to_string),
                    quote: quote.to_string(),
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}
