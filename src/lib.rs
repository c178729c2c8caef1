//! Ayah Cards
//!
//! Turn a range of Quranic verses into fixed-size image cards. Verses are
//! fetched from a public API, grouped into cards that each hold a bounded
//! amount of Arabic text, given a background theme chosen from the
//! translation's vocabulary, and rasterized to PNG.
//!
//! # Features
//!
//! - **fetch** (default): blocking HTTP verse source and download counter
//! - **render** (default): card layout and PNG rasterization
//!
//! Segmentation, theme classification and deck planning are always available
//! and do no I/O.
//!
//! # Example
//!
//! ```no_run
//! use ayahcards::{CardConfig, CardDeck, ChapterRequest, Language, VerseRange, VerseSource};
//! use rand::SeedableRng;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = CardConfig::default();
//! let source = ayahcards::new_source(&config)?;
//! let request = ChapterRequest::new(1, VerseRange::new(1, Some(7)), Language::English)?;
//! let chapter = source.fetch_chapter(&request)?;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let deck = CardDeck::plan(&chapter, &config.segmenter(), &Default::default(), &mut rng);
//! println!("{} cards, {} theme", deck.len(), deck.theme.category);
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

pub mod error;
pub use error::{Error, Result};

pub mod deck;
pub mod numerals;
pub mod range;
pub mod segment;
pub mod source;
pub mod theme;

#[cfg(feature = "fetch")]
pub mod client;
#[cfg(feature = "fetch")]
pub mod counter;

#[cfg(feature = "render")]
pub mod rendering;

pub use deck::{CardDeck, CardPlan};
pub use range::VerseRange;
pub use segment::{Segment, Segmenter, VerseUnit, DEFAULT_CAPACITY};
pub use source::{Chapter, ChapterRequest, Language, VerseSource};
pub use theme::{TextColor, ThemeCategory, ThemeClassifier, ThemeDecision, Vocabulary};

/// Configuration shared by the verse source, the counter and the renderer.
///
/// # Examples
///
/// ```
/// let cfg = ayahcards::CardConfig::default();
/// assert_eq!(cfg.capacity, 450);
/// ```
#[derive(Debug, Clone)]
pub struct CardConfig {
    /// Base URL of the verse API (without trailing `/surah/...`)
    pub api_base_url: String,
    /// Hit counter bumped once per exported card; `None` disables it
    pub counter_url: Option<String>,
    /// User agent string to send with requests
    pub user_agent: String,
    /// Timeout for HTTP requests in milliseconds
    pub timeout_ms: u64,
    /// Maximum Arabic characters per card
    pub capacity: usize,
    /// Output card dimensions
    pub card_size: CardSize,
    /// Font for the header and translation
    pub latin_font: Option<PathBuf>,
    /// Font for the Arabic text
    pub arabic_font: Option<PathBuf>,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.alquran.cloud/v1".to_string(),
            counter_url: None,
            user_agent: concat!("ayahcards/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_ms: 15000,
            capacity: DEFAULT_CAPACITY,
            card_size: CardSize::default(),
            latin_font: None,
            arabic_font: None,
        }
    }
}

impl CardConfig {
    pub fn segmenter(&self) -> Segmenter {
        Segmenter::new(self.capacity)
    }
}

/// Card dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardSize {
    pub width: u32,
    pub height: u32,
}

impl Default for CardSize {
    fn default() -> Self {
        Self {
            width: 1080,
            height: 1080,
        }
    }
}

/// Create the default HTTP verse source.
#[cfg(feature = "fetch")]
pub fn new_source(config: &CardConfig) -> Result<impl VerseSource> {
    client::AlQuranClient::new(config)
}
