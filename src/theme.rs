//! Keyword-based background theme selection.
//!
//! Each category owns a small vocabulary of lowercase English keywords. A
//! category scores one point per keyword that occurs anywhere in the
//! (lowercased) translation, no matter how often. The best score wins; ties
//! go to the earlier category in [`ThemeCategory::ALL`]. When nothing
//! matches at all a category is drawn at random so that a run of
//! keyword-free verses does not always get the same background.

use rand::Rng;
use serde::Serialize;

/// Background category for a card deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeCategory {
    Nature,
    Sky,
    Paradise,
}

impl ThemeCategory {
    /// All categories, in tie-break priority order.
    pub const ALL: [ThemeCategory; 3] = [ThemeCategory::Nature, ThemeCategory::Sky, ThemeCategory::Paradise];

    pub fn slug(self) -> &'static str {
        match self {
            ThemeCategory::Nature => "nature",
            ThemeCategory::Sky => "sky",
            ThemeCategory::Paradise => "paradise",
        }
    }

    /// Top and bottom colors of the background gradient.
    pub fn palette(self) -> ([u8; 3], [u8; 3]) {
        match self {
            ThemeCategory::Nature => ([46, 94, 62], [148, 121, 78]),
            ThemeCategory::Sky => ([12, 20, 58], [72, 98, 168]),
            ThemeCategory::Paradise => ([24, 110, 96], [196, 164, 84]),
        }
    }
}

impl std::fmt::Display for ThemeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

const NATURE_KEYWORDS: &[&str] = &[
    "earth", "mountain", "sea", "ocean", "land", "water", "tree", "plant", "wind", "creation", "animal", "bird",
    "cattle", "camel", "desert", "rock",
];

const SKY_KEYWORDS: &[&str] = &[
    "sky", "sun", "moon", "star", "night", "day", "cloud", "rain", "thunder", "universe", "light", "darkness",
    "space", "planet", "orbit", "rising", "setting",
];

const PARADISE_KEYWORDS: &[&str] = &[
    "paradise", "garden", "river", "heaven", "reward", "fruit", "shade", "eternity", "bliss", "springs", "gold",
    "silk", "peace",
];

/// Immutable keyword table, one list per category.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    nature: Vec<String>,
    sky: Vec<String>,
    paradise: Vec<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new(NATURE_KEYWORDS, SKY_KEYWORDS, PARADISE_KEYWORDS)
    }
}

impl Vocabulary {
    /// Build a vocabulary; keywords are lowercased on the way in.
    pub fn new<S: AsRef<str>>(nature: &[S], sky: &[S], paradise: &[S]) -> Self {
        fn lower<S: AsRef<str>>(words: &[S]) -> Vec<String> {
            words.iter().map(|w| w.as_ref().to_lowercase()).collect()
        }
        Self {
            nature: lower(nature),
            sky: lower(sky),
            paradise: lower(paradise),
        }
    }

    pub fn keywords(&self, category: ThemeCategory) -> &[String] {
        match category {
            ThemeCategory::Nature => &self.nature,
            ThemeCategory::Sky => &self.sky,
            ThemeCategory::Paradise => &self.paradise,
        }
    }
}

/// Per-category keyword hit counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ThemeScores {
    pub nature: usize,
    pub sky: usize,
    pub paradise: usize,
}

impl ThemeScores {
    pub fn get(&self, category: ThemeCategory) -> usize {
        match category {
            ThemeCategory::Nature => self.nature,
            ThemeCategory::Sky => self.sky,
            ThemeCategory::Paradise => self.paradise,
        }
    }

    /// Highest-scoring category, `None` when every score is zero.
    pub fn best(&self) -> Option<ThemeCategory> {
        let mut best: Option<(ThemeCategory, usize)> = None;
        for category in ThemeCategory::ALL {
            let score = self.get(category);
            match best {
                Some((_, top)) if score <= top => {}
                _ => best = Some((category, score)),
            }
        }
        best.filter(|(_, score)| *score > 0).map(|(c, _)| c)
    }
}

/// Text color used on top of the background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextColor {
    Light,
    Dark,
}

impl TextColor {
    pub fn rgba(self) -> [u8; 4] {
        match self {
            TextColor::Light => [255, 255, 255, 255],
            TextColor::Dark => [20, 20, 20, 255],
        }
    }
}

/// Opacity of the dark overlay drawn over the background.
pub const OVERLAY_OPACITY: f32 = 0.5;

/// The theme applied to every card of one deck.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThemeDecision {
    pub category: ThemeCategory,
    pub text_color: TextColor,
    pub overlay_opacity: f32,
    pub scores: ThemeScores,
    /// Set when no keyword matched and the category was drawn at random
    pub randomized: bool,
}

/// Classifier over an injected [`Vocabulary`].
#[derive(Debug, Clone, Default)]
pub struct ThemeClassifier {
    vocabulary: Vocabulary,
}

impl ThemeClassifier {
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self { vocabulary }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn scores(&self, text: &str) -> ThemeScores {
        let lowered = text.to_lowercase();
        let count = |category| {
            self.vocabulary
                .keywords(category)
                .iter()
                .filter(|kw| lowered.contains(kw.as_str()))
                .count()
        };
        ThemeScores {
            nature: count(ThemeCategory::Nature),
            sky: count(ThemeCategory::Sky),
            paradise: count(ThemeCategory::Paradise),
        }
    }

    pub fn classify<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> ThemeDecision {
        let scores = self.scores(text);
        let (category, randomized) = match scores.best() {
            Some(category) => (category, false),
            None => (ThemeCategory::ALL[rng.gen_range(0..ThemeCategory::ALL.len())], true),
        };
        log::debug!("theme {} (scores {:?}, randomized={})", category, scores, randomized);

        ThemeDecision {
            category,
            text_color: TextColor::Light,
            overlay_opacity: OVERLAY_OPACITY,
            scores,
            randomized,
        }
    }
}
