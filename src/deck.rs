//! Combining segments and a theme into per-card render plans.

use crate::segment::{Segment, Segmenter};
use crate::source::Chapter;
use crate::theme::{ThemeClassifier, ThemeDecision};
use rand::Rng;
use serde::Serialize;

/// Everything needed to render one card.
#[derive(Debug, Clone, Serialize)]
pub struct CardPlan {
    pub index: usize,
    pub segment: Segment,
    pub theme: ThemeDecision,
    /// Suggested download name, e.g. `surah-2-ayah-255.png`
    pub file_name: String,
}

/// The cards produced from one grouping pass.
#[derive(Debug, Clone, Serialize)]
pub struct CardDeck {
    pub surah: u32,
    pub surah_name: String,
    pub theme: ThemeDecision,
    pub cards: Vec<CardPlan>,
}

impl CardDeck {
    /// Segment the chapter's verses and theme the whole deck from the first
    /// card's translation.
    pub fn plan<R: Rng + ?Sized>(
        chapter: &Chapter,
        segmenter: &Segmenter,
        classifier: &ThemeClassifier,
        rng: &mut R,
    ) -> Self {
        let surah_name = chapter.display_name().to_string();
        let segments = segmenter.segment(&surah_name, &chapter.verses);
        let first_translation = segments.first().map(|s| s.translation_text.as_str()).unwrap_or("");
        let theme = classifier.classify(first_translation, rng);

        let cards = segments
            .into_iter()
            .enumerate()
            .map(|(index, segment)| CardPlan {
                index,
                file_name: card_file_name(chapter.number, &segment),
                segment,
                theme,
            })
            .collect::<Vec<_>>();

        log::info!("planned {} cards for {} with {} theme", cards.len(), surah_name, theme.category);
        Self {
            surah: chapter.number,
            surah_name,
            theme,
            cards,
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

pub fn card_file_name(surah: u32, segment: &Segment) -> String {
    format!("surah-{}-ayah-{}.png", surah, segment.ayah_label)
}
