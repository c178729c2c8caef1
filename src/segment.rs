//! Grouping consecutive verses into display-sized cards.
//!
//! The segmenter scans verses in order and keeps a running total of Arabic
//! text length. A group is closed as soon as the next verse would push it
//! past the capacity, so every card is as full as it can be without going
//! over. A verse that is longer than the capacity on its own still gets a
//! card of its own; verses are never split.

use crate::numerals::to_arabic_indic;
use serde::{Deserialize, Serialize};

/// Default capacity, in characters of Arabic source text per card.
pub const DEFAULT_CAPACITY: usize = 450;

/// One ayah's text in a single edition.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AyahText {
    /// 1-based number within the surah
    #[serde(rename = "numberInSurah")]
    pub number: u32,
    pub text: String,
}

/// A verse with its Arabic source and translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerseUnit {
    pub number: u32,
    pub arabic: String,
    /// Empty when the translation edition has no entry for this verse
    pub translation: String,
}

impl VerseUnit {
    pub fn new(number: u32, arabic: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            number,
            arabic: arabic.into(),
            translation: translation.into(),
        }
    }

    /// Length used for capacity accounting.
    pub fn weight(&self) -> usize {
        self.arabic.chars().count()
    }
}

/// Zip the Arabic and translation editions by index.
///
/// A translation missing at some index becomes an empty string; the verse
/// keeps the Arabic edition's number.
pub fn pair_verses(arabic: &[AyahText], translation: &[AyahText]) -> Vec<VerseUnit> {
    arabic
        .iter()
        .enumerate()
        .map(|(i, ayah)| {
            let translated = translation.get(i).map(|t| t.text.clone()).unwrap_or_default();
            VerseUnit::new(ayah.number, ayah.text.clone(), translated)
        })
        .collect()
}

/// A card's worth of consecutive verses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub surah_name: String,
    /// Arabic texts joined by spaces, each followed by its verse-end mark
    pub arabic_text: String,
    /// Translations joined by spaces, each followed by `(n)`
    pub translation_text: String,
    /// `"5"` for a single verse, `"5-8"` for a span
    pub ayah_label: String,
    pub ayahs: Vec<u32>,
}

impl Segment {
    fn from_group(surah_name: &str, group: &[&VerseUnit]) -> Self {
        let arabic_text = group
            .iter()
            .map(|v| format!("{} ﴿{}﴾", v.arabic, to_arabic_indic(v.number)))
            .collect::<Vec<_>>()
            .join(" ");
        let translation_text = group
            .iter()
            .map(|v| format!("{} ({})", v.translation, v.number))
            .collect::<Vec<_>>()
            .join(" ");
        let ayahs: Vec<u32> = group.iter().map(|v| v.number).collect();
        let ayah_label = match ayahs.as_slice() {
            [only] => only.to_string(),
            [first, .., last] => format!("{}-{}", first, last),
            [] => String::new(),
        };

        Self {
            surah_name: surah_name.to_string(),
            arabic_text,
            translation_text,
            ayah_label,
            ayahs,
        }
    }

    pub fn first_ayah(&self) -> Option<u32> {
        self.ayahs.first().copied()
    }

    pub fn last_ayah(&self) -> Option<u32> {
        self.ayahs.last().copied()
    }

    pub fn len(&self) -> usize {
        self.ayahs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ayahs.is_empty()
    }

    pub fn is_single(&self) -> bool {
        self.ayahs.len() == 1
    }
}

/// Capacity-bounded verse grouper.
#[derive(Debug, Clone, Copy)]
pub struct Segmenter {
    capacity: usize,
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl Segmenter {
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Partition `verses` into segments, preserving order.
    pub fn segment(&self, surah_name: &str, verses: &[VerseUnit]) -> Vec<Segment> {
        let mut segments = Vec::new();
        let mut group: Vec<&VerseUnit> = Vec::new();
        let mut total = 0usize;

        for verse in verses {
            let weight = verse.weight();
            if total + weight > self.capacity && !group.is_empty() {
                segments.push(Segment::from_group(surah_name, &group));
                group.clear();
                total = 0;
            }
            group.push(verse);
            total += weight;
        }

        if !group.is_empty() {
            segments.push(Segment::from_group(surah_name, &group));
        }

        log::debug!(
            "segmented {} verses of {} into {} cards (capacity {})",
            verses.len(),
            surah_name,
            segments.len(),
            self.capacity
        );
        segments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verse(n: u32, len: usize) -> VerseUnit {
        VerseUnit::new(n, "ب".repeat(len), format!("t{}", n))
    }

    fn weights(verses: &[VerseUnit], seg: &Segment) -> usize {
        verses
            .iter()
            .filter(|v| seg.ayahs.contains(&v.number))
            .map(|v| v.weight())
            .sum()
    }

    #[test]
    fn empty_input_yields_no_segments() {
        assert!(Segmenter::default().segment("Al-Fatiha", &[]).is_empty());
    }

    #[test]
    fn closes_group_when_next_verse_overflows() {
        let verses = vec![verse(1, 200), verse(2, 100), verse(3, 200)];
        let segs = Segmenter::new(450).segment("S", &verses);
        assert_eq!(segs.len(), 2);
        assert_eq!(segs[0].ayahs, vec![1, 2]);
        assert_eq!(segs[0].ayah_label, "1-2");
        assert_eq!(segs[1].ayahs, vec![3]);
        assert_eq!(segs[1].ayah_label, "3");
    }

    #[test]
    fn exact_fit_stays_in_one_segment() {
        let verses = vec![verse(1, 250), verse(2, 200)];
        let segs = Segmenter::new(450).segment("S", &verses);
        assert_eq!(segs.len(), 1);
        assert_eq!(segs[0].ayah_label, "1-2");
    }

    #[test]
    fn oversized_verse_gets_its_own_segment() {
        let verses = vec![verse(1, 10), verse(2, 900), verse(3, 10)];
        let segs = Segmenter::new(450).segment("S", &verses);
        let groups: Vec<_> = segs.iter().map(|s| s.ayahs.clone()).collect();
        assert_eq!(groups, vec![vec![1], vec![2], vec![3]]);
    }

    #[test]
    fn oversized_first_verse_is_not_preceded_by_empty_segment() {
        let verses = vec![verse(7, 600), verse(8, 10)];
        let segs = Segmenter::new(450).segment("S", &verses);
        assert_eq!(segs.len(), 2);
        assert_eq!(segs[0].ayah_label, "7");
        assert_eq!(segs[1].ayah_label, "8");
    }

    #[test]
    fn segments_partition_input_and_respect_capacity() {
        let lens = [120, 80, 300, 40, 40, 500, 10, 449, 1, 200, 250];
        let verses: Vec<_> = lens.iter().enumerate().map(|(i, l)| verse(i as u32 + 1, *l)).collect();
        let seg = Segmenter::new(450);
        let segs = seg.segment("S", &verses);

        let flat: Vec<u32> = segs.iter().flat_map(|s| s.ayahs.clone()).collect();
        let expected: Vec<u32> = (1..=lens.len() as u32).collect();
        assert_eq!(flat, expected);

        for (i, s) in segs.iter().enumerate() {
            let w = weights(&verses, s);
            if !s.is_single() {
                assert!(w <= 450, "segment {} over capacity: {}", s.ayah_label, w);
            }
            // Maximal: the next segment's first verse would not have fit.
            if let Some(next) = segs.get(i + 1) {
                let first = next.first_ayah().unwrap();
                let next_w = verses[first as usize - 1].weight();
                assert!(w + next_w > 450);
            }
        }
    }

    #[test]
    fn renders_marks_and_annotations() {
        let verses = vec![
            VerseUnit::new(1, "بسم", "In the name"),
            VerseUnit::new(2, "الحمد", "Praise"),
        ];
        let segs = Segmenter::default().segment("Al-Fatiha", &verses);
        assert_eq!(segs[0].arabic_text, "بسم ﴿١﴾ الحمد ﴿٢﴾");
        assert_eq!(segs[0].translation_text, "In the name (1) Praise (2)");
        assert_eq!(segs[0].surah_name, "Al-Fatiha");
    }

    #[test]
    fn missing_translation_becomes_empty() {
        let arabic = vec![
            AyahText { number: 4, text: "أ".into() },
            AyahText { number: 5, text: "ب".into() },
        ];
        let translation = vec![AyahText { number: 4, text: "four".into() }];
        let verses = pair_verses(&arabic, &translation);
        assert_eq!(verses[1].number, 5);
        assert_eq!(verses[1].translation, "");

        let segs = Segmenter::default().segment("S", &verses);
        assert_eq!(segs[0].translation_text, "four (4)  (5)");
    }
}
