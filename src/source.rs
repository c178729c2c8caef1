//! Verse data sources and the API response model.
//!
//! The verse API returns one entry per requested edition: the Arabic text
//! and the translation arrive as two parallel `ayahs` arrays. Decoding is
//! strict about the envelope (both editions must be present) and lenient
//! about the contents (a short translation array is padded with empty
//! strings by [`pair_verses`]).

use crate::range::VerseRange;
use crate::segment::{pair_verses, AyahText, VerseUnit};
use crate::{Error, Result};
use serde::Deserialize;
use std::str::FromStr;

/// Edition identifier of the Arabic source text.
pub const ARABIC_EDITION: &str = "quran-uthmani";

/// Number of surahs in the Quran.
pub const SURAH_COUNT: u32 = 114;

/// Translation language; each maps to one translation edition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    French,
    Urdu,
    Indonesian,
    Turkish,
    Spanish,
}

impl Language {
    pub const ALL: [Language; 6] = [
        Language::English,
        Language::French,
        Language::Urdu,
        Language::Indonesian,
        Language::Turkish,
        Language::Spanish,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::French => "fr",
            Language::Urdu => "ur",
            Language::Indonesian => "id",
            Language::Turkish => "tr",
            Language::Spanish => "es",
        }
    }

    /// Translation edition requested alongside the Arabic text.
    pub fn edition(self) -> &'static str {
        match self {
            Language::English => "en.sahih",
            Language::French => "fr.hamidullah",
            Language::Urdu => "ur.jalandhry",
            Language::Indonesian => "id.indonesian",
            Language::Turkish => "tr.diyanet",
            Language::Spanish => "es.cortes",
        }
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim().to_lowercase();
        Language::ALL
            .into_iter()
            .find(|l| l.code() == s || l.edition() == s)
            .ok_or_else(|| Error::ConfigError(format!("unsupported language: {}", s)))
    }
}

/// What to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChapterRequest {
    pub surah: u32,
    pub range: VerseRange,
    pub language: Language,
}

impl ChapterRequest {
    pub fn new(surah: u32, range: VerseRange, language: Language) -> Result<Self> {
        if !(1..=SURAH_COUNT).contains(&surah) {
            return Err(Error::InvalidRange(format!(
                "surah must be between 1 and {}, got {}",
                SURAH_COUNT, surah
            )));
        }
        range.validate()?;
        Ok(Self { surah, range, language })
    }
}

/// A fetched slice of one surah.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    pub number: u32,
    /// Arabic name
    pub name: String,
    /// Transliterated name, used on the cards
    pub english_name: String,
    pub total_ayahs: u32,
    pub verses: Vec<VerseUnit>,
}

impl Chapter {
    pub fn display_name(&self) -> &str {
        if self.english_name.is_empty() {
            &self.name
        } else {
            &self.english_name
        }
    }
}

/// Anything that can produce verses for a [`ChapterRequest`].
pub trait VerseSource {
    fn fetch_chapter(&self, request: &ChapterRequest) -> Result<Chapter>;
}

#[derive(Debug, Deserialize)]
struct Envelope {
    code: u16,
    #[serde(default)]
    status: String,
    data: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct EditionPayload {
    number: u32,
    #[serde(default)]
    name: String,
    #[serde(rename = "englishName", default)]
    english_name: String,
    #[serde(rename = "numberOfAyahs")]
    number_of_ayahs: u32,
    ayahs: Vec<AyahText>,
    edition: EditionInfo,
}

#[derive(Debug, Deserialize)]
struct EditionInfo {
    identifier: String,
}

/// Decode an editions response into a [`Chapter`].
pub fn decode_editions(body: &str, language: Language) -> Result<Chapter> {
    let envelope: Envelope = serde_json::from_str(body)?;
    if envelope.code != 200 {
        return Err(Error::MalformedResponse(format!(
            "API returned code {} ({})",
            envelope.code, envelope.status
        )));
    }
    let data = envelope
        .data
        .ok_or_else(|| Error::MalformedResponse("response has no data".into()))?;
    if !data.is_array() {
        return Err(Error::MalformedResponse("data is not an array".into()));
    }
    let editions: Vec<EditionPayload> = serde_json::from_value(data)?;

    let mut arabic = None;
    let mut translation = None;
    for edition in editions {
        if edition.edition.identifier == ARABIC_EDITION {
            arabic = Some(edition);
        } else if edition.edition.identifier == language.edition() {
            translation = Some(edition);
        }
    }
    let arabic = arabic.ok_or_else(|| Error::MalformedResponse(format!("missing {} edition", ARABIC_EDITION)))?;
    let translation =
        translation.ok_or_else(|| Error::MalformedResponse(format!("missing {} edition", language.edition())))?;

    let verses = pair_verses(&arabic.ayahs, &translation.ayahs);
    Ok(Chapter {
        number: arabic.number,
        name: arabic.name,
        english_name: arabic.english_name,
        total_ayahs: arabic.number_of_ayahs,
        verses,
    })
}

/// In-memory source, handy for tests and offline use.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    chapters: Vec<Chapter>,
}

impl StaticSource {
    pub fn new(chapters: Vec<Chapter>) -> Self {
        Self { chapters }
    }
}

impl VerseSource for StaticSource {
    fn fetch_chapter(&self, request: &ChapterRequest) -> Result<Chapter> {
        let chapter = self
            .chapters
            .iter()
            .find(|c| c.number == request.surah)
            .ok_or_else(|| Error::InvalidRange(format!("surah {} not available", request.surah)))?;
        let range = request.range.clamp_to(chapter.total_ayahs)?;
        Ok(Chapter {
            verses: chapter
                .verses
                .iter()
                .filter(|v| range.contains(v.number))
                .cloned()
                .collect(),
            ..chapter.clone()
        })
    }
}
