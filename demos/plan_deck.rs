//! Plan a deck offline from in-memory verses and print it as JSON.
//!
//! cargo run --example plan_deck

use ayahcards::source::StaticSource;
use ayahcards::{CardDeck, Chapter, ChapterRequest, Language, Segmenter, ThemeClassifier, VerseRange, VerseSource, VerseUnit};
use rand::SeedableRng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let chapter = Chapter {
        number: 103,
        name: "العصر".into(),
        english_name: "Al-Asr".into(),
        total_ayahs: 3,
        verses: vec![
            VerseUnit::new(1, "وَٱلْعَصْرِ", "By time,"),
            VerseUnit::new(2, "إِنَّ ٱلْإِنسَٰنَ لَفِى خُسْرٍ", "Indeed, mankind is in loss,"),
            VerseUnit::new(
                3,
                "إِلَّا ٱلَّذِينَ ءَامَنُوا۟ وَعَمِلُوا۟ ٱلصَّٰلِحَٰتِ وَتَوَاصَوْا۟ بِٱلْحَقِّ وَتَوَاصَوْا۟ بِٱلصَّبْرِ",
                "Except for those who have believed and done righteous deeds and advised each other to truth and advised each other to patience.",
            ),
        ],
    };
    let source = StaticSource::new(vec![chapter]);

    let request = ChapterRequest::new(103, VerseRange::new(1, Some(3)), Language::English)?;
    let chapter = source.fetch_chapter(&request)?;

    let mut rng = rand::rngs::StdRng::seed_from_u64(103);
    let deck = CardDeck::plan(&chapter, &Segmenter::default(), &ThemeClassifier::default(), &mut rng);
    println!("{}", serde_json::to_string_pretty(&deck)?);
    if deck.theme.randomized {
        println!("(no theme keywords matched; {} was drawn at random)", deck.theme.category);
    }
    Ok(())
}
