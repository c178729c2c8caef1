//! Render a single card to disk without touching the network.
//!
//! cargo run --example render_cards -- /path/to/Latin.ttf /path/to/Arabic.ttf

use ayahcards::rendering::{render_card, FontSet, Rasterizer};
use ayahcards::{CardConfig, CardDeck, Chapter, ThemeClassifier, VerseUnit};
use rand::SeedableRng;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let config = CardConfig {
        latin_font: args.next().map(PathBuf::from),
        arabic_font: args.next().map(PathBuf::from),
        ..Default::default()
    };

    let chapter = Chapter {
        number: 112,
        name: "الإخلاص".into(),
        english_name: "Al-Ikhlas".into(),
        total_ayahs: 4,
        verses: vec![
            VerseUnit::new(1, "قُلْ هُوَ ٱللَّهُ أَحَدٌ", "Say, He is Allah, [who is] One,"),
            VerseUnit::new(2, "ٱللَّهُ ٱلصَّمَدُ", "Allah, the Eternal Refuge."),
            VerseUnit::new(3, "لَمْ يَلِدْ وَلَمْ يُولَدْ", "He neither begets nor is born,"),
            VerseUnit::new(4, "وَلَمْ يَكُن لَّهُۥ كُفُوًا أَحَدٌۢ", "Nor is there to Him any equivalent."),
        ],
    };

    let mut rng = rand::rngs::StdRng::seed_from_u64(112);
    let deck = CardDeck::plan(&chapter, &config.segmenter(), &ThemeClassifier::default(), &mut rng);
    let rasterizer = Rasterizer::new(FontSet::from_config(&config)?);

    for card in &deck.cards {
        let image = render_card(card, config.card_size, &rasterizer)?;
        image.save(&card.file_name)?;
        println!("wrote {} ({} theme, {} bytes)", card.file_name, card.theme.category, image.png_data.len());
    }
    Ok(())
}
