use anyhow::Context;
use ayahcards::counter::DownloadCounter;
use ayahcards::rendering::{render_card, FontSet, Rasterizer};
use ayahcards::{CardConfig, CardDeck, CardSize, ChapterRequest, Language, ThemeClassifier, VerseRange, VerseSource};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

/// Render a range of verses into themed PNG cards.
#[derive(Parser, Debug)]
#[command(name = "ayahcards", version, about)]
struct Args {
    /// Surah number (1-114)
    surah: u32,

    /// First verse
    #[arg(long, default_value_t = 1)]
    from: u32,

    /// Last verse (defaults to --from; clamped to the surah length)
    #[arg(long)]
    to: Option<u32>,

    /// Translation language (en, fr, ur, id, tr, es) or edition identifier
    #[arg(long, default_value = "en")]
    lang: Language,

    /// Output directory
    #[arg(long, short, default_value = "cards")]
    out: PathBuf,

    /// Seed for the random theme fallback
    #[arg(long)]
    seed: Option<u64>,

    /// Maximum Arabic characters per card
    #[arg(long, default_value_t = ayahcards::DEFAULT_CAPACITY)]
    capacity: usize,

    #[arg(long, default_value_t = 1080)]
    width: u32,

    #[arg(long, default_value_t = 1080)]
    height: u32,

    /// Font for the header and translation (TTF/OTF)
    #[arg(long)]
    font: Option<PathBuf>,

    /// Font for the Arabic text (TTF/OTF)
    #[arg(long)]
    arabic_font: Option<PathBuf>,

    #[arg(long, env = "AYAHCARDS_API_URL")]
    api_url: Option<String>,

    #[arg(long, env = "AYAHCARDS_COUNTER_URL")]
    counter_url: Option<String>,

    /// HTTP timeout in milliseconds
    #[arg(long, default_value_t = 15000)]
    timeout_ms: u64,

    /// Print the card plan as JSON instead of rendering
    #[arg(long)]
    plan_only: bool,

    /// Bump the download counter once per written card
    #[arg(long)]
    count_downloads: bool,
}

impl Args {
    fn config(&self) -> CardConfig {
        let defaults = CardConfig::default();
        CardConfig {
            api_base_url: self.api_url.clone().unwrap_or(defaults.api_base_url),
            counter_url: self.counter_url.clone(),
            timeout_ms: self.timeout_ms,
            capacity: self.capacity,
            card_size: CardSize {
                width: self.width,
                height: self.height,
            },
            latin_font: self.font.clone(),
            arabic_font: self.arabic_font.clone(),
            ..defaults
        }
    }
}

fn download_counter(requested: bool, config: &CardConfig) -> anyhow::Result<DownloadCounter> {
    if !requested {
        return Ok(DownloadCounter::disabled());
    }
    if config.counter_url.is_none() {
        log::warn!("--count-downloads given without --counter-url; downloads will not be counted");
    }
    Ok(DownloadCounter::new(config)?)
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = args.config();

    let request = ChapterRequest::new(args.surah, VerseRange::new(args.from, args.to), args.lang)?;
    let source = ayahcards::new_source(&config)?;
    let chapter = source
        .fetch_chapter(&request)
        .with_context(|| format!("fetching surah {} verses {}", request.surah, request.range))?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let deck = CardDeck::plan(&chapter, &config.segmenter(), &ThemeClassifier::default(), &mut rng);

    if args.plan_only {
        println!("{}", serde_json::to_string_pretty(&deck)?);
        return Ok(());
    }

    let fonts = FontSet::from_config(&config)?;
    if fonts.is_empty() {
        log::warn!("no fonts given (--font / --arabic-font); cards will have backgrounds only");
    }
    let rasterizer = Rasterizer::new(fonts);
    let counter = download_counter(args.count_downloads, &config)?;

    std::fs::create_dir_all(&args.out).with_context(|| format!("creating {}", args.out.display()))?;
    for card in &deck.cards {
        let image = render_card(card, config.card_size, &rasterizer)?;
        let path = args.out.join(&card.file_name);
        image.save(&path).with_context(|| format!("writing {}", path.display()))?;
        log::info!("wrote {}", path.display());

        if let Err(e) = counter.hit() {
            log::warn!("download counter failed: {}", e);
        }
    }

    println!("{} cards written to {}", deck.len(), args.out.display());
    Ok(())
}
