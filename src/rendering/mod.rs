//! Card rendering: layout, paint commands and PNG rasterization

pub mod layout;
pub mod paint;
pub mod raster;

use crate::deck::CardPlan;
use crate::{CardConfig, CardSize, Error, Result};
use base64::Engine as _;
use rusttype::Font;
use std::path::Path;

pub use layout::{layout_card, CardLayout};
pub use paint::{paint_card, FontRole, PaintCommand};
pub use raster::Rasterizer;

/// An encoded card.
#[derive(Debug, Clone)]
pub struct CardImage {
    pub width: u32,
    pub height: u32,
    pub png_data: Vec<u8>,
}

impl CardImage {
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path.as_ref(), &self.png_data)?;
        Ok(())
    }

    /// `data:image/png;base64,...`, as a browser download link expects.
    pub fn to_data_url(&self) -> String {
        format!(
            "data:image/png;base64,{}",
            base64::engine::general_purpose::STANDARD.encode(&self.png_data)
        )
    }
}

/// Fonts available to the rasterizer. Either may be missing.
#[derive(Default)]
pub struct FontSet {
    latin: Option<Font<'static>>,
    arabic: Option<Font<'static>>,
}

fn load_font(path: &Path) -> Result<Font<'static>> {
    let bytes = std::fs::read(path)
        .map_err(|e| Error::ConfigError(format!("cannot read font {}: {}", path.display(), e)))?;
    Font::try_from_vec(bytes).ok_or_else(|| Error::ConfigError(format!("not a usable font: {}", path.display())))
}

impl FontSet {
    pub fn load(latin: Option<&Path>, arabic: Option<&Path>) -> Result<Self> {
        Ok(Self {
            latin: latin.map(load_font).transpose()?,
            arabic: arabic.map(load_font).transpose()?,
        })
    }

    pub fn from_config(config: &CardConfig) -> Result<Self> {
        Self::load(config.latin_font.as_deref(), config.arabic_font.as_deref())
    }

    /// Latin text falls back to the Arabic font, which usually carries
    /// Latin glyphs too. Arabic text never falls back.
    pub fn get(&self, role: FontRole) -> Option<&Font<'static>> {
        match role {
            FontRole::Latin => self.latin.as_ref().or(self.arabic.as_ref()),
            FontRole::Arabic => self.arabic.as_ref(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.latin.is_none() && self.arabic.is_none()
    }
}

/// Lay out, paint and rasterize one planned card.
pub fn render_card(plan: &CardPlan, size: CardSize, rasterizer: &Rasterizer) -> Result<CardImage> {
    let layout = layout_card(&plan.segment, size);
    let commands = paint_card(&layout, &plan.theme);
    log::debug!("card {} ({}): {} paint commands", plan.index, plan.segment.ayah_label, commands.len());
    rasterizer.rasterize(&commands, size)
}
