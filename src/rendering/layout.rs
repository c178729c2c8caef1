/// Card layout: header, Arabic block and translation block stacked and centred.

use crate::segment::Segment;
use crate::CardSize;

#[derive(Debug, Clone, PartialEq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementType {
    Header,
    Arabic,
    Translation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ltr,
    Rtl,
}

/// A laid-out block of wrapped text.
#[derive(Debug, Clone)]
pub struct LayoutNode {
    pub rect: Rect,
    pub lines: Vec<String>,
    pub elem_type: ElementType,
    pub font_px: f32,
    pub line_height: f32,
    pub direction: Direction,
}

#[derive(Debug, Clone)]
pub struct CardLayout {
    pub size: CardSize,
    pub nodes: Vec<LayoutNode>,
}

impl CardLayout {
    pub fn node(&self, elem_type: ElementType) -> Option<&LayoutNode> {
        self.nodes.iter().find(|n| n.elem_type == elem_type)
    }

    pub fn content_height(&self) -> u32 {
        match (self.nodes.first(), self.nodes.last()) {
            (Some(first), Some(last)) => (last.rect.y + last.rect.height as i32 - first.rect.y).max(0) as u32,
            _ => 0,
        }
    }
}

/// Per-element sizing rules, all relative to a 1080px card.
struct Style {
    max_px: f32,
    min_px: f32,
    /// Average glyph advance as a fraction of the font size
    advance: f32,
    line_height: f32,
}

const HEADER: Style = Style { max_px: 34.0, min_px: 22.0, advance: 0.55, line_height: 1.3 };
const ARABIC: Style = Style { max_px: 64.0, min_px: 26.0, advance: 0.42, line_height: 1.8 };
const TRANSLATION: Style = Style { max_px: 38.0, min_px: 18.0, advance: 0.5, line_height: 1.4 };

/// Floor for any block once the per-style minimums no longer fit.
const MIN_LEGIBLE_PX: f32 = 8.0;

const PADDING_RATIO: f32 = 0.08;
const GAP_RATIO: f32 = 0.035;

/// Starting font size from text length: shorter passages get larger type.
fn initial_px(style: &Style, chars: usize) -> f32 {
    let factor = match chars {
        0..=80 => 1.0,
        81..=200 => 0.85,
        201..=350 => 0.72,
        351..=500 => 0.62,
        _ => 0.52,
    };
    (style.max_px * factor).max(style.min_px)
}

/// Greedy word wrap on an estimated character budget per line.
pub fn wrap_words(text: &str, chars_per_line: usize) -> Vec<String> {
    let chars_per_line = chars_per_line.max(1);
    let mut lines = Vec::new();
    let mut cur = String::new();
    let mut cur_len = 0usize;
    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if cur_len + word_len + 1 > chars_per_line && !cur.is_empty() {
            lines.push(std::mem::take(&mut cur));
            cur_len = 0;
        }
        if !cur.is_empty() {
            cur.push(' ');
            cur_len += 1;
        }
        cur.push_str(word);
        cur_len += word_len;
    }
    if !cur.is_empty() {
        lines.push(cur);
    }
    lines
}

fn block(text: &str, style: &Style, px: f32, content_w: u32) -> (Vec<String>, f32, u32) {
    let advance = (px * style.advance).max(1.0);
    let chars_per_line = (content_w as f32 / advance) as usize;
    let lines = wrap_words(text, chars_per_line);
    let line_height = px * style.line_height;
    let height = (lines.len().max(1) as f32 * line_height).ceil() as u32;
    (lines, line_height, height)
}

/// Lay out one card. Font sizes shrink step by step until the whole stack
/// fits inside the padded card. Once every block sits at its style minimum,
/// all blocks shrink together below it, down to `MIN_LEGIBLE_PX`.
pub fn layout_card(segment: &Segment, size: CardSize) -> CardLayout {
    let scale = size.width.min(size.height) as f32 / 1080.0;
    let pad = (size.width.min(size.height) as f32 * PADDING_RATIO) as u32;
    let gap = (size.height as f32 * GAP_RATIO) as u32;
    let content_w = size.width.saturating_sub(pad * 2).max(1);
    let available_h = size.height.saturating_sub(pad * 2);

    let header_text = format!("{} · {}", segment.surah_name, segment.ayah_label);
    let parts: [(&str, &Style, ElementType, Direction); 3] = [
        (header_text.as_str(), &HEADER, ElementType::Header, Direction::Ltr),
        (segment.arabic_text.as_str(), &ARABIC, ElementType::Arabic, Direction::Rtl),
        (segment.translation_text.as_str(), &TRANSLATION, ElementType::Translation, Direction::Ltr),
    ];

    let mut shrink = 1.0f32;
    // Below 1.0 once the style minimums have been given up.
    let mut relax = 1.0f32;
    loop {
        let relaxed = relax < 1.0;
        let mut blocks = Vec::new();
        let mut total_h = 0u32;
        let mut at_min = true;
        for (text, style, elem_type, direction) in parts.iter() {
            if text.trim().is_empty() {
                continue;
            }
            let (base, floor) = if relaxed {
                (style.min_px * relax, MIN_LEGIBLE_PX)
            } else {
                (initial_px(style, text.chars().count()) * shrink, style.min_px)
            };
            let unscaled = base.max(floor);
            if unscaled > floor {
                at_min = false;
            }
            let px = unscaled * scale;
            let (lines, line_height, height) = block(text, style, px, content_w);
            if !blocks.is_empty() {
                total_h += gap;
            }
            total_h += height;
            blocks.push((lines, line_height, height, px, *elem_type, *direction));
        }

        let fits = total_h <= available_h;
        if !fits {
            if !at_min {
                if relaxed {
                    relax *= 0.9;
                } else {
                    shrink *= 0.9;
                }
                continue;
            }
            if !relaxed {
                relax = 0.9;
                continue;
            }
            log::warn!(
                "card for {} {} overflows: {}px of text in {}px",
                segment.surah_name,
                segment.ayah_label,
                total_h,
                available_h
            );
        }

        let mut y = pad as i32 + (available_h.saturating_sub(total_h) / 2) as i32;
        let mut nodes = Vec::with_capacity(blocks.len());
        for (lines, line_height, height, font_px, elem_type, direction) in blocks {
            nodes.push(LayoutNode {
                rect: Rect {
                    x: pad as i32,
                    y,
                    width: content_w,
                    height,
                },
                lines,
                elem_type,
                font_px,
                line_height,
                direction,
            });
            y += (height + gap) as i32;
        }
        return CardLayout { size, nodes };
    }
}
