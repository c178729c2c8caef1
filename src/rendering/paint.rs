/// Paint commands for a card

use crate::rendering::layout::{CardLayout, Direction, ElementType};
use crate::theme::ThemeDecision;

/// Which loaded font a text command wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontRole {
    Latin,
    Arabic,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    /// Vertical gradient covering the whole card
    Gradient { top: [u8; 3], bottom: [u8; 3] },
    SolidRect {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        rgba: [u8; 4],
    },
    /// One line of text, horizontally centred in `[x, x + width)`
    Text {
        x: i32,
        y: i32,
        width: u32,
        text: String,
        px: f32,
        rgba: [u8; 4],
        font: FontRole,
        direction: Direction,
    },
}

pub fn paint_card(layout: &CardLayout, theme: &ThemeDecision) -> Vec<PaintCommand> {
    let (top, bottom) = theme.category.palette();
    let alpha = (theme.overlay_opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
    let mut cmds = vec![
        PaintCommand::Gradient { top, bottom },
        PaintCommand::SolidRect {
            x: 0,
            y: 0,
            width: layout.size.width,
            height: layout.size.height,
            rgba: [0, 0, 0, alpha],
        },
    ];

    let color = theme.text_color.rgba();
    for node in &layout.nodes {
        let font = match node.elem_type {
            ElementType::Arabic => FontRole::Arabic,
            ElementType::Header | ElementType::Translation => FontRole::Latin,
        };
        let mut rgba = color;
        if node.elem_type == ElementType::Header {
            rgba[3] = 210;
        }
        for (i, line) in node.lines.iter().enumerate() {
            cmds.push(PaintCommand::Text {
                x: node.rect.x,
                y: node.rect.y + (i as f32 * node.line_height) as i32,
                width: node.rect.width,
                text: line.clone(),
                px: node.font_px,
                rgba,
                font,
                direction: node.direction,
            });
        }
    }
    cmds
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::layout::layout_card;
    use crate::segment::{Segmenter, VerseUnit};
    use crate::theme::ThemeClassifier;
    use crate::CardSize;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn background_overlay_then_text() {
        let seg = Segmenter::default()
            .segment("Ash-Shams", &[VerseUnit::new(1, "وَٱلشَّمْسِ وَضُحَىٰهَا", "By the sun and its brightness")])
            .remove(0);
        let theme = ThemeClassifier::default().classify(&seg.translation_text, &mut StdRng::seed_from_u64(0));
        let cmds = paint_card(&layout_card(&seg, CardSize::default()), &theme);

        assert!(matches!(cmds[0], PaintCommand::Gradient { .. }));
        match &cmds[1] {
            PaintCommand::SolidRect { rgba, width, .. } => {
                assert_eq!(rgba[3], 128);
                assert_eq!(*width, 1080);
            }
            other => panic!("unexpected {:?}", other),
        }
        let arabic = cmds
            .iter()
            .filter(|c| matches!(c, PaintCommand::Text { font: FontRole::Arabic, .. }))
            .count();
        assert!(arabic >= 1);
        assert!(cmds.iter().skip(2).all(|c| matches!(c, PaintCommand::Text { rgba: [255, 255, 255, _], .. })));
    }
}
