use super::Card;
use crate::geometry::Rect;

/// Computes the frames of a card's slots, in the card's own coordinates.
pub trait CardLayout {
    fn content_frame(&self, card: &Card) -> Rect;
    fn footer_frame(&self, card: &Card) -> Rect;
    fn overlay_container_frame(&self, card: &Card) -> Rect;
}

/// Footer pinned to the bottom edge; content and overlays fill the rest.
///
/// A transparent footer lets the content extend underneath it.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultCardLayout;

impl DefaultCardLayout {
    fn footer_height(card: &Card) -> f32 {
        if card.footer_view().is_some() {
            card.footer_height().min(card.bounds().height)
        } else {
            0.0
        }
    }
}

impl CardLayout for DefaultCardLayout {
    fn content_frame(&self, card: &Card) -> Rect {
        let bounds = card.bounds();
        if card.footer_is_transparent() {
            return bounds;
        }
        Rect::new(0.0, 0.0, bounds.width, bounds.height - Self::footer_height(card))
    }

    fn footer_frame(&self, card: &Card) -> Rect {
        let bounds = card.bounds();
        let height = Self::footer_height(card);
        Rect::new(0.0, bounds.height - height, bounds.width, height)
    }

    fn overlay_container_frame(&self, card: &Card) -> Rect {
        let bounds = card.bounds();
        Rect::new(0.0, 0.0, bounds.width, bounds.height - Self::footer_height(card))
    }
}
