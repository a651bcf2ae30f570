use super::CardStackConfig;
use crate::geometry::Rect;

/// Computes where a stack places its cards.
pub trait CardStackLayout {
    /// Region holding the cards, in the stack's coordinates.
    fn card_container_frame(&self, bounds: Rect, config: &CardStackConfig) -> Rect;

    /// Frame of every card, in the container's coordinates.
    fn card_frame(&self, container: Rect) -> Rect;
}

/// Cards fill the stack bounds minus its insets.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultCardStackLayout;

impl CardStackLayout for DefaultCardStackLayout {
    fn card_container_frame(&self, bounds: Rect, config: &CardStackConfig) -> Rect {
        bounds.inset_by(config.insets)
    }

    fn card_frame(&self, container: Rect) -> Rect {
        Rect::from_size(container.size())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Padding;

    #[test]
    fn test_default_layout_applies_insets() {
        let config = CardStackConfig {
            insets: Padding::symmetric(20.0, 10.0),
            ..CardStackConfig::default()
        };
        let container =
            DefaultCardStackLayout.card_container_frame(Rect::new(0.0, 0.0, 375.0, 600.0), &config);
        assert_eq!(container, Rect::new(20.0, 10.0, 335.0, 580.0));
        assert_eq!(
            DefaultCardStackLayout.card_frame(container),
            Rect::new(0.0, 0.0, 335.0, 580.0)
        );
    }
}
