use gpui::{AbsoluteLength, DefiniteLength, Pixels, Window, px};

pub trait PixelsExt {
    fn as_f32(&self) -> f32;

    /// Vertical padding that makes a single line of text reach this height.
    fn padding_needed_for_height(
        &self,
        window: &Window,
        text_size: AbsoluteLength,
        line_height: DefiniteLength,
    ) -> Pixels;
}

impl PixelsExt for Pixels {
    fn as_f32(&self) -> f32 {
        self.to_f64() as f32
    }

    fn padding_needed_for_height(
        &self,
        window: &Window,
        text_size: AbsoluteLength,
        line_height: DefiniteLength,
    ) -> Pixels {
        let text_size = text_size.to_pixels(window.rem_size()).as_f32();

        let line_height = match line_height {
            DefiniteLength::Absolute(length) => length.to_pixels(window.rem_size()).as_f32(),
            DefiniteLength::Fraction(fraction) => text_size * fraction,
        };

        px(((self.as_f32() - line_height) / 2.).max(0.))
    }
}
