use gpui::Rgba;

/// Extension trait for deriving colors from theme tokens.
pub trait RgbaExt {
    /// Returns a new color with the specified alpha value.
    fn alpha(self, alpha: f32) -> Self;

    /// Linearly blends towards `other`; `amount` 0 keeps `self`, 1 yields `other`.
    fn mix(self, other: Rgba, amount: f32) -> Self;
}

impl RgbaExt for Rgba {
    fn alpha(mut self, alpha: f32) -> Self {
        self.a = alpha.clamp(0., 1.);
        self
    }

    fn mix(self, other: Rgba, amount: f32) -> Self {
        let t = amount.clamp(0., 1.);
        let lerp = |a: f32, b: f32| a + (b - a) * t;

        Rgba {
            r: lerp(self.r, other.r),
            g: lerp(self.g, other.g),
            b: lerp(self.b, other.b),
            a: lerp(self.a, other.a),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: Rgba = Rgba {
        r: 0.,
        g: 0.,
        b: 0.,
        a: 1.,
    };
    const WHITE: Rgba = Rgba {
        r: 1.,
        g: 1.,
        b: 1.,
        a: 1.,
    };

    #[test]
    fn mix_endpoints_and_midpoint() {
        assert_eq!(BLACK.mix(WHITE, 0.), BLACK);
        assert_eq!(BLACK.mix(WHITE, 1.), WHITE);
        assert_eq!(BLACK.mix(WHITE, 0.5).r, 0.5);
        assert_eq!(BLACK.mix(WHITE, 3.), WHITE);
    }

    #[test]
    fn alpha_is_clamped() {
        assert_eq!(WHITE.alpha(0.25).a, 0.25);
        assert_eq!(WHITE.alpha(-1.).a, 0.);
    }
}
