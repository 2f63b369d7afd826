use ggez::graphics::Color;
use hsl::HSL;
use lazy_static::lazy_static;

/// Background/foreground color pair for one visual state. The night
/// state of a dual-state controller uses the inverted pair.
#[derive(Copy, Clone, Debug)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
}

lazy_static! {
    static ref DAY: Palette = Palette {
        background: Color::from_rgb(250, 247, 240),
        foreground: Color::from_rgb(25, 25, 30),
    };
}

impl Palette {
    pub fn day() -> Self {
        *DAY
    }

    #[must_use]
    pub fn invert(self) -> Self {
        Self {
            background: self.foreground,
            foreground: self.background,
        }
    }

    /// Dark-on-light pair derived from a single hue in degrees.
    pub fn duotone(hue: f64) -> Self {
        Self {
            background: Color::from(HSL { h: hue, s: 0.55, l: 0.88 }.to_rgb()),
            foreground: Color::from(HSL { h: hue, s: 0.6, l: 0.18 }.to_rgb()),
        }
    }
}

#[test]
fn test_invert_swaps_pair() {
    let palette = Palette::day();
    let inverted = palette.invert();
    assert_eq!(inverted.background.to_rgba(), palette.foreground.to_rgba());
    assert_eq!(inverted.foreground.to_rgba(), palette.background.to_rgba());

    // inverting twice round-trips
    let twice = inverted.invert();
    assert_eq!(twice.background.to_rgba(), palette.background.to_rgba());
}
