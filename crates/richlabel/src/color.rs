//! RGBA color with conversion to the packed ARGB integers used on the wire.

/// Color in normalized `0.0..=1.0` channels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Unpack a `0xAARRGGBB` value.
    pub fn from_argb(argb: u32) -> Self {
        let channel = |shift: u32| ((argb >> shift) & 0xff) as f32 / 255.0;
        Self {
            a: channel(24),
            r: channel(16),
            g: channel(8),
            b: channel(0),
        }
    }

    /// Pack into `0xAARRGGBB`, clamping each channel.
    pub fn to_argb(self) -> u32 {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u32;
        channel(self.a) << 24 | channel(self.r) << 16 | channel(self.g) << 8 | channel(self.b)
    }

    pub fn rgb_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_argb() {
        assert_eq!(Color::rgba(1.0, 0.0, 0.0, 1.0).to_argb(), 0xffff0000);
        assert_eq!(Color::rgba(0.0, 0.0, 1.0, 0.5).to_argb(), 0x800000ff);
        assert_eq!(Color::TRANSPARENT.to_argb(), 0);
    }

    #[test]
    fn test_unpack_argb() {
        let color = Color::from_argb(0xff00ff00);
        assert_eq!(color, Color::rgba(0.0, 1.0, 0.0, 1.0));
    }

    #[test]
    fn test_pack_clamps_out_of_range() {
        assert_eq!(Color::rgba(2.0, -1.0, 0.0, 1.0).to_argb(), 0xffff0000);
    }
}
