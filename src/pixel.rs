//! The RGBA pixel stored in a [`PixelGrid`](crate::PixelGrid).

/// Four 8-bit channels in buffer order: red, green, blue, alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Rgba {
    /// Opaque black. Substituted for window cells that fall outside the
    /// source grid.
    pub const SENTINEL: Self = Self::new(0, 0, 0, 255);

    /// Fully transparent black, the content of a freshly allocated grid.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    #[inline]
    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Builds a pixel from wide integer channels, clamping each to `0..=255`
    /// the way a clamped byte buffer stores out-of-range writes.
    #[inline]
    pub fn from_clamped(red: i32, green: i32, blue: i32, alpha: i32) -> Self {
        let clamp = |channel: i32| channel.clamp(0, 255) as u8;
        Self::new(clamp(red), clamp(green), clamp(blue), clamp(alpha))
    }

    /// Subtracts `amount` from the color channels (saturating at zero) and
    /// forces the result opaque.
    #[inline]
    pub fn darken(self, amount: u8) -> Self {
        Self::new(
            self.red.saturating_sub(amount),
            self.green.saturating_sub(amount),
            self.blue.saturating_sub(amount),
            255,
        )
    }

    #[inline]
    pub const fn to_array(self) -> [u8; 4] {
        [self.red, self.green, self.blue, self.alpha]
    }
}

impl From<[u8; 4]> for Rgba {
    #[inline]
    fn from([red, green, blue, alpha]: [u8; 4]) -> Self {
        Self::new(red, green, blue, alpha)
    }
}

impl From<Rgba> for [u8; 4] {
    #[inline]
    fn from(pixel: Rgba) -> Self {
        pixel.to_array()
    }
}
