/// Gray level of the overlay, 0 (black) to 255 (white).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Brightness(u8);

impl Brightness {
    pub const MAX: Brightness = Brightness(u8::MAX);

    pub const fn new(level: u8) -> Self {
        Self(level)
    }

    pub const fn level(self) -> u8 {
        self.0
    }

    pub fn increase(&mut self, step: u8) -> u8 {
        self.0 = self.0.saturating_add(step);
        self.0
    }

    pub fn decrease(&mut self, step: u8) -> u8 {
        self.0 = self.0.saturating_sub(step);
        self.0
    }

    /// Opaque gray clear color in linear [0, 1] components.
    pub fn color(self) -> wgpu::Color {
        let v = self.0 as f64 / 255.0;
        wgpu::Color {
            r: v,
            g: v,
            b: v,
            a: 1.0,
        }
    }
}

impl Default for Brightness {
    fn default() -> Self {
        Self::MAX
    }
}
