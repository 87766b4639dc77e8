/// 32-bit layer membership mask.
///
/// An object is rendered by a camera only if the two masks share at least one
/// layer. New objects and cameras are members of layer 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Layers(u32);

impl Layers {
    pub const NONE: Self = Self(0);
    pub const ALL: Self = Self(u32::MAX);

    #[must_use]
    pub const fn from_mask(mask: u32) -> Self {
        Self(mask)
    }

    #[inline]
    #[must_use]
    pub const fn mask(self) -> u32 {
        self.0
    }

    /// Makes `layer` the only layer this object belongs to.
    ///
    /// Layers past 31 do not exist; every mutator leaves the mask unchanged
    /// for them.
    pub fn set(&mut self, layer: u32) {
        if let Some(bit) = Self::bit(layer) {
            self.0 = bit;
        }
    }

    pub fn enable(&mut self, layer: u32) {
        if let Some(bit) = Self::bit(layer) {
            self.0 |= bit;
        }
    }

    pub fn disable(&mut self, layer: u32) {
        if let Some(bit) = Self::bit(layer) {
            self.0 &= !bit;
        }
    }

    pub fn toggle(&mut self, layer: u32) {
        if let Some(bit) = Self::bit(layer) {
            self.0 ^= bit;
        }
    }

    fn bit(layer: u32) -> Option<u32> {
        let bit = 1u32.checked_shl(layer);
        if bit.is_none() {
            log::debug!("Layer {layer} out of range, ignored");
        }
        bit
    }

    #[inline]
    #[must_use]
    pub fn test(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }
}

impl Default for Layers {
    fn default() -> Self {
        Self(1)
    }
}
