use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Digit {
    Thumb = 0,
    Index = 1,
    Middle = 2,
    Ring = 3,
    Pinky = 4,
}

/// Which digits are held straight, thumb first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct FingerExtension([bool; 5]);

impl FingerExtension {
    pub const PEACE_SIGN: FingerExtension = FingerExtension([false, true, true, false, false]);
    pub const OPEN_PALM: FingerExtension = FingerExtension([true; 5]);
    pub const FIST: FingerExtension = FingerExtension([false; 5]);

    pub const fn new(extended: [bool; 5]) -> Self {
        Self(extended)
    }

    /// Decodes a 5-bit mask where bit 0 is the thumb.
    pub fn from_bits(bits: u8) -> Self {
        let mut extended = [false; 5];
        for (i, slot) in extended.iter_mut().enumerate() {
            *slot = bits & (1 << i) != 0;
        }
        Self(extended)
    }

    pub fn is_extended(&self, digit: Digit) -> bool {
        self.0[digit as usize]
    }

    pub fn count_extended(&self) -> usize {
        self.0.iter().filter(|&&up| up).count()
    }

    pub fn as_array(&self) -> [bool; 5] {
        self.0
    }

    pub fn is_peace_sign(&self) -> bool {
        *self == Self::PEACE_SIGN
    }

    pub fn is_open_palm(&self) -> bool {
        self.count_extended() == 5
    }

    pub fn is_fist(&self) -> bool {
        self.count_extended() == 0
    }

    /// Index up with middle down; thumb, ring and pinky are free.
    pub fn is_pointing(&self) -> bool {
        self.is_extended(Digit::Index) && !self.is_extended(Digit::Middle)
    }
}
