//! RGB565 colours

/// Raw RGB565 colour as sent to the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Color565(pub u16);

impl Color565 {
    pub const BLACK: Self = Self(0x0000);
    pub const NAVY: Self = Self(0x000F);
    pub const MAROON: Self = Self(0x7800);
    pub const BLUE: Self = Self(0x001F);
    pub const GREEN: Self = Self(0x07E0);
    pub const CYAN: Self = Self(0x07FF);
    pub const DARKCYAN: Self = Self(0x03EF);
    pub const RED: Self = Self(0xF800);
    pub const WHITE: Self = Self(0xFFFF);
    pub const SILVER: Self = Self(0xC618);
    pub const GOLD: Self = Self(0xFEA0);
    pub const GREENYELLOW: Self = Self(0xB7E0);
    pub const DARKGREY: Self = Self(0x7BEF);
    pub const LIGHTGREY: Self = Self(0xD69A);
    /// Dim blue-grey used for plot gridlines and unselected menu entries
    pub const GRID: Self = Self(0x2965);
    /// Near-black marking rests on the music staff
    pub const REST: Self = Self(0x2104);

    /// Pack 5-6-5 channel values, excess bits are dropped
    pub const fn from_channels(r: u8, g: u8, b: u8) -> Self {
        Self((((r & 0x1f) as u16) << 11) | (((g & 0x3f) as u16) << 5) | (b & 0x1f) as u16)
    }

    /// Pack 8-bit channels
    pub const fn from_rgb888(r: u8, g: u8, b: u8) -> Self {
        Self::from_channels(r >> 3, g >> 2, b >> 3)
    }

    pub const fn raw(self) -> u16 {
        self.0
    }
}
