//! LilyGO T-Display-S3 wiring

/// Active-low push buttons
pub const BUTTON_LEFT: u8 = 0;
pub const BUTTON_RIGHT: u8 = 14;

/// Panel supply enable, must be high when running from battery
pub const LCD_POWER: u8 = 15;
pub const LCD_BACKLIGHT: u8 = 38;

/// ST7789 8080-style parallel bus
pub const LCD_DATA: [u8; 8] = [39, 40, 41, 42, 45, 46, 47, 48];
pub const LCD_WR: u8 = 8;
pub const LCD_RD: u8 = 9;
pub const LCD_DC: u8 = 7;
pub const LCD_CS: u8 = 6;
pub const LCD_RESET: u8 = 5;

/// Panel size in its native portrait orientation
pub const LCD_WIDTH: u16 = 170;
pub const LCD_HEIGHT: u16 = 320;
/// Column offset of the 170-pixel window in the controller's 240-column RAM
pub const LCD_OFFSET_X: u16 = 35;

/// Every pin the board itself uses
pub const RESERVED: [u8; 17] = [
    BUTTON_LEFT,
    BUTTON_RIGHT,
    LCD_POWER,
    LCD_BACKLIGHT,
    39,
    40,
    41,
    42,
    45,
    46,
    47,
    48,
    LCD_WR,
    LCD_RD,
    LCD_DC,
    LCD_CS,
    LCD_RESET,
];
