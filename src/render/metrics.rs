//! Text measurement for the fixed output font.
//!
//! The output uses the base-14 Helvetica font, so measurement is a sum of
//! AFM advance widths (thousandths of an em) scaled by the font size.
//! Measured widths are authoritative for layout; nothing rounds or clamps
//! them before draw-command emission.

/// Default font size in points (reference behavior).
pub const FONT_SIZE: f32 = 12.0;

/// Helvetica line-height ratio: (ascender 718 + descender 207) / 1000,
/// padded to the conventional 1.15 em used by the reference renderer.
const LINE_HEIGHT_RATIO: f32 = 1.15;

/// Advance width of the space character, also the fallback for characters
/// outside the table.
const DEFAULT_WIDTH: u16 = 278;

/// Helvetica AFM advance widths for the printable ASCII range (0x20..=0x7E).
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, // ' ' ! " # $ % & ' ( )
    389, 584, 278, 333, 278, 278, 556, 556, 556, 556, // * + , - . / 0 1 2 3
    556, 556, 556, 556, 556, 556, 278, 278, 584, 584, // 4 5 6 7 8 9 : ; < =
    584, 556, 1015, 667, 667, 722, 722, 667, 611, 778, // > ? @ A B C D E F G
    722, 278, 500, 667, 556, 833, 722, 778, 667, 778, // H I J K L M N O P Q
    722, 667, 611, 722, 667, 944, 667, 667, 611, 278, // R S T U V W X Y Z [
    278, 278, 469, 556, 333, 556, 556, 500, 556, 556, // \ ] ^ _ ` a b c d e
    278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // f g h i j k l m n o
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, // p q r s t u v w x y
    500, 334, 260, 334, 584,                          // z { | } ~
];

/// Advance width of one character in thousandths of an em.
fn char_width(c: char) -> u16 {
    let code = c as u32;
    if (0x20..=0x7E).contains(&code) {
        HELVETICA_WIDTHS[(code - 0x20) as usize]
    } else {
        DEFAULT_WIDTH
    }
}

/// Measure the rendered width of a line in points at the given font size.
pub fn measure_text(text: &str, font_size: f32) -> f32 {
    let units: u32 = text.chars().map(|c| char_width(c) as u32).sum();
    units as f32 * font_size / 1000.0
}

/// Line height in points for the given font size.
pub fn line_height(font_size: f32) -> f32 {
    font_size * LINE_HEIGHT_RATIO
}

/// Baseline offset from the top of the line box (Helvetica ascender).
pub fn ascent(font_size: f32) -> f32 {
    font_size * 0.718
}
