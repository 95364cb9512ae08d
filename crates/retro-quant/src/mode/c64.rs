//! Built-in Commodore 64 graphics modes.
//!
//! All modes use the Colodore palette. Multicolor modes run at half the
//! horizontal resolution with double-wide pixels.

use crate::palette::Palette;
use crate::quantize::Layer;

use super::spec::ModeSpec;

/// Standard hires bitmap: two colors per 8x8 cell.
fn hires() -> ModeSpec {
    ModeSpec::new_unchecked(
        320,
        200,
        1,
        Palette::colodore(),
        vec![Layer::new(8, 8, [0b1, 0b0]).terminal()],
    )
}

/// Multicolor bitmap (Koala Painter): one shared background color, three
/// free colors per 4x8 cell.
fn koala() -> ModeSpec {
    ModeSpec::new_unchecked(
        160,
        200,
        2,
        Palette::colodore(),
        vec![
            Layer::new(160, 200, [0b00]),
            Layer::new(4, 8, [0b01, 0b10, 0b11]).terminal(),
        ],
    )
}

/// Multicolor character mode: background plus two shared colors, one free
/// color per character.
fn mcchar() -> ModeSpec {
    ModeSpec::new_unchecked(
        160,
        200,
        2,
        Palette::colodore(),
        vec![
            Layer::new(160, 200, [0b00]),
            Layer::new(160, 200, [0b01, 0b10]),
            Layer::new(4, 8, [0b11]).terminal(),
        ],
    )
}

/// Hires character mode: shared background, one free color per character.
fn hireschar() -> ModeSpec {
    ModeSpec::new_unchecked(
        320,
        200,
        1,
        Palette::colodore(),
        vec![
            Layer::new(320, 200, [0b0]),
            Layer::new(8, 8, [0b1]).terminal(),
        ],
    )
}

/// Two colors for the whole screen.
fn hires2() -> ModeSpec {
    ModeSpec::new_unchecked(
        320,
        200,
        1,
        Palette::colodore(),
        vec![Layer::new(320, 200, [0b0, 0b1]).terminal()],
    )
}

/// Multicolor character mode restricted to the three shared colors.
fn mcchar3() -> ModeSpec {
    ModeSpec::new_unchecked(
        160,
        200,
        2,
        Palette::colodore(),
        vec![Layer::new(160, 200, [0b00, 0b01, 0b10]).terminal()],
    )
}

/// Every built-in mode with its registry name.
pub fn builtin_modes() -> Vec<(&'static str, ModeSpec)> {
    vec![
        ("hires", hires()),
        ("koala", koala()),
        ("mcchar", mcchar()),
        ("hireschar", hireschar()),
        ("hires2", hires2()),
        ("mcchar3", mcchar3()),
    ]
}
