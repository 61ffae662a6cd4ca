//! Bubble layout arithmetic: whether the trailing time/status marker shares
//! the last text line, and how photo bubbles are framed.
//!
//! There are no font metrics at layout time, so line fill is approximated by
//! character count. The capacities and reserves below are tuned against the
//! reference phone mock; the renderer depends on these exact breakpoints.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::chatlog::Direction;

/// Max characters that fill one bubble line, by content class of the line.
const LINE_CAP_DIGITS: usize = 31;
const LINE_CAP_UPPER: usize = 27;
const LINE_CAP_DEFAULT: usize = 33;

/// Trailing columns reserved for the marker: time only (inbound) vs
/// time plus delivery checks (outbound).
const RESERVE_INBOUND: usize = 4;
const RESERVE_OUTBOUND: usize = 6;

/// Widest a photo bubble can be.
pub const MAX_PHOTO_WIDTH: u32 = 276;
/// Height used when the photo's natural size is unknown (decode failed).
const FALLBACK_PHOTO_HEIGHT: u32 = 142;
/// A captioned photo bubble never shrinks below this on either axis.
const MIN_CAPTIONED_SIDE: u32 = 118;

// Latin and Cyrillic uppercase both count as the narrow-capacity class.
static DIGITS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+$").expect("digit line pattern is valid"));
static UPPER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-ZА-ЯЁ]+$").expect("uppercase line pattern is valid"));

/// Placement decision for the time/status marker of a text block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineFit {
    /// Marker shares the last text line; otherwise it wraps below.
    pub inline: bool,
}

fn line_capacity(line: &str) -> usize {
    if DIGITS_RE.is_match(line) {
        LINE_CAP_DIGITS
    } else if UPPER_RE.is_match(line) {
        LINE_CAP_UPPER
    } else {
        LINE_CAP_DEFAULT
    }
}

/// Decide whether the trailing marker fits after the last line of `text`.
///
/// The last segment (after the final `'\n'`) is classified to pick a
/// capacity, its length is folded modulo that capacity (a non-empty line
/// that exactly fills the capacity counts as full, not empty), and the
/// marker fits when the remaining columns cover the reserve for `direction`.
pub fn line_fit(text: &str, direction: Direction) -> LineFit {
    let last = text.split('\n').next_back().unwrap_or("");
    let cap = line_capacity(last);
    let len = last.chars().count();
    let used = match len % cap {
        0 if len > 0 => cap,
        rem => rem,
    };

    let reserve = match direction {
        Direction::Inbound => RESERVE_INBOUND,
        Direction::Outbound => RESERVE_OUTBOUND,
    };

    LineFit {
        inline: used <= cap.saturating_sub(reserve),
    }
}

/// Compute the rendered frame of a photo bubble from the image's natural
/// dimensions.
///
/// Unknown dimensions (both zero — the decode failed) fall back to a
/// full-width placeholder frame; a caption forces a minimum footprint so the
/// text block has room regardless of the photo's own aspect ratio.
pub fn image_frame(natural_width: u32, natural_height: u32, has_caption: bool) -> (u32, u32) {
    let (mut width, mut height) = if natural_width > 0 && natural_height > 0 {
        let width = natural_width.min(MAX_PHOTO_WIDTH);
        let height = (f64::from(natural_height) * f64::from(width) / f64::from(natural_width))
            .round() as u32;
        (width, height)
    } else {
        let width = MAX_PHOTO_WIDTH;
        let height = (f64::from(FALLBACK_PHOTO_HEIGHT) * f64::from(width)
            / f64::from(MAX_PHOTO_WIDTH))
        .round() as u32;
        (width, height)
    };

    if has_caption {
        width = width.max(MIN_CAPTIONED_SIDE);
        height = height.max(MIN_CAPTIONED_SIDE);
    }

    (width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_uppercase_fits_inline() {
        // "HELLO": 5 chars, uppercase class (cap 27), outbound reserve 6.
        assert!(line_fit("HELLO", Direction::Outbound).inline);
    }

    #[test]
    fn test_full_digit_line_wraps_below() {
        // 31 digits exactly fill the digit capacity, so the line counts as
        // full and even the inbound reserve of 4 cannot fit.
        let digits = "1234567890123456789012345678901";
        assert_eq!(digits.len(), 31);
        assert!(!line_fit(digits, Direction::Inbound).inline);
    }

    #[test]
    fn test_repeated_uppercase_wraps_to_short_remainder() {
        // 31 uppercase letters at cap 27 leave 4 on the last visual line.
        let text = "A".repeat(31);
        assert!(line_fit(&text, Direction::Inbound).inline);
    }

    #[test]
    fn test_only_last_line_counts() {
        // A long first line is irrelevant; the short last line decides.
        let text = format!("{}\nok", "x".repeat(200));
        assert!(line_fit(&text, Direction::Outbound).inline);
    }

    #[test]
    fn test_empty_text_is_inline() {
        assert!(line_fit("", Direction::Inbound).inline);
        assert!(line_fit("", Direction::Outbound).inline);
    }

    #[test]
    fn test_cyrillic_uppercase_uses_narrow_capacity() {
        // 24 Cyrillic capitals: cap 27, outbound reserve 6 -> 24 > 21.
        let text = "Ж".repeat(24);
        assert!(!line_fit(&text, Direction::Outbound).inline);
        // Inbound reserve 4 still fails: 24 > 23.
        assert!(!line_fit(&text, Direction::Inbound).inline);
    }

    #[test]
    fn test_mixed_case_uses_default_capacity() {
        // 24 mixed-case chars fall in the default class (cap 33):
        // 24 <= 33 - 6.
        let text = "Aa".repeat(12);
        assert!(line_fit(&text, Direction::Outbound).inline);
    }

    #[test]
    fn test_image_frame_unknown_dimensions() {
        assert_eq!(image_frame(0, 0, false), (276, 142));
    }

    #[test]
    fn test_image_frame_downscales_wide_photos() {
        // 552x300 halves to 276x150; the caption minimum is already met.
        assert_eq!(image_frame(552, 300, true), (276, 150));
    }

    #[test]
    fn test_image_frame_keeps_small_photos() {
        assert_eq!(image_frame(100, 80, false), (100, 80));
    }

    #[test]
    fn test_image_frame_caption_minimum() {
        assert_eq!(image_frame(50, 40, true), (118, 118));
        // Without a caption the small frame stands.
        assert_eq!(image_frame(50, 40, false), (50, 40));
    }

    #[test]
    fn test_image_frame_rounds_height() {
        // 400x301 -> width 276, height round(301 * 276 / 400) = round(207.69).
        assert_eq!(image_frame(400, 301, false), (276, 208));
    }
}
