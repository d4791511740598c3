//! Piecewise-linear gradient interpolation in RGB space.
//!
//! Every caller (sync tool, theme creator, preview swatches) goes through
//! this module so the colors shown in the UI match the colors sent to the
//! LEDs exactly.

use crate::{ColorError, Rgb};

/// How fractional channel values are converted back to integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rounding {
    /// Round to nearest, ties away from zero.
    #[default]
    Nearest,
    /// Drop the fractional part. Matches gradients produced by the legacy
    /// Python tooling.
    Truncate,
}

impl Rounding {
    fn apply(self, value: f64) -> u8 {
        let value = match self {
            Rounding::Nearest => value.round(),
            Rounding::Truncate => value.trunc(),
        };
        value.clamp(0.0, 255.0) as u8
    }
}

/// Expand anchor colors into a `length`-color gradient of `#rrggbb` strings.
///
/// Uses [`Rounding::Nearest`].
pub fn interpolate<S: AsRef<str>>(anchors: &[S], length: usize) -> Result<Vec<String>, ColorError> {
    interpolate_with(anchors, length, Rounding::Nearest)
}

/// Same as [`interpolate`] with an explicit rounding mode.
pub fn interpolate_with<S: AsRef<str>>(
    anchors: &[S],
    length: usize,
    rounding: Rounding,
) -> Result<Vec<String>, ColorError> {
    let parsed = anchors
        .iter()
        .map(|a| Rgb::from_hex(a.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;

    if parsed.is_empty() {
        return Err(ColorError::NoAnchors);
    }
    if length == 0 {
        return Err(ColorError::InvalidLength(length));
    }

    Ok(gradient(&parsed, length, rounding)
        .into_iter()
        .map(Rgb::to_hex)
        .collect())
}

/// Expand already parsed anchors into `length` colors.
///
/// Returns an empty list when `anchors` is empty or `length` is zero.
pub fn gradient(anchors: &[Rgb], length: usize, rounding: Rounding) -> Vec<Rgb> {
    match anchors {
        [] => Vec::new(),
        [single] => vec![*single; length],
        _ => (0..length)
            .map(|i| sample(anchors, i, length, rounding))
            .collect(),
    }
}

/// Color at output index `i` of a `length`-color gradient (anchors.len() >= 2).
fn sample(anchors: &[Rgb], i: usize, length: usize, rounding: Rounding) -> Rgb {
    let last = anchors.len() - 1;

    let pos = if length > 1 {
        i as f64 / (length - 1) as f64
    } else {
        0.0
    };
    let scaled = pos * last as f64;
    let base = scaled.floor() as usize;
    let frac = scaled - base as f64;

    // Final index lands exactly on the last anchor.
    if base >= last {
        return anchors[last];
    }

    let from = anchors[base].channels();
    let to = anchors[base + 1].channels();
    let mut out = [0u8; 3];
    for (ch, (a, b)) in out.iter_mut().zip(from.iter().zip(to.iter())) {
        let a = f64::from(*a);
        let b = f64::from(*b);
        *ch = rounding.apply(a + (b - a) * frac);
    }
    Rgb::from_channels(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUNSET: [&str; 3] = ["#ffbe0b", "#ff006e", "#3a0ca3"];

    fn anchor_sets() -> Vec<Vec<&'static str>> {
        vec![
            vec!["#ff0000"],
            vec!["#ff0000", "#0000ff"],
            SUNSET.to_vec(),
            vec!["#000000", "#808080", "#ffffff", "#102030"],
            vec!["#8be9fd", "#50fa7b", "#ffb86c", "#ff79c6", "#bd93f9"],
        ]
    }

    #[test]
    fn test_two_anchor_midpoint_nearest() {
        let colors = interpolate(&["#ff0000", "#0000ff"], 3).unwrap();
        assert_eq!(colors, vec!["#ff0000", "#800080", "#0000ff"]);
    }

    #[test]
    fn test_two_anchor_midpoint_truncate() {
        let colors = interpolate_with(&["#ff0000", "#0000ff"], 3, Rounding::Truncate).unwrap();
        assert_eq!(colors, vec!["#ff0000", "#7f007f", "#0000ff"]);
    }

    #[test]
    fn test_single_anchor_repeats() {
        let colors = interpolate(&["#000000"], 4).unwrap();
        assert_eq!(colors, vec!["#000000"; 4]);
    }

    #[test]
    fn test_single_anchor_is_normalized() {
        let colors = interpolate(&["#ABCDEF"], 2).unwrap();
        assert_eq!(colors, vec!["#abcdef", "#abcdef"]);
    }

    #[test]
    fn test_middle_lands_on_anchor() {
        let colors = interpolate(&SUNSET, 5).unwrap();
        assert_eq!(colors.len(), 5);
        assert_eq!(colors[0], "#ffbe0b");
        assert_eq!(colors[2], "#ff006e");
        assert_eq!(colors[4], "#3a0ca3");
    }

    #[test]
    fn test_led_length_sunset() {
        let colors = interpolate(&SUNSET, crate::LED_GRADIENT_LENGTH).unwrap();
        assert_eq!(colors.len(), 14);
        assert_eq!(colors.first().map(String::as_str), Some("#ffbe0b"));
        assert_eq!(colors.last().map(String::as_str), Some("#3a0ca3"));
    }

    #[test]
    fn test_length_one_takes_first_anchor() {
        let colors = interpolate(&SUNSET, 1).unwrap();
        assert_eq!(colors, vec!["#ffbe0b"]);
    }

    #[test]
    fn test_compressing_more_anchors_than_length() {
        let anchors = ["#000000", "#111111", "#222222", "#333333", "#444444"];
        let colors = interpolate(&anchors, 2).unwrap();
        assert_eq!(colors, vec!["#000000", "#444444"]);
    }

    #[test]
    fn test_invalid_color_rejected() {
        let err = interpolate(&["#ff0000", "blue"], 5).unwrap_err();
        assert_eq!(err, ColorError::InvalidColor("blue".to_string()));
    }

    #[test]
    fn test_zero_length_rejected() {
        let err = interpolate(&SUNSET, 0).unwrap_err();
        assert_eq!(err, ColorError::InvalidLength(0));
    }

    #[test]
    fn test_empty_anchors_rejected() {
        let empty: [&str; 0] = [];
        assert_eq!(interpolate(&empty, 3).unwrap_err(), ColorError::NoAnchors);
    }

    #[test]
    fn test_lengths_and_endpoints_hold() {
        for anchors in anchor_sets() {
            for length in 1..=64 {
                let colors = interpolate(&anchors, length).unwrap();
                assert_eq!(colors.len(), length);
                assert_eq!(colors[0], anchors[0]);
                if length >= 2 {
                    assert_eq!(colors[length - 1], anchors[anchors.len() - 1]);
                }
            }
        }
    }

    #[test]
    fn test_output_format() {
        for anchors in anchor_sets() {
            for length in [1, 2, 7, 14, 22, 64] {
                for color in interpolate(&anchors, length).unwrap() {
                    assert_eq!(color.len(), 7);
                    assert!(color.starts_with('#'));
                    assert!(color[1..]
                        .chars()
                        .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
                }
            }
        }
    }

    #[test]
    fn test_monotonic_channel_has_no_overshoot() {
        let anchors = [Rgb::new(0, 200, 0), Rgb::new(90, 100, 0), Rgb::new(255, 0, 0)];
        for rounding in [Rounding::Nearest, Rounding::Truncate] {
            for length in 2..=64 {
                let colors = gradient(&anchors, length, rounding);
                for pair in colors.windows(2) {
                    assert!(pair[0].r <= pair[1].r, "red must not decrease");
                    assert!(pair[0].g >= pair[1].g, "green must not increase");
                }
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let a = interpolate(&SUNSET, 22).unwrap();
        let b = interpolate(&SUNSET, 22).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_typed_gradient_empty_inputs() {
        assert!(gradient(&[], 5, Rounding::Nearest).is_empty());
        assert!(gradient(&[Rgb::new(1, 2, 3)], 0, Rounding::Nearest).is_empty());
    }
}
