/// Removal of color codes that repeat the color already in effect
use crate::colors::{ColorCode, COLOR_CODE_PREFIX};

/// Drop every color code that re-selects the current color.
///
/// `seed` is the color in effect before the first character. Deleting a code
/// can splice a new code together out of its neighbours, so the scan backs up
/// one character after each deletion. The result is a fixed point: collapsing
/// it again changes nothing.
pub fn collapse(text: &str, seed: Option<ColorCode>) -> String {
    if !text.contains(COLOR_CODE_PREFIX) {
        return text.to_string();
    }

    let mut chars: Vec<char> = text.chars().collect();
    let mut current = seed;
    let mut index = 0;
    // First index not covered by a kept token.
    let mut kept_until = 0;

    while let Some(start) = next_token(&chars, index) {
        let color = ColorCode::from_code(chars[start + 2]);
        if current == Some(color) {
            chars.drain(start..start + 3);
            index = if start > kept_until && chars[start - 1] == 'ÿ' {
                start - 1
            } else {
                start
            };
        } else {
            current = Some(color);
            index = start + 3;
            kept_until = index;
        }
    }

    chars.into_iter().collect()
}

fn next_token(chars: &[char], from: usize) -> Option<usize> {
    (from..chars.len().saturating_sub(2)).find(|&i| chars[i] == 'ÿ' && chars[i + 1] == 'c')
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn keeps_text_without_codes() {
        assert_eq!(collapse("Gold", None), "Gold");
    }

    #[test]
    fn keeps_first_code_without_seed() {
        assert_eq!(collapse("ÿc4Gold", None), "ÿc4Gold");
    }

    #[test]
    fn seed_removes_leading_repeat() {
        assert_eq!(collapse("ÿc4Gold", Some(ColorCode::GOLD)), "Gold");
    }

    #[test]
    fn removes_adjacent_repeats() {
        assert_eq!(collapse("ÿc1ÿc1* ÿc1Key", None), "ÿc1* Key");
    }

    #[test]
    fn keeps_alternating_colors() {
        let text = "ÿc8**ÿc4 Ist ÿc8**";
        assert_eq!(collapse(text, None), text);
    }

    #[test]
    fn trailing_reset_of_same_color_is_dropped() {
        assert_eq!(collapse("ÿc3Ring  ÿc3", None), "ÿc3Ring  ");
    }

    #[test]
    fn spliced_code_is_collapsed_too() {
        // Removing the inner ÿc1 forms a new ÿc1 out of the surrounding characters.
        let once = collapse("ÿc1ÿÿc1c1X", None);
        assert_eq!(once, "ÿc1X");
        assert_eq!(collapse(&once, None), once);
    }

    #[test]
    fn idempotent_on_samples() {
        let samples = [
            "",
            "ÿc",
            "ÿc1",
            "ÿcÿÿc1c1",
            "ÿc4ÿc4ÿc4",
            "ÿc1***** ÿc9***** ÿc3***** ÿc2*****ÿc4 Jah ÿc2***** ÿc3***** ÿc9***** ÿc1*****ÿc4",
            "\nÿc8Ber Rune ÿc;(30)\n",
            "ÿc0ÿÿc0c0ÿc0",
        ];
        for sample in samples {
            for seed in [None, Some(ColorCode::WHITE), Some(ColorCode::RED)] {
                let once = collapse(sample, seed);
                assert_eq!(collapse(&once, seed), once, "sample {sample:?} seed {seed:?}");
            }
        }
    }
}
