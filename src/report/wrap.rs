use unicode_segmentation::UnicodeSegmentation;

/// Average glyph advance per point of font size, in millimetres.
pub const GLYPH_MM_PER_PT: f32 = 0.2;

/// How many glyphs of `font_size` fit in `width_mm`, never less than one.
pub fn glyphs_per_line(width_mm: f32, font_size: f32) -> usize {
    ((width_mm / (font_size * GLYPH_MM_PER_PT)).floor() as usize).max(1)
}

pub fn display_width(text: &str) -> usize {
    text.graphemes(true).count()
}

/// Greedy word wrap to `width_mm`. Words longer than a line are split on
/// grapheme boundaries. Always returns at least one line.
pub fn wrap(text: &str, width_mm: f32, font_size: f32) -> Vec<String> {
    let max = glyphs_per_line(width_mm, font_size);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = display_width(word);
        if word_width > max {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            let graphemes: Vec<&str> = word.graphemes(true).collect();
            for chunk in graphemes.chunks(max) {
                current = chunk.concat();
                current_width = chunk.len();
                if current_width == max {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
            }
            continue;
        }

        let needed = if current.is_empty() {
            word_width
        } else {
            current_width + 1 + word_width
        };
        if needed > max {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_width;
        } else {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            current_width = needed;
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyphs_per_line() {
        assert_eq!(glyphs_per_line(170.0, 10.0), 85);
        assert_eq!(glyphs_per_line(1.0, 72.0), 1);
    }

    #[test]
    fn test_wraps_on_word_boundaries() {
        // 10mm at 10pt is five glyphs
        let lines = wrap("aaa bb cc dddd", 10.0, 10.0);
        assert_eq!(lines, vec!["aaa", "bb cc", "dddd"]);
        assert!(lines.iter().all(|l| display_width(l) <= 5));
    }

    #[test]
    fn test_splits_long_words() {
        let lines = wrap("abcdefghijkl xy", 10.0, 10.0);
        assert_eq!(lines, vec!["abcde", "fghij", "kl xy"]);
    }

    #[test]
    fn test_empty_text_is_one_line() {
        assert_eq!(wrap("", 170.0, 10.0), vec![String::new()]);
    }

    #[test]
    fn test_counts_graphemes_not_bytes() {
        let telugu = "విశాఖపట్నం";
        assert_eq!(wrap(telugu, 170.0, 10.0), vec![telugu.to_string()]);
    }
}
