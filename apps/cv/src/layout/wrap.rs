//! Greedy word wrap against the static font metrics.
//!
//! Line widths are accumulated in integer font units and converted once, so a
//! wrapped line measured again with [`measure_mm`](super::font_metrics::measure_mm)
//! yields exactly the width the wrapper compared against.

use crate::layout::font_metrics::{get_metrics, StandardFont, PT_TO_MM};

/// Splits `text` into lines that each fit within `max_width` mm when set in
/// `font` at `size_pt`.
///
/// - Explicit `\n` starts a new paragraph; runs of other whitespace collapse to one space.
/// - Words are split only when a single word is wider than `max_width`; it is
///   then broken at character boundaries into pieces that each fit.
/// - Blank input returns no lines.
pub fn wrap_text(text: &str, font: StandardFont, size_pt: f32, max_width: f32) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let metrics = get_metrics(font);
    let units_to_mm = |units: u32| units as f32 / 1000.0 * size_pt * PT_TO_MM;
    let measure_units = |s: &str| s.chars().map(|c| metrics.char_width(c) as u32).sum::<u32>();
    let space_units = metrics.char_width(' ') as u32;

    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_units = 0u32;

        for word in paragraph.split_whitespace() {
            let word_units = measure_units(word);
            if units_to_mm(word_units) > max_width {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                let (pieces, tail, tail_units) = break_word(
                    word,
                    |c| metrics.char_width(c) as u32,
                    |units| units_to_mm(units) <= max_width,
                );
                lines.extend(pieces);
                current = tail;
                current_units = tail_units;
                continue;
            }
            if current.is_empty() {
                current.push_str(word);
                current_units = word_units;
                continue;
            }

            let candidate = current_units + space_units + word_units;
            if units_to_mm(candidate) > max_width {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
                current_units = word_units;
            } else {
                current.push(' ');
                current.push_str(word);
                current_units = candidate;
            }
        }
        lines.push(current);
    }
    lines
}

/// Breaks an overlong word greedily into full pieces plus the trailing piece
/// (returned with its width so the caller can keep filling the line).
/// Every piece holds at least one character.
fn break_word(
    word: &str,
    char_units: impl Fn(char) -> u32,
    fits: impl Fn(u32) -> bool,
) -> (Vec<String>, String, u32) {
    let mut pieces = Vec::new();
    let mut piece = String::new();
    let mut piece_units = 0u32;
    for c in word.chars() {
        let units = char_units(c);
        if !piece.is_empty() && !fits(piece_units + units) {
            pieces.push(std::mem::take(&mut piece));
            piece_units = 0;
        }
        piece.push(c);
        piece_units += units;
    }
    (pieces, piece, piece_units)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::font_metrics::measure_mm;
    use crate::models::cv_data;

    const FONT: StandardFont = StandardFont::Helvetica;

    fn rejoin(lines: &[String]) -> Vec<String> {
        lines
            .iter()
            .flat_map(|l| l.split_whitespace().map(str::to_string))
            .collect()
    }

    #[test]
    fn test_wrap_empty_returns_no_lines() {
        assert!(wrap_text("", FONT, 8.0, 100.0).is_empty());
        assert!(wrap_text("   ", FONT, 8.0, 100.0).is_empty());
    }

    #[test]
    fn test_wrap_single_word_is_one_line() {
        assert_eq!(wrap_text("Kotlin", FONT, 8.0, 100.0), vec!["Kotlin"]);
    }

    #[test]
    fn test_wrap_short_text_stays_on_one_line() {
        let lines = wrap_text("Clean   Architecture", FONT, 8.0, 100.0);
        assert_eq!(lines, vec!["Clean Architecture"]);
    }

    #[test]
    fn test_wrap_summary_at_main_column_width() {
        let summary = &cv_data::resume().summary;
        let lines = wrap_text(summary, FONT, 8.0, 126.0);
        assert!(lines.len() >= 2, "summary should wrap, got {lines:?}");
    }

    #[test]
    fn test_wrapped_lines_never_exceed_width() {
        let resume = cv_data::resume();
        let mut texts: Vec<&str> = vec![resume.summary.as_str()];
        texts.extend(resume.experience.iter().map(|e| e.description.as_str()));
        texts.extend(
            resume
                .projects
                .iter()
                .flat_map(|p| p.highlights.iter().map(String::as_str)),
        );

        for width in [44.0_f32, 85.0, 87.0, 126.0, 182.0] {
            for font in [StandardFont::Helvetica, StandardFont::HelveticaBold, StandardFont::Courier] {
                for text in &texts {
                    for line in wrap_text(text, font, 7.0, width) {
                        let w = measure_mm(font, 7.0, &line);
                        assert!(w <= width, "{line:?} is {w}mm, limit {width}mm");
                    }
                }
            }
        }
    }

    #[test]
    fn test_wrap_preserves_words_in_order() {
        let text = "Built RAG-based Hadith AI system — 85% improvement in accurate hadith retrieval";
        for width in [20.0_f32, 40.0, 60.0, 200.0] {
            let lines = wrap_text(text, FONT, 7.0, width);
            let original: Vec<String> = text.split_whitespace().map(str::to_string).collect();
            assert_eq!(rejoin(&lines), original, "width {width}");
        }
    }

    #[test]
    fn test_wrap_splits_overlong_word_into_fitting_pieces() {
        let url = "https://play.google.com/store/apps/details?id=com.cabraltech.emaishacorporateapp";
        let text = format!("see {url} now");
        let lines = wrap_text(&text, FONT, 7.0, 44.0);

        assert!(lines.len() >= 3, "url should span lines, got {lines:?}");
        for line in &lines {
            let w = measure_mm(FONT, 7.0, line);
            assert!(w <= 44.0, "{line:?} is {w}mm");
        }
        assert_eq!(lines[0], "see");
        let joined: String = lines.concat();
        assert_eq!(joined.replace(' ', ""), format!("see{url}now"));
        assert!(joined.contains(url), "pieces rejoin to the original word");
    }

    #[test]
    fn test_wrap_continues_filling_after_split_word() {
        // Courier 10pt advances 2.12mm per glyph: seven fit in 15mm.
        let lines = wrap_text("abcdefghij k", StandardFont::Courier, 10.0, 15.0);
        assert_eq!(lines, vec!["abcdefg", "hij k"]);
    }

    #[test]
    fn test_wrap_flushes_line_before_split_word() {
        let lines = wrap_text("xy abcdefghijklmnop", StandardFont::Courier, 10.0, 15.0);
        assert_eq!(lines, vec!["xy", "abcdefg", "hijklmn", "op"]);
    }

    #[test]
    fn test_wrap_honours_explicit_newlines() {
        let lines = wrap_text("first line\nsecond", FONT, 8.0, 200.0);
        assert_eq!(lines, vec!["first line", "second"]);
    }

    #[test]
    fn test_wrap_is_deterministic() {
        let text = &cv_data::resume().experience[1].description;
        assert_eq!(
            wrap_text(text, FONT, 7.5, 87.0),
            wrap_text(text, FONT, 7.5, 87.0)
        );
    }
}
