//! Правило минимальной длины статьи

/// Минимальное число символов после обрезки пробелов
pub const MIN_ARTICLE_CHARS: usize = 50;

/// Предупреждение, которое показывается при слишком коротком тексте
pub const LENGTH_WARNING: &str =
    "Please enter a full-length news article for reliable prediction.";

/// Пробельный символ в смысле `String.prototype.trim` браузера:
/// U+FEFF входит, U+0085 нет
fn is_trimmable(c: char) -> bool {
    c == '\u{FEFF}' || (c != '\u{0085}' && c.is_whitespace())
}

/// Длина текста без пробельных символов по краям, в UTF-16 code units,
/// как её видит поле ввода браузера
pub fn trimmed_char_count(text: &str) -> usize {
    text.trim_matches(is_trimmable).encode_utf16().count()
}

pub fn is_long_enough(text: &str) -> bool {
    trimmed_char_count(text) >= MIN_ARTICLE_CHARS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary() {
        assert!(!is_long_enough(&"a".repeat(49)));
        assert!(is_long_enough(&"a".repeat(50)));
    }

    #[test]
    fn test_surrounding_whitespace_ignored() {
        let padded = format!("   \n\t{}\n  ", "b".repeat(49));
        assert_eq!(trimmed_char_count(&padded), 49);
        assert!(!is_long_enough(&padded));
    }

    #[test]
    fn test_inner_whitespace_counts() {
        let text = "word ".repeat(10);
        // завершающий пробел обрезается
        assert_eq!(trimmed_char_count(&text), 49);
        assert!(is_long_enough(&format!("{}x", text)));
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        let cyrillic = "я".repeat(50);
        assert_eq!(cyrillic.len(), 100);
        assert_eq!(trimmed_char_count(&cyrillic), 50);
    }

    #[test]
    fn test_astral_chars_count_as_two_units() {
        let emoji = "😀".repeat(25);
        assert_eq!(trimmed_char_count(&emoji), 50);
        assert!(is_long_enough(&emoji));
        assert!(!is_long_enough(&"😀".repeat(24)));
    }

    #[test]
    fn test_byte_order_mark_is_trimmed() {
        let text = format!("\u{FEFF}{}\u{FEFF}", "c".repeat(49));
        assert_eq!(trimmed_char_count(&text), 49);
        assert!(!is_long_enough(&text));
    }

    #[test]
    fn test_next_line_is_kept() {
        let text = format!("\u{0085}{}", "d".repeat(49));
        assert_eq!(trimmed_char_count(&text), 50);
        assert!(is_long_enough(&text));
    }
}
