//! Overflow fitting for slot text
//!
//! The watch face never wraps: text wider than its region is truncated with
//! a trailing ellipsis indicator, rendered as "..." (the bitmap fonts carry
//! no dedicated ellipsis glyph).

use heapless::String;

/// Fit `text` into at most `max_chars` characters.
///
/// Text that fits is returned unchanged. Longer text is truncated on a
/// character boundary and suffixed with as many of the three indicator dots
/// as `max_chars` allows.
pub fn fit_ellipsis<const N: usize>(text: &str, max_chars: usize) -> String<N> {
    let mut out = String::new();
    if text.chars().count() <= max_chars {
        for ch in text.chars() {
            if out.push(ch).is_err() {
                break;
            }
        }
        return out;
    }

    let dots = max_chars.min(3);
    let keep = max_chars - dots;
    for ch in text.chars().take(keep) {
        if out.push(ch).is_err() {
            return out;
        }
    }
    for _ in 0..dots {
        if out.push('.').is_err() {
            break;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_unchanged() {
        let fitted: String<32> = fit_ellipsis("Hello", 21);
        assert_eq!(fitted.as_str(), "Hello");
    }

    #[test]
    fn test_exact_fit_unchanged() {
        let fitted: String<8> = fit_ellipsis("12345678", 8);
        assert_eq!(fitted.as_str(), "12345678");
    }

    #[test]
    fn test_overflow_gets_trailing_dots() {
        let fitted: String<16> = fit_ellipsis("a long line of text", 10);
        assert_eq!(fitted.as_str(), "a long ...");
        assert_eq!(fitted.chars().count(), 10);
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        let fitted: String<16> = fit_ellipsis("ääääääää", 6);
        assert_eq!(fitted.chars().count(), 6);
        assert_eq!(fitted.as_str(), "äää...");
    }

    #[test]
    fn test_tiny_budget() {
        let fitted: String<8> = fit_ellipsis("overflow", 2);
        assert_eq!(fitted.as_str(), "..");
    }

    #[test]
    fn test_zero_budget() {
        let fitted: String<8> = fit_ellipsis("overflow", 0);
        assert_eq!(fitted.as_str(), "");
    }
}
