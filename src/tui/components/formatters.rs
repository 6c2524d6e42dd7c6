// Text formatters
//
// Width-aware helpers for fitting names and program titles into table cells.
// Widths are terminal columns, not bytes or chars.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate `text` to at most `max_width` columns, ending with "…" when cut
pub fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        // Reserve one column for the ellipsis
        if width + w > max_width - 1 {
            break;
        }
        out.push(ch);
        width += w;
    }
    out.push('…');
    out
}

/// Count of students with the right plural
pub fn student_count(n: usize) -> String {
    if n == 1 {
        "1 student".to_string()
    } else {
        format!("{} students", n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate("Biotechnology", 20), "Biotechnology");
        assert_eq!(truncate("Electronics and communication", 12), "Electronics…");
        assert_eq!(truncate("abc", 0), "");
    }

    #[test]
    fn test_truncate_wide_chars() {
        // Each CJK char is two columns
        assert_eq!(truncate("李小龍同学", 5), "李小…");
        assert!(truncate("李小龍同学", 5).width() <= 5);
    }

    #[test]
    fn test_student_count() {
        assert_eq!(student_count(0), "0 students");
        assert_eq!(student_count(1), "1 student");
    }
}
