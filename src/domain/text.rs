use chrono::Datelike;
use unicode_width::UnicodeWidthStr;

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Insert `gap` spaces between the characters of `s`.
pub fn letter_space(s: &str, gap: usize) -> String {
    let spacer = " ".repeat(gap);
    let mut spaced = String::with_capacity(s.len() * (gap + 1));
    for (i, c) in s.chars().enumerate() {
        if i > 0 {
            spaced.push_str(&spacer);
        }
        spaced.push(c);
    }
    spaced
}

/// Day, full month name and year, e.g. `19 October 2026`
pub fn long_date<D: Datelike>(date: &D) -> String {
    let month = MONTHS
        .get(date.month0() as usize)
        .copied()
        .unwrap_or_default();
    format!("{} {} {}", date.day(), month, date.year())
}

/// Greedy word wrap to `width` columns; words longer than a line are split.
pub fn wrap_words(s: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    for word in s.split_whitespace() {
        let needed = if current.is_empty() {
            word.width()
        } else {
            current.width() + 1 + word.width()
        };
        if needed <= width {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        for c in word.chars() {
            let c_width = c.to_string().width();
            if current.width() + c_width > width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            current.push(c);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Keep at most `max_height` lines, marking the cut with `...`.
pub fn truncate_lines(mut lines: Vec<String>, max_height: usize) -> Vec<String> {
    if lines.len() <= max_height {
        return lines;
    }
    if max_height == 0 {
        return vec![];
    }
    lines.truncate(max_height - 1);
    lines.push(String::from("..."));
    lines
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("", 2, "")]
    #[case("A", 2, "A")]
    #[case("XII", 1, "X I I")]
    #[case("19 OCT", 1, "1 9   O C T")]
    fn test_letter_space(#[case] s: &str, #[case] gap: usize, #[case] want: &str) {
        assert_eq!(letter_space(s, gap), want);
    }

    #[rstest]
    #[case(2026, 10, 19, "19 October 2026")]
    #[case(2024, 2, 29, "29 February 2024")]
    #[case(1999, 12, 1, "1 December 1999")]
    fn test_long_date(#[case] y: i32, #[case] m: u32, #[case] d: u32, #[case] want: &str) {
        let date = NaiveDate::from_ymd_opt(y, m, d).expect("valid date");
        assert_eq!(long_date(&date), want);
    }

    #[test]
    fn test_wrap_words_no_wrap() {
        assert_eq!(wrap_words("hello, world!", 13), vec!["hello, world!"]);
    }

    #[test]
    fn test_wrap_words_wrap_at_spaces() {
        assert_eq!(
            wrap_words("a sentinel of time", 10),
            vec!["a sentinel", "of time"]
        );
    }

    #[test]
    fn test_wrap_words_splits_long_words() {
        assert_eq!(wrap_words("abcdefgh ij", 3), vec!["abc", "def", "gh", "ij"]);
    }

    #[test]
    fn test_wrap_words_double_width() {
        assert_eq!(
            wrap_words("こんにちは 世界", 6),
            vec!["こんに", "ちは", "世界"]
        );
    }

    #[test]
    fn test_wrap_words_zero_width() {
        assert!(wrap_words("hello", 0).is_empty());
    }

    #[test]
    fn test_truncate_lines() {
        let lines = vec!["foo".to_string(), "bar".to_string(), "baz".to_string()];
        assert_eq!(truncate_lines(lines.clone(), 3), lines);
        assert_eq!(truncate_lines(lines.clone(), 2), vec!["foo", "..."]);
        assert_eq!(truncate_lines(lines.clone(), 1), vec!["..."]);
        assert!(truncate_lines(lines, 0).is_empty());
    }
}
