use chrono::NaiveDate;
use ratatui::{prelude::*, widgets::Paragraph};

use crate::domain::text::{letter_space, long_date};

/// Upper-cased, letter-spaced date, right aligned
#[derive(Clone, Debug, PartialEq)]
pub struct FooterDateWidget {
    date: Option<NaiveDate>,
    style: Style,
}

impl FooterDateWidget {
    pub fn new(date: Option<NaiveDate>, style: Style) -> Self {
        Self { date, style }
    }

    pub fn text(&self) -> String {
        match self.date {
            Some(date) => letter_space(&long_date(&date).to_uppercase(), 1),
            None => String::new(),
        }
    }
}

impl Widget for FooterDateWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = self.text();
        // keep two columns clear of the right edge
        let area = Rect {
            width: area.width.saturating_sub(2),
            ..area
        };
        Paragraph::new(text)
            .style(self.style)
            .right_aligned()
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_footer_text() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 19);
        let footer = FooterDateWidget::new(date, Style::default());
        assert_eq!(footer.text(), "1 9   O C T O B E R   2 0 2 6");
    }

    #[test]
    fn test_footer_before_first_sample_is_blank() {
        let footer = FooterDateWidget::new(None, Style::default());
        assert_eq!(footer.text(), "");
    }

    #[test]
    fn test_footer_is_right_aligned() {
        let area = Rect::new(0, 0, 40, 1);
        let mut buf = Buffer::empty(area);
        let date = NaiveDate::from_ymd_opt(2026, 10, 19);
        FooterDateWidget::new(date, Style::default()).render(area, &mut buf);

        let expected = Buffer::with_lines(vec![format!(
            "{}1 9   O C T O B E R   2 0 2 6  ",
            " ".repeat(9)
        )]);
        assert_eq!(buf, expected);
    }
}
