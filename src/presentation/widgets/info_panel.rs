use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Clear, Paragraph},
};

use crate::{
    domain::text::{letter_space, truncate_lines, wrap_words},
    presentation::{config::Styles, layout::OverlayLayout, widgets::button::ButtonWidget},
};

pub const TITLE: &str = "WESTMINSTER";
pub const QUOTE: &str = "\"Behold, the Great Clock of the North, a sentinel of time, \
marking the heartbeat of a nation with every chime.\"";
pub const CLOSE_LABEL: &str = "RETURN TO TIME";
const DIVIDER_WIDTH: u16 = 20;

/// Dimmed backdrop plus the centered info panel
pub struct InfoPanelWidget<'a> {
    layout: OverlayLayout,
    styles: &'a Styles,
    close_hint: Option<String>,
}

impl<'a> InfoPanelWidget<'a> {
    pub fn new(layout: OverlayLayout, styles: &'a Styles) -> Self {
        Self {
            layout,
            styles,
            close_hint: None,
        }
    }

    pub fn close_hint(mut self, hint: Option<String>) -> Self {
        self.close_hint = hint;
        self
    }
}

impl Widget for InfoPanelWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Backdrop: keep the glyphs underneath but dim them
        let backdrop = self
            .styles
            .get_or_default("overlay_backdrop")
            .add_modifier(Modifier::DIM);
        buf.set_style(area, backdrop);

        let panel = self.layout.panel.intersection(area);
        if panel.is_empty() {
            return;
        }
        Clear.render(panel, buf);

        let panel_style = self.styles.get_or_default("overlay_panel");
        let block = Block::bordered()
            .border_type(BorderType::Double)
            .border_style(panel_style)
            .style(panel_style);
        let inner = block.inner(panel);
        block.render(panel, buf);

        let text_width = inner.width.saturating_sub(4) as usize;
        let button_rows = self.layout.close_button.height;
        // title, blank line, quote, blank line, divider, blank line, button
        let quote_rows = (inner.height as usize).saturating_sub(5 + button_rows as usize);
        let quote = truncate_lines(wrap_words(QUOTE, text_width), quote_rows);

        let title_style = self.styles.get_or_default("overlay_title");
        let text_style = self.styles.get_or_default("overlay_text");
        let divider_width = DIVIDER_WIDTH.min(inner.width) as usize;

        let mut lines = vec![
            Line::from(Span::styled(letter_space(TITLE, 1), title_style)),
            Line::default(),
        ];
        lines.extend(
            quote
                .into_iter()
                .map(|l| Line::from(Span::styled(l, text_style))),
        );
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "─".repeat(divider_width),
            self.styles.get_or_default("frame"),
        )));

        let text_area = Rect {
            height: inner
                .height
                .saturating_sub(button_rows.min(inner.height)),
            ..inner
        };
        Paragraph::new(lines)
            .centered()
            .render(text_area, buf);

        let button = self.layout.close_button.intersection(inner);
        if !button.is_empty() {
            ButtonWidget::new(CLOSE_LABEL, self.styles.get_or_default("overlay_button"))
                .hint(self.close_hint)
                .render(button, buf);
        }
    }
}
