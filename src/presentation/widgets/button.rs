use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Paragraph},
};

/// A bordered, centered label used for the on-screen controls
#[derive(Clone, Debug, PartialEq)]
pub struct ButtonWidget<'a> {
    label: &'a str,
    hint: Option<String>,
    style: Style,
}

impl<'a> ButtonWidget<'a> {
    pub fn new(label: &'a str, style: Style) -> Self {
        Self {
            label,
            hint: None,
            style,
        }
    }

    /// Show the bound key in the bottom border, e.g. `[f]`
    pub fn hint(mut self, hint: Option<String>) -> Self {
        self.hint = hint;
        self
    }
}

impl Widget for ButtonWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.style);
        if let Some(hint) = self.hint {
            block = block.title_bottom(Line::from(format!("[{hint}]")).centered());
        }

        Paragraph::new(self.label)
            .style(self.style)
            .centered()
            .block(block)
            .render(area, buf);
    }
}
