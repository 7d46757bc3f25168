use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Widget},
};

/// The region hosting the active route's view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveViewWidget<'a> {
    label: Option<&'a str>,
    target: Option<&'a str>,
}

impl<'a> ActiveViewWidget<'a> {
    pub fn new(label: Option<&'a str>, target: Option<&'a str>) -> Self {
        Self { label, target }
    }

    pub fn body(&self) -> String {
        match self.target {
            Some(target) => format!("Viewing {target}"),
            None => String::from("No routes configured"),
        }
    }
}

impl<'a> Widget for ActiveViewWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let mut block = Block::default().borders(Borders::ALL);
        if let Some(label) = self.label {
            block = block.title(Span::styled(format!(" {label} "), Style::default().bold()));
        }

        Paragraph::new(self.body()).block(block).render(area, buf);
    }
}
