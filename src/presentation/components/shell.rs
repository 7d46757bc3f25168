//! Shell component
//!
//! Top-level view: navigation bar, active view region and a help line.

use ratatui::{prelude::*, widgets::Paragraph};

use crate::{
    model::shell::AppShell,
    presentation::{
        view::ViewTree,
        widgets::{active_view::ActiveViewWidget, nav_bar::NavBarWidget},
    },
};

const HELP: &str = "←/→ select  Enter open  q quit";

/// Layout of the last drawn frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShellLayout {
    pub nav_bar: Rect,
    pub view: Rect,
    pub help: Rect,
}

impl ShellLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Navigation bar
                Constraint::Min(0),    // Active view
                Constraint::Length(1), // Help line
            ])
            .split(area);

        Self {
            nav_bar: chunks[0],
            view: chunks[1],
            help: chunks[2],
        }
    }
}

#[derive(Debug, Default)]
pub struct ShellComponent;

impl ShellComponent {
    pub fn new() -> Self {
        Self
    }

    /// Render the shell and report where each region landed.
    pub fn view(
        &self,
        shell: &AppShell,
        tree: &ViewTree,
        frame: &mut Frame,
        area: Rect,
    ) -> ShellLayout {
        let layout = ShellLayout::new(area);

        let nav_bar = NavBarWidget::new(tree)
            .selected(shell.selected())
            .active(shell.active());
        frame.render_widget(nav_bar, layout.nav_bar);

        let active_view = ActiveViewWidget::new(shell.active_label(), shell.active_target());
        frame.render_widget(active_view, layout.view);

        let help = Paragraph::new(Span::styled(HELP, Style::default().fg(Color::Gray).italic()));
        frame.render_widget(help, layout.help);

        layout
    }
}
