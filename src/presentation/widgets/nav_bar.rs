use ratatui::{layout::Position, prelude::*, symbols, widgets::Widget};
use unicode_width::UnicodeWidthStr;

use crate::presentation::view::ViewTree;

const PADDING: &str = " ";
const DIVIDER: &str = symbols::line::VERTICAL;

/// One-line navigation bar: ` Home │ Clients `.
#[derive(Debug, Clone)]
pub struct NavBarWidget<'a> {
    tree: &'a ViewTree,
    selected: Option<usize>,
    active: Option<usize>,
}

impl<'a> NavBarWidget<'a> {
    pub fn new(tree: &'a ViewTree) -> Self {
        Self {
            tree,
            selected: None,
            active: None,
        }
    }

    pub fn selected(mut self, selected: Option<usize>) -> Self {
        self.selected = selected;
        self
    }

    pub fn active(mut self, active: Option<usize>) -> Self {
        self.active = active;
        self
    }

    /// Screen region of each node, clipped to `area`. Nodes pushed past the
    /// right edge get a zero-width rect.
    pub fn node_areas(&self, area: Rect) -> Vec<Rect> {
        let mut x = area.left();
        let mut areas = Vec::with_capacity(self.tree.len());
        for (i, node) in self.tree.nodes().iter().enumerate() {
            if i > 0 {
                x = x.saturating_add(DIVIDER.width() as u16);
            }
            let width = u16::try_from(PADDING.width() * 2 + node.text().width())
                .unwrap_or(u16::MAX);
            let left = x.min(area.right());
            let right = x.saturating_add(width).min(area.right());
            areas.push(Rect::new(left, area.top(), right - left, area.height.min(1)));
            x = x.saturating_add(width);
        }
        areas
    }

    /// Index of the node drawn at (`column`, `row`), if any.
    pub fn hit_test(&self, area: Rect, column: u16, row: u16) -> Option<usize> {
        let position = Position::new(column, row);
        self.node_areas(area)
            .iter()
            .position(|rect| rect.contains(position))
    }

    fn node_style(&self, index: usize) -> Style {
        let mut style = Style::default();
        if self.active == Some(index) {
            style = style.bold().underlined();
        }
        if self.selected == Some(index) {
            style = style.reversed();
        }
        style
    }
}

impl<'a> Widget for NavBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        if area.is_empty() {
            return;
        }

        let mut spans = Vec::with_capacity(self.tree.len() * 2);
        for (i, node) in self.tree.nodes().iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(DIVIDER));
            }
            spans.push(Span::styled(
                format!("{PADDING}{}{PADDING}", node.text()),
                self.node_style(i),
            ));
        }

        Line::from(spans)
            .style(Style::default().bg(Color::Black))
            .render(Rect { height: 1, ..area }, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::{query::get_text_position, view::ViewNode};
    use pretty_assertions::assert_eq;

    fn tree() -> ViewTree {
        ViewTree::new(vec![
            ViewNode::new(0, "Home", "/"),
            ViewNode::new(1, "Clients", "/clients"),
        ])
    }

    fn first_line(buf: &Buffer) -> String {
        buf.content()[0..buf.area.width as usize]
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_render_labels_in_order() {
        let tree = tree();
        let area = Rect::new(0, 0, 30, 1);
        let mut buf = Buffer::empty(area);
        NavBarWidget::new(&tree).render(area, &mut buf);

        assert_eq!(first_line(&buf), format!("{:<30}", " Home │ Clients "));
    }

    #[test]
    fn test_node_areas_match_rendered_text() {
        let tree = tree();
        let area = Rect::new(0, 0, 30, 1);
        let mut buf = Buffer::empty(area);
        let widget = NavBarWidget::new(&tree);
        let areas = widget.node_areas(area);
        widget.render(area, &mut buf);

        assert_eq!(areas, vec![Rect::new(0, 0, 6, 1), Rect::new(7, 0, 9, 1)]);
        let home = get_text_position(&buf, "Home").expect("Home is drawn");
        let clients = get_text_position(&buf, "Clients").expect("Clients is drawn");
        assert!(areas[0].contains(home));
        assert!(areas[1].contains(clients));
    }

    #[test]
    fn test_node_areas_with_wide_labels() {
        let tree = ViewTree::new(vec![
            ViewNode::new(0, "ホーム", "/"),
            ViewNode::new(1, "Clients", "/clients"),
        ]);
        let areas = NavBarWidget::new(&tree).node_areas(Rect::new(0, 0, 30, 1));
        assert_eq!(areas, vec![Rect::new(0, 0, 8, 1), Rect::new(9, 0, 9, 1)]);
    }

    #[test]
    fn test_wide_labels_are_found_where_drawn() {
        let tree = ViewTree::new(vec![
            ViewNode::new(0, "ホーム", "/"),
            ViewNode::new(1, "Clients", "/clients"),
        ]);
        let area = Rect::new(0, 0, 30, 1);
        let mut buf = Buffer::empty(area);
        let widget = NavBarWidget::new(&tree);
        let areas = widget.node_areas(area);
        widget.render(area, &mut buf);

        let home = get_text_position(&buf, "ホーム").expect("ホーム is drawn");
        assert_eq!(home, Position::new(1, 0));
        assert!(areas[0].contains(home));
        let clients = get_text_position(&buf, "Clients").expect("Clients is drawn");
        assert_eq!(clients, Position::new(10, 0));
        assert!(areas[1].contains(clients));
    }

    #[test]
    fn test_oversized_label_width_saturates() {
        let label = "x".repeat(usize::from(u16::MAX) + 10);
        let tree = ViewTree::new(vec![
            ViewNode::new(0, label.as_str(), "/"),
            ViewNode::new(1, "Clients", "/clients"),
        ]);
        let areas = NavBarWidget::new(&tree).node_areas(Rect::new(0, 0, 30, 1));
        assert_eq!(areas[0], Rect::new(0, 0, 30, 1));
        assert_eq!(areas[1].width, 0);
    }

    #[test]
    fn test_node_areas_clipped_to_area() {
        let tree = tree();
        let areas = NavBarWidget::new(&tree).node_areas(Rect::new(0, 0, 10, 1));
        assert_eq!(areas, vec![Rect::new(0, 0, 6, 1), Rect::new(7, 0, 3, 1)]);
    }

    #[test]
    fn test_hit_test() {
        let tree = tree();
        let widget = NavBarWidget::new(&tree);
        let area = Rect::new(0, 2, 30, 1);

        assert_eq!(widget.hit_test(area, 1, 2), Some(0));
        assert_eq!(widget.hit_test(area, 6, 2), None); // divider
        assert_eq!(widget.hit_test(area, 10, 2), Some(1));
        assert_eq!(widget.hit_test(area, 10, 3), None);
        assert_eq!(widget.hit_test(area, 25, 2), None);
    }

    #[test]
    fn test_selected_and_active_styles() {
        let tree = tree();
        let area = Rect::new(0, 0, 30, 1);
        let mut buf = Buffer::empty(area);
        NavBarWidget::new(&tree)
            .selected(Some(1))
            .active(Some(0))
            .render(area, &mut buf);

        let home = &buf[(1, 0)];
        assert!(home.modifier.contains(Modifier::BOLD));
        assert!(!home.modifier.contains(Modifier::REVERSED));
        let clients = &buf[(8, 0)];
        assert!(clients.modifier.contains(Modifier::REVERSED));
        assert!(!clients.modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_render_empty_tree() {
        let tree = ViewTree::default();
        let area = Rect::new(0, 0, 10, 1);
        let mut buf = Buffer::empty(area);
        let widget = NavBarWidget::new(&tree);
        assert!(widget.node_areas(area).is_empty());
        widget.render(area, &mut buf);

        assert_eq!(first_line(&buf).trim(), "");
    }

    #[test]
    fn test_render_zero_area_does_not_panic() {
        let tree = tree();
        let area = Rect::new(0, 0, 0, 0);
        let mut buf = Buffer::empty(area);
        NavBarWidget::new(&tree).render(area, &mut buf);
    }
}
