//! Text lookups over rendered output
//!
//! Two surfaces can be queried:
//! - a [`ViewTree`], matching node text exactly
//! - a drawn [`Buffer`], matching text anywhere on a row

use ratatui::buffer::Buffer;
use ratatui::layout::Position;
use thiserror::Error;
use unicode_width::UnicodeWidthStr;

use crate::presentation::view::{ViewNode, ViewTree};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unable to find an element with the text: {text}")]
pub struct LookupMiss {
    pub text: String,
}

impl LookupMiss {
    fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

pub fn query_all_by_text<'a>(tree: &'a ViewTree, text: &str) -> Vec<&'a ViewNode> {
    tree.nodes()
        .iter()
        .filter(|node| node.text() == text)
        .collect()
}

pub fn query_by_text<'a>(tree: &'a ViewTree, text: &str) -> Option<&'a ViewNode> {
    tree.nodes().iter().find(|node| node.text() == text)
}

pub fn get_by_text<'a>(tree: &'a ViewTree, text: &str) -> Result<&'a ViewNode, LookupMiss> {
    query_by_text(tree, text).ok_or_else(|| LookupMiss::new(text))
}

/// Rows of the buffer as plain strings.
pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area;
    (area.top()..area.bottom())
        .map(|y| row_text(buf, y).0)
        .collect()
}

/// Every position where `text` starts, in reading order.
pub fn find_all_text(buf: &Buffer, text: &str) -> Vec<Position> {
    if text.is_empty() {
        return vec![];
    }

    let area = buf.area;
    let mut found = vec![];
    for y in area.top()..area.bottom() {
        let (line, columns) = row_text(buf, y);
        for (offset, _) in line.match_indices(text) {
            // Matches starting inside a multi-byte cell symbol are not cell aligned.
            if let Some(&(_, x)) = columns.iter().find(|(start, _)| *start == offset) {
                found.push(Position::new(x, y));
            }
        }
    }
    found
}

/// First position of `text` in reading order.
pub fn get_text_position(buf: &Buffer, text: &str) -> Result<Position, LookupMiss> {
    find_all_text(buf, text)
        .into_iter()
        .next()
        .ok_or_else(|| LookupMiss::new(text))
}

/// Concatenated symbols of one row, with the byte offset where each cell starts.
///
/// Cells covered by a wide symbol hold a blank filler and are skipped.
fn row_text(buf: &Buffer, y: u16) -> (String, Vec<(usize, u16)>) {
    let area = buf.area;
    let mut line = String::new();
    let mut columns = Vec::with_capacity(area.width as usize);
    let mut covered = 0;
    for x in area.left()..area.right() {
        if covered > 0 {
            covered -= 1;
            continue;
        }
        columns.push((line.len(), x));
        if let Some(cell) = buf.cell(Position::new(x, y)) {
            let symbol = cell.symbol();
            line.push_str(symbol);
            covered = symbol.width().saturating_sub(1);
        }
    }
    (line, columns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use ratatui::layout::Rect;
    use ratatui::style::Style;

    fn tree() -> ViewTree {
        ViewTree::new(vec![
            ViewNode::new(0, "Home", "/"),
            ViewNode::new(1, "Clients", "/clients"),
        ])
    }

    #[test]
    fn test_get_by_text_found() {
        let tree = tree();
        let node = get_by_text(&tree, "Clients").expect("node exists");
        assert_eq!(node.target(), "/clients");
        assert_eq!(node.index(), 1);
    }

    #[test]
    fn test_get_by_text_miss() {
        let tree = tree();
        assert_eq!(
            get_by_text(&tree, "Invoices"),
            Err(LookupMiss {
                text: "Invoices".to_string()
            })
        );
    }

    #[test]
    fn test_lookup_is_exact() {
        let tree = tree();
        assert!(query_by_text(&tree, "home").is_none());
        assert!(query_by_text(&tree, "Home ").is_none());
        assert!(query_by_text(&tree, "Client").is_none());
        assert_eq!(query_all_by_text(&tree, "Home").len(), 1);
    }

    #[test]
    fn test_lookup_miss_display() {
        let miss = LookupMiss::new("Invoices");
        assert_eq!(
            miss.to_string(),
            "unable to find an element with the text: Invoices"
        );
    }

    #[test]
    fn test_find_all_text_in_buffer() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 20, 2));
        buf.set_string(2, 0, "Home", Style::default());
        buf.set_string(10, 1, "Home", Style::default());

        assert_eq!(
            find_all_text(&buf, "Home"),
            vec![Position::new(2, 0), Position::new(10, 1)]
        );
        assert_eq!(get_text_position(&buf, "Home"), Ok(Position::new(2, 0)));
        assert!(get_text_position(&buf, "Clients").is_err());
    }

    #[test]
    fn test_find_text_after_wide_characters() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 20, 1));
        buf.set_string(0, 0, "顧客 Home", Style::default());

        assert_eq!(get_text_position(&buf, "Home"), Ok(Position::new(5, 0)));
    }

    #[test]
    fn test_find_wide_text() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 20, 1));
        buf.set_string(1, 0, "ホーム Clients", Style::default());

        assert_eq!(get_text_position(&buf, "ホーム"), Ok(Position::new(1, 0)));
        assert_eq!(get_text_position(&buf, "ーム"), Ok(Position::new(3, 0)));
        assert_eq!(get_text_position(&buf, "Clients"), Ok(Position::new(8, 0)));
        assert_eq!(buffer_lines(&buf), vec![" ホーム Clients     "]);
    }

    #[test]
    fn test_find_text_in_offset_area() {
        let mut buf = Buffer::empty(Rect::new(5, 3, 10, 1));
        buf.set_string(6, 3, "Clients", Style::default());

        assert_eq!(get_text_position(&buf, "Clients"), Ok(Position::new(6, 3)));
    }

    #[test]
    fn test_empty_text_never_matches() {
        let buf = Buffer::empty(Rect::new(0, 0, 4, 1));
        assert!(find_all_text(&buf, "").is_empty());
    }

    #[test]
    fn test_buffer_lines() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 6, 2));
        buf.set_string(0, 1, "Home", Style::default());
        assert_eq!(buffer_lines(&buf), vec!["      ", "Home  "]);
    }
}
