//! Flex - horizontal row layout with a fixed base gap.
//!
//! The panel composes side-by-side controls with this primitive: a row of
//! equally-weighted cells separated by [`BASE_GAP`] columns. Callers can
//! override the gap or supply their own cell constraints without
//! re-declaring the direction or base spacing.

use ratatui::layout::{Constraint, Layout, Rect};

/// Base gap between cells, in columns.
pub const BASE_GAP: u16 = 4;

#[derive(Debug, Clone)]
pub struct Flex {
    gap: u16,
    constraints: Option<Vec<Constraint>>,
}

impl Flex {
    /// A horizontal row with the base gap and equally-weighted cells.
    pub fn row() -> Self {
        Flex {
            gap: BASE_GAP,
            constraints: None,
        }
    }

    /// Override the gap between cells.
    pub fn gap(mut self, gap: u16) -> Self {
        self.gap = gap;
        self
    }

    /// Use explicit cell constraints instead of equal weights.
    pub fn constraints(mut self, constraints: impl Into<Vec<Constraint>>) -> Self {
        self.constraints = Some(constraints.into());
        self
    }

    /// Split `area` into `cells` columns. When explicit constraints were
    /// supplied they win and `cells` is ignored.
    pub fn split(&self, area: Rect, cells: usize) -> Vec<Rect> {
        let constraints = self
            .constraints
            .clone()
            .unwrap_or_else(|| vec![Constraint::Fill(1); cells]);
        Layout::horizontal(constraints)
            .spacing(self.gap)
            .split(area)
            .to_vec()
    }
}

impl Default for Flex {
    fn default() -> Self {
        Flex::row()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_splits_with_base_gap() {
        let area = Rect::new(0, 0, 24, 1);
        let cells = Flex::row().split(area, 2);

        assert_eq!(cells.len(), 2);
        assert_eq!(cells[0], Rect::new(0, 0, 10, 1));
        assert_eq!(cells[1], Rect::new(14, 0, 10, 1));
        // Cells are separated by exactly the base gap.
        assert_eq!(cells[1].x - cells[0].right(), BASE_GAP);
    }

    #[test]
    fn test_gap_override_keeps_row_direction() {
        let area = Rect::new(0, 0, 11, 1);
        let cells = Flex::row().gap(1).split(area, 3);

        assert_eq!(cells.len(), 3);
        assert_eq!(cells[0].width, 3);
        assert_eq!(cells[1].x, 4);
        assert_eq!(cells[2].x, 8);
    }

    #[test]
    fn test_explicit_constraints_keep_base_gap() {
        let area = Rect::new(0, 0, 24, 1);
        let cells = Flex::row()
            .constraints([Constraint::Length(5), Constraint::Fill(1)])
            .split(area, 0);

        assert_eq!(cells.len(), 2);
        assert_eq!(cells[0], Rect::new(0, 0, 5, 1));
        assert_eq!(cells[1].x, 5 + BASE_GAP);
        assert_eq!(cells[1].right(), 24);
    }

    #[test]
    fn test_single_cell_fills_area() {
        let area = Rect::new(2, 3, 20, 1);
        let cells = Flex::row().split(area, 1);
        assert_eq!(cells, vec![area]);
    }
}
