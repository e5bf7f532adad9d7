use anyhow::Error;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Produce a rectangle centered within `area` that spans the requested percent
/// of the width and height. Used for modal dialogs.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(area);

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(horizontal[1]);

    vertical[1]
}

/// Extract the most relevant error message from a chained error.
pub(crate) fn surface_error(err: &Error) -> String {
    err.chain()
        .last()
        .map(|cause| cause.to_string())
        .unwrap_or_else(|| err.to_string())
}

/// Column for a text cursor placed `len` characters after `offset` inside
/// `inner`. Long input pins the cursor to the last column of the area.
pub(crate) fn cursor_column(inner: Rect, offset: u16, len: usize) -> u16 {
    let len = u16::try_from(len).unwrap_or(u16::MAX);
    inner
        .x
        .saturating_add(offset)
        .saturating_add(len)
        .min(inner.right().saturating_sub(1))
        .max(inner.x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{anyhow, Context};

    #[test]
    fn surfaces_root_cause() {
        let err = Err::<(), _>(anyhow!("disk I/O error"))
            .context("failed to insert car")
            .unwrap_err();
        assert_eq!(surface_error(&err), "disk I/O error");
    }

    #[test]
    fn centered_rect_stays_inside() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = centered_rect(50, 50, area);
        assert_eq!(popup.width, 50);
        assert_eq!(popup.height, 20);
        assert_eq!(popup.x, 25);
        assert_eq!(popup.y, 10);
    }

    #[test]
    fn cursor_follows_short_input() {
        let inner = Rect::new(2, 1, 40, 1);
        assert_eq!(cursor_column(inner, 8, 0), 10);
        assert_eq!(cursor_column(inner, 8, 5), 15);
    }

    #[test]
    fn cursor_is_pinned_to_the_right_edge() {
        let inner = Rect::new(2, 1, 40, 1);
        assert_eq!(cursor_column(inner, 8, 100), 41);
        assert_eq!(cursor_column(inner, 8, usize::MAX), 41);

        let far_right = Rect::new(u16::MAX - 10, 0, 10, 1);
        assert_eq!(cursor_column(far_right, 8, 70_000), u16::MAX - 1);
    }

    #[test]
    fn cursor_stays_in_an_empty_area() {
        let empty = Rect::new(5, 0, 0, 0);
        assert_eq!(cursor_column(empty, 8, 3), 5);
    }
}
