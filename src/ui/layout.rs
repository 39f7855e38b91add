use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Form rows inside the body: email, password, button, banner.
pub struct FormRegions {
    pub email: Rect,
    pub password: Rect,
    pub button: Rect,
    pub banner: Rect,
}

/// Maximum width of the form column.
const FORM_WIDTH: u16 = 48;

pub fn form_regions(body: Rect) -> FormRegions {
    let width = body.width.min(FORM_WIDTH);
    let column = Rect {
        x: body.x + body.width.saturating_sub(width) / 2,
        y: body.y,
        width,
        height: body.height,
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(column);

    FormRegions {
        email: rows[1],
        password: rows[2],
        button: rows[4],
        banner: rows[5],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_cover_full_height() {
        let area = Rect::new(0, 0, 80, 24);
        let (header, body, footer) = layout_regions(area);
        assert_eq!(header.height + body.height + footer.height, 24);
        assert_eq!(footer.y, 21);
    }

    #[test]
    fn tiny_terminal_does_not_underflow() {
        let (header, body, footer) = layout_regions(Rect::new(0, 0, 10, 2));
        assert_eq!(header.height, 2);
        assert_eq!(body.height, 0);
        assert_eq!(footer.height, 0);
    }

    #[test]
    fn form_column_is_centered_and_capped() {
        let regions = form_regions(Rect::new(0, 3, 100, 18));
        assert_eq!(regions.email.width, FORM_WIDTH);
        assert_eq!(regions.email.x, 26);
        assert!(regions.password.y > regions.email.y);
        assert!(regions.banner.y > regions.button.y);
    }
}
