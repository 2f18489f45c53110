use ratatui::layout::Rect;

/// Split the screen into header, body, and footer bands.
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

/// Split the body into the add form band and the list area.
pub fn body_regions(body: Rect) -> (Rect, Rect) {
    let form_height = body.height.min(3);
    let form = Rect {
        x: body.x,
        y: body.y,
        width: body.width,
        height: form_height,
    };
    let list = Rect {
        x: body.x,
        y: body.y + form_height,
        width: body.width,
        height: body.height.saturating_sub(form_height),
    };
    (form, list)
}

/// Center a fixed-size rectangle inside `area`, clamped to fit.
pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_cover_the_whole_area() {
        let area = Rect {
            x: 0,
            y: 0,
            width: 80,
            height: 24,
        };
        let (header, body, footer) = layout_regions(area);
        assert_eq!(header.height + body.height + footer.height, 24);
        assert_eq!(body.y, header.height);
        assert_eq!(footer.y, 24 - footer.height);
    }

    #[test]
    fn tiny_terminal_never_underflows() {
        let area = Rect {
            x: 0,
            y: 0,
            width: 10,
            height: 2,
        };
        let (header, body, footer) = layout_regions(area);
        assert_eq!(header.height, 2);
        assert_eq!(body.height, 0);
        assert_eq!(footer.height, 0);
    }

    #[test]
    fn centered_rect_is_clamped_to_the_area() {
        let area = Rect {
            x: 0,
            y: 0,
            width: 20,
            height: 5,
        };
        let rect = centered_rect_by_size(area, 100, 100);
        assert_eq!(rect.width, 20);
        assert_eq!(rect.height, 5);
    }
}
