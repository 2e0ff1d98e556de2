use ratatui::layout::Rect;

/// Rect centered in `area`, sized `max` when there is room and never below `min`.
/// Keeps a two-cell margin on each side when the area allows it.
pub fn centered_rect_constrained(
    area: Rect,
    min_width: u16,
    max_width: u16,
    min_height: u16,
    max_height: u16,
) -> Rect {
    let w = max_width.min(area.width.saturating_sub(4)).max(min_width);
    let h = max_height.min(area.height.saturating_sub(4)).max(min_height);

    let x = area.x + area.width.saturating_sub(w) / 2;
    let y = area.y + area.height.saturating_sub(h) / 2;
    Rect::new(x, y, w.min(area.width), h.min(area.height))
}
