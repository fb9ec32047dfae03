use egui::{Pos2, Rect};

/// Calculate distance from a point to a line segment
pub(crate) fn distance_to_line_segment(point: Pos2, line_start: Pos2, line_end: Pos2) -> f32 {
    let line_vec = line_end - line_start;
    let point_vec = point - line_start;

    let line_len = line_vec.length();
    if line_len == 0.0 {
        return point_vec.length();
    }

    let t = ((point_vec.x * line_vec.x + point_vec.y * line_vec.y) / line_len).clamp(0.0, line_len);
    let projection = line_start + (line_vec * t / line_len);
    (point - projection).length()
}

/// Bounding box of `points` grown by `padding` on every side.
pub(crate) fn calculate_bounds(points: &[Pos2], padding: f32) -> Option<Rect> {
    let first = points.first()?;
    let mut rect = Rect::from_min_max(*first, *first);
    for point in &points[1..] {
        rect.extend_with(*point);
    }
    Some(rect.expand(padding))
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn distance_to_segment_clamps_to_endpoints() {
        let d = distance_to_line_segment(pos2(-3.0, 4.0), pos2(0.0, 0.0), pos2(10.0, 0.0));
        assert!((d - 5.0).abs() < 1e-5);
        let d = distance_to_line_segment(pos2(5.0, 2.0), pos2(0.0, 0.0), pos2(10.0, 0.0));
        assert!((d - 2.0).abs() < 1e-5);
    }

    #[test]
    fn bounds_of_nothing_is_none() {
        assert!(calculate_bounds(&[], 1.0).is_none());
        let rect = calculate_bounds(&[pos2(1.0, 2.0), pos2(5.0, 0.0)], 1.0).unwrap();
        assert_eq!(rect, Rect::from_min_max(pos2(0.0, -1.0), pos2(6.0, 3.0)));
    }
}
