//! Property tests for projection and path synthesis.

use charter_geometry::{
    area_path, nearest_point, project, smooth_path, PathCommand, SmoothingProfile, Viewport,
};
use proptest::prelude::*;

fn viewport() -> Viewport {
    Viewport::new(375.0, 180.0, 8.0, 10.0)
}

proptest! {
    #[test]
    fn increasing_series_moves_right_and_up(
        mut values in prop::collection::vec(-1e6f64..1e6, 1..100),
    ) {
        values.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let points = project(&values, &viewport());

        prop_assert_eq!(points.len(), values.len());
        for pair in points.windows(2) {
            prop_assert!(pair[1].x >= pair[0].x);
            prop_assert!(pair[1].y <= pair[0].y);
        }
    }

    #[test]
    fn projected_points_stay_inside_inner_area(
        values in prop::collection::vec(-1e6f64..1e6, 1..100),
    ) {
        let vp = viewport();
        for point in project(&values, &vp) {
            prop_assert!(point.x >= vp.padding_x - 0.01);
            prop_assert!(point.x <= vp.width - vp.padding_x + 0.01);
            prop_assert!(point.y >= vp.padding_y - 0.01);
            prop_assert!(point.y <= vp.height - vp.padding_y + 0.01);
        }
    }

    #[test]
    fn smooth_path_has_one_segment_per_point(
        values in prop::collection::vec(0.0f64..500.0, 3..60),
    ) {
        let points = project(&values, &viewport());
        let path = smooth_path(&points, SmoothingProfile::Balance);

        prop_assert_eq!(path.len(), points.len());
        prop_assert_eq!(path.commands()[0], PathCommand::MoveTo(points[0].x, points[0].y));
        for (cmd, point) in path.commands()[1..].iter().zip(&points[1..]) {
            match cmd {
                PathCommand::CubicTo { to, .. } => prop_assert_eq!(*to, (point.x, point.y)),
                other => prop_assert!(false, "unexpected command {:?}", other),
            }
        }
    }

    #[test]
    fn area_closes_line(values in prop::collection::vec(0.0f64..500.0, 2..60)) {
        let vp = viewport();
        let line = smooth_path(&project(&values, &vp), SmoothingProfile::Sparkline);
        let area = area_path(&line, &vp);

        prop_assert_eq!(area.len(), line.len() + 3);
        prop_assert_eq!(area.commands().last(), Some(&PathCommand::Close));
    }

    #[test]
    fn hit_test_returns_closest_x(
        values in prop::collection::vec(0.0f64..500.0, 1..60),
        x in 0.0f64..375.0,
    ) {
        let points = project(&values, &viewport());
        let hit = nearest_point(&points, x).unwrap();
        let best = (hit.point.x - x).abs();
        for point in &points {
            prop_assert!(best <= (point.x - x).abs());
        }
        prop_assert_eq!(hit.value, values[hit.index]);
    }
}

#[test]
fn test_flat_series_sits_on_bottom_edge() {
    let vp = viewport();
    let points = project(&[42.0; 5], &vp);
    assert!(points.iter().all(|p| p.y == vp.height - vp.padding_y));
}

#[test]
fn test_svg_output_for_small_series() {
    let vp = Viewport::unpadded(100.0, 50.0);
    let line = smooth_path(&project(&[1.0, 2.0], &vp), SmoothingProfile::Sparkline);
    assert_eq!(line.to_string(), "M 0,50 L 100,0");
}
