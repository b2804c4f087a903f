use std::collections::BTreeSet;

use proptest::prelude::*;
use vision_core::vision::blocky::{cell_distance, included_cells};
use vision_core::{Affine, Point, Region};

fn approx(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

fn arb_rectangle() -> impl Strategy<Value = Region> {
    (-50i32..50, -50i32..50, 1i32..40, 1i32..40).prop_map(|(x, y, w, h)| {
        Region::rectangle(f64::from(x), f64::from(y), f64::from(w), f64::from(h))
    })
}

proptest! {
    #[test]
    fn blocky_inclusion_is_monotone(reach in 0i64..2_000, cell_size in 9i64..=350) {
        let cells: BTreeSet<_> = included_cells(reach, cell_size).into_iter().collect();
        for &(x, y) in &cells {
            prop_assert!(cell_distance(x, y, cell_size) <= reach);
            for dx in 1..=x {
                for dy in 1..=y {
                    prop_assert!(cells.contains(&(dx, dy)), "({dx},{dy}) missing below ({x},{y})");
                }
            }
        }
    }

    #[test]
    fn blocky_scan_misses_no_reachable_cell(reach in 0i64..1_000, cell_size in 9i64..=100) {
        let cells: BTreeSet<_> = included_cells(reach, cell_size).into_iter().collect();
        let limit = reach / cell_size + 2;
        for x in 1..=limit {
            for y in 1..=limit {
                let reachable = cell_distance(x, y, cell_size) <= reach;
                prop_assert_eq!(reachable, cells.contains(&(x, y)));
            }
        }
    }

    #[test]
    fn union_area_is_inclusion_exclusion(a in arb_rectangle(), b in arb_rectangle()) {
        let union = a.union(&b).area();
        let overlap = a.intersect(&b).area();
        prop_assert!(approx(union, a.area() + b.area() - overlap, 1e-6));
    }

    #[test]
    fn difference_removes_exactly_the_overlap(a in arb_rectangle(), b in arb_rectangle()) {
        let difference = a.subtract(&b);
        prop_assert!(approx(difference.area(), a.area() - a.intersect(&b).area(), 1e-6));
        prop_assert!(difference.intersect(&b).area() < 1e-6);
    }

    #[test]
    fn rotation_preserves_shape(a in arb_rectangle(), b in arb_rectangle(), degrees in -360i32..360) {
        let shape = a.union(&b);
        let turned = shape.transformed(&Affine::rotation_degrees(f64::from(degrees)));
        prop_assert!(approx(turned.area(), shape.area(), 1e-6));
        let back = turned.transformed(&Affine::rotation_degrees(-f64::from(degrees)));
        prop_assert!(back.approx_eq(&shape));
    }

    #[test]
    fn union_contains_both_operands(a in arb_rectangle(), b in arb_rectangle()) {
        let union = a.union(&b);
        for region in [&a, &b] {
            let center = region.bounds().map(|bounds| bounds.center()).unwrap_or(Point::ORIGIN);
            prop_assert!(union.contains(center));
        }
    }
}
