use crate::models::bounds::GeoBounds;
use crate::models::view::{
    BACKGROUND_PANE, ContainerSize, Crs, MapView, OUTLINE_PANE, SUBSTRATES_PANE,
};

/// Smallest zoom at which `bounds` fills or exceeds the container.
///
/// At zoom `z` one projected unit spans `2^z` pixels, so the container
/// scale on the more constraining axis is rounded up to the next power of
/// two. A container that has not been laid out yields `-inf`.
pub fn min_zoom(container: ContainerSize, bounds: &GeoBounds) -> f64 {
    let w_scale = container.width / bounds.projected_width();
    let h_scale = container.height / bounds.projected_height();
    w_scale.min(h_scale).log2().ceil()
}

/// Map construction options for a container of the given size.
pub fn init_map_view(bounds: &GeoBounds, container: ContainerSize) -> MapView {
    let min_zoom = min_zoom(container, bounds);
    MapView {
        min_zoom,
        zoom: min_zoom,
        center: bounds.biased_center(),
        crs: Crs::Simple,
        max_bounds: bounds.corners(),
        panes: vec![BACKGROUND_PANE, SUBSTRATES_PANE, OUTLINE_PANE],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::bounds::DEFAULT_BOUNDS;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_min_zoom_matches_formula_for_random_containers() {
        let mut rng = StdRng::seed_from_u64(42);
        let b = DEFAULT_BOUNDS;

        for _ in 0..1_000 {
            let w: f64 = rng.random_range(1.0..4000.0);
            let h: f64 = rng.random_range(1.0..4000.0);
            let expected = (w / b.projected_width())
                .min(h / b.projected_height())
                .log2()
                .ceil();
            assert_eq!(min_zoom(ContainerSize::new(w, h), &b), expected);
        }
    }

    #[test]
    fn test_min_zoom_picks_constraining_axis() {
        // 1000 x 1000 bounds, 500 x 250 container: height constrains (1/4).
        let b = GeoBounds::from((0.0, 0.0, 1000.0, 1000.0));
        assert_eq!(min_zoom(ContainerSize::new(500.0, 250.0), &b), -2.0);
        // A scale just above 1/4 rounds up to -1.
        assert_eq!(min_zoom(ContainerSize::new(500.0, 260.0), &b), -1.0);
    }

    #[test]
    fn test_min_zoom_of_unlaid_container_is_degenerate() {
        let z = min_zoom(ContainerSize::new(0.0, 600.0), &DEFAULT_BOUNDS);
        assert!(z.is_infinite() && z.is_sign_negative());
        assert!(!ContainerSize::new(0.0, 600.0).is_laid_out());
    }

    #[test]
    fn test_init_map_view() {
        let view = init_map_view(&DEFAULT_BOUNDS, ContainerSize::new(1200.0, 800.0));
        assert_eq!(view.zoom, view.min_zoom);
        assert_eq!(
            view.center,
            [(899500.0 + 5500000.0) / 2.0, (7401000.0 + 900000.0) * 0.55]
        );
        assert_eq!(view.crs, Crs::Simple);
        assert_eq!(view.max_bounds, DEFAULT_BOUNDS.corners());

        let z: Vec<(&str, u32)> = view.panes.iter().map(|p| (p.name, p.z_index)).collect();
        assert_eq!(z, vec![("bg", 300), ("substrates", 500), ("outline", 1000)]);
    }
}
