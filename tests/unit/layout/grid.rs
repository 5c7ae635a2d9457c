//! Tests for the grid collision index

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng, rngs::StdRng};
    use textcloud::layout::canvas::{BoundingBox, Canvas};
    use textcloud::layout::grid::SpatialIndex;

    // Tests the grid covers the canvas with one spare cell per axis
    // Verified by flooring the cell count
    #[test]
    fn test_grid_dimensions() {
        let index = SpatialIndex::new(&Canvas::default(), 64);
        assert_eq!(index.dim(), (14, 24));
        assert!(index.is_empty());

        let degenerate = Canvas::new(0, 0, 0, 0, (1, 1)).unwrap();
        assert_eq!(SpatialIndex::new(&degenerate, 0).dim(), (1, 1));
    }

    // Tests inserted boxes are found by overlapping candidates only
    // Verified by registering boxes in their first cell only
    #[test]
    fn test_insert_and_query() {
        let canvas = Canvas::new(0, 640, 0, 640, (640, 640)).unwrap();
        let mut index = SpatialIndex::new(&canvas, 64);

        let wide = BoundingBox::for_label("abcdefghij", 20, 10, 10);
        assert_eq!(index.insert(wide), 0);
        assert_eq!(index.len(), 1);

        assert_eq!(index.first_overlap(&BoundingBox::for_label("a", 20, 190, 15)), Some(0));
        assert_eq!(index.first_overlap(&BoundingBox::for_label("a", 20, 210, 10)), None);
        assert_eq!(index.first_overlap(&BoundingBox::for_label("a", 20, 10, 30)), None);
    }

    // Tests boxes past the canvas edge are still tracked
    // Verified by discarding out-of-range cells
    #[test]
    fn test_boxes_outside_canvas_are_clamped() {
        let canvas = Canvas::new(0, 100, 0, 100, (100, 100)).unwrap();
        let mut index = SpatialIndex::new(&canvas, 32);

        index.insert(BoundingBox::for_label("abcdef", 50, 80, 90));
        assert!(index.first_overlap(&BoundingBox::for_label("a", 10, 300, 120)).is_some());

        index.insert(BoundingBox::for_label("a", 10, -40, -40));
        assert_eq!(index.first_overlap(&BoundingBox::for_label("a", 10, -35, -35)), Some(1));
    }

    // Tests index queries agree with a pairwise scan
    // Verified by querying only the candidate's first cell
    #[test]
    fn test_matches_pairwise_scan() {
        let canvas = Canvas::default();
        let mut index = SpatialIndex::new(&canvas, 64);
        let mut committed = Vec::new();
        let mut rng = StdRng::seed_from_u64(11);

        let random_box = |rng: &mut StdRng| {
            let len = rng.random_range(1..=8);
            let font: u32 = 16 << rng.random_range(0..3_u32);
            let x = rng.random_range(canvas.min_x..=canvas.max_x);
            let y = rng.random_range(canvas.min_y..=canvas.max_y);
            BoundingBox::for_label(&"w".repeat(len), font, x, y)
        };

        for _ in 0..60 {
            let bbox = random_box(&mut rng);
            if index.first_overlap(&bbox).is_none() {
                index.insert(bbox);
                committed.push(bbox);
            }
        }

        for _ in 0..500 {
            let candidate = random_box(&mut rng);
            let expected = committed.iter().any(|other| other.overlaps(&candidate));
            assert_eq!(index.first_overlap(&candidate).is_some(), expected);
        }
        assert_eq!(index.len(), committed.len());
    }
}
