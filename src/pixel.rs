/// An integer pixel coordinate.
///
/// The snake moves a whole number of pixels per frame, and every collision
/// test goes through tile-sized integer boxes, so integer pixels capture the
/// full sub-tile motion without any floating point.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct PixelPos {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

impl PixelPos {
    pub(crate) const fn new(x: i32, y: i32) -> PixelPos {
        PixelPos { x, y }
    }

    /// Return this position displaced by `(dx, dy)` pixels.
    pub(crate) fn shifted(self, dx: i32, dy: i32) -> PixelPos {
        PixelPos {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Return the `(column, row)` of the tile covering this position.
    /// Negative pixel coordinates map to negative tile coordinates rather
    /// than wrapping.
    pub(crate) fn tile(self, tile_size: i32) -> (i32, i32) {
        (self.x.div_euclid(tile_size), self.y.div_euclid(tile_size))
    }
}

/// Do the `size`-square axis-aligned boxes anchored at `a` and `b` overlap?
/// The test is strict: boxes that merely share an edge do not collide.
pub(crate) fn boxes_overlap(a: PixelPos, b: PixelPos, size: i32) -> bool {
    a.x < b.x + size && b.x < a.x + size && a.y < b.y + size && b.y < a.y + size
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(PixelPos::new(0, 0), (0, 0))]
    #[case(PixelPos::new(15, 15), (0, 0))]
    #[case(PixelPos::new(16, 15), (1, 0))]
    #[case(PixelPos::new(50, 144), (3, 9))]
    #[case(PixelPos::new(-1, 0), (-1, 0))]
    #[case(PixelPos::new(-16, -17), (-1, -2))]
    fn tile_of_pixel(#[case] pos: PixelPos, #[case] tile: (i32, i32)) {
        assert_eq!(pos.tile(16), tile);
    }

    #[rstest]
    #[case(PixelPos::new(0, 0), PixelPos::new(15, 0), true)]
    #[case(PixelPos::new(0, 0), PixelPos::new(16, 0), false)]
    #[case(PixelPos::new(0, 0), PixelPos::new(0, 16), false)]
    #[case(PixelPos::new(50, 144), PixelPos::new(48, 144), true)]
    #[case(PixelPos::new(50, 144), PixelPos::new(40, 130), true)]
    #[case(PixelPos::new(0, 0), PixelPos::new(17, 3), false)]
    #[case(PixelPos::new(20, 20), PixelPos::new(5, 5), true)]
    fn overlap(#[case] a: PixelPos, #[case] b: PixelPos, #[case] expected: bool) {
        assert_eq!(boxes_overlap(a, b, 16), expected);
        assert_eq!(boxes_overlap(b, a, 16), expected);
    }

    #[test]
    fn shifted() {
        assert_eq!(PixelPos::new(48, 144).shifted(2, 0), PixelPos::new(50, 144));
        assert_eq!(PixelPos::new(48, 144).shifted(0, -2), PixelPos::new(48, 142));
    }
}
