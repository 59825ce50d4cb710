use super::direction::Direction;
use crate::consts;
use crate::pixel::{boxes_overlap, PixelPos};

/// The role a segment plays in the chain.  The first segment is always the
/// head and the last the tail; everything between is body.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum SegmentRole {
    Head,
    Body,
    Tail,
}

/// One unit of the snake: a pixel position plus its role tag.  Each segment
/// occupies a tile-sized bounding box anchored at its position.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Segment {
    pub(crate) pos: PixelPos,
    pub(crate) role: SegmentRole,
}

/// Snake state.
///
/// The snake moves continuously in pixels rather than snapping to the grid:
/// each frame, every trailing segment takes the position the segment ahead
/// of it held on the previous frame, and the head moves
/// [`SNAKE_SPEED`][consts::SNAKE_SPEED] pixels along the current heading.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snake {
    /// The segment chain, head first.  Never shrinks and never has fewer
    /// than three entries.
    pub(super) segments: Vec<Segment>,

    /// The direction in which the snake is currently traveling
    pub(super) heading: Direction,

    tile_size: i32,
}

impl Snake {
    /// Create a new snake heading east with its head at `spawn` and a body
    /// and tail segment trailing one tile apart behind it.
    pub(crate) fn new(spawn: PixelPos, tile_size: i32) -> Snake {
        Snake {
            segments: vec![
                Segment {
                    pos: spawn,
                    role: SegmentRole::Head,
                },
                Segment {
                    pos: spawn.shifted(-tile_size, 0),
                    role: SegmentRole::Body,
                },
                Segment {
                    pos: spawn.shifted(-tile_size * 2, 0),
                    role: SegmentRole::Tail,
                },
            ],
            heading: Direction::East,
            tile_size,
        }
    }

    /// Return the pixel position of the snake's head
    pub(crate) fn head(&self) -> PixelPos {
        self.segments[0].pos
    }

    /// Return the ordered segment chain, head first
    pub(crate) fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub(crate) fn len(&self) -> usize {
        self.segments.len()
    }

    /// Return the glyph to use for drawing the snake's head
    pub(crate) fn head_symbol(&self) -> char {
        match self.heading {
            Direction::North => consts::SNAKE_HEAD_NORTH_SYMBOL,
            Direction::South => consts::SNAKE_HEAD_SOUTH_SYMBOL,
            Direction::East => consts::SNAKE_HEAD_EAST_SYMBOL,
            Direction::West => consts::SNAKE_HEAD_WEST_SYMBOL,
        }
    }

    /// Change the snake's heading.  A turn straight back into the snake's
    /// own neck is ignored; anything else takes effect immediately, so when
    /// several turns arrive within one frame the last one wins.
    pub(crate) fn turn(&mut self, heading: Direction) {
        if heading != self.heading.reverse() {
            self.heading = heading;
        }
    }

    /// Move the snake forwards one frame: shift every trailing segment to
    /// the position of the segment ahead of it, then advance the head.
    pub(crate) fn advance(&mut self) {
        let (dx, dy) = self.heading.delta();
        let new_head = self.segments[0]
            .pos
            .shifted(dx * consts::SNAKE_SPEED, dy * consts::SNAKE_SPEED);
        for i in (1..self.segments.len()).rev() {
            self.segments[i].pos = self.segments[i - 1].pos;
        }
        self.segments[0].pos = new_head;
        self.retag();
    }

    /// Append a segment coincident with the current tail in response to
    /// eating a fruit.  The next `advance` pulls it apart from the tail, so
    /// the growth never pops into view ahead of where the tail was.
    pub(crate) fn grow(&mut self) {
        let tail = self.segments[self.segments.len() - 1];
        self.segments.push(Segment {
            pos: tail.pos,
            role: SegmentRole::Body,
        });
        self.retag();
    }

    /// Does the head's bounding box overlap any other segment's box?
    ///
    /// The follow chain spaces trailing segments only `SNAKE_SPEED` pixels
    /// apart, so the head box permanently overlaps the segments right
    /// behind it; the scan skips every segment that trails the head by
    /// less than one tile-length.
    pub(crate) fn hits_self(&self) -> bool {
        let head = self.segments[0].pos;
        self.segments
            .iter()
            .skip(self.follow_clearance())
            .any(|seg| boxes_overlap(head, seg.pos, self.tile_size))
    }

    /// Number of leading chain entries excluded from the self-collision
    /// scan (those within one tile-length of the head along the chain).
    fn follow_clearance(&self) -> usize {
        usize::try_from(self.tile_size / consts::SNAKE_SPEED)
            .unwrap_or(1)
            .max(1)
    }

    fn retag(&mut self) {
        let last = self.segments.len() - 1;
        for (i, seg) in self.segments.iter_mut().enumerate() {
            seg.role = if i == 0 {
                SegmentRole::Head
            } else if i == last {
                SegmentRole::Tail
            } else {
                SegmentRole::Body
            };
        }
    }
}
