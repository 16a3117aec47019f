use crate::basic::LatticePoint;
use std::fmt::{Debug, Error, Formatter};

/// A shared boundary segment: an absolute start point plus a relative delta.
/// Each interior edge of the tiling is stored once and referenced by both
/// cells that border it.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Arc {
    pub start: LatticePoint,
    pub delta: LatticePoint,
}

impl Arc {
    pub fn new(start: LatticePoint, delta: LatticePoint) -> Self {
        Self { start, delta }
    }

    pub fn first(self) -> LatticePoint {
        self.start
    }

    pub fn last(self) -> LatticePoint {
        self.start + self.delta
    }

    /// Endpoints in traversal order
    pub fn points(self, reversed: bool) -> [LatticePoint; 2] {
        if reversed {
            [self.last(), self.first()]
        } else {
            [self.first(), self.last()]
        }
    }
}

/// Index into the arc arena with the winding direction encoded in the sign:
/// a negative raw value `r` means arc `!r` traversed in reverse.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct ArcRef(i32);

impl ArcRef {
    pub fn forward(index: i32) -> Self {
        Self(index)
    }

    pub fn reversed(index: i32) -> Self {
        Self(!index)
    }

    pub fn raw(self) -> i32 {
        self.0
    }

    pub fn is_reversed(self) -> bool {
        self.0 < 0
    }

    /// The referenced arena index, winding stripped
    pub fn index(self) -> i32 {
        if self.0 < 0 {
            !self.0
        } else {
            self.0
        }
    }
}

impl Debug for ArcRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        if self.is_reversed() {
            write!(f, "~{}", self.index())
        } else {
            write!(f, "{}", self.index())
        }
    }
}

#[test]
fn test_arc_ref_encoding() {
    for index in [0, 1, 7, 1000] {
        assert_eq!(ArcRef::forward(index).index(), index);
        assert!(!ArcRef::forward(index).is_reversed());
        assert_eq!(ArcRef::reversed(index).index(), index);
        assert!(ArcRef::reversed(index).is_reversed());
    }
    // reversing a negative index yields a forward reference, matching the
    // one's-complement arithmetic of the generator
    assert_eq!(ArcRef::reversed(-4).raw(), 3);
    assert!(!ArcRef::reversed(-4).is_reversed());
}

#[test]
fn test_arc_traversal_order() {
    let arc = Arc::new(LatticePoint::new(2, -1), LatticePoint::new(-1, 1));
    assert_eq!(
        arc.points(false),
        [LatticePoint::new(2, -1), LatticePoint::new(1, 0)]
    );
    assert_eq!(
        arc.points(true),
        [LatticePoint::new(1, 0), LatticePoint::new(2, -1)]
    );
}
