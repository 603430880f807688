//! Hexagonal grids addressed by axial coordinates.

pub mod shape;

pub use self::shape::*;

use crate::error::{ Error, Result };

use nalgebra::Vector2;
use num_traits::cast::FromPrimitive;

use std::fmt;
use std::ops::{ Add, Mul, Neg, Sub };
use std::str::FromStr;

/// Axial displacement vectors to the adjacent cells, indexed by
/// [`Direction`].
///
/// [`Direction`]: enum.Direction.html
const AXIAL_DIR_VECTORS: [[i32; 2]; 6] =
    [ [ 1,  0], [ 0,  1], [-1,  1]
    , [-1,  0], [ 0, -1], [ 1, -1]
    ];

/// Axial coordinates of a hex cell.
///
/// The third cube coordinate `s` is implicit and always satisfies
/// `q + r + s = 0` (see [`HexCoord::s`]).
///
/// Guide: [Axial Coordinates]
///
/// [Axial Coordinates]: https://www.redblobgames.com/grids/hexagons/#coordinates-axial
/// [`HexCoord::s`]: struct.HexCoord.html#method.s
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HexCoord {
    pub q: i32,
    pub r: i32,
}

impl HexCoord {
    pub const ORIGIN: HexCoord = HexCoord { q: 0, r: 0 };

    pub fn new(q: i32, r: i32) -> HexCoord {
        HexCoord { q, r }
    }

    /// The derived cube coordinate.
    pub fn s(&self) -> i32 {
        -self.q - self.r
    }

    /// The number of steps between two cells.
    pub fn distance(&self, other: HexCoord) -> usize {
        ( (self.q - other.q).abs() as usize +
          (self.s() - other.s()).abs() as usize +
          (self.r - other.r).abs() as usize ) / 2
    }

    /// The adjacent cell in the given direction.
    pub fn neighbour(&self, d: Direction) -> HexCoord {
        *self + d.vector()
    }

    /// Iterate over the six adjacent cells, in [`Direction`] order.
    ///
    /// [`Direction`]: enum.Direction.html
    pub fn neighbours(&self) -> impl Iterator<Item=HexCoord> {
        let c = *self;
        HexVec::directions().map(move |v| c + v)
    }
}

/// The distance between two cells, i.e. half the Manhattan distance
/// of their cube coordinates.
pub fn hex_distance(a: HexCoord, b: HexCoord) -> usize {
    a.distance(b)
}

impl fmt::Display for HexCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.q, self.r)
    }
}

/// Parses `q,r` or `(q,r)`, with optional whitespace around each part.
impl FromStr for HexCoord {
    type Err = Error;

    fn from_str(s: &str) -> Result<HexCoord> {
        let err = || Error::ParseCoord(s.to_string());
        let t = s.trim();
        let t = match (t.strip_prefix('('), t.strip_suffix(')')) {
            (Some(_), Some(_)) => &t[1 .. t.len() - 1],
            (None, None) => t,
            _ => return Err(err()),
        };
        let (q, r) = t.split_once(',').ok_or_else(err)?;
        let q = q.trim().parse().map_err(|_| err())?;
        let r = r.trim().parse().map_err(|_| err())?;
        Ok(HexCoord { q, r })
    }
}

/// Fractional cube coordinates, i.e. a point on the plane
/// `q + r + s = 0` that generally lies inside a cell rather than
/// at its center.
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct FractionalHex {
    q: f64,
    r: f64,
    s: f64,
}

impl FractionalHex {
    pub fn new(q: f64, r: f64) -> FractionalHex {
        FractionalHex { q, r, s: -q - r }
    }

    pub fn q(&self) -> f64 { self.q }
    pub fn r(&self) -> f64 { self.r }
    pub fn s(&self) -> f64 { self.s }

    /// Round to the cell containing this point.
    ///
    /// Each component is rounded half away from zero, after which the
    /// component with the largest rounding error is recomputed from the
    /// other two. On equal errors `s` is recomputed in preference to `r`,
    /// and `r` in preference to `q`.
    pub fn round(self) -> HexCoord {
        let (rq, rr, rs) = (self.q.round(), self.r.round(), self.s.round());
        let dq = (rq - self.q).abs();
        let dr = (rr - self.r).abs();
        let ds = (rs - self.s).abs();
        if dq > dr && dq > ds {
            HexCoord::new(-(rr + rs) as i32, rr as i32)
        }
        else if dr > ds {
            HexCoord::new(rq as i32, -(rq + rs) as i32)
        }
        else {
            HexCoord::new(rq as i32, rr as i32)
        }
    }
}

/// Round fractional axial coordinates to the containing cell.
/// See [`FractionalHex::round`].
///
/// [`FractionalHex::round`]: struct.FractionalHex.html#method.round
pub fn hex_round(q: f64, r: f64) -> HexCoord {
    FractionalHex::new(q, r).round()
}

impl From<HexCoord> for FractionalHex {
    fn from(c: HexCoord) -> FractionalHex {
        FractionalHex::new(c.q as f64, c.r as f64)
    }
}

/// The six directions to adjacent cells, in increasing angle from the
/// positive x axis, i.e. clockwise on a screen whose y axis points down.
#[derive(PartialEq, Eq, Hash, Copy, Clone, PartialOrd, Ord)]
#[derive(FromPrimitive, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    SouthEast = 0,
    South     = 1,
    SouthWest = 2,
    NorthWest = 3,
    North     = 4,
    NorthEast = 5,
}

impl Direction {
    pub fn all() -> impl DoubleEndedIterator<Item=Direction> + Clone {
        (0 .. 6).filter_map(Direction::from_u8)
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn vector(self) -> HexVec {
        HexVec(Vector2::from(AXIAL_DIR_VECTORS[self.index()]))
    }

    /// The direction `n` steps of 60 degrees away in the given rotation.
    pub fn rotate(self, rot: Rotation, n: usize) -> Direction {
        let i = match rot {
            Rotation::CW  => self.index() + n % 6,
            Rotation::CCW => self.index() + 6 - n % 6,
        };
        match Direction::from_usize(i % 6) {
            Some(d) => d,
            None => unreachable!("direction index is reduced modulo 6"),
        }
    }

    pub fn opposite(self) -> Direction {
        self.rotate(Rotation::CW, 3)
    }
}

/// Sense of rotation on the screen, whose y axis points down.
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum Rotation {
    CW,
    CCW,
}

impl Rotation {
    pub fn reverse(self) -> Rotation {
        match self {
            Rotation::CW  => Rotation::CCW,
            Rotation::CCW => Rotation::CW,
        }
    }
}

/// A displacement between cells in axial coordinates.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct HexVec(pub(crate) Vector2<i32>);

impl HexVec {
    pub fn new(q: i32, r: i32) -> HexVec {
        HexVec(Vector2::new(q, r))
    }

    pub fn q(&self) -> i32 { self.0.x }
    pub fn r(&self) -> i32 { self.0.y }

    pub fn directions() -> impl DoubleEndedIterator<Item=HexVec> + Clone {
        AXIAL_DIR_VECTORS.iter().map(|v| HexVec(Vector2::from(*v)))
    }
}

impl Add<HexVec> for HexCoord {
    type Output = HexCoord;

    fn add(self, v: HexVec) -> HexCoord {
        HexCoord::new(self.q + v.q(), self.r + v.r())
    }
}

impl Sub<HexCoord> for HexCoord {
    type Output = HexVec;

    fn sub(self, other: HexCoord) -> HexVec {
        HexVec::new(self.q - other.q, self.r - other.r)
    }
}

impl Sub<HexVec> for HexCoord {
    type Output = HexCoord;

    fn sub(self, v: HexVec) -> HexCoord {
        self + (-v)
    }
}

impl Add<HexVec> for HexVec {
    type Output = HexVec;

    fn add(self, other: HexVec) -> HexVec {
        HexVec(self.0 + other.0)
    }
}

impl Neg for HexVec {
    type Output = HexVec;

    fn neg(self) -> HexVec {
        HexVec(-self.0)
    }
}

impl Mul<i32> for HexVec {
    type Output = HexVec;

    fn mul(self, s: i32) -> HexVec {
        HexVec(self.0 * s)
    }
}
