//! Regions of a grid around a center cell.

use super::*;

use either::Either;

use std::cmp::{ max, min };

/// The number of cells that are within the given range.
pub fn num_in_range(r: u16) -> usize {
    num_in_ring(r) * (r as usize + 1) / 2 + 1
}

/// The number of cells in the ring of a given radius.
pub fn num_in_ring(r: u16) -> usize {
    6 * (r as usize)
}

/// The cells that are within the given range, i.e. a hexagon-shaped
/// region of radius `r` around `center`. Cells are ordered by `q`,
/// then by `r`.
pub fn range(center: HexCoord, r: u16) -> impl ExactSizeIterator<Item=HexCoord> + Clone {
    let q_end   = r as i32;
    let q_start = -q_end;
    let iter = (q_start ..= q_end).flat_map(move |q| {
        let r_start = max(q_start, -q - q_end);
        let r_end   = min(q_end,   -q + q_end);
        (r_start ..= r_end).map(move |r| center + HexVec::new(q, r))
    });
    ShapeIter { iter, remaining: num_in_range(r) }
}

/// Iterate over the cells in the ring at a given distance from
/// `center`, starting at the cell of the ring in the given direction
/// from `center` and walking along the ring as per the given `Rotation`.
/// The ring of radius zero is empty.
pub fn ring(center: HexCoord, dir: Direction, rad: u16, rot: Rotation)
        -> impl ExactSizeIterator<Item=HexCoord> {
    if rad == 0 {
        return Either::Left(std::iter::empty::<HexCoord>())
    }
    Either::Right(RingIterator {
        pos: center + dir.vector() * rad as i32,
        start: dir,
        rot,
        radius: rad,
        side: 0,
        step: 0,
    })
}

/// The center, followed by the rings of radius `1 ..= rad` as walked
/// by [`ring`]. Covers the same cells as [`range`].
///
/// [`ring`]: fn.ring.html
/// [`range`]: fn.range.html
pub fn spiral(center: HexCoord, dir: Direction, rad: u16, rot: Rotation)
        -> impl Iterator<Item=HexCoord> {
    let rings = (1 ..= rad).flat_map(move |i| ring(center, dir, i, rot));
    std::iter::once(center).chain(rings)
}

#[derive(Clone)]
struct ShapeIter<I> {
    iter: I,
    remaining: usize,
}

impl<I: Iterator<Item=HexCoord>> Iterator for ShapeIter<I> {
    type Item = HexCoord;

    fn next(&mut self) -> Option<HexCoord> {
        let next = self.iter.next();
        if next.is_some() {
            self.remaining -= 1;
        }
        next
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<I: Iterator<Item=HexCoord>> ExactSizeIterator for ShapeIter<I> {}

/// Walks the six sides of a ring. The side walked from the cell in
/// direction `d` of the center runs along `d` rotated by 120 degrees.
struct RingIterator {
    pos: HexCoord,
    start: Direction,
    rot: Rotation,
    radius: u16,
    side: u16,
    step: u16,
}

impl Iterator for RingIterator {
    type Item = HexCoord;

    fn next(&mut self) -> Option<HexCoord> {
        if self.side >= 6 {
            return None
        }
        let pos = self.pos;
        let dir = self.start.rotate(self.rot, 2 + self.side as usize);
        self.pos = pos.neighbour(dir);
        self.step += 1;
        if self.step == self.radius {
            self.step = 0;
            self.side += 1;
        }
        Some(pos)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (6 - self.side as usize) * self.radius as usize
            - self.step as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RingIterator {}
