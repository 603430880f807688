//! Geometry of regular hexagons in a 2d cartesian (pixel) coordinate
//! system whose origin is the center of the cell `(0,0)`.
//!
//! Hexagons have a corner on the positive x axis, so cells of equal `r`
//! form a diagonal and cells of equal `q` form a vertical column.

use crate::error::{ Error, Result };
use crate::grid::{ FractionalHex, HexCoord };

use log::{ debug, trace };
use nalgebra::geometry::Point2;

use std::convert::TryFrom;

/// A point on the rendering surface.
pub type PixelCoord = Point2<f64>;

/// The default distance from the center of a hexagon to its corners.
pub const DEFAULT_SIZE: f64 = 60.0;

/// The angle (in radians) between adjacent corners of a hexagon,
/// as seen from its center.
pub const ANGLE_RADIANS: f64 = std::f64::consts::FRAC_PI_3;

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// The size of a hexagon, i.e. the distance from its center to any of
/// its corners, which equals its side length. Always finite and
/// strictly positive.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub struct HexSize(f64);

impl HexSize {
    pub fn new(size: f64) -> Result<HexSize> {
        if size.is_finite() && size > 0.0 {
            Ok(HexSize(size))
        } else {
            debug!("Rejecting hex size {}", size);
            Err(Error::InvalidSize(size))
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }

    /// Corner to corner.
    pub fn width(self) -> f64 {
        2.0 * self.0
    }

    /// Side to side.
    pub fn height(self) -> f64 {
        SQRT_3 * self.0
    }

    /// The horizontal distance between the centers of adjacent columns.
    pub fn horizontal_spacing(self) -> f64 {
        1.5 * self.0
    }

    /// The vertical distance between the centers of adjacent cells
    /// in a column.
    pub fn vertical_spacing(self) -> f64 {
        SQRT_3 * self.0
    }
}

impl Default for HexSize {
    fn default() -> HexSize {
        HexSize(DEFAULT_SIZE)
    }
}

impl TryFrom<f64> for HexSize {
    type Error = Error;

    fn try_from(size: f64) -> Result<HexSize> {
        HexSize::new(size)
    }
}

impl From<HexSize> for f64 {
    fn from(HexSize(s): HexSize) -> f64 { s }
}

/// Compute the center of a cell, satisfying
/// ```ignore
/// hex_to_pixel(HexCoord::ORIGIN, s) == Point2::origin()
/// ```
/// for every size `s`.
pub fn hex_to_pixel(c: HexCoord, size: HexSize) -> PixelCoord {
    let (q, r, s) = (c.q as f64, c.r as f64, size.0);
    let x = s * 1.5 * q;
    let y = s * (SQRT_3 / 2.0 * q + SQRT_3 * r);
    Point2::new(x, y)
}

/// Compute the cell containing a point, i.e. the cell whose center is
/// nearest to it, satisfying
/// ```ignore
/// pixel_to_hex(hex_to_pixel(c, s), s) == Ok(c)
/// ```
/// for any cell `c` and size `s`.
pub fn pixel_to_hex(p: PixelCoord, size: HexSize) -> Result<HexCoord> {
    if !(p.x.is_finite() && p.y.is_finite()) {
        debug!("Rejecting non-finite point ({}, {})", p.x, p.y);
        return Err(Error::NonFinitePoint { x: p.x, y: p.y })
    }
    let q = (2.0 / 3.0 * p.x) / size.0;
    let r = (-1.0 / 3.0 * p.x + SQRT_3 / 3.0 * p.y) / size.0;
    let c = FractionalHex::new(q, r).round();
    trace!("Resolved ({}, {}) to {}", p.x, p.y, c);
    Ok(c)
}

/// The corners of a hexagon centered at the origin. Corner `i` lies at
/// an angle of `60 * i` degrees from the positive x axis, i.e. the
/// corners run clockwise on a screen whose y axis points down.
pub fn hex_corners(size: HexSize) -> [PixelCoord; 6] {
    [ corner(size, 0)
    , corner(size, 1)
    , corner(size, 2)
    , corner(size, 3)
    , corner(size, 4)
    , corner(size, 5)
    ]
}

fn corner(size: HexSize, i: u8) -> PixelCoord {
    let angle_rad = ANGLE_RADIANS * i as f64;
    let x = size.0 * angle_rad.cos();
    let y = size.0 * angle_rad.sin();
    Point2::new(x, y)
}

/// The corners of [`hex_corners`] as the value of an SVG `points`
/// attribute, e.g. `"60,0 30,51.96... ..."`.
///
/// [`hex_corners`]: fn.hex_corners.html
pub fn svg_points(size: HexSize) -> String {
    hex_corners(size).iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

/// An axis-aligned rectangle on the rendering surface.
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct Bounds {
    /// The top-left corner.
    pub position: PixelCoord,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    /// The bounds of the hexagon of a single cell.
    pub fn hexagon(c: HexCoord, size: HexSize) -> Bounds {
        let center = hex_to_pixel(c, size);
        Bounds {
            position: Point2::new(
                center.x - size.width() / 2.,
                center.y - size.height() / 2.),
            width: size.width(),
            height: size.height(),
        }
    }

    /// The smallest bounds enclosing the hexagons of all given cells,
    /// or `None` if there are none.
    pub fn of<I>(cells: I, size: HexSize) -> Option<Bounds>
    where I: IntoIterator<Item=HexCoord> {
        cells.into_iter()
            .map(|c| Bounds::hexagon(c, size))
            .fold(None, |acc, b| match acc {
                None => Some(b),
                Some(a) => Some(a.union(&b)),
            })
    }

    pub fn union(&self, other: &Bounds) -> Bounds {
        let min_x = f64::min(self.position.x, other.position.x);
        let min_y = f64::min(self.position.y, other.position.y);
        let max_x = f64::max(self.position.x + self.width, other.position.x + other.width);
        let max_y = f64::max(self.position.y + self.height, other.position.y + other.height);
        Bounds {
            position: Point2::new(min_x, min_y),
            width: max_x - min_x,
            height: max_y - min_y,
        }
    }

    pub fn contains(&self, p: PixelCoord) -> bool {
        self.position.x <= p.x && p.x <= self.position.x + self.width &&
        self.position.y <= p.y && p.y <= self.position.y + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::*;
    use assert_approx_eq::assert_approx_eq;
    use nalgebra::distance;
    use quickcheck::*;
    use rand::Rng;

    impl Arbitrary for HexSize {
        fn arbitrary<G: Gen>(g: &mut G) -> HexSize {
            HexSize(g.gen_range(0.5, 512.0))
        }
    }

    fn size(s: f64) -> HexSize {
        HexSize::new(s).unwrap()
    }

    #[test]
    fn test_hex_to_pixel_example() {
        let p = hex_to_pixel(HexCoord::new(1, 0), size(60.));
        assert_approx_eq!(p.x, 90.0);
        assert_approx_eq!(p.y, 60.0 * 3f64.sqrt() / 2.0);
        assert_approx_eq!(p.y, 51.961_524_227_066_32);
    }

    #[test]
    fn test_default_size() {
        assert_eq!(HexSize::default().get(), DEFAULT_SIZE);
        assert_eq!(HexSize::default(), size(60.));
    }

    #[test]
    fn test_invalid_size() {
        for s in &[0.0, -1.0, std::f64::NAN, std::f64::INFINITY, std::f64::NEG_INFINITY] {
            match HexSize::new(*s) {
                Err(Error::InvalidSize(_)) => {}
                other => panic!("expected invalid size for {}, got {:?}", s, other),
            }
        }
        assert!(HexSize::try_from(1e-9).is_ok());
    }

    #[test]
    fn test_pixel_to_hex_non_finite() {
        let s = HexSize::default();
        match pixel_to_hex(Point2::new(std::f64::NAN, 1.0), s) {
            Err(Error::NonFinitePoint { x, y }) => {
                assert!(x.is_nan());
                assert_eq!(y, 1.0);
            }
            other => panic!("expected non-finite point, got {:?}", other),
        }
        assert_eq!(
            pixel_to_hex(Point2::new(0.0, std::f64::INFINITY), s),
            Err(Error::NonFinitePoint { x: 0.0, y: std::f64::INFINITY }));
    }

    #[test]
    fn test_pixel_to_hex_examples() {
        let s = size(60.);
        assert_eq!(pixel_to_hex(Point2::new(0.0, 0.0), s), Ok(HexCoord::ORIGIN));
        assert_eq!(pixel_to_hex(Point2::new(85.0, 50.0), s), Ok(HexCoord::new(1, 0)));
        assert_eq!(pixel_to_hex(Point2::new(0.0, 100.0), s), Ok(HexCoord::new(0, 1)));
        assert_eq!(pixel_to_hex(Point2::new(-95.0, -45.0), s), Ok(HexCoord::new(-1, 0)));
        // Just inside the corner on the positive x axis.
        assert_eq!(pixel_to_hex(Point2::new(59.0, 0.0), s), Ok(HexCoord::ORIGIN));
    }

    #[test]
    fn test_corners_example() {
        let cs = hex_corners(size(60.));
        assert_approx_eq!(cs[0].x, 60.0);
        assert_approx_eq!(cs[0].y, 0.0);
        assert_approx_eq!(cs[1].x, 30.0);
        assert_approx_eq!(cs[1].y, 51.961_524_227_066_32);
        assert_approx_eq!(cs[3].x, -60.0);
        assert_approx_eq!(cs[4].y, -51.961_524_227_066_32);
    }

    #[test]
    fn test_svg_points() {
        let pts = svg_points(size(2.));
        let pairs = pts.split(' ').collect::<Vec<_>>();
        assert_eq!(pairs.len(), 6);
        assert_eq!(pairs[0], "2,0");
        for (pair, c) in pairs.iter().zip(hex_corners(size(2.)).iter()) {
            let (x, y) = pair.split_at(pair.find(',').unwrap());
            assert_approx_eq!(x.parse::<f64>().unwrap(), c.x);
            assert_approx_eq!(y[1..].parse::<f64>().unwrap(), c.y);
        }
    }

    #[test]
    fn test_bounds_of() {
        let s = size(10.);
        assert_eq!(Bounds::of(std::iter::empty::<HexCoord>(), s), None);
        let one = Bounds::of(vec![HexCoord::ORIGIN], s).unwrap();
        assert_approx_eq!(one.position.x, -10.0);
        assert_approx_eq!(one.width, 20.0);
        assert_approx_eq!(one.height, s.height());
        let map = Bounds::of(range(HexCoord::ORIGIN, 2), s).unwrap();
        // Two columns to either side, plus half a hexagon.
        assert_approx_eq!(map.width, 4.0 * s.horizontal_spacing() + s.width());
        assert_approx_eq!(map.height, 5.0 * s.vertical_spacing());
        assert_approx_eq!(map.position.x, -map.width / 2.0);
        assert_approx_eq!(map.position.y, -map.height / 2.0);
    }

    #[test]
    fn prop_to_pixel_origin() {
        fn prop(s: HexSize) -> bool {
            hex_to_pixel(HexCoord::ORIGIN, s) == Point2::origin()
        }
        quickcheck(prop as fn(_) -> _);
    }

    #[test]
    fn prop_from_to_pixel_identity() {
        fn prop(c: HexCoord, s: HexSize) -> bool {
            pixel_to_hex(hex_to_pixel(c, s), s) == Ok(c)
        }
        quickcheck(prop as fn(_,_) -> _);
    }

    #[test]
    fn prop_to_pixel_injective() {
        fn prop(a: HexCoord, b: HexCoord, s: HexSize) -> bool {
            a == b || hex_to_pixel(a, s) != hex_to_pixel(b, s)
        }
        quickcheck(prop as fn(_,_,_) -> _);
    }

    #[test]
    fn prop_neighbour_spacing() {
        fn prop(c: HexCoord, d: Direction, s: HexSize) -> bool {
            let a = hex_to_pixel(c, s);
            let b = hex_to_pixel(c.neighbour(d), s);
            (distance(&a, &b) - s.height()).abs() <= 1e-9 * s.get() * (1.0 + a.coords.norm() / s.get())
        }
        quickcheck(prop as fn(_,_,_) -> _);
    }

    /// The resolved cell has the nearest center among itself and its
    /// neighbours, i.e. resolution follows the hexagonal partition.
    #[test]
    fn prop_nearest_center() {
        fn prop(c: HexCoord, s: HexSize) -> bool {
            let mut g = rand::thread_rng();
            let center = hex_to_pixel(c, s);
            let p = Point2::new(
                center.x + g.gen_range(-1.0, 1.0) * s.get(),
                center.y + g.gen_range(-1.0, 1.0) * s.get());
            let h = match pixel_to_hex(p, s) {
                Ok(h) => h,
                Err(_) => return false,
            };
            let eps = 1e-9 * (s.get() + center.coords.norm());
            let d = distance(&p, &hex_to_pixel(h, s));
            h.neighbours().all(|n| d <= distance(&p, &hex_to_pixel(n, s)) + eps)
        }
        quickcheck(prop as fn(_,_) -> _);
    }

    #[test]
    fn prop_corners() {
        fn prop(s: HexSize) -> bool {
            let cs = hex_corners(s);
            cs.len() == 6
                && cs.iter().all(|p| (distance(&Point2::origin(), p) - s.get()).abs() <= 1e-9 * s.get())
                && cs.iter().zip(cs.iter().cycle().skip(1))
                     .all(|(a, b)| (distance(a, b) - s.get()).abs() <= 1e-9 * s.get())
        }
        quickcheck(prop as fn(_) -> _);
    }

    #[test]
    fn prop_bounds_contain_centers() {
        fn prop(c: HexCoord, r: u8, s: HexSize) -> bool {
            let r = (r % 16) as u16;
            match Bounds::of(range(c, r), s) {
                Some(b) => range(c, r).all(|x| b.contains(hex_to_pixel(x, s))),
                None => false,
            }
        }
        quickcheck(prop as fn(_,_,_) -> _);
    }
}
