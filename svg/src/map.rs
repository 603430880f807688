use hexmath::geo::{ self, Bounds, HexSize, PixelCoord };
use hexmath::grid::{ self, HexCoord };

use strum::Display;
use svg::node::element::{ Group, Polygon, Text };
use svg::node::{ self, Comment };
use svg::Document;

/// The kinds of terrain a map is seeded with.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Terrain {
    Plains,
    Forest,
    Mountain,
    Water,
    Desert,
    Swamp,
}

impl Terrain {
    const ALL: [Terrain; 6] = [
        Terrain::Plains,
        Terrain::Forest,
        Terrain::Mountain,
        Terrain::Water,
        Terrain::Desert,
        Terrain::Swamp,
    ];

    /// Deterministic terrain for a cell, so that neighbouring cells vary.
    pub fn of(c: HexCoord) -> Terrain {
        let i = (c.q as i64 + 3 * c.r as i64).abs() as usize;
        Terrain::ALL[i % Terrain::ALL.len()]
    }

    fn color(self) -> &'static str {
        match self {
            Terrain::Plains   => "#c8d98b",
            Terrain::Forest   => "#4f7942",
            Terrain::Mountain => "#8b8378",
            Terrain::Water    => "#5b9bd5",
            Terrain::Desert   => "#e3c882",
            Terrain::Swamp    => "#6b7b4f",
        }
    }
}

/// The result of resolving a pointer position on a map.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pick {
    pub point: PixelCoord,
    pub cell: HexCoord,
    /// Steps from the starting camp.
    pub distance: usize,
    /// Whether the cell is part of the map.
    pub on_map: bool,
}

/// A hexagonal map of a given radius around the starting camp at the
/// origin.
#[derive(Copy, Clone, Debug)]
pub struct HexMap {
    radius: u16,
    size: HexSize,
}

impl HexMap {
    pub const START: HexCoord = HexCoord::ORIGIN;

    pub fn new(radius: u16, size: HexSize) -> HexMap {
        HexMap { radius, size }
    }

    pub fn cells(&self) -> impl ExactSizeIterator<Item=HexCoord> {
        grid::range(HexMap::START, self.radius)
    }

    pub fn contains(&self, c: HexCoord) -> bool {
        HexMap::START.distance(c) <= self.radius as usize
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::of(self.cells(), self.size)
            .unwrap_or_else(|| Bounds::hexagon(HexMap::START, self.size))
    }

    /// Resolve a point on the rendered map to the cell under it.
    pub fn pick(&self, point: PixelCoord) -> hexmath::Result<Pick> {
        let cell = geo::pixel_to_hex(point, self.size)?;
        Ok(Pick {
            point,
            cell,
            distance: HexMap::START.distance(cell),
            on_map: self.contains(cell),
        })
    }

    /// Render the map as a flat 2D SVG, one translated hexagon per cell.
    pub fn render(&self) -> Document {
        let b = self.bounds();
        let outline = geo::svg_points(self.size);
        self.cells().fold(
            Document::new()
                .set("viewBox", (b.position.x, b.position.y, b.width, b.height))
                .add(Comment::new(format!("radius {}, size {}", self.radius, self.size.get()))),
            |doc, c| doc.add(self.draw_cell(c, &outline)))
    }

    fn draw_cell(&self, c: HexCoord, outline: &str) -> Group {
        let center = geo::hex_to_pixel(c, self.size);
        let terrain = Terrain::of(c);
        let mut group = Group::new()
            .set("transform", format!("translate({} {})", center.x, center.y))
            .add(Comment::new(format!("{} {}", c, terrain)))
            .add(Polygon::new()
                .set("points", outline)
                .set("fill", terrain.color())
                .set("stroke", "#333333")
                .set("stroke-width", self.size.get() / 30.));
        if c == HexMap::START {
            group = group.add(Text::new()
                .set("text-anchor", "middle")
                .set("dominant-baseline", "middle")
                .set("font-size", self.size.get() / 4.)
                .add(node::Text::new("Starting Camp")));
        }
        group
    }
}
