mod map;

use crate::map::HexMap;

use anyhow::{ anyhow, Context };
use hexmath::geo::{ HexSize, PixelCoord };
use log::{ info, warn, LevelFilter };
use nalgebra::Point2;
use simple_logger::SimpleLogger;
use structopt::StructOpt;

use std::path::PathBuf;
use std::process;
use std::str::FromStr;

/// Render a hexagonal map as an SVG and resolve pointer positions on it.
#[derive(Debug, StructOpt)]
#[structopt(name = "hexmap")]
struct Opt {
    /// Radius of the map around the starting camp, in cells.
    #[structopt(short, long, default_value = "5")]
    radius: u16,

    /// Distance from the center of a hexagon to its corners, in pixels.
    #[structopt(short, long, default_value = "60")]
    size: f64,

    /// The SVG file to write.
    #[structopt(short, long, default_value = "map.svg", parse(from_os_str))]
    output: PathBuf,

    /// Pointer positions `x,y` on the rendered map, relative to the
    /// center of the starting camp, to resolve to cells. May be repeated.
    /// Write negative positions as `--pick=-10,5`.
    #[structopt(short, long)]
    pick: Vec<Position>,

    /// The logging level. See
    /// https://docs.rs/log/0.4/log/enum.LevelFilter.html for options
    #[structopt(long, default_value = "info")]
    log_level: LevelFilter,
}

#[derive(Debug, Copy, Clone)]
struct Position(PixelCoord);

impl FromStr for Position {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Position> {
        let (x, y) = s.split_once(',')
            .ok_or_else(|| anyhow!("expected x,y but got {:?}", s))?;
        let x = x.trim().parse::<f64>().with_context(|| format!("invalid x in {:?}", s))?;
        let y = y.trim().parse::<f64>().with_context(|| format!("invalid y in {:?}", s))?;
        Ok(Position(Point2::new(x, y)))
    }
}

fn run(opt: Opt) -> anyhow::Result<()> {
    SimpleLogger::new().with_level(opt.log_level).init()?;

    let size = HexSize::new(opt.size).context("invalid --size")?;
    let map = HexMap::new(opt.radius, size);

    let document = map.render();
    info!("Rendered {} cells within radius {}", map.cells().len(), opt.radius);
    svg::save(&opt.output, &document)
        .with_context(|| format!("error writing map to {:?}", &opt.output))?;
    info!("Wrote map to {:?}", &opt.output);

    for Position(p) in opt.pick {
        let pick = map.pick(p)
            .with_context(|| format!("cannot resolve ({}, {})", p.x, p.y))?;
        if pick.on_map {
            info!("({}, {}) -> {} at distance {} from the camp",
                p.x, p.y, pick.cell, pick.distance);
        } else {
            warn!("({}, {}) -> {} is off the map (distance {} > radius {})",
                p.x, p.y, pick.cell, pick.distance, opt.radius);
        }
    }

    Ok(())
}

fn main() {
    let exit_code = match run(Opt::from_args()) {
        Ok(_) => 0,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            1
        }
    };
    process::exit(exit_code);
}
