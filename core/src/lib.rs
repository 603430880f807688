//! Axial hex grid geometry for hexagonal campaign maps: projecting cells
//! into pixel space for rendering and resolving pixel positions back to
//! cells for pointer interaction.

#[macro_use]
extern crate num_derive;

pub mod error;
pub mod geo;
pub mod grid;

pub use crate::error::{ Error, Result };
