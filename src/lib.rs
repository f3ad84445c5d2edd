extern crate regex;
extern crate roxmltree;
extern crate RustedSciThe;
#[macro_use]
extern crate lazy_static;
pub mod error;
mod transform;
mod svgxml;
mod carray;
pub mod symbolic;
pub mod sena;
pub use error::{SvgError, SymbolicError, TransformError};
pub use transform::{F64Point, Transform, compose, ftransform, parse_transform};
pub use svgxml::{SVG_NAMESPACE, combined_transform, load_circles, parse_circles};
pub use carray::{c_arrays, write_c_arrays};
pub use sena::SenaParams;
