//!
//! globally-available parts
//!
pub use crate::common::{GraphSide, VertexId};
pub use crate::graph::Graph;
pub use crate::mapping::Mapping;
pub use crate::validate::{validate, ValidationError};
pub use rand_xoshiro::Xoshiro256PlusPlus;
