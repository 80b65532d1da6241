//!
//! benchmark toolkit for the maximum common induced subgraph problem
//!
//! * generate graph-pair instances with ground truth embedded by
//!   construction (`instances`)
//! * validate candidate vertex mappings under the induced-subgraph
//!   condition (`validate`)
//!
pub mod common;
pub mod components;
pub mod graph;
pub mod instances;
pub mod io;
pub mod mapping;
pub mod prelude;
pub mod random_graph;
pub mod validate;
