//! Loading of router / address-pair input files.

mod file;

pub use file::{parse_router_file, read_router_file, RouterFile};
