// cargo watch -x 'fmt' -x 'run -- src/tests/test_data/example1.json'

pub mod cli;
pub mod config;
pub mod input;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

pub use models::{ipv4_to_value, network_of, subnet_mask_value, value_to_ipv4, FormatError};
pub use processing::{find_router, same_subnet};
