pub mod cli;
pub mod config;
pub mod error;
pub mod heat;
pub mod model;
pub mod util;
pub mod window;
