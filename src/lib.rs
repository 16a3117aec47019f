#[macro_use] extern crate derive_more;

pub use banner::{Banner, Class, Shape, HEIGHT, RADIUS};
pub use error::{Error, ErrorConversion, Result};

pub mod banner;
pub mod basic;
pub mod error;
pub mod paint;
pub mod projection;
pub mod rendering;
pub mod topology;
