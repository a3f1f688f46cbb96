pub mod info;
pub mod request;
pub mod transform;

pub use info::*;
pub use request::*;
pub use transform::*;
