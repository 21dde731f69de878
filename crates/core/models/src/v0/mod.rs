mod items;
mod seen;

pub use items::*;
pub use seen::*;
