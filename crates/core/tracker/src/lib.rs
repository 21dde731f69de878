#[macro_use]
extern crate log;

#[macro_use]
extern crate lantern_result;

mod classify;
mod tracker;

pub use classify::*;
pub use tracker::*;

#[cfg(test)]
mod test;
