#[macro_use]
extern crate log;

pub(crate) mod weekly;
pub use weekly::WeeklyVolumeCalculator;

pub mod helpers;
