pub mod activities;
pub mod stats;
pub mod volumes;
