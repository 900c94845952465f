#[macro_use]
extern crate log;

pub mod api;
pub use api::{DEFAULT_API_BASE, StravaApiClient, StravaConfig};

mod error;
pub use error::{StravaError, StravaResult};

pub mod stats;
pub mod volumes;

mod stravago;
pub use stravago::StravaGo;

pub use stravago_algos as algos;
pub use stravago_types as types;

