mod provider;

pub use provider::{IpLocationProvider, LocateError, LocationProvider};
