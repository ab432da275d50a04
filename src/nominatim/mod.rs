pub mod client;

mod reverse;
mod search;

pub use client::{NominatimError, new_client};
pub use reverse::reverse;
pub use search::search;
