use crate::domain::{Category, ConnectionInfo, Coordinates, Place};

/// Everything that can change the view state. Fetch results carry the
/// generation they were issued for; the store drops results whose generation
/// no longer matches.
#[derive(Debug)]
pub enum Event {
    CategoryChanged(Category),
    LocationAcquired { generation: u64, coordinates: Coordinates },
    LocationFailed { generation: u64 },
    AddressResolved { generation: u64, address: String },
    PlacesFetched { generation: u64, places: Vec<Place> },
    ConnectionChanged(Option<ConnectionInfo>),
}
