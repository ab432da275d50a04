use crate::domain::events::Event;
use crate::domain::{Category, ConnectionStatus, Coordinates, Place};
use tokio::sync::mpsc::Receiver;
use tokio::sync::watch::{self, Receiver as WatchReceiver, Sender as WatchSender};
use tracing::{debug, info, instrument};

/// The complete view state. Only the store's reducer writes to it; everyone
/// else observes immutable snapshots.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewSnapshot {
    pub generation: u64,
    pub category: Category,
    pub location: Option<Coordinates>,
    pub places: Vec<Place>,
    pub address: String,
    pub loading: bool,
    pub connection: ConnectionStatus,
}

impl ViewSnapshot {
    pub fn initial() -> Self {
        ViewSnapshot {
            generation: 0,
            category: Category::default(),
            location: None,
            places: Vec::new(),
            address: String::new(),
            loading: true,
            connection: ConnectionStatus::Unknown,
        }
    }
}

#[derive(Debug)]
pub struct Store {
    state: ViewSnapshot,
    rx: Receiver<Event>,
    notifier_tx: WatchSender<ViewSnapshot>,
    notifier_rx: WatchReceiver<ViewSnapshot>,
}

impl Store {
    pub fn new(rx: Receiver<Event>) -> Self {
        let state = ViewSnapshot::initial();
        let (notifier_tx, notifier_rx) = watch::channel::<ViewSnapshot>(state.clone());

        Store {
            state,
            rx,
            notifier_tx,
            notifier_rx,
        }
    }

    pub fn notifier(&self) -> WatchReceiver<ViewSnapshot> {
        self.notifier_rx.clone()
    }

    #[instrument(skip(self))]
    pub async fn listen(&mut self) {
        while let Some(event) = self.rx.recv().await {
            debug!("🔵 Received event: {:?}", event);
            if self.reduce(event) {
                self.notifier_tx.send(self.state.clone()).unwrap_or_default();
            }
        }
    }

    fn reduce(&mut self, event: Event) -> bool {
        match event {
            Event::CategoryChanged(category) => {
                if category == self.state.category {
                    return false;
                }

                self.state.category = category;
                self.state.generation += 1;
                info!("🟣 Switched category to '{}', generation {}", category.keyword(), self.state.generation);
                true
            }
            Event::LocationAcquired { generation, coordinates } => {
                if self.is_stale(generation, "location") {
                    return false;
                }

                self.state.location = Some(coordinates);
                true
            }
            Event::LocationFailed { generation } => {
                if self.is_stale(generation, "location failure") {
                    return false;
                }

                self.state.loading = false;
                true
            }
            Event::AddressResolved { generation, address } => {
                if self.is_stale(generation, "address") {
                    return false;
                }

                self.state.address = address;
                true
            }
            Event::PlacesFetched { generation, places } => {
                if self.is_stale(generation, "search") {
                    return false;
                }

                info!("🟢 Stored {} place(s) for '{}'", places.len(), self.state.category.keyword());
                self.state.places = places;
                self.state.loading = false;
                true
            }
            Event::ConnectionChanged(info) => {
                self.state.connection = match info {
                    Some(info) => ConnectionStatus::Available(info),
                    None => ConnectionStatus::Unavailable,
                };
                true
            }
        }
    }

    fn is_stale(&self, generation: u64, what: &str) -> bool {
        if generation == self.state.generation {
            return false;
        }

        debug!("⚪ Dropping stale {} result for generation {}, current is {}", what, generation, self.state.generation);
        true
    }
}
