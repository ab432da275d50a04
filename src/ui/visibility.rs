use std::collections::HashMap;

pub type VisibilityCallback = Box<dyn Fn(bool) + Send>;

/// Tracks which observed regions are inside the viewport. A region becomes
/// visible once its intersection ratio reaches the threshold and reverts to
/// invisible only when it fully exits; each crossing invokes the registered
/// callback exactly once. Independent of where the regions' data comes from.
pub struct VisibilityRegistry {
    threshold: f32,
    observed: HashMap<usize, Observed>,
}

struct Observed {
    callback: VisibilityCallback,
    visible: bool,
}

impl VisibilityRegistry {
    pub fn new(threshold: f32) -> Self {
        VisibilityRegistry {
            threshold,
            observed: HashMap::new(),
        }
    }

    /// Starts observing a region, initially invisible.
    pub fn register(&mut self, key: usize, callback: VisibilityCallback) {
        self.observed.insert(key, Observed { callback, visible: false });
    }

    pub fn unregister(&mut self, key: usize) {
        self.observed.remove(&key);
    }

    pub fn clear(&mut self) {
        self.observed.clear();
    }

    /// Re-evaluates every observed region against its current intersection
    /// ratio and fires the callbacks for the regions that crossed.
    pub fn update<F>(&mut self, intersection_ratio: F)
    where
        F: Fn(usize) -> f32,
    {
        for (key, observed) in &mut self.observed {
            let ratio = intersection_ratio(*key);

            if !observed.visible && ratio >= self.threshold {
                observed.visible = true;
                (observed.callback)(true);
            } else if observed.visible && ratio <= 0.0 {
                observed.visible = false;
                (observed.callback)(false);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::mpsc::{Receiver, channel};

    fn registry_with_card(threshold: f32) -> (VisibilityRegistry, Receiver<bool>) {
        let (tx, rx) = channel();
        let mut registry = VisibilityRegistry::new(threshold);
        registry.register(0, Box::new(move |visible| tx.send(visible).unwrap()));
        (registry, rx)
    }

    #[test]
    fn becomes_visible_when_the_ratio_reaches_the_threshold() {
        let (mut registry, rx) = registry_with_card(0.1);

        registry.update(|_| 0.1);

        assert_eq!(rx.try_recv(), Ok(true));
    }

    #[test]
    fn stays_invisible_below_the_threshold() {
        let (mut registry, rx) = registry_with_card(0.1);

        registry.update(|_| 0.05);

        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn fires_only_once_per_crossing() {
        let (mut registry, rx) = registry_with_card(0.1);

        registry.update(|_| 0.5);
        registry.update(|_| 0.8);
        registry.update(|_| 1.0);

        assert_eq!(rx.try_recv(), Ok(true));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn reverts_to_invisible_only_on_a_full_exit() {
        let (mut registry, rx) = registry_with_card(0.1);

        registry.update(|_| 1.0);
        assert_eq!(rx.try_recv(), Ok(true));

        // Partially out but still intersecting: no crossing.
        registry.update(|_| 0.05);
        assert!(rx.try_recv().is_err());

        registry.update(|_| 0.0);
        assert_eq!(rx.try_recv(), Ok(false));
    }

    #[test]
    fn an_unregistered_region_no_longer_fires() {
        let (mut registry, rx) = registry_with_card(0.1);

        registry.unregister(0);
        registry.update(|_| 1.0);

        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn a_cleared_registry_can_be_repopulated() {
        let (tx, rx) = channel();
        let mut registry = VisibilityRegistry::new(0.1);
        registry.register(0, Box::new(|_| {}));
        registry.clear();

        registry.register(1, Box::new(move |visible| tx.send(visible).unwrap()));
        registry.update(|_| 1.0);

        assert_eq!(rx.try_recv(), Ok(true));
    }
}
