use std::collections::HashMap;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq)]
struct Fade {
    opacity: f32,
    target: f32,
}

/// Linear per-card opacity animation. Each tick moves every opacity one step
/// toward its target; unknown cards are fully transparent.
pub struct FadeEngine {
    step: f32,
    fades: HashMap<usize, Fade>,
}

impl FadeEngine {
    pub fn new(fade_duration: Duration, tick_interval: Duration) -> Self {
        let ticks = (fade_duration.as_secs_f32() / tick_interval.as_secs_f32()).max(1.0);

        FadeEngine {
            step: 1.0 / ticks,
            fades: HashMap::new(),
        }
    }

    pub fn set_target(&mut self, key: usize, target: f32) {
        self.fades
            .entry(key)
            .and_modify(|fade| fade.target = target)
            .or_insert(Fade { opacity: 0.0, target });
    }

    pub fn clear(&mut self) {
        self.fades.clear();
    }

    pub fn opacity(&self, key: usize) -> f32 {
        self.fades.get(&key).map_or(0.0, |fade| fade.opacity)
    }

    pub fn animating(&self) -> bool {
        self.fades.values().any(|fade| fade.opacity != fade.target)
    }

    /// Advances all animations by one tick. Returns whether anything moved.
    pub fn tick(&mut self) -> bool {
        let mut moved = false;

        for fade in self.fades.values_mut() {
            if fade.opacity < fade.target {
                fade.opacity = (fade.opacity + self.step).min(fade.target);
                moved = true;
            } else if fade.opacity > fade.target {
                fade.opacity = (fade.opacity - self.step).max(fade.target);
                moved = true;
            }
        }

        moved
    }
}
