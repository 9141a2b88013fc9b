//! Runtime frame settings
//!
//! Controls how a rendered frame is turned into physics sub-steps: how many
//! sub-steps per frame, how many simulated seconds pass per real second, and
//! whether the simulation is paused

use log::debug;

use crate::configuration::config::UpdateOrder;

#[derive(Debug, Clone)]
pub struct Engine {
    pub sub_steps: u32, // physics sub-steps per frame
    pub time_scale: f64, // simulated seconds per real second
    pub base_time_scale: f64, // lowest non-paused speed, restored by unpausing
    pub time_scale_step: f64, // speed change per speed_up / speed_down
    pub max_time_scale: f64, // upper bound for speed_up
    pub paused: bool,
    pub update_order: UpdateOrder, // snapshot or traversal order
    pub auto_stage: bool, // drop an empty stage without being told to
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            sub_steps: 5,
            time_scale: 2000.0,
            base_time_scale: 2000.0,
            time_scale_step: 2000.0,
            max_time_scale: 100_000.0,
            paused: false,
            update_order: UpdateOrder::Simultaneous,
            auto_stage: false,
        }
    }
}

impl Engine {
    /// Length of one sub-step for a frame that took `frame_dt` real seconds.
    /// Zero while paused
    pub fn sub_step_dt(&self, frame_dt: f64) -> f64 {
        if self.paused || self.sub_steps == 0 {
            return 0.0;
        }
        frame_dt * self.time_scale / self.sub_steps as f64
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        debug!("simulation {}", if self.paused { "paused" } else { "resumed" });
    }

    pub fn speed_up(&mut self) {
        self.time_scale = (self.time_scale + self.time_scale_step).min(self.max_time_scale);
        debug!("time scale {}", self.time_scale);
    }

    pub fn speed_down(&mut self) {
        self.time_scale = (self.time_scale - self.time_scale_step).max(self.base_time_scale);
        debug!("time scale {}", self.time_scale);
    }
}
