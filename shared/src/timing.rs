//! Rate limiting driven by a caller-supplied clock.
//!
//! The browser side owns the timers; these types only decide whether a
//! handler may run.

/// Leading-edge throttle: at most one call per `limit_ms` window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Throttle {
    limit_ms: f64,
    last_fired: Option<f64>,
}

impl Throttle {
    pub fn new(limit_ms: f64) -> Self {
        Self {
            limit_ms,
            last_fired: None,
        }
    }

    /// Returns `true` and starts a new window if the previous one has elapsed.
    pub fn try_fire(&mut self, now_ms: f64) -> bool {
        match self.last_fired {
            Some(last) if now_ms - last < self.limit_ms => false,
            _ => {
                self.last_fired = Some(now_ms);
                true
            }
        }
    }
}

/// Coalesces bursts of events into one callback per animation frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    /// Returns `true` when the caller should schedule a frame callback.
    pub fn request(&mut self) -> bool {
        !std::mem::replace(&mut self.pending, true)
    }

    /// Called from inside the frame callback.
    pub fn complete(&mut self) {
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_throttle_window() {
        let mut throttle = Throttle::new(150.0);
        assert!(throttle.try_fire(0.0));
        assert!(!throttle.try_fire(10.0));
        assert!(!throttle.try_fire(149.9));
        assert!(throttle.try_fire(150.0));
        assert!(!throttle.try_fire(200.0));
    }

    #[test]
    fn test_frame_gate_coalesces() {
        let mut gate = FrameGate::default();
        assert!(gate.request());
        assert!(!gate.request());
        assert!(!gate.request());
        assert!(gate.is_pending());

        gate.complete();
        assert!(!gate.is_pending());
        assert!(gate.request());
    }
}
