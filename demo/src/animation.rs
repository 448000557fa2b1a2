use std::time::{Duration, Instant};

use satmap::{Position, lon_lat};

/// Time taken by animations which do not specify one.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(300);

/// Camera flying from one place to another.
#[derive(Debug, Clone)]
pub struct CameraAnimation {
    from: Position,
    from_zoom: f64,
    to: Position,
    to_zoom: f64,
    started: Instant,
    duration: Duration,
}

impl CameraAnimation {
    pub fn new(
        (from, from_zoom): (Position, f64),
        (to, to_zoom): (Position, f64),
        started: Instant,
        duration: Duration,
    ) -> Self {
        Self {
            from,
            from_zoom,
            to,
            to_zoom,
            started,
            duration,
        }
    }

    fn progress(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.)
    }

    pub fn finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.
    }

    /// Camera center and zoom at the given moment.
    pub fn sample(&self, now: Instant) -> (Position, f64) {
        let t = ease(self.progress(now));
        let lerp = |a: f64, b: f64| a + (b - a) * t;
        (
            lon_lat(
                lerp(self.from.x(), self.to.x()),
                lerp(self.from.y(), self.to.y()),
            ),
            lerp(self.from_zoom, self.to_zoom),
        )
    }
}

fn ease(t: f64) -> f64 {
    t * t * (3. - 2. * t)
}
