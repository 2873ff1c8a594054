use std::thread;
use std::time::{Duration, Instant};

pub struct IntervalTimer {
    interval: Duration,
    last_tick: Instant,
    label: String,
    measure_fps: bool,
    last_fps_print: Instant,
    frames: u32,
}

impl IntervalTimer {
    pub fn new(freq_hz: f32, measure_fps: bool) -> IntervalTimer {
        let frame_duration_microsec = 1000.0 / freq_hz.max(0.001) * 1000.0;
        let cur_thread = thread::current();
        let label = cur_thread.name().unwrap_or("unnamed").to_string();

        IntervalTimer {
            interval: Duration::from_micros(frame_duration_microsec as u64),
            last_tick: Instant::now(),
            label,
            measure_fps,
            last_fps_print: Instant::now(),
            frames: 0,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn sleep_until_next_tick(&mut self) {
        if self.measure_fps {
            self.update_fps();
        }

        let now = Instant::now();
        let next_tick = if self.last_tick + self.interval > now {
            self.last_tick + self.interval
        } else {
            log::warn!("{} skipped a frame", self.label);
            now + self.interval
        };

        thread::sleep(next_tick.saturating_duration_since(Instant::now()));
        self.last_tick = next_tick
    }

    fn update_fps(&mut self) {
        self.frames += 1;

        if Instant::now() - self.last_fps_print > Duration::from_secs(1) {
            log::debug!("{} FPS: {}", self.label, self.frames);
            self.frames = 0;
            self.last_fps_print = Instant::now();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_from_frequency() {
        let timer = IntervalTimer::new(10.0, false);
        assert_eq!(timer.interval(), Duration::from_millis(100));

        let timer = IntervalTimer::new(40.0, false);
        assert_eq!(timer.interval(), Duration::from_millis(25));
    }

    #[test]
    fn ticks_are_paced() {
        let mut timer = IntervalTimer::new(100.0, true);
        let start = Instant::now();
        for _ in 0..3 {
            timer.sleep_until_next_tick();
        }
        assert!(Instant::now() - start >= Duration::from_millis(25));
    }
}
