use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::StrobeError;
use crate::hostcolor::HostColor;
use crate::intervaltimer::IntervalTimer;
use crate::pixelmap::{Cell, PixelMap};
use crate::scripts::RgbScript;

const CURSOR_HOME: &str = "\x1b[H";
const CLEAR_SCREEN: &str = "\x1b[2J";
const RESET: &str = "\x1b[0m";

pub struct Preview<'a, W: Write> {
    script: &'a dyn RgbScript<HostColor>,
    out: W,
    width: usize,
    height: usize,
    color: HostColor,
}

impl<'a, W: Write> Preview<'a, W> {
    pub fn new(
        script: &'a dyn RgbScript<HostColor>,
        out: W,
        width: usize,
        height: usize,
        color: HostColor,
    ) -> Preview<'a, W> {
        Preview {
            script,
            out,
            width,
            height,
            color,
        }
    }

    pub fn run(
        &mut self,
        fps: f32,
        cycles: Option<u32>,
        stop: &AtomicBool,
    ) -> Result<u64, StrobeError> {
        let mut timer = IntervalTimer::new(fps, true);
        let mut step = 0;
        let mut cycles_done = 0;
        let mut frames = 0;

        self.write(CLEAR_SCREEN)?;
        while !stop.load(Ordering::SeqCst) && cycles.map_or(true, |limit| cycles_done < limit) {
            // The step count may change between ticks when a property is written.
            let step_count = self.script.rgb_map_step_count(self.width, self.height)?;
            if step >= step_count {
                step = 0;
            }

            let map = self
                .script
                .rgb_map(self.width, self.height, self.color, step)?;
            let frame = draw_frame(&map, step, step_count);
            self.write(&frame)?;
            frames += 1;

            step += 1;
            if step >= step_count {
                step = 0;
                cycles_done += 1;
            }

            if cycles.map_or(false, |limit| cycles_done >= limit) {
                break;
            }
            timer.sleep_until_next_tick();
        }

        self.write(RESET)?;
        log::info!("Preview stopped after {frames} frames");
        Ok(frames)
    }

    fn write(&mut self, text: &str) -> Result<(), StrobeError> {
        self.out
            .write_all(text.as_bytes())
            .and_then(|_| self.out.flush())
            .map_err(|err| StrobeError::Output(err.to_string()))
    }
}

/// Two terminal columns per pixel so the matrix looks roughly square.
pub fn draw_frame(map: &PixelMap<HostColor>, step: u32, step_count: u32) -> String {
    let mut frame = String::from(CURSOR_HOME);

    for row in map.rows() {
        for cell in row {
            let color = match cell {
                Cell::Off => HostColor::OFF,
                Cell::Color(color) => *color,
            };
            let (r, g, b) = palette::Srgb::<u8>::from(color).into_components();
            frame.push_str(&format!("\x1b[48;2;{r};{g};{b}m  "));
        }
        frame.push_str(RESET);
        frame.push('\n');
    }

    let lit = match map.get(0, 0) {
        Some(Cell::Color(color)) => color.to_string(),
        _ => "off".to_string(),
    };
    frame.push_str(&format!(
        "step {}/{} {}x{} {}\x1b[K\n",
        step + 1,
        step_count,
        map.width(),
        map.height(),
        lit
    ));
    frame
}
