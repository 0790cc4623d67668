pub mod input;

use std::time::{Duration, Instant};

use chrono::{DateTime, Local, Utc};
use tracing::{debug, info};

use crate::clock::display::{ClockDisplay, DisplayKind};
use crate::manager::input::{
    InputError, format_end_time, parse_end_time, parse_font_size, parse_timer_seconds,
};
use crate::settings::{ManagerDefaults, about_text};
use crate::time_provider::TimeSource;

const TIMER_SERIAL: u64 = 0;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum NoticeKind {
    Validation,
    About,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

pub struct ClockManager {
    time_source: Box<dyn TimeSource>,
    pub font_size_input: String,
    pub end_time_input: String,
    pub timer_seconds_input: String,
    pub timer_enabled: bool,
    timer: ClockDisplay,
    displays: Vec<ClockDisplay>,
    next_serial: u64,
    notice: Option<Notice>,
}

impl ClockManager {
    pub fn new(defaults: ManagerDefaults, time_source: Box<dyn TimeSource>) -> Self {
        let now = time_source.now();
        let mut timer = ClockDisplay::new(TIMER_SERIAL, DisplayKind::Timer, None, now);
        timer.set_font_size(defaults.timer_font_size_pt);
        Self {
            time_source,
            font_size_input: defaults.font_size_input,
            end_time_input: format_end_time(now, &Local),
            timer_seconds_input: defaults.timer_seconds_input,
            timer_enabled: false,
            timer,
            displays: Vec::new(),
            next_serial: TIMER_SERIAL + 1,
            notice: None,
        }
    }

    pub fn create_clock(&mut self, at: Instant) -> Option<u64> {
        let result = parse_font_size(&self.font_size_input)
            .map(|size| self.spawn(DisplayKind::Clock, None, size, at));
        self.report(result)
    }

    pub fn create_count_up(&mut self, at: Instant) -> Option<u64> {
        let result = parse_font_size(&self.font_size_input).map(|size| {
            let now = self.time_source.now();
            self.spawn(DisplayKind::CountUp, Some(now), size, at)
        });
        self.report(result)
    }

    pub fn create_countdown(&mut self, at: Instant) -> Option<u64> {
        let result = parse_end_time(&self.end_time_input, &Local).and_then(|target| {
            let size = parse_font_size(&self.font_size_input)?;
            Ok(self.spawn(DisplayKind::Countdown, Some(target), size, at))
        });
        self.report(result)
    }

    pub fn show_about(&mut self) {
        self.notice = Some(Notice {
            kind: NoticeKind::About,
            message: about_text(),
        });
    }

    // A rejected duration leaves the box checked while the timer stays idle.
    pub fn set_timer_enabled(&mut self, enabled: bool, at: Instant) -> bool {
        self.timer_enabled = enabled;
        if !enabled {
            self.timer.stop();
            info!("timer stopped");
            return true;
        }

        let result = self.arm_timer().map(|target| {
            self.timer.start(at);
            self.timer.show();
            info!(%target, "timer started");
        });
        self.report(result).is_some()
    }

    pub fn show_timer(&mut self) -> bool {
        let result = self.arm_timer().map(|target| {
            self.timer.show();
            info!(%target, running = self.timer.is_running(), "timer shown");
        });
        self.report(result).is_some()
    }

    pub fn close_display(&mut self, serial: u64) {
        // The timer is only hidden so it can be shown again.
        if serial == TIMER_SERIAL {
            self.timer.close();
            debug!("timer window closed");
            return;
        }
        if let Some(index) = self.displays.iter().position(|d| d.serial() == serial) {
            let mut closed = self.displays.remove(index);
            closed.close();
            debug!(serial, kind = closed.kind().title(), "display closed");
        }
    }

    pub fn close_all(&mut self) -> Vec<u64> {
        let mut closed: Vec<u64> = self
            .displays
            .drain(..)
            .map(|mut display| {
                display.close();
                display.serial()
            })
            .collect();
        if self.timer.is_visible() {
            self.timer.close();
            closed.push(TIMER_SERIAL);
        }
        info!(count = closed.len(), "closed all clock windows");
        closed
    }

    pub fn tick_all(&mut self, at: Instant) -> Option<Duration> {
        let now = self.time_source.now();
        self.displays_mut()
            .map(|display| {
                display.tick(at, now);
                display.until_next_tick(at)
            })
            .fold(None, |soonest, wait| match (soonest, wait) {
                (Some(a), Some(b)) => Some(a.min(b)),
                (a, b) => a.or(b),
            })
    }

    pub fn displays(&self) -> &[ClockDisplay] {
        &self.displays
    }

    pub fn displays_mut(&mut self) -> impl Iterator<Item = &mut ClockDisplay> {
        std::iter::once(&mut self.timer)
            .chain(self.displays.iter_mut())
            .filter(|display| display.is_visible())
    }

    #[cfg(test)]
    pub fn timer(&self) -> &ClockDisplay {
        &self.timer
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    fn arm_timer(&mut self) -> Result<DateTime<Utc>, InputError> {
        let seconds = parse_timer_seconds(&self.timer_seconds_input)?;
        let now = self.time_source.now();
        let target = now + chrono::Duration::seconds(i64::from(seconds));
        self.timer.set_target(target, now);
        Ok(target)
    }

    fn spawn(
        &mut self,
        kind: DisplayKind,
        target: Option<DateTime<Utc>>,
        font_size_pt: f32,
        at: Instant,
    ) -> u64 {
        let serial = self.next_serial;
        self.next_serial += 1;

        let mut display = ClockDisplay::new(serial, kind, target, self.time_source.now());
        display.set_font_size(font_size_pt);
        display.show();
        display.start(at);
        self.displays.push(display);
        info!(serial, kind = kind.title(), font_size_pt, "display created");
        serial
    }

    fn report<T>(&mut self, result: Result<T, InputError>) -> Option<T> {
        result
            .map_err(|err| {
                self.notice = Some(Notice {
                    kind: NoticeKind::Validation,
                    message: err.to_string(),
                });
            })
            .ok()
    }
}
