use std::time::{Duration, Instant};

use chrono::{DateTime, Local, Utc};

use crate::clock::face::{Face, compute_face};
use crate::settings::{DEFAULT_FONT_SIZE_PT, TICK_PERIOD};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DisplayKind {
    Clock,
    CountUp,
    Countdown,
    Timer,
}

impl DisplayKind {
    pub fn title(self) -> &'static str {
        match self {
            DisplayKind::Clock => "Clock",
            DisplayKind::CountUp => "Count Up",
            DisplayKind::Countdown => "Countdown",
            DisplayKind::Timer => "Timer",
        }
    }
}

#[derive(Debug)]
pub struct ClockDisplay {
    serial: u64,
    kind: DisplayKind,
    target: Option<DateTime<Utc>>,
    font_size_pt: f32,
    face: Face,
    running: bool,
    next_tick: Option<Instant>,
    visible: bool,
    overlay_visible: bool,
    fit_requested: bool,
}

impl ClockDisplay {
    pub fn new(
        serial: u64,
        kind: DisplayKind,
        target: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            serial,
            kind,
            target,
            font_size_pt: DEFAULT_FONT_SIZE_PT,
            face: compute_face(target, now, &Local),
            running: false,
            next_tick: None,
            visible: false,
            overlay_visible: false,
            fit_requested: true,
        }
    }

    pub fn set_target(&mut self, target: DateTime<Utc>, now: DateTime<Utc>) {
        self.target = Some(target);
        self.refresh(now);
    }

    pub fn set_font_size(&mut self, points: f32) {
        self.font_size_pt = points;
        self.fit_requested = true;
    }

    pub fn start(&mut self, at: Instant) {
        if self.running {
            return;
        }
        self.running = true;
        self.next_tick = Some(at + TICK_PERIOD);
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.next_tick = None;
    }

    pub fn show(&mut self) {
        if !self.visible {
            self.fit_requested = true;
        }
        self.visible = true;
    }

    pub fn close(&mut self) {
        self.stop();
        self.visible = false;
    }

    // Returns true when the face was recomputed.
    pub fn tick(&mut self, at: Instant, now: DateTime<Utc>) -> bool {
        let Some(due) = self.next_tick else {
            return false;
        };
        if at < due {
            return false;
        }

        self.refresh(now);
        let mut next = due;
        while next <= at {
            next += TICK_PERIOD;
        }
        self.next_tick = Some(next);
        true
    }

    pub fn until_next_tick(&self, at: Instant) -> Option<Duration> {
        self.next_tick.map(|due| due.saturating_duration_since(at))
    }

    pub fn toggle_overlay(&mut self) {
        self.overlay_visible = !self.overlay_visible;
    }

    pub fn take_fit_request(&mut self) -> bool {
        std::mem::take(&mut self.fit_requested)
    }

    pub fn serial(&self) -> u64 {
        self.serial
    }

    pub fn kind(&self) -> DisplayKind {
        self.kind
    }

    #[cfg(test)]
    pub fn target(&self) -> Option<DateTime<Utc>> {
        self.target
    }

    pub fn font_size_pt(&self) -> f32 {
        self.font_size_pt
    }

    pub fn face(&self) -> &Face {
        &self.face
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn overlay_visible(&self) -> bool {
        self.overlay_visible
    }

    fn refresh(&mut self, now: DateTime<Utc>) {
        self.face = compute_face(self.target, now, &Local);
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::clock::face::FaceColor;

    fn pinned_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0)
            .single()
            .expect("valid instant")
    }

    #[test]
    fn new_display_has_face_before_first_tick() {
        let now = pinned_now();
        let display = ClockDisplay::new(
            1,
            DisplayKind::Countdown,
            Some(now + chrono::Duration::seconds(5)),
            now,
        );
        assert_eq!(display.face().text, "00:00:05");
        assert_eq!(display.face().color, FaceColor::CountDown);
        assert!(!display.is_running());
        assert!(!display.is_visible());
    }

    #[test]
    fn targetless_display_stays_neutral() {
        let now = pinned_now();
        let mut display = ClockDisplay::new(1, DisplayKind::Clock, None, now);
        let start = Instant::now();
        display.start(start);
        display.tick(start + TICK_PERIOD, now + chrono::Duration::hours(7));
        assert_eq!(display.face().color, FaceColor::Clock);
        assert_eq!(display.face().text.len(), "hh:mm:ss".len());
    }

    #[test]
    fn tick_waits_for_period_while_running() {
        let now = pinned_now();
        let mut display = ClockDisplay::new(1, DisplayKind::CountUp, Some(now), now);
        let start = Instant::now();
        display.start(start);

        let later = now + chrono::Duration::seconds(3);
        assert!(!display.tick(start + Duration::from_millis(499), later));
        assert_eq!(display.face().text, "00:00:00");

        assert!(display.tick(start + TICK_PERIOD, later));
        assert_eq!(display.face().text, "00:00:03");
        assert_eq!(
            display.until_next_tick(start + TICK_PERIOD),
            Some(TICK_PERIOD)
        );
    }

    #[test]
    fn late_tick_skips_missed_slots() {
        let now = pinned_now();
        let mut display = ClockDisplay::new(1, DisplayKind::CountUp, Some(now), now);
        let start = Instant::now();
        display.start(start);
        let late = start + Duration::from_millis(1_720);
        assert!(display.tick(late, now));
        assert_eq!(
            display.until_next_tick(late),
            Some(Duration::from_millis(280))
        );
    }

    #[test]
    fn stop_freezes_face() {
        let now = pinned_now();
        let mut display = ClockDisplay::new(1, DisplayKind::CountUp, Some(now), now);
        let start = Instant::now();
        display.start(start);
        display.tick(start + TICK_PERIOD, now + chrono::Duration::seconds(1));
        display.stop();

        assert!(!display.tick(
            start + Duration::from_secs(10),
            now + chrono::Duration::seconds(10)
        ));
        assert_eq!(display.face().text, "00:00:01");
        assert_eq!(display.until_next_tick(start), None);
    }

    #[test]
    fn start_is_idempotent() {
        let now = pinned_now();
        let mut display = ClockDisplay::new(1, DisplayKind::Clock, None, now);
        let start = Instant::now();
        display.start(start);
        display.start(start + Duration::from_millis(400));
        assert_eq!(display.until_next_tick(start), Some(TICK_PERIOD));
    }

    #[test]
    fn set_target_recomputes_while_stopped() {
        let now = pinned_now();
        let mut display = ClockDisplay::new(1, DisplayKind::Timer, None, now);
        display.set_target(now + chrono::Duration::seconds(90), now);
        assert!(!display.is_running());
        assert_eq!(display.face().text, "00:01:30");
        assert_eq!(display.face().color, FaceColor::CountDown);
    }

    #[test]
    fn font_size_change_requests_fit_once() {
        let now = pinned_now();
        let mut display = ClockDisplay::new(1, DisplayKind::Clock, None, now);
        assert!(display.take_fit_request());
        assert!(!display.take_fit_request());

        display.set_font_size(72.5);
        assert_eq!(display.font_size_pt(), 72.5);
        assert!(display.take_fit_request());
        assert!(!display.take_fit_request());
    }

    #[test]
    fn double_click_overlay_toggles_without_touching_time() {
        let now = pinned_now();
        let mut display = ClockDisplay::new(1, DisplayKind::CountUp, Some(now), now);
        let before = display.face().clone();
        assert!(!display.overlay_visible());
        display.toggle_overlay();
        assert!(display.overlay_visible());
        display.toggle_overlay();
        assert!(!display.overlay_visible());
        assert_eq!(display.face(), &before);
    }

    #[test]
    fn close_stops_and_hides() {
        let now = pinned_now();
        let mut display = ClockDisplay::new(1, DisplayKind::Clock, None, now);
        display.show();
        display.start(Instant::now());
        display.close();
        assert!(!display.is_running());
        assert!(!display.is_visible());
    }
}
