//! The hand animator: per-frame hour/minute updates plus a replaceable
//! seconds-hand task under one of two timing policies.
//!
//! Responsibilities:
//! - apply hour/minute angles every frame, then the one-time date and
//!   timezone labels (guarded, never re-fired)
//! - drive the seconds hand either continuously (frame-driven) or in
//!   discrete snapped ticks (timer-driven polling)
//! - guarantee at most one live seconds task; replacing it invalidates the
//!   old task's token so a still-scheduled poll lands as a no-op
//!
//! The animator owns no timers itself. Hosts call [`Animator::on_frame`]
//! once per presented frame and, when [`Animator::next_poll`] asks for it,
//! schedule a wake and call [`Animator::poll`] with the task's token.

use std::time::Duration;

use crate::angles;
use crate::face::ClockFace;
use crate::reading::LocalSample;
use crate::zone;

/// Sub-frame polling cadence for tick modes. Much shorter than the shortest
/// tick span (125 ms) so boundaries snap promptly.
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// The shadow hand trails the seconds hand by this much, same instant.
const SHADOW_LAG_DEG: f64 = -0.5;

/// Seconds-hand timing policy. Exactly one is active at a time.
///
/// `Tick(1)`, `Tick(2)` and `Tick(8)` are the offered configurations
/// (one-second, half-second, and high-frequency steps); the math accepts any
/// positive rate. A zero rate is normalized to one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationMode {
    /// Continuous rotation, recomputed every presented frame.
    Smooth,
    /// `rate` snapped steps per second, held constant between boundaries.
    Tick(u32),
}

/// Identifies one scheduled seconds task. A token older than the live task's
/// makes any poll carrying it a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskToken(u64);

/// What the host should schedule for the live seconds task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollSchedule {
    pub token:    TaskToken,
    pub interval: Duration,
}

/// Result of one polling pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PollOutcome {
    /// A tick boundary was crossed; the hand snapped to `angle_deg`.
    Snapped { angle_deg: f64 },
    /// Still inside the previous tick; the hand held its angle.
    Held,
    /// The token no longer names the live task; nothing was touched.
    Stale,
}

struct SecondsTask {
    token:  TaskToken,
    driver: SecondsDriver,
}

enum SecondsDriver {
    Smooth,
    Ticked { rate: u32, last_tick: Option<u32> },
}

/// The animation controller: current mode, the live seconds task, and the
/// one-time-label state. One per clock face.
pub struct Animator {
    mode:       AnimationMode,
    seconds:    Option<SecondsTask>,
    next_token: u64,
    zone_city:  Option<String>,
}

impl Animator {
    /// A stopped animator in the given mode. The timezone city is resolved
    /// from the host once, here; [`Animator::with_zone_city`] overrides it.
    pub fn new(mode: AnimationMode) -> Self {
        Self {
            mode:       normalize(mode),
            seconds:    None,
            next_token: 0,
            zone_city:  zone::host_city(),
        }
    }

    /// Use a fixed city for the timezone label instead of the host zone.
    pub fn with_zone_city(mut self, city: impl Into<String>) -> Self {
        self.zone_city = Some(city.into());
        self
    }

    pub fn mode(&self) -> AnimationMode {
        self.mode
    }

    /// True once [`Animator::start`] has succeeded.
    pub fn is_running(&self) -> bool {
        self.seconds.is_some()
    }

    /// Token of the live seconds task, if any.
    pub fn seconds_token(&self) -> Option<TaskToken> {
        self.seconds.as_ref().map(|task| task.token)
    }

    /// Start both loops, applying the first hand positions immediately.
    ///
    /// The hour hand, minute hand, and seconds-hand container are required;
    /// if any is missing the start aborts and the animator stays stopped.
    /// Optional slots (shadow, labels) may be absent and are skipped.
    pub fn start(&mut self, face: &mut ClockFace, sample: &LocalSample) -> bool {
        if face.hour_hand.is_none() || face.minute_hand.is_none() || face.second_hand.is_none() {
            log::warn!("animation start aborted: hour, minute, or seconds slot missing");
            return false;
        }
        let task = self.spawn_task();
        self.seconds = Some(task);
        self.apply_hour_minute(face, sample);
        self.apply_seconds_now(face, sample);
        log::debug!("clock started in {:?} mode", self.mode);
        true
    }

    /// Per-frame update. Hour and minute hands move every frame; in Smooth
    /// mode the seconds hand does too. No-op until started.
    ///
    /// Hands are written before the one-time label effects.
    pub fn on_frame(&mut self, face: &mut ClockFace, sample: &LocalSample) {
        if !self.is_running() {
            return;
        }
        self.apply_hour_minute(face, sample);
        if let Some(task) = &self.seconds {
            if matches!(task.driver, SecondsDriver::Smooth) {
                apply_second_angle(face, angles::second_angle_smooth(sample.reading.seconds));
            }
        }
    }

    /// The poll the host should keep scheduled, or `None` when the live task
    /// is frame-driven.
    pub fn next_poll(&self) -> Option<PollSchedule> {
        let task = self.seconds.as_ref()?;
        match task.driver {
            SecondsDriver::Smooth => None,
            SecondsDriver::Ticked { .. } => {
                Some(PollSchedule { token: task.token, interval: POLL_INTERVAL })
            }
        }
    }

    /// One polling pass for the task named by `token`. Crossing a tick
    /// boundary snaps the seconds hand; otherwise the angle holds. A stale
    /// token touches nothing.
    pub fn poll(
        &mut self,
        face: &mut ClockFace,
        sample: &LocalSample,
        token: TaskToken,
    ) -> PollOutcome {
        let Some(task) = self.seconds.as_mut() else {
            return PollOutcome::Stale;
        };
        if task.token != token {
            return PollOutcome::Stale;
        }
        let SecondsDriver::Ticked { rate, last_tick } = &mut task.driver else {
            return PollOutcome::Stale;
        };
        let index = angles::tick_index(sample.reading.millis_into_minute(), *rate);
        if *last_tick == Some(index) {
            return PollOutcome::Held;
        }
        *last_tick = Some(index);
        let angle_deg = angles::tick_angle(index, *rate);
        apply_second_angle(face, angle_deg);
        PollOutcome::Snapped { angle_deg }
    }

    /// Replace the timing policy. When running, the live seconds task is
    /// replaced — its token goes stale — and the new task applies its first
    /// position immediately. The hour/minute loop is unaffected.
    pub fn set_mode(&mut self, mode: AnimationMode, face: &mut ClockFace, sample: &LocalSample) {
        self.mode = normalize(mode);
        if self.is_running() {
            let task = self.spawn_task();
            self.seconds = Some(task);
            self.apply_seconds_now(face, sample);
            log::debug!("seconds task replaced; mode now {:?}", self.mode);
        }
    }

    fn spawn_task(&mut self) -> SecondsTask {
        self.next_token += 1;
        let driver = match self.mode {
            AnimationMode::Smooth => SecondsDriver::Smooth,
            AnimationMode::Tick(rate) => SecondsDriver::Ticked { rate, last_tick: None },
        };
        SecondsTask { token: TaskToken(self.next_token), driver }
    }

    fn apply_seconds_now(&mut self, face: &mut ClockFace, sample: &LocalSample) {
        match self.mode {
            AnimationMode::Smooth => {
                apply_second_angle(face, angles::second_angle_smooth(sample.reading.seconds));
            }
            AnimationMode::Tick(_) => {
                if let Some(token) = self.seconds_token() {
                    self.poll(face, sample, token);
                }
            }
        }
    }

    fn apply_hour_minute(&self, face: &mut ClockFace, sample: &LocalSample) {
        let reading = &sample.reading;
        if let Some(hand) = face.hour_hand.as_mut() {
            hand.angle_deg = angles::hour_angle(reading);
        }
        if let Some(hand) = face.minute_hand.as_mut() {
            hand.angle_deg = angles::minute_angle(reading);
        }
        if let Some(label) = face.date_label.as_mut() {
            if label.text.is_empty() {
                label.text = sample.date_text();
            }
        }
        if let Some(label) = face.zone_label.as_mut() {
            if !label.initialized {
                if let Some(city) = &self.zone_city {
                    label.text = city.clone();
                    label.initialized = true;
                }
            }
        }
    }
}

/// Write the seconds angle to the container and its shadow in one step.
fn apply_second_angle(face: &mut ClockFace, angle_deg: f64) {
    if let Some(hand) = face.second_hand.as_mut() {
        hand.angle_deg = angle_deg;
    }
    if let Some(shadow) = face.second_shadow.as_mut() {
        shadow.angle_deg = angle_deg + SHADOW_LAG_DEG;
    }
}

fn normalize(mode: AnimationMode) -> AnimationMode {
    match mode {
        AnimationMode::Tick(0) => {
            log::warn!("tick rate 0 requested; using 1");
            AnimationMode::Tick(1)
        }
        other => other,
    }
}
