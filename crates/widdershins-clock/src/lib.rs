//! Core logic for **widdershins**, an analog clock whose hands run
//! counter-clockwise.
//!
//! This crate is intentionally windowing-free: it models the clock face as
//! plain data, computes hand angles from wall-clock readings, and drives the
//! animation state machine. A host (such as `widdershins-glass`) owns the
//! actual surface, paints the model every frame, and schedules the polling
//! wakes the animator asks for.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`reading`] | `ClockReading`, `LocalSample`, month table |
//! | [`angles`] | hand-angle and tick math (degrees, negative-going) |
//! | [`face`] | `ClockFace` attachment-slot model |
//! | [`dial`] | `DialMarker`, `build_dial` |
//! | [`animator`] | `Animator`, `AnimationMode`, task tokens, polling |
//! | [`theme`] | `Theme`, `PrefStore`, toggle helpers |
//! | [`zone`] | host timezone city lookup |
//!
//! # Quick start
//!
//! ```rust
//! use widdershins_clock::{build_dial, AnimationMode, Animator, ClockFace, LocalSample};
//!
//! let mut face = ClockFace::standard(350.0);
//! build_dial(&mut face);
//!
//! let mut animator = Animator::new(AnimationMode::Smooth).with_zone_city("Utrecht");
//! let sample = LocalSample::from_parts(10, 8, 30.5, 7, 25);
//! assert!(animator.start(&mut face, &sample));
//!
//! // The hands run widdershins: angles go negative as time advances.
//! assert_eq!(face.second_hand.unwrap().angle_deg, -183.0);
//! assert_eq!(face.date_label.unwrap().text, "Aug 25");
//! ```
//!
//! Degraded operation: every face slot is optional. Writers skip absent
//! slots; only a missing hour, minute, or seconds slot prevents the
//! animation from starting at all.

pub mod angles;
pub mod animator;
pub mod dial;
pub mod face;
pub mod reading;
pub mod theme;
pub mod zone;

pub use animator::{AnimationMode, Animator, PollOutcome, PollSchedule, TaskToken};
pub use dial::{build_dial, DialMarker, DEFAULT_FACE_DIAMETER, MARKER_COUNT};
pub use face::{ClockFace, Dial, Hand, Label, Overlay, Toggle};
pub use reading::{ClockReading, LocalSample, MONTHS};
pub use theme::{apply_theme, toggle_theme, PrefStore, Theme};
