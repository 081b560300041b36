//! Deferred work on a virtual clock.
//!
//! The engine never touches a real timer. It schedules tasks on a
//! [`Timeline`] and the host moves time forward with `advance`, so tests
//! can step through delays without sleeping.
//!
//! ```
//! use pairs_engine::schedule::Timeline;
//!
//! let mut timeline = Timeline::new();
//! timeline.schedule(900, "flip back");
//! timeline.schedule(300, "announce");
//!
//! assert_eq!(timeline.advance(299), Vec::<&str>::new());
//! assert_eq!(timeline.advance(1), vec!["announce"]);
//! assert_eq!(timeline.advance(1000), vec!["flip back"]);
//! assert!(timeline.is_idle());
//! ```

mod timeline;

pub use timeline::Timeline;
