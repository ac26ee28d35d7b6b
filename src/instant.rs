//! Exact points on a timeline.

use std::fmt;

use crate::error::Result;
use crate::interval::Interval;
use crate::resolution::Resolution;
use crate::system::sys_time;


/// An **instant** is an exact point on the timeline, irrespective of
/// calendar or resolution, with millisecond precision.
///
/// Internally, this is represented by a 64-bit integer of seconds since the
/// Unix epoch, and a 16-bit integer of milliseconds. This is the form
/// intervals are created from when reading the clock, and the form they
/// are turned back into for anything outside the library.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct Instant {
    seconds: i64,
    milliseconds: i16,
}

impl Instant {

    /// Creates a new Instant set to the number of seconds since the Unix
    /// epoch, and zero milliseconds.
    pub fn at(seconds: i64) -> Self {
        Self::at_ms(seconds, 0)
    }

    /// Creates a new Instant set to the number of seconds since the
    /// Unix epoch, along with the number of milliseconds so far this
    /// second.
    pub fn at_ms(seconds: i64, milliseconds: i16) -> Self {
        Self { seconds, milliseconds }
    }

    /// Creates a new Instant set to the computer’s current time.
    #[cfg_attr(target_os = "redox", allow(unused_unsafe))]
    pub fn now() -> Self {
        let (seconds, milliseconds) = unsafe { sys_time() };
        Self { seconds, milliseconds }
    }

    /// Creates a new Instant set to the Unix epoch.
    pub fn at_epoch() -> Self {
        Self::at(0)
    }

    /// Returns the number of seconds at this instant
    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    /// Returns the number of milliseconds at this instant
    pub fn milliseconds(&self) -> i16 {
        self.milliseconds
    }

    /// Returns the interval at the given resolution that this instant
    /// falls in. The milliseconds are dropped.
    pub fn within(self, resolution: Resolution) -> Result<Interval> {
        Interval::from_instant(self, resolution)
    }
}

impl From<Interval> for Instant {
    fn from(interval: Interval) -> Self {
        interval.to_instant()
    }
}

impl fmt::Debug for Instant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Instant({}s/{}ms)", self.seconds, self.milliseconds)
    }
}
