//! The calendar-time record type.

use core::ops::Add;
use core::time::Duration;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::derive::Reflect;

const NANOS_PER_SEC: u32 = 1_000_000_000;

/// A UTC instant, stored as seconds and nanoseconds since the Unix epoch.
///
/// It reflects as a record, but the field tree never expands it:
/// its two fields are an encoding detail, not data of the enclosing record.
///
/// # Examples
///
/// ```
/// use core::time::Duration;
/// use inflect_reflect::time::Timestamp;
///
/// let t = Timestamp::from_unix(10);
/// let later = t + Duration::from_millis(1500);
///
/// assert_eq!(later.unix_seconds(), 11);
/// assert_eq!(later.subsec_nanos(), 500_000_000);
/// assert!(later > t);
/// ```
#[derive(Reflect, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[reflect(clone, partial_eq, debug)]
pub struct Timestamp {
    secs: i64,
    nanos: u32,
}

impl Timestamp {
    pub const UNIX_EPOCH: Self = Self { secs: 0, nanos: 0 };

    /// The latest representable instant.
    pub const MAX: Self = Self {
        secs: i64::MAX,
        nanos: NANOS_PER_SEC - 1,
    };

    /// The earliest representable instant.
    pub const MIN: Self = Self {
        secs: i64::MIN,
        nanos: 0,
    };

    /// Returns `None` if `nanos` is not below one second.
    #[inline]
    pub const fn new(secs: i64, nanos: u32) -> Option<Self> {
        if nanos < NANOS_PER_SEC {
            Some(Self { secs, nanos })
        } else {
            None
        }
    }

    #[inline]
    pub const fn from_unix(secs: i64) -> Self {
        Self { secs, nanos: 0 }
    }

    /// The current system time.
    pub fn now() -> Self {
        Self::from(SystemTime::now())
    }

    /// Whole seconds since the epoch, negative before it.
    #[inline]
    pub const fn unix_seconds(&self) -> i64 {
        self.secs
    }

    /// Nanoseconds past [`unix_seconds`](Self::unix_seconds), always positive.
    #[inline]
    pub const fn subsec_nanos(&self) -> u32 {
        self.nanos
    }

    /// Returns `None` on overflow.
    pub fn checked_add(self, rhs: Duration) -> Option<Self> {
        let secs = i64::try_from(rhs.as_secs()).ok()?;
        let mut secs = self.secs.checked_add(secs)?;
        let mut nanos = self.nanos + rhs.subsec_nanos();
        if nanos >= NANOS_PER_SEC {
            nanos -= NANOS_PER_SEC;
            secs = secs.checked_add(1)?;
        }
        Some(Self { secs, nanos })
    }

    /// Returns `None` if the instant cannot be represented by [`SystemTime`].
    pub fn to_system_time(self) -> Option<SystemTime> {
        let nanos = Duration::from_nanos(u64::from(self.nanos));
        if self.secs >= 0 {
            UNIX_EPOCH
                .checked_add(Duration::from_secs(self.secs.unsigned_abs()))?
                .checked_add(nanos)
        } else {
            UNIX_EPOCH
                .checked_sub(Duration::from_secs(self.secs.unsigned_abs()))?
                .checked_add(nanos)
        }
    }
}

impl Add<Duration> for Timestamp {
    type Output = Self;

    /// # Panics
    ///
    /// Panics on overflow, like the `std` time types.
    fn add(self, rhs: Duration) -> Self {
        self.checked_add(rhs)
            .expect("overflow when adding duration to timestamp")
    }
}

/// Instants beyond the `i64` range of seconds saturate.
impl From<SystemTime> for Timestamp {
    fn from(time: SystemTime) -> Self {
        match time.duration_since(UNIX_EPOCH) {
            Ok(after) => match i64::try_from(after.as_secs()) {
                Ok(secs) => Self {
                    secs,
                    nanos: after.subsec_nanos(),
                },
                Err(_) => Self::MAX,
            },
            Err(err) => {
                let before = err.duration();
                let Some(secs) = i64::try_from(before.as_secs())
                    .ok()
                    .and_then(i64::checked_neg)
                else {
                    return Self::MIN;
                };
                match before.subsec_nanos() {
                    0 => Self { secs, nanos: 0 },
                    nanos => match secs.checked_sub(1) {
                        Some(secs) => Self {
                            secs,
                            nanos: NANOS_PER_SEC - nanos,
                        },
                        None => Self::MIN,
                    },
                }
            }
        }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use core::time::Duration;
    use std::time::UNIX_EPOCH;

    use super::Timestamp;
    use crate::Reflect;
    use crate::info::ReflectKind;

    #[test]
    fn rejects_overlong_nanos() {
        assert!(Timestamp::new(0, 999_999_999).is_some());
        assert!(Timestamp::new(0, 1_000_000_000).is_none());
    }

    #[test]
    fn add_carries_nanos() {
        let t = Timestamp::new(1, 600_000_000).unwrap() + Duration::from_millis(500);
        assert_eq!(t, Timestamp::new(2, 100_000_000).unwrap());
        assert!(Timestamp::from_unix(i64::MAX).checked_add(Duration::from_secs(1)).is_none());
    }

    #[test]
    fn system_time_before_epoch() {
        let before = UNIX_EPOCH - Duration::from_millis(1500);
        let t = Timestamp::from(before);
        assert_eq!(t.unix_seconds(), -2);
        assert_eq!(t.subsec_nanos(), 500_000_000);
        assert_eq!(t.to_system_time(), Some(before));
    }

    #[test]
    fn far_system_time_does_not_wrap() {
        let earliest = Duration::new(i64::MAX as u64, 5);
        if let Some(time) = UNIX_EPOCH.checked_sub(earliest) {
            let t = Timestamp::from(time);
            assert_eq!(t.unix_seconds(), i64::MIN);
            assert_eq!(t.subsec_nanos(), 999_999_995);
        }

        // Only platforms with a wider `SystemTime` reach this.
        if let Some(time) = UNIX_EPOCH.checked_add(Duration::from_secs(1 << 63)) {
            assert_eq!(Timestamp::from(time), Timestamp::MAX);
        }
    }

    #[test]
    fn system_time_round_trip() {
        let t = Timestamp::new(1_700_000_000, 42).unwrap();
        assert_eq!(Timestamp::from(t.to_system_time().unwrap()), t);
    }

    #[test]
    fn reflects_as_record() {
        let t = Timestamp::from_unix(5);
        assert_eq!(t.reflect_kind(), ReflectKind::Struct);
        assert_eq!(t.reflect_partial_eq(&Timestamp::from_unix(5)), Some(true));
        assert!(t.reflect_clone().unwrap().is::<Timestamp>());
    }
}
