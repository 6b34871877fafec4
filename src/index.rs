//! Lookup of the cues displayed at a point in time.
//!
//! The lookup runs at every playback time update, so it doesn't scan the whole track:
//! a binary search on start times gives a seed position, then the cues around the seed
//! are scanned while they still contain the queried time.
//!
//! ## Precondition
//!
//! Cues must be sorted by start time, in file order. The result is exact when end times
//! are non-decreasing too; a long cue followed by a shorter cue ending before the queried
//! time stops the backward scan and may be missed.

use crate::cue::Cue;

/// Positions of the active cues in the track cue list.
///
/// Two sets are equal when they hold the same cue positions in the same order,
/// which is the criterion used to decide if a caption must be redisplayed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveCues(Vec<usize>);

impl ActiveCues {
    /// Is no cue active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of active cues.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Positions of the active cues, forward matches first then backward matches.
    #[must_use]
    pub fn positions(&self) -> &[usize] {
        &self.0
    }

    /// Get the active cues from the cue list they were computed from.
    ///
    /// The cues borrow the list, not the set.
    pub fn resolve<'a, 'c: 'a>(&'a self, cues: &'c [Cue]) -> impl Iterator<Item = &'c Cue> + 'a {
        self.0.iter().filter_map(move |&pos| cues.get(pos))
    }

    pub(crate) fn clear(&mut self) {
        self.0.clear();
    }
}

/// Binary search on start times for the position closest to `time`.
///
/// An exact start time match returns its position. Otherwise the position of the last cue
/// starting before `time` is returned (`0` if none), which is only a seed for the scans
/// of [`find_active`].
#[must_use]
pub fn seed_position(time: f64, cues: &[Cue]) -> usize {
    let (mut left, mut right) = (0, cues.len());
    while left < right {
        let mid = (left + right - 1) / 2;
        let start = cues[mid].start_time();
        if start < time {
            left = mid + 1;
        } else if start > time {
            right = mid;
        } else {
            return mid;
        }
    }
    left.saturating_sub(1)
}

/// Find the positions of the cues active at `time`.
#[must_use]
pub fn find_active(time: f64, cues: &[Cue]) -> ActiveCues {
    if cues.is_empty() || time.is_nan() {
        return ActiveCues::default();
    }

    let seed = seed_position(time, cues);
    let forward = (seed..cues.len()).take_while(|&pos| cues[pos].is_active_at(time));
    let backward = (0..seed).rev().take_while(|&pos| cues[pos].is_active_at(time));
    ActiveCues(forward.chain(backward).collect())
}

/// Find the cues active at `time`.
#[must_use]
pub fn find_active_cues(time: f64, cues: &[Cue]) -> Vec<&Cue> {
    let active = find_active(time, cues);
    active.resolve(cues).collect()
}
