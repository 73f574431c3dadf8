//! Next/previous track selection
//!
//! Pure functions over a queue and the current track id. Shuffle is a
//! memoryless uniform pick that never returns the current index while
//! another track exists, so a shuffled session may repeat a track before
//! every other one has played.

use aurora_core::TrackId;
use rand::Rng;

/// Pick the track that follows `current`
///
/// - Empty queue: `None`
/// - Shuffle: uniformly random index other than the current one
/// - Otherwise: the following index, wrapping to the start. A current track
///   that is not queued selects the first track.
pub fn next_track<'q, R: Rng + ?Sized>(
    queue: &'q [TrackId],
    current: Option<&TrackId>,
    shuffle: bool,
    rng: &mut R,
) -> Option<&'q TrackId> {
    if queue.is_empty() {
        return None;
    }

    if shuffle {
        let index = current.and_then(|id| queue.iter().position(|t| t == id));
        return queue.get(random_index(queue.len(), index, rng));
    }

    following(queue, current)
}

/// Non-shuffle successor of `current`, wrapping to the start
///
/// A current track that is not queued (or no current track) selects the
/// first track.
pub fn following<'q>(queue: &'q [TrackId], current: Option<&TrackId>) -> Option<&'q TrackId> {
    if queue.is_empty() {
        return None;
    }

    let next = match current.and_then(|id| queue.iter().position(|t| t == id)) {
        Some(i) => (i + 1) % queue.len(),
        None => 0,
    };
    queue.get(next)
}

/// Pick the track that precedes `current`
///
/// - Empty queue: `None`
/// - Shuffle: same random pick as [`next_track`]
/// - Otherwise: the preceding index, wrapping to the end. A current track
///   that is not queued (or no current track) selects nothing.
pub fn previous_track<'q, R: Rng + ?Sized>(
    queue: &'q [TrackId],
    current: Option<&TrackId>,
    shuffle: bool,
    rng: &mut R,
) -> Option<&'q TrackId> {
    if queue.is_empty() {
        return None;
    }

    let index = current.and_then(|id| queue.iter().position(|t| t == id));

    if shuffle {
        return queue.get(random_index(queue.len(), index, rng));
    }

    let previous = match index? {
        0 => queue.len() - 1,
        i => i - 1,
    };
    queue.get(previous)
}

/// Whether a natural track end can advance without wrapping
///
/// With shuffle on this holds whenever another track is queued.
pub fn has_next_without_wrap(queue: &[TrackId], current: Option<&TrackId>, shuffle: bool) -> bool {
    if shuffle {
        return queue.len() > 1;
    }

    match current.and_then(|id| queue.iter().position(|t| t == id)) {
        Some(i) => i + 1 < queue.len(),
        None => !queue.is_empty(),
    }
}

/// Uniform index in `0..len`, skipping `exclude` when another index exists
fn random_index<R: Rng + ?Sized>(len: usize, exclude: Option<usize>, rng: &mut R) -> usize {
    match exclude {
        Some(current) if len > 1 => {
            let pick = rng.gen_range(0..len - 1);
            if pick < current {
                pick
            } else {
                pick + 1
            }
        }
        Some(current) => current,
        None => rng.gen_range(0..len),
    }
}
