//! acdetector: multi-pattern word detection over Unicode text using an
//! Aho-Corasick automaton.
//!
//! Built for vocabularies that run to tens of thousands of entries (for
//! example sensitive-word lists) scanned repeatedly against the same
//! automaton. A scan is a single linear pass over the input's codepoints
//! and reports the longest pattern ending in each uninterrupted run of
//! automaton transitions.

mod automaton;

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use arc_swap::ArcSwapOption;
use parking_lot::Mutex;

pub use automaton::{Automaton, Match, Scanner};

/// Errors surfaced by [`Detector`] lifecycle operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectorError {
    /// A rebuild or clear was attempted while scans were in flight. The
    /// request is refused, never queued; retry after the scans complete.
    Busy,
}

impl fmt::Display for DetectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetectorError::Busy => write!(f, "the automaton is busy with active scans"),
        }
    }
}

impl std::error::Error for DetectorError {}

/// RAII active-scan counter bump; scan entry increments, scan exit
/// decrements even if the caller unwinds.
struct ScanGuard<'a> {
    active: &'a AtomicUsize,
}

impl<'a> ScanGuard<'a> {
    fn enter(active: &'a AtomicUsize) -> Self {
        active.fetch_add(1, Ordering::AcqRel);
        Self { active }
    }
}

impl Drop for ScanGuard<'_> {
    fn drop(&mut self) {
        self.active.fetch_sub(1, Ordering::AcqRel);
    }
}

/// A rebuildable word detector guarding one [`Automaton`].
///
/// `Detector` is `Send + Sync`: scans are lock-free reads against an
/// atomically swapped automaton snapshot, while rebuilds are serialized and
/// refused outright with [`DetectorError::Busy`] when scans are in flight.
/// Because a scan pins its snapshot for its whole duration, a rebuild can
/// never tear an automaton out from under it; the busy reject exists to
/// keep the original non-blocking contract, not to protect memory.
///
/// ```
/// use acdetector::Detector;
///
/// let detector = Detector::new();
/// detector.build(&["he", "she", "his", "hers"]).unwrap();
///
/// let matches = detector.scan("ushers");
/// assert_eq!(matches.len(), 2);
/// assert_eq!((matches[0].start, matches[0].end, matches[0].pattern), (1, 4, 1));
///
/// detector.clear().unwrap();
/// assert!(detector.scan("ushers").is_empty());
/// ```
pub struct Detector {
    /// Current automaton snapshot; `None` until the first build or after a
    /// clear. Atomically swappable, lock-free reads.
    automaton: ArcSwapOption<Automaton>,
    /// Number of scans currently executing.
    active_scans: AtomicUsize,
    /// Serializes rebuild/clear against each other.
    build_lock: Mutex<()>,
}

impl Detector {
    /// Create a detector with no automaton; scanning yields no matches
    /// until [`build`](Detector::build) succeeds.
    pub fn new() -> Self {
        Self {
            automaton: ArcSwapOption::const_empty(),
            active_scans: AtomicUsize::new(0),
            build_lock: Mutex::new(()),
        }
    }

    /// Rebuild the automaton from a full vocabulary snapshot.
    ///
    /// Match indices reported by [`scan`](Detector::scan) are positions in
    /// `patterns`, with empty entries keeping their position. Building with
    /// an empty list is valid and equivalent to [`clear`](Detector::clear).
    ///
    /// Fails with [`DetectorError::Busy`] while scans are in flight; the
    /// previous automaton is untouched on failure. The new automaton is
    /// assembled completely before the old one is swapped out, so no
    /// half-built state is ever observable.
    pub fn build<S: AsRef<str>>(&self, patterns: &[S]) -> Result<(), DetectorError> {
        let _build = self.build_lock.lock();
        if self.active_scans.load(Ordering::Acquire) != 0 {
            return Err(DetectorError::Busy);
        }

        if patterns.is_empty() {
            self.automaton.store(None);
        } else {
            let automaton = Automaton::build(patterns);
            self.automaton.store(Some(Arc::new(automaton)));
        }
        Ok(())
    }

    /// Scan `text` against the current automaton.
    ///
    /// Returns matches in order of discovery, spans in codepoint offsets.
    /// Never fails: with no automaton built, or no occurrence in `text`,
    /// the result is simply empty. Any number of scans may run
    /// concurrently; each works against the snapshot current at its entry.
    pub fn scan(&self, text: &str) -> Vec<Match> {
        let _scan = ScanGuard::enter(&self.active_scans);
        match self.automaton.load_full() {
            Some(automaton) => automaton.find_all(text),
            None => Vec::new(),
        }
    }

    /// True while one or more scans are executing.
    pub fn is_active(&self) -> bool {
        self.active_scans.load(Ordering::Acquire) != 0
    }

    /// Release the current automaton.
    ///
    /// Fails with [`DetectorError::Busy`] while scans are in flight.
    /// Clearing a detector that has nothing built succeeds.
    pub fn clear(&self) -> Result<(), DetectorError> {
        let _build = self.build_lock.lock();
        if self.active_scans.load(Ordering::Acquire) != 0 {
            return Err(DetectorError::Busy);
        }
        self.automaton.store(None);
        Ok(())
    }

    /// True if an automaton is currently built.
    pub fn is_built(&self) -> bool {
        self.automaton.load().is_some()
    }
}

impl Default for Detector {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Detector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Detector")
            .field("built", &self.is_built())
            .field("active_scans", &self.active_scans.load(Ordering::Acquire))
            .finish()
    }
}
