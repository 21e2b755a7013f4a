//! Detection loop - state machine and tick scheduling

use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use tracing::{debug, info, warn};

use super::process::{EnumerationError, ProcessLister};
use super::watchlist::WatchList;

/// Fixed polling interval between detection ticks.
pub const POLL_INTERVAL: Duration = Duration::from_millis(5000);

/// Whether the detector is actively polling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetectorState {
    #[default]
    Idle,
    Detecting,
}

impl DetectorState {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Detecting => "Detecting",
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Self::Detecting)
    }
}

/// Watched applications found running at one tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectionResult {
    /// Matched process names, in watch-list order.
    pub apps: Vec<String>,
    /// Local time the snapshot was taken.
    pub detected_at: DateTime<Local>,
}

impl DetectionResult {
    /// Comma-separated list of the matched applications.
    pub fn summary(&self) -> String {
        self.apps.join(", ")
    }
}

/// Outcome of a single tick, consumed by the presentation layer.
#[derive(Debug)]
pub enum TickOutcome {
    /// At least one watched process is running.
    Detected(DetectionResult),
    /// Enumeration succeeded; nothing on the watch list is running.
    Clear,
    /// Enumeration failed; the tick was skipped and the next one retries.
    Failed(EnumerationError),
}

/// Periodic detection loop over a process lister.
///
/// Driven cooperatively: the UI calls [`Detector::poll`] once per frame and
/// the detector decides when an interval has elapsed. At most one tick runs
/// per interval, ticks never overlap, and [`Detector::stop`] only prevents
/// future ticks. All mutable state lives on the instance.
pub struct Detector<L> {
    watch_list: WatchList,
    lister: L,
    state: DetectorState,
    interval: Duration,
    /// Deadline for the next tick; `None` unless detecting.
    next_tick: Option<Instant>,
}

impl<L: ProcessLister> Detector<L> {
    pub fn new(watch_list: WatchList, lister: L) -> Self {
        Self {
            watch_list,
            lister,
            state: DetectorState::Idle,
            interval: POLL_INTERVAL,
            next_tick: None,
        }
    }

    pub fn state(&self) -> DetectorState {
        self.state
    }

    pub fn watch_list(&self) -> &WatchList {
        &self.watch_list
    }

    /// Idle -> Detecting. The first tick fires one full interval after `now`.
    ///
    /// Calling while already detecting is a no-op and does not reset the
    /// pending deadline, so there is never more than one active schedule.
    pub fn start(&mut self, now: Instant) {
        if self.state.is_active() {
            debug!("Start ignored, already detecting");
            return;
        }
        self.state = DetectorState::Detecting;
        self.next_tick = Some(now + self.interval);
        info!("Detection started");
    }

    /// Detecting -> Idle; cancels the pending tick. Idempotent.
    pub fn stop(&mut self) {
        if self.state.is_active() {
            info!("Detection stopped");
        }
        self.state = DetectorState::Idle;
        self.next_tick = None;
    }

    /// Fires a tick if detecting and the deadline has elapsed, then re-arms.
    pub fn poll(&mut self, now: Instant) -> Option<TickOutcome> {
        let deadline = self.next_tick?;
        if now < deadline {
            return None;
        }
        self.next_tick = Some(now + self.interval);
        self.tick()
    }

    /// One detection pass against the current process list.
    ///
    /// Emits nothing while idle. An enumeration failure is reported as
    /// [`TickOutcome::Failed`] and leaves the state unchanged; the next
    /// scheduled tick retries naturally.
    pub fn tick(&mut self) -> Option<TickOutcome> {
        if !self.state.is_active() {
            return None;
        }

        let snapshot = match self.lister.running_processes() {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!("Skipping tick: {}", e);
                return Some(TickOutcome::Failed(e));
            }
        };

        let apps = self.watch_list.matches(&snapshot);
        if apps.is_empty() {
            Some(TickOutcome::Clear)
        } else {
            info!("Recording software detected: {}", apps.join(", "));
            Some(TickOutcome::Detected(DetectionResult {
                apps,
                detected_at: Local::now(),
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashSet, VecDeque};

    /// Lister that replays a scripted sequence of snapshots and failures.
    /// The last response repeats once the script is exhausted.
    struct FakeLister {
        script: VecDeque<Result<Vec<&'static str>, &'static str>>,
        last: Result<Vec<&'static str>, &'static str>,
        calls: usize,
    }

    impl FakeLister {
        fn new(script: Vec<Result<Vec<&'static str>, &'static str>>) -> Self {
            let last = script.last().cloned().unwrap_or(Ok(vec![]));
            Self {
                script: script.into(),
                last,
                calls: 0,
            }
        }

        fn running(names: &[&'static str]) -> Self {
            Self::new(vec![Ok(names.to_vec())])
        }
    }

    impl ProcessLister for FakeLister {
        fn running_processes(&mut self) -> Result<HashSet<String>, EnumerationError> {
            self.calls += 1;
            let response = self.script.pop_front().unwrap_or_else(|| self.last.clone());
            match response {
                Ok(names) => Ok(names.iter().map(|n| n.to_string()).collect()),
                Err(msg) => Err(EnumerationError(msg.to_string())),
            }
        }
    }

    fn detector(watch: &[&str], lister: FakeLister) -> Detector<FakeLister> {
        Detector::new(WatchList::new(watch.iter().copied()), lister)
    }

    fn apps(outcome: Option<TickOutcome>) -> Vec<String> {
        match outcome {
            Some(TickOutcome::Detected(result)) => result.apps,
            _ => panic!("expected a detection"),
        }
    }

    // ── tick semantics ───────────────────────────────────────────────────────

    #[test]
    fn tick_reports_match_in_watch_list_order() {
        let mut d = detector(&["a", "b", "c"], FakeLister::running(&["c", "x", "a"]));
        d.start(Instant::now());
        assert_eq!(apps(d.tick()), vec!["a", "c"]);
    }

    #[test]
    fn tick_reports_clear_when_nothing_matches() {
        let mut d = detector(&["a", "b", "c"], FakeLister::running(&["x", "y"]));
        d.start(Instant::now());
        assert!(matches!(d.tick(), Some(TickOutcome::Clear)));
    }

    #[test]
    fn tick_while_idle_emits_nothing() {
        let mut d = detector(&["a"], FakeLister::running(&["a"]));
        assert!(d.tick().is_none());
        assert_eq!(d.lister.calls, 0);
    }

    #[test]
    fn stop_then_tick_emits_nothing() {
        let mut d = detector(&["a"], FakeLister::running(&["a"]));
        d.start(Instant::now());
        d.stop();
        assert!(d.tick().is_none());
        assert_eq!(d.state(), DetectorState::Idle);
    }

    // ── failure handling ─────────────────────────────────────────────────────

    #[test]
    fn enumeration_failure_skips_tick_and_stays_detecting() {
        let mut d = detector(
            &["a"],
            FakeLister::new(vec![Err("access denied"), Ok(vec!["a"])]),
        );
        d.start(Instant::now());

        assert!(matches!(d.tick(), Some(TickOutcome::Failed(_))));
        assert_eq!(d.state(), DetectorState::Detecting);

        // Next tick proceeds normally with a healthy lister.
        assert_eq!(apps(d.tick()), vec!["a"]);
    }

    // ── start/stop state machine ─────────────────────────────────────────────

    #[test]
    fn start_is_idempotent() {
        let t0 = Instant::now();
        let mut d = detector(&["a"], FakeLister::running(&["a"]));

        d.start(t0);
        // A second start mid-interval must not reset the pending deadline.
        d.start(t0 + Duration::from_secs(3));
        assert_eq!(d.state(), DetectorState::Detecting);

        assert!(d.poll(t0 + POLL_INTERVAL).is_some());
    }

    #[test]
    fn stop_is_idempotent() {
        let mut d = detector(&["a"], FakeLister::running(&["a"]));
        d.start(Instant::now());
        d.stop();
        d.stop();
        assert_eq!(d.state(), DetectorState::Idle);
    }

    // ── poll scheduling ──────────────────────────────────────────────────────

    #[test]
    fn poll_waits_a_full_interval_after_start() {
        let t0 = Instant::now();
        let mut d = detector(&["a"], FakeLister::running(&["a"]));
        d.start(t0);

        assert!(d.poll(t0).is_none());
        assert!(d.poll(t0 + POLL_INTERVAL - Duration::from_millis(1)).is_none());
        assert!(d.poll(t0 + POLL_INTERVAL).is_some());
    }

    #[test]
    fn poll_fires_at_most_one_tick_per_interval() {
        let t0 = Instant::now();
        let mut d = detector(&["a"], FakeLister::running(&["a"]));
        d.start(t0);

        let at = t0 + POLL_INTERVAL;
        assert!(d.poll(at).is_some());
        // Same instant again: the deadline has been re-armed.
        assert!(d.poll(at).is_none());
        assert_eq!(d.lister.calls, 1);

        assert!(d.poll(at + POLL_INTERVAL).is_some());
        assert_eq!(d.lister.calls, 2);
    }

    #[test]
    fn poll_while_idle_emits_nothing() {
        let mut d = detector(&["a"], FakeLister::running(&["a"]));
        assert!(d.poll(Instant::now() + POLL_INTERVAL).is_none());
    }
}
