//! Image Load Controller
//!
//! Per-image state machine that decides when to fetch, when to give up, and
//! what to render. It performs no I/O itself: every input returns the
//! [`Command`]s the host must carry out, and the host reports back through
//! [`ImageLoadController::on_load`], [`ImageLoadController::on_error`] and
//! [`ImageLoadController::on_timer`].
//!
//! Every step bumps a generation counter. Attempts and timers are tagged with
//! the generation they were issued in, so a callback that arrives after its
//! attempt was superseded, cancelled, or unmounted is recognized and dropped.

use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use folio_assets::{classify, is_drive_url, to_download_url, with_cache_buster, SourceKind};
use folio_session::SharedRegistry;
use log::{debug, warn};

use crate::config::LoaderConfig;
use crate::fade::FadeIn;
use crate::view::{FallbackPanel, ImageElement, ImageProps, ImageView};

/// Loading phase of one image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Loaded,
    Failed,
}

/// Monotonic step counter of a controller
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl Generation {
    fn next(self) -> Self {
        Generation(self.0 + 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// Deadline for the current attempt
    LoadTimeout,
    /// Pause before the retry attempt starts
    RetryBackoff,
}

/// Handle of the controller's single pending timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timer {
    pub generation: Generation,
    pub kind: TimerKind,
}

/// Side effect requested from the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Point the image element at `src`; report the outcome tagged with `attempt`
    Fetch { attempt: Generation, src: String },
    /// Arm `timer` to fire after `after`
    Schedule { timer: Timer, after: Duration },
    /// Disarm `timer`; it must not fire
    Cancel { timer: Timer },
}

/// Source of the timestamp used to bust caches on retry
pub trait Clock {
    fn now_millis(&self) -> u64;
}

pub type SharedClock = Arc<dyn Clock + Send + Sync>;

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

/// State machine behind one rendered image
pub struct ImageLoadController {
    props: ImageProps,
    kind: SourceKind,
    phase: Phase,
    current_src: String,
    retry_count: u32,
    generation: Generation,
    pending: Option<Timer>,
    fade: FadeIn,
    unmounted: bool,
    registry: SharedRegistry,
    clock: SharedClock,
    config: LoaderConfig,
}

impl ImageLoadController {
    /// Mount an image and start loading it
    ///
    /// An empty source, or a remote source the registry already knows to be
    /// broken, goes straight to [`Phase::Failed`] without any fetch.
    pub fn mount(
        props: ImageProps,
        registry: SharedRegistry,
        clock: SharedClock,
        config: LoaderConfig,
    ) -> (Self, Vec<Command>) {
        let mut controller = Self {
            kind: classify(&props.source),
            current_src: props.source.clone(),
            props,
            phase: Phase::Loading,
            retry_count: 0,
            generation: Generation::default(),
            pending: None,
            fade: FadeIn::new(config.fade_duration_ms, config.fade_easing),
            unmounted: false,
            registry,
            clock,
            config,
        };
        let commands = controller.start();
        (controller, commands)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn props(&self) -> &ImageProps {
        &self.props
    }

    /// URL of the current (or last) attempt
    pub fn current_src(&self) -> &str {
        &self.current_src
    }

    pub fn retry_count(&self) -> u32 {
        self.retry_count
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn pending_timer(&self) -> Option<Timer> {
        self.pending
    }

    /// Loaded or failed, with nothing left to wait for
    pub fn is_settled(&self) -> bool {
        self.phase != Phase::Loading && self.pending.is_none()
    }

    /// The image element finished loading
    pub fn on_load(&mut self, attempt: Generation) -> Vec<Command> {
        if !self.is_current_attempt(attempt) {
            debug!("Ignoring load of superseded attempt for {}", self.props.source);
            return Vec::new();
        }

        // Disarm the deadline before signalling success
        let mut commands = Vec::new();
        self.cancel_pending(&mut commands);
        self.enter(Phase::Loaded);
        self.fade.reset();
        commands
    }

    /// The image element reported an error
    pub fn on_error(&mut self, attempt: Generation) -> Vec<Command> {
        if !self.is_current_attempt(attempt) {
            debug!("Ignoring error of superseded attempt for {}", self.props.source);
            return Vec::new();
        }

        let mut commands = Vec::new();
        self.cancel_pending(&mut commands);

        if self.retry_count < self.config.max_retries {
            debug!(
                "Image failed, retrying in {:?}: {}",
                self.config.retry_delay, self.current_src
            );
            self.generation = self.generation.next();
            commands.push(self.arm(TimerKind::RetryBackoff, self.config.retry_delay));
        } else {
            warn!(
                "Failed to load image after {} attempts: {}",
                self.retry_count + 1,
                self.props.source
            );
            self.fail();
        }
        commands
    }

    /// A timer scheduled through [`Command::Schedule`] fired
    pub fn on_timer(&mut self, timer: Timer) -> Vec<Command> {
        if self.unmounted || self.pending != Some(timer) {
            return Vec::new();
        }
        self.pending = None;

        match timer.kind {
            TimerKind::LoadTimeout => {
                // A load delivered in the same tick already settled the image
                if self.phase != Phase::Loading {
                    return Vec::new();
                }
                warn!("Image load timeout: {}", self.current_src);
                self.fail();
                Vec::new()
            }
            TimerKind::RetryBackoff => self.retry(),
        }
    }

    /// The caller passed a different source
    ///
    /// A failed image stays failed; anything else starts over from the
    /// mount pre-check.
    pub fn set_source(&mut self, source: impl Into<String>) -> Vec<Command> {
        let source = source.into();
        if self.unmounted || source == self.props.source {
            return Vec::new();
        }

        if self.phase == Phase::Failed {
            debug!("Keeping fallback after source change to {}", source);
            self.props.source = source;
            return Vec::new();
        }

        let mut commands = Vec::new();
        self.cancel_pending(&mut commands);
        self.props.source = source;
        commands.extend(self.start());
        commands
    }

    /// Tear down; outstanding callbacks become no-ops
    pub fn unmount(&mut self) -> Vec<Command> {
        let mut commands = Vec::new();
        self.cancel_pending(&mut commands);
        self.unmounted = true;
        self.generation = self.generation.next();
        commands
    }

    /// Advance the fade-in of a loaded image
    pub fn advance_fade(&mut self, delta_ms: f32) {
        if self.phase == Phase::Loaded {
            self.fade.tick(delta_ms);
        }
    }

    pub fn view(&self) -> ImageView {
        match self.phase {
            Phase::Loading => ImageView::Spinner {
                image: ImageElement::new(&self.props, &self.current_src, 0.0),
            },
            Phase::Loaded => ImageView::Image(ImageElement::new(
                &self.props,
                &self.current_src,
                self.fade.opacity(),
            )),
            Phase::Failed => ImageView::Fallback(FallbackPanel::new(&self.props)),
        }
    }

    /// Mount pre-check followed by the first attempt
    fn start(&mut self) -> Vec<Command> {
        self.kind = classify(&self.props.source);
        self.current_src = self.props.source.clone();
        self.retry_count = 0;
        self.fade.reset();

        match self.kind {
            SourceKind::Empty => {
                self.enter(Phase::Failed);
                Vec::new()
            }
            SourceKind::Remote if self.registry.contains(&self.props.source) => {
                debug!("Image already known to fail: {}", self.props.source);
                self.enter(Phase::Failed);
                Vec::new()
            }
            SourceKind::Local | SourceKind::Remote => {
                self.enter(Phase::Loading);
                self.attempt()
            }
        }
    }

    fn retry(&mut self) -> Vec<Command> {
        self.retry_count += 1;
        self.current_src = self.retry_src();
        self.generation = self.generation.next();
        self.attempt()
    }

    /// URL for the retry attempt
    ///
    /// Drive links go through the retry endpoint, other remote URLs get a
    /// cache buster, and local assets are retried as-is.
    fn retry_src(&self) -> String {
        let source = &self.props.source;
        match self.kind {
            SourceKind::Remote if is_drive_url(source) => to_download_url(source),
            SourceKind::Remote => {
                with_cache_buster(source, self.retry_count, self.clock.now_millis())
            }
            SourceKind::Local | SourceKind::Empty => source.clone(),
        }
    }

    fn attempt(&mut self) -> Vec<Command> {
        let fetch = Command::Fetch {
            attempt: self.generation,
            src: self.current_src.clone(),
        };
        let deadline = self.arm(TimerKind::LoadTimeout, self.config.load_timeout);
        vec![fetch, deadline]
    }

    fn arm(&mut self, kind: TimerKind, after: Duration) -> Command {
        let timer = Timer {
            generation: self.generation,
            kind,
        };
        self.pending = Some(timer);
        Command::Schedule { timer, after }
    }

    fn cancel_pending(&mut self, commands: &mut Vec<Command>) {
        if let Some(timer) = self.pending.take() {
            commands.push(Command::Cancel { timer });
        }
    }

    fn fail(&mut self) {
        if self.kind.is_remote() {
            self.registry.record(&self.props.source);
        }
        self.enter(Phase::Failed);
    }

    fn enter(&mut self, phase: Phase) {
        self.phase = phase;
        self.generation = self.generation.next();
    }

    /// Whether `attempt` is the fetch currently in flight
    fn is_current_attempt(&self, attempt: Generation) -> bool {
        !self.unmounted
            && self.phase == Phase::Loading
            && attempt == self.generation
            && matches!(
                self.pending,
                Some(Timer {
                    kind: TimerKind::LoadTimeout,
                    ..
                })
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_session::{FailedUrlRegistry, FailureRegistry, MemorySessionStore};

    struct FixedClock(u64);

    impl Clock for FixedClock {
        fn now_millis(&self) -> u64 {
            self.0
        }
    }

    /// Registry that only remembers what it is told, ignoring normalization
    #[derive(Default)]
    struct RecordingRegistry {
        recorded: std::sync::Mutex<Vec<String>>,
    }

    impl FailureRegistry for RecordingRegistry {
        fn contains(&self, url: &str) -> bool {
            self.recorded.lock().unwrap().iter().any(|u| u == url)
        }

        fn record(&self, url: &str) {
            self.recorded.lock().unwrap().push(url.to_string());
        }
    }

    fn memory_registry() -> SharedRegistry {
        Arc::new(FailedUrlRegistry::new(MemorySessionStore::new()))
    }

    fn mount_with(source: &str, registry: SharedRegistry) -> (ImageLoadController, Vec<Command>) {
        ImageLoadController::mount(
            ImageProps::new(source, "Project screenshot").with_fallback_text("Screenshot"),
            registry,
            Arc::new(FixedClock(1_700_000_000_000)),
            LoaderConfig::default(),
        )
    }

    fn fetch_of(commands: &[Command]) -> (Generation, String) {
        commands
            .iter()
            .find_map(|c| match c {
                Command::Fetch { attempt, src } => Some((*attempt, src.clone())),
                _ => None,
            })
            .expect("no fetch command")
    }

    fn scheduled(commands: &[Command]) -> Option<(Timer, Duration)> {
        commands.iter().find_map(|c| match c {
            Command::Schedule { timer, after } => Some((*timer, *after)),
            _ => None,
        })
    }

    #[test]
    fn test_empty_source_fails_immediately() {
        let registry = Arc::new(RecordingRegistry::default());
        let (controller, commands) = mount_with("", registry.clone());

        assert_eq!(controller.phase(), Phase::Failed);
        assert!(commands.is_empty());
        assert!(controller.pending_timer().is_none());
        assert!(registry.recorded.lock().unwrap().is_empty());

        match controller.view() {
            ImageView::Fallback(panel) => assert_eq!(panel.text, "Screenshot"),
            other => panic!("expected fallback, got {:?}", other),
        }
    }

    #[test]
    fn test_mount_starts_attempt() {
        let (controller, commands) = mount_with("https://x.io/a.png", memory_registry());

        assert_eq!(controller.phase(), Phase::Loading);
        let (_, src) = fetch_of(&commands);
        assert_eq!(src, "https://x.io/a.png");

        let (timer, after) = scheduled(&commands).unwrap();
        assert_eq!(timer.kind, TimerKind::LoadTimeout);
        assert_eq!(after, Duration::from_millis(8000));
        assert!(controller.view().is_spinner());
    }

    #[test]
    fn test_load_success() {
        let (mut controller, commands) = mount_with("https://x.io/a.png", memory_registry());
        let (attempt, _) = fetch_of(&commands);
        let (timer, _) = scheduled(&commands).unwrap();

        let commands = controller.on_load(attempt);
        assert_eq!(commands, vec![Command::Cancel { timer }]);
        assert_eq!(controller.phase(), Phase::Loaded);
        assert!(controller.is_settled());

        match controller.view() {
            ImageView::Image(img) => {
                assert_eq!(img.src, "https://x.io/a.png");
                assert_eq!(img.opacity, 0.0);
            }
            other => panic!("expected image, got {:?}", other),
        }

        controller.advance_fade(500.0);
        assert_eq!(controller.view().element().unwrap().opacity, 1.0);
    }

    #[test]
    fn test_late_timeout_after_load_is_noop() {
        let registry = Arc::new(RecordingRegistry::default());
        let (mut controller, commands) = mount_with("https://x.io/a.png", registry.clone());
        let (attempt, _) = fetch_of(&commands);
        let (timer, _) = scheduled(&commands).unwrap();

        // Load lands at 7999ms, the host fires the deadline anyway
        controller.on_load(attempt);
        assert!(controller.on_timer(timer).is_empty());

        assert_eq!(controller.phase(), Phase::Loaded);
        assert!(registry.recorded.lock().unwrap().is_empty());
    }

    #[test]
    fn test_first_error_schedules_retry() {
        let registry = Arc::new(RecordingRegistry::default());
        let (mut controller, commands) = mount_with("https://x.io/a.png?w=300", registry.clone());
        let (attempt, _) = fetch_of(&commands);
        let (deadline, _) = scheduled(&commands).unwrap();

        let commands = controller.on_error(attempt);
        assert_eq!(commands[0], Command::Cancel { timer: deadline });
        let (backoff, after) = scheduled(&commands).unwrap();
        assert_eq!(backoff.kind, TimerKind::RetryBackoff);
        assert_eq!(after, Duration::from_millis(1000));

        // Still loading, nothing recorded, retry not yet counted
        assert_eq!(controller.phase(), Phase::Loading);
        assert_eq!(controller.retry_count(), 0);
        assert!(registry.recorded.lock().unwrap().is_empty());

        let commands = controller.on_timer(backoff);
        assert_eq!(controller.retry_count(), 1);
        let (_, src) = fetch_of(&commands);
        assert_eq!(src, "https://x.io/a.png?w=300&_retry=1&t=1700000000000");
        assert_eq!(controller.current_src(), src);

        let (timer, after) = scheduled(&commands).unwrap();
        assert_eq!(timer.kind, TimerKind::LoadTimeout);
        assert_eq!(after, Duration::from_millis(8000));
    }

    #[test]
    fn test_drive_retry_uses_view_endpoint() {
        let share = "https://drive.google.com/file/d/ABC123/view?usp=sharing";
        let (mut controller, commands) = mount_with(share, memory_registry());
        let (attempt, src) = fetch_of(&commands);
        assert_eq!(src, share);

        let commands = controller.on_error(attempt);
        let (backoff, _) = scheduled(&commands).unwrap();
        let commands = controller.on_timer(backoff);

        let (_, src) = fetch_of(&commands);
        assert_eq!(src, "https://drive.google.com/uc?export=view&id=ABC123");
    }

    #[test]
    fn test_local_retry_is_verbatim() {
        let registry = Arc::new(RecordingRegistry::default());
        let (mut controller, commands) = mount_with("/assets/headshot.png", registry.clone());
        let (attempt, _) = fetch_of(&commands);

        let commands = controller.on_error(attempt);
        let (backoff, _) = scheduled(&commands).unwrap();
        let commands = controller.on_timer(backoff);
        let (attempt, src) = fetch_of(&commands);
        assert_eq!(src, "/assets/headshot.png");

        // Exhausted, but local assets are never recorded
        controller.on_error(attempt);
        assert_eq!(controller.phase(), Phase::Failed);
        assert!(registry.recorded.lock().unwrap().is_empty());
    }

    #[test]
    fn test_exhausted_retries_record_source() {
        let registry = memory_registry();
        let (mut controller, commands) = mount_with("https://x.io/gone.png", registry.clone());
        let (attempt, _) = fetch_of(&commands);

        let commands = controller.on_error(attempt);
        let (backoff, _) = scheduled(&commands).unwrap();
        let commands = controller.on_timer(backoff);
        let (attempt, _) = fetch_of(&commands);
        let (deadline, _) = scheduled(&commands).unwrap();

        let commands = controller.on_error(attempt);
        assert_eq!(commands, vec![Command::Cancel { timer: deadline }]);
        assert_eq!(controller.phase(), Phase::Failed);
        assert_eq!(controller.retry_count(), 1);
        assert!(registry.contains("https://x.io/gone.png"));

        // A fresh instance in the same session never fetches
        let (fresh, commands) = mount_with("https://x.io/gone.png", registry);
        assert_eq!(fresh.phase(), Phase::Failed);
        assert!(commands.is_empty());
    }

    #[test]
    fn test_timeout_is_terminal() {
        let registry = memory_registry();
        let (mut controller, commands) = mount_with("https://x.io/slow.png", registry.clone());
        let (attempt, _) = fetch_of(&commands);
        let (deadline, _) = scheduled(&commands).unwrap();

        assert!(controller.on_timer(deadline).is_empty());
        assert_eq!(controller.phase(), Phase::Failed);
        assert_eq!(controller.retry_count(), 0);
        assert!(registry.contains("https://x.io/slow.png"));

        // The fetch resolving afterwards changes nothing
        assert!(controller.on_load(attempt).is_empty());
        assert_eq!(controller.phase(), Phase::Failed);
    }

    #[test]
    fn test_timeout_during_retry_is_terminal() {
        let registry = Arc::new(RecordingRegistry::default());
        let (mut controller, commands) = mount_with("https://x.io/flaky.png", registry.clone());
        let (first, _) = fetch_of(&commands);
        let (first_deadline, _) = scheduled(&commands).unwrap();

        let commands = controller.on_error(first);
        let (backoff, _) = scheduled(&commands).unwrap();
        let commands = controller.on_timer(backoff);
        let (second, src) = fetch_of(&commands);
        let (deadline, after) = scheduled(&commands).unwrap();
        assert_eq!(src, "https://x.io/flaky.png?_retry=1&t=1700000000000");
        assert_eq!(deadline.kind, TimerKind::LoadTimeout);
        assert_eq!(after, Duration::from_millis(8000));
        assert_ne!(deadline, first_deadline);

        // The first attempt's deadline no longer counts
        assert!(controller.on_timer(first_deadline).is_empty());
        assert_eq!(controller.phase(), Phase::Loading);

        assert!(controller.on_timer(deadline).is_empty());
        assert_eq!(controller.phase(), Phase::Failed);
        assert_eq!(controller.retry_count(), 1);
        assert_eq!(
            *registry.recorded.lock().unwrap(),
            vec!["https://x.io/flaky.png".to_string()]
        );

        assert!(controller.on_load(second).is_empty());
        assert!(controller.view().is_fallback());
    }

    #[test]
    fn test_local_timeout_not_recorded() {
        let registry = Arc::new(RecordingRegistry::default());
        let (mut controller, commands) = mount_with("./images/1.jpg", registry.clone());
        let (deadline, _) = scheduled(&commands).unwrap();

        controller.on_timer(deadline);
        assert_eq!(controller.phase(), Phase::Failed);
        assert!(registry.recorded.lock().unwrap().is_empty());
    }

    #[test]
    fn test_stale_events_ignored() {
        let (mut controller, commands) = mount_with("https://x.io/a.png", memory_registry());
        let (first, _) = fetch_of(&commands);

        let commands = controller.on_error(first);
        let (backoff, _) = scheduled(&commands).unwrap();

        // Duplicate error and a load from the failed attempt during backoff
        assert!(controller.on_error(first).is_empty());
        assert!(controller.on_load(first).is_empty());
        assert_eq!(controller.phase(), Phase::Loading);
        assert_eq!(controller.pending_timer(), Some(backoff));

        let commands = controller.on_timer(backoff);
        let (second, _) = fetch_of(&commands);
        assert_ne!(first, second);
        assert!(controller.on_load(first).is_empty());
        controller.on_load(second);
        assert_eq!(controller.phase(), Phase::Loaded);
    }

    #[test]
    fn test_at_most_one_pending_timer() {
        let (mut controller, commands) = mount_with("https://x.io/a.png", memory_registry());
        let (attempt, _) = fetch_of(&commands);
        let (deadline, _) = scheduled(&commands).unwrap();

        let commands = controller.on_error(attempt);
        let cancels = commands.iter().filter(|c| matches!(c, Command::Cancel { .. })).count();
        let schedules = commands.iter().filter(|c| matches!(c, Command::Schedule { .. })).count();
        assert_eq!((cancels, schedules), (1, 1));
        assert_ne!(controller.pending_timer(), Some(deadline));

        // The superseded deadline firing is ignored
        assert!(controller.on_timer(deadline).is_empty());
        assert_eq!(controller.phase(), Phase::Loading);
    }

    #[test]
    fn test_prefailed_remote_short_circuits() {
        let registry = memory_registry();
        registry.record("https://drive.google.com/file/d/ABC123/view?usp=sharing");

        let (controller, commands) =
            mount_with("https://drive.google.com/uc?export=view&id=ABC123", registry);
        assert_eq!(controller.phase(), Phase::Failed);
        assert!(commands.is_empty());
        assert_eq!(controller.retry_count(), 0);
    }

    #[test]
    fn test_source_change_restarts() {
        let (mut controller, commands) = mount_with("https://x.io/a.png", memory_registry());
        let (old, _) = fetch_of(&commands);
        let (deadline, _) = scheduled(&commands).unwrap();

        let commands = controller.set_source("https://x.io/b.png");
        assert_eq!(commands[0], Command::Cancel { timer: deadline });
        let (new, src) = fetch_of(&commands);
        assert_eq!(src, "https://x.io/b.png");
        assert_ne!(old, new);

        assert!(controller.on_load(old).is_empty());
        controller.on_load(new);
        assert_eq!(controller.phase(), Phase::Loaded);

        // Same source again is not a change
        assert!(controller.set_source("https://x.io/b.png").is_empty());
    }

    #[test]
    fn test_source_change_to_known_failure() {
        let registry = memory_registry();
        registry.record("https://x.io/gone.png");
        let (mut controller, _) = mount_with("https://x.io/a.png", registry);

        let commands = controller.set_source("https://x.io/gone.png?v=2");
        assert!(commands.iter().all(|c| matches!(c, Command::Cancel { .. })));
        assert_eq!(controller.phase(), Phase::Failed);
        assert!(controller.pending_timer().is_none());
    }

    #[test]
    fn test_failed_does_not_reset_on_source_change() {
        let (mut controller, _) = mount_with("", memory_registry());
        assert!(controller.set_source("https://x.io/a.png").is_empty());
        assert_eq!(controller.phase(), Phase::Failed);
        assert!(controller.view().is_fallback());
    }

    #[test]
    fn test_unmount_cancels_and_silences() {
        let registry = Arc::new(RecordingRegistry::default());
        let (mut controller, commands) = mount_with("https://x.io/a.png", registry.clone());
        let (attempt, _) = fetch_of(&commands);
        let (deadline, _) = scheduled(&commands).unwrap();

        assert_eq!(controller.unmount(), vec![Command::Cancel { timer: deadline }]);
        assert!(controller.on_timer(deadline).is_empty());
        assert!(controller.on_error(attempt).is_empty());
        assert!(controller.on_load(attempt).is_empty());
        assert!(controller.set_source("https://x.io/b.png").is_empty());
        assert!(registry.recorded.lock().unwrap().is_empty());
    }

    #[test]
    fn test_system_clock_is_after_epoch() {
        assert!(SystemClock.now_millis() > 0);
    }
}
