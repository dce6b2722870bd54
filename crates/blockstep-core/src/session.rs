//! Session controller: setup, per-period render, cleanup.

use crate::config::{RenderMode, SessionConfig};
use crate::host::{AudioPeriod, HostInfo};
use crate::inference::{InferenceBackend, ModelShape};
use crate::scatter::{OutputScatter, ScatterStats};
use crate::timing::{log_capacity, TimingRecorder, TimingSummary};
use crate::window::{CircularBuffer, TriggerScheduler, WindowAssembler, WindowSpec};
use crate::{Error, Result};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Lifecycle of a [`Session`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Uninitialized,
    Ready,
    Running,
    Stopped,
}

/// Outcome of one [`Session::render`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStatus {
    Continue,
    /// The timing log filled during this period and the host was asked to stop.
    StopRequested,
    /// The session had already stopped; nothing was processed.
    Stopped,
}

/// What [`Session::cleanup`] did.
#[derive(Debug, Default)]
pub struct CleanupReport {
    pub summary: Option<TimingSummary>,
    /// Where the timing log was written.
    pub log_path: Option<PathBuf>,
    /// Why the timing log could not be written.
    pub log_error: Option<std::io::Error>,
    pub frames_processed: u64,
    pub triggers: u64,
    pub scatter: ScatterStats,
}

/// Buffers sized at setup and touched only from the render thread.
struct Pipeline {
    history: CircularBuffer,
    scheduler: TriggerScheduler,
    assembler: WindowAssembler,
    params: Box<[f32]>,
    output: Box<[f32]>,
    scatter: OutputScatter,
    recorder: Option<TimingRecorder>,
}

impl Pipeline {
    fn new(spec: &WindowSpec, history_capacity: usize, params: Vec<f32>) -> Self {
        Self {
            history: CircularBuffer::with_preroll(history_capacity, spec.preroll()),
            scheduler: TriggerScheduler::new(spec.stride_samples),
            assembler: WindowAssembler::new(spec.window_samples, spec.stride_samples),
            params: params.into_boxed_slice(),
            output: vec![0.0; spec.output_samples].into_boxed_slice(),
            scatter: OutputScatter::new(),
            recorder: None,
        }
    }
}

/// One benchmarking run of a windowed model over a live stream.
///
/// The host calls [`setup`](Self::setup) once, [`render`](Self::render) once
/// per period from the audio thread, then [`cleanup`](Self::cleanup). Every
/// buffer is allocated in `setup`; `render` does not allocate.
///
/// # Example
///
/// ```ignore
/// let config = SessionConfig::preset(ModelPreset::Topline).with_mode(RenderMode::SelfTest);
/// let backend = ClosureBackend::identity(ModelShape::new(16, 0, 16));
/// let mut session = Session::new(config, backend);
///
/// let mut host = OfflineHost::new(signal, 48000.0, 256);
/// session.setup(&host.info())?;
/// while let Some(mut period) = host.next_period() {
///     session.render(&mut period)?;
/// }
/// let report = session.cleanup();
/// ```
pub struct Session {
    config: SessionConfig,
    backend: Box<dyn InferenceBackend + Send>,
    state: SessionState,
    pipeline: Option<Pipeline>,
    model_loaded: bool,
    stop_requested: bool,
    frames_processed: u64,
}

impl Session {
    pub fn new(config: SessionConfig, backend: impl InferenceBackend + Send + 'static) -> Self {
        Self::with_boxed_backend(config, Box::new(backend))
    }

    pub fn with_boxed_backend(
        config: SessionConfig,
        backend: Box<dyn InferenceBackend + Send>,
    ) -> Self {
        Self {
            config,
            backend,
            state: SessionState::Uninitialized,
            pipeline: None,
            model_loaded: false,
            stop_requested: false,
            frames_processed: 0,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Input-to-output delay of the self-test echo, in samples.
    pub fn latency_samples(&self) -> usize {
        self.config.window.latency_samples()
    }

    pub fn frames_processed(&self) -> u64 {
        self.frames_processed
    }

    pub fn triggers(&self) -> u64 {
        self.pipeline
            .as_ref()
            .map_or(0, |p| p.scheduler.triggers_fired())
    }

    /// Timings recorded so far, in invocation order.
    pub fn timing_entries(&self) -> &[u64] {
        self.pipeline
            .as_ref()
            .and_then(|p| p.recorder.as_ref())
            .map_or(&[], |r| r.entries())
    }

    /// Capacity of the timing log, `None` when timing is disabled or before setup.
    pub fn timing_capacity(&self) -> Option<usize> {
        self.pipeline
            .as_ref()
            .and_then(|p| p.recorder.as_ref())
            .map(|r| r.capacity())
    }

    pub fn is_complete(&self) -> bool {
        self.pipeline
            .as_ref()
            .and_then(|p| p.recorder.as_ref())
            .is_some_and(|r| r.is_full())
    }

    pub fn stop_requested(&self) -> bool {
        self.stop_requested
    }

    /// Allocate buffers, size the timing log and load the model.
    pub fn setup(&mut self, host: &HostInfo) -> Result<()> {
        if self.state != SessionState::Uninitialized {
            return Err(Error::InvalidState(self.state));
        }
        self.config.validate()?;
        if !(host.sample_rate.is_finite() && host.sample_rate > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "sample_rate {} must be positive",
                host.sample_rate
            )));
        }

        let spec = self.config.window.clone();
        let history_capacity = self.config.history_capacity_for(host.sample_rate);
        self.config.check_history(history_capacity)?;

        if host.period_frames % spec.stride_samples != 0 {
            tracing::warn!(
                period_frames = host.period_frames,
                stride = spec.stride_samples,
                "period size is not a multiple of the stride; output blocks may straddle periods"
            );
        }
        if spec.output_samples < spec.stride_samples {
            tracing::warn!(
                output = spec.output_samples,
                stride = spec.stride_samples,
                "output block shorter than stride; remaining frames are left untouched"
            );
        }

        let mut pipeline =
            Pipeline::new(&spec, history_capacity, self.config.resolved_aux_params());
        if self.config.timing_enabled {
            let capacity = log_capacity(
                host.sample_rate,
                self.config.test_duration_secs,
                spec.output_samples,
            );
            let budget = Duration::from_secs_f64(spec.stride_samples as f64 / host.sample_rate);
            pipeline.recorder = Some(TimingRecorder::new(capacity, budget));
        }

        let asset = self.config.asset();
        let shape = self
            .backend
            .load(&self.config.session_id, &asset)
            .map_err(|e| {
                tracing::error!(
                    model = %asset.path().display(),
                    error = %e,
                    "unable to load model"
                );
                Error::ModelLoad(e)
            })?;
        self.model_loaded = true;

        if let Err(e) = check_shape(&spec, shape) {
            tracing::error!(error = %e, "model does not fit the configured window");
            self.backend.release();
            self.model_loaded = false;
            return Err(e);
        }

        tracing::info!(
            backend = %self.backend.capabilities().name,
            model = %asset.file_name(),
            window = spec.window_samples,
            stride = spec.stride_samples,
            output = spec.output_samples,
            history = history_capacity,
            latency = spec.latency_samples(),
            log_capacity = ?pipeline.recorder.as_ref().map(|r| r.capacity()),
            mode = ?self.config.mode,
            "session ready"
        );

        self.pipeline = Some(pipeline);
        self.state = SessionState::Ready;
        Ok(())
    }

    /// Process one host period, sample by sample.
    ///
    /// Once the timing log fills, the host is asked to stop exactly once and the
    /// rest of the period is left unprocessed. An inference failure stops the
    /// session and is returned as an error.
    pub fn render<P: AudioPeriod + ?Sized>(&mut self, period: &mut P) -> Result<RenderStatus> {
        match self.state {
            SessionState::Ready | SessionState::Running => {}
            SessionState::Stopped => return Ok(RenderStatus::Stopped),
            SessionState::Uninitialized => return Err(Error::InvalidState(self.state)),
        }
        let Some(pipeline) = self.pipeline.as_mut() else {
            return Err(Error::InvalidState(self.state));
        };
        self.state = SessionState::Running;

        let spec = &self.config.window;
        let offset = spec.passthrough_offset();
        let passthrough = offset..offset + spec.output_samples;

        for n in 0..period.frames() {
            pipeline.history.push(period.read(n, 0));
            self.frames_processed += 1;

            if !pipeline.scheduler.tick() {
                continue;
            }

            let window = pipeline.assembler.assemble(&mut pipeline.history);

            let started = Instant::now();
            let result = self
                .backend
                .run(window, &pipeline.params, &mut pipeline.output);
            let elapsed = started.elapsed();

            if let Err(e) = result {
                tracing::error!(
                    frame = self.frames_processed,
                    error = %e,
                    "inference failed; stopping session"
                );
                if !self.stop_requested {
                    period.request_stop();
                    self.stop_requested = true;
                }
                self.state = SessionState::Stopped;
                return Err(e.into());
            }

            let block = match self.config.mode {
                RenderMode::Production => &pipeline.output[..],
                RenderMode::SelfTest => &window[passthrough.clone()],
            };
            pipeline.scatter.scatter(block, n, period);

            if let Some(recorder) = pipeline.recorder.as_mut() {
                recorder.record(elapsed);
                if recorder.is_full() {
                    period.request_stop();
                    self.stop_requested = true;
                    self.state = SessionState::Stopped;
                    return Ok(RenderStatus::StopRequested);
                }
            }
        }

        Ok(RenderStatus::Continue)
    }

    /// Flush the timing log, release it and the model.
    ///
    /// Safe from any state; only the first call does anything. A log write
    /// failure is logged and reported, never raised.
    pub fn cleanup(&mut self) -> CleanupReport {
        let mut report = CleanupReport {
            frames_processed: self.frames_processed,
            ..CleanupReport::default()
        };

        if let Some(pipeline) = self.pipeline.take() {
            report.triggers = pipeline.scheduler.triggers_fired();
            report.scatter = pipeline.scatter.stats();

            if let Some(recorder) = pipeline.recorder {
                report.summary =
                    TimingSummary::from_entries(recorder.entries(), recorder.overruns());
                let log = self.config.timing_log();
                match log.write(recorder.entries()) {
                    Ok(()) => {
                        tracing::info!(
                            path = %log.path().display(),
                            entries = recorder.len(),
                            "timing log written"
                        );
                        report.log_path = Some(log.path().to_path_buf());
                    }
                    Err(e) => {
                        tracing::error!(
                            path = %log.path().display(),
                            error = %e,
                            "unable to write timing log"
                        );
                        report.log_error = Some(e);
                    }
                }
            }
            if let Some(summary) = &report.summary {
                tracing::info!(model = %self.config.model_name, "{summary}");
            }
        }

        if self.model_loaded {
            self.backend.release();
            self.model_loaded = false;
        }
        self.state = SessionState::Stopped;
        report
    }
}

fn check_shape(spec: &WindowSpec, shape: ModelShape) -> Result<()> {
    let checks = [
        ("input", spec.window_samples, shape.input),
        ("params", spec.aux_param_count, shape.params),
        ("output", spec.output_samples, shape.output),
    ];
    for (what, expected, actual) in checks {
        if expected != actual {
            return Err(Error::ShapeMismatch {
                what,
                expected,
                actual,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::OfflineHost;
    use crate::inference::{BackendCapabilities, ClosureBackend, InferenceError, ModelAsset};
    use crate::window::ModelPreset;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn ramp(len: usize) -> Vec<f32> {
        (1..=len).map(|i| i as f32).collect()
    }

    fn identity_for(spec: &WindowSpec) -> ClosureBackend {
        ClosureBackend::identity(ModelShape::new(
            spec.window_samples,
            spec.aux_param_count,
            spec.output_samples,
        ))
    }

    fn run(session: &mut Session, host: &mut OfflineHost) -> Vec<RenderStatus> {
        session.setup(&host.info()).unwrap();
        let mut statuses = Vec::new();
        while let Some(mut period) = host.next_period() {
            statuses.push(session.render(&mut period).unwrap());
        }
        statuses
    }

    /// Counts loads/releases and can be told to fail.
    struct ScriptedBackend {
        shape: ModelShape,
        fail_load: bool,
        fail_run_at: Option<usize>,
        runs: usize,
        releases: Arc<AtomicUsize>,
    }

    impl ScriptedBackend {
        fn new(shape: ModelShape) -> Self {
            Self {
                shape,
                fail_load: false,
                fail_run_at: None,
                runs: 0,
                releases: Arc::new(AtomicUsize::new(0)),
            }
        }
    }

    impl InferenceBackend for ScriptedBackend {
        fn load(
            &mut self,
            _id: &str,
            asset: &ModelAsset,
        ) -> std::result::Result<ModelShape, InferenceError> {
            if self.fail_load {
                return Err(InferenceError::AssetMissing(asset.path()));
            }
            Ok(self.shape)
        }

        fn run(
            &mut self,
            _i: &[f32],
            _p: &[f32],
            out: &mut [f32],
        ) -> std::result::Result<(), InferenceError> {
            self.runs += 1;
            if Some(self.runs) == self.fail_run_at {
                return Err(InferenceError::RunFailed("scripted".into()));
            }
            out.fill(0.25);
            Ok(())
        }

        fn release(&mut self) {
            self.releases.fetch_add(1, Ordering::SeqCst);
        }

        fn capabilities(&self) -> BackendCapabilities {
            BackendCapabilities {
                name: "scripted".into(),
                has_gpu: false,
            }
        }
    }

    #[test]
    fn test_state_machine() {
        let config = SessionConfig::preset(ModelPreset::Topline).without_timing();
        let backend = identity_for(&config.window);
        let mut session = Session::new(config, backend);
        assert_eq!(session.state(), SessionState::Uninitialized);

        let mut host = OfflineHost::new(ramp(64), 48000.0, 32);
        session.setup(&host.info()).unwrap();
        assert_eq!(session.state(), SessionState::Ready);
        assert!(matches!(
            session.setup(&host.info()),
            Err(Error::InvalidState(SessionState::Ready))
        ));

        let mut period = host.next_period().unwrap();
        assert_eq!(session.render(&mut period).unwrap(), RenderStatus::Continue);
        assert_eq!(session.state(), SessionState::Running);

        session.cleanup();
        assert_eq!(session.state(), SessionState::Stopped);
    }

    #[test]
    fn test_render_before_setup_fails() {
        let config = SessionConfig::preset(ModelPreset::Baseline);
        let backend = identity_for(&config.window);
        let mut session = Session::new(config, backend);
        let mut host = OfflineHost::new(ramp(4), 48000.0, 4);
        let mut period = host.next_period().unwrap();
        assert!(matches!(
            session.render(&mut period),
            Err(Error::InvalidState(SessionState::Uninitialized))
        ));
    }

    #[test]
    fn test_self_test_topline_delays_by_one_block() {
        let config = SessionConfig::preset(ModelPreset::Topline)
            .with_mode(RenderMode::SelfTest)
            .without_timing();
        let backend = identity_for(&config.window);
        let mut session = Session::new(config, backend);
        let mut host = OfflineHost::new(ramp(128), 48000.0, 32);
        run(&mut session, &mut host);

        let (left, right) = host.into_output();
        let expected: Vec<f32> = (0..128)
            .map(|i| if i < 16 { 0.0 } else { (i - 16 + 1) as f32 })
            .collect();
        assert_eq!(left, expected);
        assert_eq!(right, expected);
    }

    #[test]
    fn test_self_test_overlapping_window_is_zero_latency() {
        let config = SessionConfig::preset(ModelPreset::Ed)
            .with_mode(RenderMode::SelfTest)
            .without_timing();
        let backend = identity_for(&config.window);
        let mut session = Session::new(config, backend);
        let input = ramp(96);
        let mut host = OfflineHost::new(input.clone(), 48000.0, 32);
        run(&mut session, &mut host);
        assert_eq!(host.left(), &input[..]);
    }

    #[test]
    fn test_production_mode_writes_model_output() {
        let config = SessionConfig::preset(ModelPreset::Topline).without_timing();
        let backend = ScriptedBackend::new(ModelShape::new(16, 0, 16));
        let mut session = Session::new(config, backend);
        let mut host = OfflineHost::new(ramp(32), 48000.0, 16);
        run(&mut session, &mut host);
        assert!(host.left().iter().all(|&s| s == 0.25));
        assert!(host.right().iter().all(|&s| s == 0.25));
    }

    #[test]
    fn test_first_window_is_silent_preroll() {
        let config = SessionConfig::preset(ModelPreset::Ed).without_timing();
        let seen = Arc::new(capture::Slot::default());
        let slot = seen.clone();
        let backend = ClosureBackend::new("spy", ModelShape::new(32, 4, 16), move |input, _p, out| {
            slot.store(input);
            out.fill(0.0);
        });
        let mut session = Session::new(config, backend);
        let mut host = OfflineHost::new(ramp(16), 48000.0, 16);
        run(&mut session, &mut host);

        let first = seen.take();
        assert_eq!(&first[..16], &[0.0; 16]);
        assert_eq!(&first[16..], &ramp(16)[..]);
    }

    #[test]
    fn test_stops_exactly_once_when_log_full() {
        // 16 kHz for 0.01 s with O=16 -> 10 entries
        let config = SessionConfig::preset(ModelPreset::Topline).with_test_duration(0.01);
        let backend = identity_for(&config.window);
        let mut session = Session::new(config, backend);
        let mut host = OfflineHost::new(vec![0.5; 1024], 16000.0, 64);
        let statuses = run(&mut session, &mut host);

        assert_eq!(session.timing_capacity(), Some(10));
        assert_eq!(session.timing_entries().len(), 10);
        assert!(session.is_complete());
        assert_eq!(host.stop_requests(), 1);
        // 10 triggers fill at frame 159: the third 64-frame period
        assert_eq!(
            statuses,
            vec![
                RenderStatus::Continue,
                RenderStatus::Continue,
                RenderStatus::StopRequested
            ]
        );
        assert_eq!(session.frames_processed(), 160);
        assert_eq!(session.triggers(), 10);
    }

    #[test]
    fn test_render_after_stop_is_noop() {
        let config = SessionConfig::preset(ModelPreset::Baseline).with_test_duration(0.001);
        let backend = identity_for(&config.window);
        let mut session = Session::new(config, backend);
        let mut host = OfflineHost::new(vec![1.0; 64], 8000.0, 64);
        session.setup(&host.info()).unwrap();
        let mut period = host.next_period().unwrap();
        assert_eq!(session.render(&mut period).unwrap(), RenderStatus::StopRequested);
        assert_eq!(session.render(&mut period).unwrap(), RenderStatus::Stopped);
        assert_eq!(session.timing_entries().len(), 8);
        assert_eq!(session.frames_processed(), 8);
        drop(period);
        assert_eq!(host.stop_requests(), 1);
    }

    #[test]
    fn test_model_load_failure_aborts_setup() {
        let config = SessionConfig::preset(ModelPreset::Topline);
        let mut backend = ScriptedBackend::new(ModelShape::new(16, 0, 16));
        backend.fail_load = true;
        let releases = backend.releases.clone();
        let mut session = Session::new(config, backend);

        let err = session.setup(&HostInfo::new(48000.0, 64)).unwrap_err();
        assert!(matches!(err, Error::ModelLoad(InferenceError::AssetMissing(_))));
        assert_eq!(session.state(), SessionState::Uninitialized);

        let report = session.cleanup();
        assert!(report.log_path.is_none());
        assert_eq!(releases.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_shape_mismatch_releases_model() {
        let config = SessionConfig::preset(ModelPreset::Ed);
        let backend = ScriptedBackend::new(ModelShape::new(32, 0, 16));
        let releases = backend.releases.clone();
        let mut session = Session::new(config, backend);

        let err = session.setup(&HostInfo::new(48000.0, 64)).unwrap_err();
        assert!(matches!(
            err,
            Error::ShapeMismatch { what: "params", expected: 4, actual: 0 }
        ));
        assert_eq!(releases.load(Ordering::SeqCst), 1);
        session.cleanup();
        assert_eq!(releases.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_inference_failure_is_fatal() {
        let config = SessionConfig::preset(ModelPreset::Topline).without_timing();
        let mut backend = ScriptedBackend::new(ModelShape::new(16, 0, 16));
        backend.fail_run_at = Some(2);
        let mut session = Session::new(config, backend);
        let mut host = OfflineHost::new(ramp(64), 48000.0, 64);
        session.setup(&host.info()).unwrap();

        let mut period = host.next_period().unwrap();
        let err = session.render(&mut period).unwrap_err();
        assert!(matches!(err, Error::Inference(InferenceError::RunFailed(_))));
        assert_eq!(session.state(), SessionState::Stopped);
        assert_eq!(session.frames_processed(), 32);
        drop(period);
        assert!(host.is_stopped());
    }

    #[test]
    fn test_cleanup_releases_once_and_writes_log() {
        let dir = tempfile::tempdir().unwrap();
        let config = SessionConfig::preset(ModelPreset::Topline)
            .with_log_dir(dir.path())
            .with_test_duration(0.004);
        let backend = ScriptedBackend::new(ModelShape::new(16, 0, 16));
        let releases = backend.releases.clone();
        let mut session = Session::new(config, backend);
        let mut host = OfflineHost::new(ramp(512), 8000.0, 16);
        run(&mut session, &mut host);

        let report = session.cleanup();
        let path = report.log_path.expect("log written");
        assert_eq!(path, dir.path().join("inferenceTiming_topline_out16_onnx.txt"));
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert!(text.lines().all(|l| l.parse::<u64>().is_ok()));
        assert_eq!(report.summary.map(|s| s.count), Some(2));
        assert_eq!(report.triggers, 2);

        let second = session.cleanup();
        assert!(second.log_path.is_none());
        assert_eq!(releases.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_log_write_failure_is_reported_not_raised() {
        let dir = tempfile::tempdir().unwrap();
        let config = SessionConfig::preset(ModelPreset::Baseline)
            .with_log_dir(dir.path().join("missing"))
            .with_test_duration(0.001);
        let backend = identity_for(&config.window);
        let mut session = Session::new(config, backend);
        let mut host = OfflineHost::new(vec![0.0; 32], 8000.0, 8);
        run(&mut session, &mut host);

        let report = session.cleanup();
        assert!(report.log_path.is_none());
        assert!(report.log_error.is_some());
        assert_eq!(session.state(), SessionState::Stopped);
    }

    #[test]
    fn test_rejects_undersized_history() {
        let config = SessionConfig::preset(ModelPreset::Topline).with_history_capacity(16);
        let backend = identity_for(&config.window);
        let mut session = Session::new(config, backend);
        assert!(matches!(
            session.setup(&HostInfo::new(48000.0, 16)),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_acausal_preroll_reports_zero_latency_and_fails_setup() {
        let window = WindowSpec::sliding(32, 16).with_preroll(8);
        let config = SessionConfig::new("acausal", window);
        let backend = identity_for(&config.window);
        let mut session = Session::new(config, backend);
        assert_eq!(session.latency_samples(), 0);
        assert!(matches!(
            session.setup(&HostInfo::new(48000.0, 16)),
            Err(Error::InvalidConfig(_))
        ));
        assert_eq!(session.state(), SessionState::Uninitialized);
    }

    #[test]
    fn test_period_not_multiple_of_stride_still_renders() {
        // 24-frame periods with a 16-sample stride: every other block straddles
        let config = SessionConfig::preset(ModelPreset::Topline)
            .with_mode(RenderMode::SelfTest)
            .without_timing();
        let backend = identity_for(&config.window);
        let mut session = Session::new(config, backend);
        let mut host = OfflineHost::new(ramp(96), 48000.0, 24);
        run(&mut session, &mut host);

        assert_eq!(session.triggers(), 6);
        let report = session.cleanup();
        assert_eq!(report.scatter.written + report.scatter.dropped, 96);
        assert!(report.scatter.dropped > 0);
    }

    /// Single-slot handoff used to peek at the first window a backend sees.
    mod capture {
        use std::sync::Mutex;

        #[derive(Default)]
        pub struct Slot(Mutex<Option<Vec<f32>>>);

        impl Slot {
            pub fn store(&self, window: &[f32]) {
                let mut slot = self.0.lock().unwrap();
                if slot.is_none() {
                    *slot = Some(window.to_vec());
                }
            }

            pub fn take(&self) -> Vec<f32> {
                self.0.lock().unwrap().take().unwrap_or_default()
            }
        }
    }
}
