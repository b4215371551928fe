//! Timetable generation service.
//!
//! Wraps the scheduler with the storage round-trip: clear the previous
//! timetable, plan a new one, and bulk-insert it. Runs on one service are
//! serialized so that two clear-then-insert sequences never interleave
//! against the same store.
//!
//! A failed insert leaves the store empty (the clear is not rolled back);
//! callers should treat any failure as "timetable may be empty" and re-run.

use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::config::{checkpoint, EngineConfig};
use crate::error::{GenerationOutcome, Result, TimetableError};
use crate::progress::ProgressReporter;
use crate::scheduler::{ScheduleReport, TimetableRequest, TimetableScheduler};
use crate::store::PlacementStore;

/// Generates timetables into a placement store.
#[derive(Debug)]
pub struct TimetableService<S> {
    scheduler: TimetableScheduler,
    store: S,
    run_lock: Mutex<()>,
}

impl<S: PlacementStore> TimetableService<S> {
    /// Creates a service with the default configuration.
    pub fn new(store: S) -> Self {
        Self {
            scheduler: TimetableScheduler::new(),
            store,
            run_lock: Mutex::new(()),
        }
    }

    /// Creates a service with a validated configuration.
    pub fn with_config(store: S, config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            scheduler: TimetableScheduler::with_config(config),
            store,
            run_lock: Mutex::new(()),
        })
    }

    /// Underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Underlying scheduler.
    pub fn scheduler(&self) -> &TimetableScheduler {
        &self.scheduler
    }

    /// Replaces the stored timetable with a freshly generated one.
    ///
    /// Succeeds even when some sections could not be fully placed; see the
    /// returned report. Fails only when the store rejects the clear or the
    /// insert.
    pub async fn generate(
        &self,
        request: &TimetableRequest,
        progress: &dyn ProgressReporter,
    ) -> Result<ScheduleReport> {
        let _guard = self.run_lock.lock().await;
        let bounds = self.scheduler.config().progress;

        progress.report(checkpoint::INITIALIZING, "Initializing...");
        info!(
            sections = request.sections.len(),
            rooms = request.rooms.len(),
            time_slots = request.time_slots.len(),
            "generating timetable"
        );

        progress.report(checkpoint::CLEARING, "Clearing existing timetable...");
        self.store.clear_all_placements().await.map_err(|e| {
            warn!(error = %e, "failed to clear timetable");
            TimetableError::Clear(e)
        })?;

        progress.report(bounds.lower, "Scheduling courses...");
        let plan = self.scheduler.plan(request, progress);

        progress.report(checkpoint::SAVING, "Saving timetable...");
        if !plan.timetable.is_empty() {
            self.store
                .insert_placements(&plan.timetable.placements)
                .await
                .map_err(|e| {
                    warn!(error = %e, "failed to save timetable");
                    TimetableError::Insert(e)
                })?;
        }

        progress.report(checkpoint::COMPLETE, "Timetable generated successfully!");
        info!(
            placements = plan.report.placement_count,
            shortfall_hours = plan.report.shortfall_hours(),
            "timetable generated"
        );
        Ok(plan.report)
    }

    /// Like [`generate`](Self::generate), but folds the result into the
    /// caller-facing `{ success, error?, report? }` outcome.
    pub async fn run(
        &self,
        request: &TimetableRequest,
        progress: &dyn ProgressReporter,
    ) -> GenerationOutcome {
        self.generate(request, progress).await.into()
    }
}
