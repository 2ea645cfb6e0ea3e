use std::sync::Arc;

use sea_orm::{DatabaseConnection, TransactionTrait};
use tokio::sync::{Mutex, RwLock};

use crate::server::{
    data::rank::RankRepository,
    error::AppError,
    model::{
        engagement::TargetKind,
        rank::{actor_rank, target_rank, RankJobState, RankReport},
    },
};

/// Periodic rank recomputation.
///
/// A full run walks the phases in [`RankJobState::PHASES`]. The scheduler runs each phase in
/// its own slot; the admin trigger runs all of them back to back. Only one phase or run
/// executes at a time, overlapping requests are skipped. There is no persisted cursor: a
/// rollback followed by both recompute phases always rebuilds every rank from the counters.
#[derive(Clone)]
pub struct RankJob {
    db: DatabaseConnection,
    state: Arc<RwLock<RankJobState>>,
    running: Arc<Mutex<()>>,
}

impl RankJob {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            state: Arc::new(RwLock::new(RankJobState::Idle)),
            running: Arc::new(Mutex::new(())),
        }
    }

    /// Phase currently executing, or the last finished one while waiting for the next slot.
    pub async fn state(&self) -> RankJobState {
        *self.state.read().await
    }

    /// Executes a single phase.
    ///
    /// # Returns
    /// - `Ok(Some(RankReport))` - Phase finished
    /// - `Ok(None)` - Another phase or run is in progress, nothing done
    /// - `Err(AppError)` - Phase aborted, state reset to `Idle`
    pub async fn run_phase(&self, phase: RankJobState) -> Result<Option<RankReport>, AppError> {
        let Ok(_guard) = self.running.try_lock() else {
            tracing::info!(%phase, "Rank job busy, skipping phase");
            return Ok(None);
        };

        let result = self.execute(phase).await;

        let next = match (&result, phase) {
            (Ok(_), RankJobState::Rollback | RankJobState::RecomputeTargets) => phase,
            _ => RankJobState::Idle,
        };
        *self.state.write().await = next;

        result.map(Some)
    }

    /// Executes every phase in order.
    ///
    /// # Returns
    /// - `Ok(Some(RankReport))` - Combined report of all phases
    /// - `Ok(None)` - Another phase or run is in progress, nothing done
    /// - `Err(AppError)` - A phase aborted, later phases were not run
    pub async fn run(&self) -> Result<Option<RankReport>, AppError> {
        let Ok(_guard) = self.running.try_lock() else {
            tracing::info!("Rank job busy, skipping run");
            return Ok(None);
        };

        let mut report = RankReport::default();
        let mut outcome = Ok(());
        for phase in RankJobState::PHASES {
            match self.execute(phase).await {
                Ok(phase_report) => report = report.merge(phase_report),
                Err(err) => {
                    outcome = Err(err);
                    break;
                }
            }
        }
        *self.state.write().await = RankJobState::Idle;

        outcome.map(|_| Some(report))
    }

    async fn execute(&self, phase: RankJobState) -> Result<RankReport, AppError> {
        *self.state.write().await = phase;
        tracing::info!(%phase, "Rank job phase started");

        let report = match phase {
            RankJobState::Idle => RankReport::default(),
            RankJobState::Rollback => self.rollback().await?,
            RankJobState::RecomputeTargets => self.recompute_targets().await?,
            RankJobState::RecomputeActors => self.recompute_actors().await?,
        };

        tracing::info!(
            %phase,
            updated = report.updated,
            skipped = report.skipped,
            failed = report.failed,
            "Rank job phase finished"
        );

        Ok(report)
    }

    /// Zeroes the rank of every active target and active agent.
    async fn rollback(&self) -> Result<RankReport, AppError> {
        let txn = self.db.begin().await?;

        let repo = RankRepository::new(&txn);
        let targets = repo.reset_targets().await?;
        let actors = repo.reset_actors().await?;

        txn.commit().await?;

        Ok(RankReport {
            updated: targets + actors,
            ..Default::default()
        })
    }

    async fn recompute_targets(&self) -> Result<RankReport, AppError> {
        let repo = RankRepository::new(&self.db);
        let mut report = RankReport::default();

        for car in repo.unranked_cars().await? {
            let rank = target_rank(car.likes, car.views);
            self.write(TargetKind::Car, car.id, rank, &mut report).await;
        }

        for article in repo.unranked_articles().await? {
            let rank = target_rank(article.likes, article.views);
            self.write(TargetKind::Article, article.id, rank, &mut report)
                .await;
        }

        Ok(report)
    }

    async fn recompute_actors(&self) -> Result<RankReport, AppError> {
        let repo = RankRepository::new(&self.db);
        let mut report = RankReport::default();

        for agent in repo.unranked_agents().await? {
            let rank = actor_rank(agent.cars, agent.articles, agent.likes, agent.views);
            self.write(TargetKind::Member, agent.id, rank, &mut report)
                .await;
        }

        Ok(report)
    }

    /// Writes one rank. Failures are logged and counted, never propagated.
    async fn write(&self, kind: TargetKind, id: i32, rank: i32, report: &mut RankReport) {
        match RankRepository::new(&self.db).write_rank(kind, id, rank).await {
            Ok(true) => report.updated += 1,
            Ok(false) => report.skipped += 1,
            Err(err) => {
                tracing::error!(%kind, id, "Failed to write rank: {}", err);
                report.failed += 1;
            }
        }
    }
}
