use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    config::Config, error::AppError, model::rank::RankJobState, service::rank::RankJob,
};

/// Starts the rank recomputation scheduler
///
/// Registers one cron slot per phase of the rank job. Slots are expected to fire in
/// phase order (rollback, targets, actors); a slot that fires while another phase is still
/// running is skipped by the job itself.
///
/// # Arguments
/// - `job`: Rank job shared with the admin trigger
/// - `config`: Supplies the cron expression of each slot
pub async fn start_scheduler(job: RankJob, config: &Config) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let slots = [
        (config.rank_rollback_cron.as_str(), RankJobState::Rollback),
        (config.rank_targets_cron.as_str(), RankJobState::RecomputeTargets),
        (config.rank_actors_cron.as_str(), RankJobState::RecomputeActors),
    ];

    for (schedule, phase) in slots {
        scheduler.add(phase_job(job.clone(), schedule, phase)?).await?;
    }

    scheduler.start().await?;

    tracing::info!("Rank scheduler started");

    Ok(())
}

fn phase_job(job: RankJob, schedule: &str, phase: RankJobState) -> Result<Job, AppError> {
    let job = Job::new_async(schedule, move |_uuid, _lock| {
        let job = job.clone();

        Box::pin(async move {
            if let Err(e) = job.run_phase(phase).await {
                tracing::error!(%phase, "Error running rank phase: {}", e);
            }
        })
    })?;

    Ok(job)
}
