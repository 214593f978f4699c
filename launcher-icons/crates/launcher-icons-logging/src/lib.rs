use launcher_icons_core::{BatchReport, ItemReport, ItemStatus, ReportSink, Task, WorkItem};
use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "info";

/// Installs the console subscriber. Configure via RUST_LOG, e.g.
/// `RUST_LOG=debug` to also print the JSON batch summary.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .without_time()
        .try_init();
}

/// `ReportSink` that turns batch progress into log lines.
#[derive(Clone, Copy, Default)]
pub struct TracingSink;

impl ReportSink for TracingSink {
    fn item_started(&self, item: &WorkItem) {
        tracing::info!(density = %item.density, "{}", describe_start(item));
    }

    fn item_finished(&self, report: &ItemReport) {
        let density = report.item.density;
        let path = report.item.output.display();
        let line = describe_outcome(report);
        match &report.status {
            ItemStatus::Written => tracing::info!(%density, %path, "{line}"),
            ItemStatus::SourceMissing => tracing::warn!(%density, "{line}"),
            ItemStatus::Failed { error } => tracing::error!(%density, %error, "{line}"),
        }
    }

    fn batch_finished(&self, batch: &BatchReport) {
        tracing::info!(
            written = batch.written(),
            missing = batch.missing(),
            failed = batch.failed(),
            "{}",
            describe_batch(batch)
        );
        tracing::debug!(summary = %batch.summary_json(), "batch_report");
    }
}

pub fn describe_start(item: &WorkItem) -> String {
    match (item.task, &item.source) {
        (Task::Convert, Some(src)) => format!(
            "converting {} to {}",
            src.display(),
            item.output.display()
        ),
        _ => {
            let size = item.density.icon_size();
            format!("creating icon for {} ({size}x{size}px)", item.density)
        }
    }
}

pub fn describe_outcome(report: &ItemReport) -> String {
    let item = &report.item;
    let subject = item.source.as_deref().unwrap_or(item.output.as_path()).display();
    match (&report.status, item.task) {
        (ItemStatus::Written, Task::Convert) => format!("converted {}", item.output.display()),
        (ItemStatus::Written, Task::Generate) => format!("created {}", item.output.display()),
        (ItemStatus::SourceMissing, _) => format!("file not found: {subject}"),
        (ItemStatus::Failed { error }, Task::Convert) => {
            format!("failed to convert {subject}: {error}")
        }
        (ItemStatus::Failed { error }, Task::Generate) => {
            format!("failed to create {}: {error}", item.output.display())
        }
    }
}

pub fn describe_batch(batch: &BatchReport) -> String {
    match batch.task {
        Task::Convert => format!(
            "conversion finished: {} converted, {} missing, {} failed",
            batch.written(),
            batch.missing(),
            batch.failed()
        ),
        Task::Generate => format!(
            "icon creation finished: {} created, {} failed",
            batch.written(),
            batch.failed()
        ),
    }
}
