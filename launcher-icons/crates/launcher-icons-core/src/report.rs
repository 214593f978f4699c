use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::density::Density;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Task {
    Convert,
    Generate,
}

/// One density's worth of work inside a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkItem {
    pub task: Task,
    pub density: Density,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<PathBuf>,
    pub output: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ItemStatus {
    Written,
    SourceMissing,
    Failed { error: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemReport {
    pub item: WorkItem,
    #[serde(flatten)]
    pub status: ItemStatus,
}

impl ItemReport {
    pub fn written(item: WorkItem) -> Self {
        Self {
            item,
            status: ItemStatus::Written,
        }
    }

    pub fn source_missing(item: WorkItem) -> Self {
        Self {
            item,
            status: ItemStatus::SourceMissing,
        }
    }

    /// Records a failure with the whole error chain (`{:#}`) as its message.
    pub fn failed(item: WorkItem, error: &anyhow::Error) -> Self {
        Self {
            item,
            status: ItemStatus::Failed {
                error: format!("{error:#}"),
            },
        }
    }

    pub fn from_result(item: WorkItem, res: anyhow::Result<()>) -> Self {
        match res {
            Ok(()) => Self::written(item),
            Err(e) => Self::failed(item, &e),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub task: Task,
    pub items: Vec<ItemReport>,
}

impl BatchReport {
    pub fn new(task: Task) -> Self {
        Self {
            task,
            items: Vec::new(),
        }
    }

    pub fn push(&mut self, report: ItemReport) {
        self.items.push(report);
    }

    pub fn written(&self) -> usize {
        self.count(|s| matches!(s, ItemStatus::Written))
    }

    pub fn missing(&self) -> usize {
        self.count(|s| matches!(s, ItemStatus::SourceMissing))
    }

    pub fn failed(&self) -> usize {
        self.count(|s| matches!(s, ItemStatus::Failed { .. }))
    }

    /// True when no item failed. Missing sources do not count as failures.
    pub fn is_clean(&self) -> bool {
        self.failed() == 0
    }

    pub fn get(&self, density: Density) -> Option<&ItemReport> {
        self.items.iter().find(|r| r.item.density == density)
    }

    pub fn summary_json(&self) -> serde_json::Value {
        serde_json::json!({
            "task": self.task,
            "written": self.written(),
            "missing": self.missing(),
            "failed": self.failed(),
            "items": self.items,
        })
    }

    fn count(&self, pred: impl Fn(&ItemStatus) -> bool) -> usize {
        self.items.iter().filter(|r| pred(&r.status)).count()
    }
}

/// Receives progress for a running batch.
pub trait ReportSink {
    fn item_started(&self, item: &WorkItem);
    fn item_finished(&self, report: &ItemReport);
    fn batch_finished(&self, batch: &BatchReport);
}
