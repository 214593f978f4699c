use anyhow::{Context, Result};
use launcher_icons_core::{
    BatchReport, Density, ItemReport, ReportSink, Task, WorkItem, encode_png, render,
};
use std::{fs, path::Path};

use crate::config::{ProjectResProvider, ResProvider, png_path};

/// Renders the target icon at `size` and writes it to `dst` as PNG. The
/// parent directory must already exist.
pub fn write_icon(size: u32, dst: &Path) -> Result<()> {
    let bytes = encode_png(&render(size)).with_context(|| format!("render {size}x{size}"))?;
    fs::write(dst, bytes).with_context(|| format!("write {}", dst.display()))
}

pub fn generate_density<S: ReportSink>(
    cp: &dyn ResProvider,
    sink: &S,
    density: Density,
) -> ItemReport {
    let item = WorkItem {
        task: Task::Generate,
        density,
        source: None,
        output: png_path(cp, density),
    };
    sink.item_started(&item);
    let res = write_icon(density.icon_size(), &item.output);
    let report = ItemReport::from_result(item, res);
    sink.item_finished(&report);
    report
}

/// Writes the icon for every density bucket, each independently.
pub fn generate_all_with<S: ReportSink>(cp: &dyn ResProvider, sink: &S) -> BatchReport {
    let mut batch = BatchReport::new(Task::Generate);
    for density in Density::ALL {
        batch.push(generate_density(cp, sink, density));
    }
    sink.batch_finished(&batch);
    batch
}

pub fn generate_all<S: ReportSink>(sink: &S) -> BatchReport {
    generate_all_with(&ProjectResProvider, sink)
}
