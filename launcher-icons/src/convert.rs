use anyhow::{Context, Result};
use image::{ImageFormat, ImageReader};
use launcher_icons_core::{BatchReport, Density, ItemReport, ReportSink, Task, WorkItem};
use std::path::Path;

use crate::config::{ProjectResProvider, ResProvider, png_path, webp_path};

/// Decodes `src` and re-encodes it as PNG at `dst`, overwriting whatever is
/// there. The decoder is picked from the file contents, not the extension.
/// Returns the pixel dimensions of the converted image.
pub fn convert_webp_to_png(src: &Path, dst: &Path) -> Result<(u32, u32)> {
    let img = ImageReader::open(src)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(flatten)
        .and_then(|reader| reader.decode().map_err(flatten))
        .with_context(|| format!("decode {}", src.display()))?;
    img.save_with_format(dst, ImageFormat::Png)
        .map_err(flatten)
        .with_context(|| format!("encode {}", dst.display()))?;
    Ok((img.width(), img.height()))
}

// image errors already print their source, so keep them out of the chain.
fn flatten(e: impl std::fmt::Display) -> anyhow::Error {
    anyhow::anyhow!("{e}")
}

pub fn convert_density<S: ReportSink>(
    cp: &dyn ResProvider,
    sink: &S,
    density: Density,
) -> ItemReport {
    let src = webp_path(cp, density);
    let item = WorkItem {
        task: Task::Convert,
        density,
        source: Some(src.clone()),
        output: png_path(cp, density),
    };
    let report = if src.exists() {
        sink.item_started(&item);
        let res = convert_webp_to_png(&src, &item.output);
        if let Ok((w, h)) = &res {
            tracing::debug!(%density, width = *w, height = *h, "converted");
        }
        ItemReport::from_result(item, res.map(|_| ()))
    } else {
        ItemReport::source_missing(item)
    };
    sink.item_finished(&report);
    report
}

/// Converts every density folder. A failing folder never stops the others.
pub fn convert_all_with<S: ReportSink>(cp: &dyn ResProvider, sink: &S) -> BatchReport {
    let mut batch = BatchReport::new(Task::Convert);
    for density in Density::ALL {
        batch.push(convert_density(cp, sink, density));
    }
    sink.batch_finished(&batch);
    batch
}

pub fn convert_all<S: ReportSink>(sink: &S) -> BatchReport {
    convert_all_with(&ProjectResProvider, sink)
}
