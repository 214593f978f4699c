use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use image::{ImageFormat, Rgba, RgbaImage};
use launcher_icons::config::{ResProvider, mipmap_dir};
use launcher_icons_core::{BatchReport, Density, ItemReport, ReportSink, WorkItem};

#[derive(Clone)]
pub struct TestProvider {
    base: PathBuf,
}

impl TestProvider {
    /// Empty `res` directory with no mipmap folders.
    pub fn new() -> Self {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let tid = format!("{:?}", std::thread::current().id());
        let dir = std::env::temp_dir().join(format!(
            "launcher-icons-tests-{}-{}-{}",
            std::process::id(),
            tid,
            stamp
        ));
        fs::create_dir_all(&dir).unwrap();
        Self { base: dir }
    }

    /// `res` directory with every mipmap folder already in place.
    pub fn with_mipmap_dirs() -> Self {
        let cp = Self::new();
        for density in Density::ALL {
            fs::create_dir_all(mipmap_dir(&cp, density)).unwrap();
        }
        cp
    }
}

impl Default for TestProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ResProvider for TestProvider {
    fn res_dir(&self) -> PathBuf {
        self.base.clone()
    }
}

#[derive(Default)]
pub struct RecordingSink(pub Mutex<Vec<String>>);

impl RecordingSink {
    pub fn events(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

impl ReportSink for RecordingSink {
    fn item_started(&self, item: &WorkItem) {
        self.0.lock().unwrap().push(format!("start:{}", item.density));
    }

    fn item_finished(&self, report: &ItemReport) {
        self.0
            .lock()
            .unwrap()
            .push(format!("finish:{}", report.item.density));
    }

    fn batch_finished(&self, batch: &BatchReport) {
        self.0
            .lock()
            .unwrap()
            .push(format!("batch:{}", batch.items.len()));
    }
}

/// A small gradient with varying alpha, so lossless round trips are checkable.
pub fn sample_image(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x * 7) as u8, (y * 11) as u8, ((x + y) * 3) as u8, 255 - (x as u8)])
    })
}

pub fn write_webp(path: &std::path::Path, img: &RgbaImage) {
    img.save_with_format(path, ImageFormat::WebP).unwrap();
}
