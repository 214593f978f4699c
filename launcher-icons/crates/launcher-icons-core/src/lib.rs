pub mod density;
pub mod raster;
pub mod report;

pub use density::Density;
pub use raster::{encode_png, render};
pub use report::{BatchReport, ItemReport, ItemStatus, ReportSink, Task, WorkItem};
