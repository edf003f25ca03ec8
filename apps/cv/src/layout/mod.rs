// Page geometry and text-layout primitives shared by every CV template.
// All coordinates are millimetres on an A4 page, origin top-left.

pub mod font_metrics;
pub mod links;
pub mod page;
pub mod wrap;

pub use font_metrics::{measure_mm, StandardFont, PT_TO_MM};
pub use links::draw_project_links;
pub use page::{DrawOp, LinkRegion, Page, PaintMode, Rgb, TextRun, TextStyle};
pub use wrap::wrap_text;
