//! Batch orchestration: select templates, render, serialize and write files.

use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::info;

use crate::errors::CvError;
use crate::models::Resume;
use crate::render::pdf::to_pdf_bytes;
use crate::render::Template;

/// Which templates a batch run produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateSelector {
    All,
    One(Template),
}

impl TemplateSelector {
    /// Parses a 1-based template number. Anything other than an integer in
    /// `1..=5` is a usage error.
    pub fn parse(arg: &str) -> Result<Self, CvError> {
        arg.trim()
            .parse::<usize>()
            .ok()
            .and_then(Template::from_number)
            .map(TemplateSelector::One)
            .ok_or_else(|| CvError::InvalidTemplate {
                arg: arg.to_string(),
                count: Template::ALL.len(),
            })
    }

    pub fn from_arg(arg: Option<&str>) -> Result<Self, CvError> {
        match arg {
            None => Ok(TemplateSelector::All),
            Some(arg) => Self::parse(arg),
        }
    }

    pub fn templates(self) -> Vec<Template> {
        match self {
            TemplateSelector::All => Template::ALL.to_vec(),
            TemplateSelector::One(t) => vec![t],
        }
    }
}

/// One file written by [`generate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedCv {
    pub template: Template,
    pub path: PathBuf,
    pub bytes: usize,
}

impl GeneratedCv {
    /// `✓ Template <n> "<label>" → <path>`
    pub fn completion_line(&self) -> String {
        format!(
            "✓ Template {} \"{}\" → {}",
            self.template.number(),
            self.template.label(),
            self.path.display()
        )
    }
}

/// Renders one template straight to PDF bytes.
pub fn render_pdf(template: Template, resume: &Resume) -> Result<Vec<u8>, CvError> {
    to_pdf_bytes(&template.render(resume))
}

/// Renders and writes the selected templates into `out_dir`, one at a time.
///
/// The directory is created if missing. `on_written` runs right after each
/// file lands, so files already written are reported even if a later template
/// fails (they also stay on disk).
pub fn generate(
    resume: &Resume,
    selector: TemplateSelector,
    out_dir: &Path,
    mut on_written: impl FnMut(&GeneratedCv),
) -> Result<Vec<GeneratedCv>, CvError> {
    std::fs::create_dir_all(out_dir).map_err(|source| CvError::Io {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::new();
    for template in selector.templates() {
        let started = Instant::now();
        let bytes = render_pdf(template, resume)?;
        let path = out_dir.join(template.output_filename());
        std::fs::write(&path, &bytes).map_err(|source| CvError::Io {
            path: path.clone(),
            source,
        })?;

        info!(
            template = template.label(),
            path = %path.display(),
            bytes = bytes.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "wrote CV"
        );
        let cv = GeneratedCv {
            template,
            path,
            bytes: bytes.len(),
        };
        on_written(&cv);
        written.push(cv);
    }
    Ok(written)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
