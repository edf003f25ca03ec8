//! Portfolio CV generator: a résumé data model rendered through five A4 PDF
//! templates, plus the HTTP service that serves them and relays the site's
//! contact form.

pub mod config;
pub mod contact;
pub mod cv;
pub mod errors;
pub mod layout;
pub mod models;
pub mod render;
pub mod routes;
pub mod state;

use std::sync::Arc;

use tracing::info;

use crate::config::Config;
use crate::errors::CvError;
use crate::models::{cv_data, Resume};

/// The résumé to render: `CV_DATA_PATH` when set, the built-in data otherwise.
pub fn load_resume(config: &Config) -> Result<Arc<Resume>, CvError> {
    match &config.data_path {
        Some(path) => {
            info!(path = %path.display(), "loading résumé data");
            Ok(Arc::new(Resume::from_json_file(path)?))
        }
        None => Ok(Arc::new(cv_data::resume().clone())),
    }
}
