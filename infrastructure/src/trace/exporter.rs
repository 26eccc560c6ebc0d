//! Writes each run trace to disk as a JSON file plus a Mermaid diagram.
//!
//! Export failures never abort a run: every I/O problem is logged as a
//! warning and the answer is still returned to the caller.

use conductor_domain::{RunTrace, render_mermaid};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Paths of the files written for one run
#[derive(Debug, Clone)]
pub struct TraceFiles {
    pub trace: PathBuf,
    pub diagram: PathBuf,
}

/// Exports run traces into a directory, one JSON + Markdown pair per run
pub struct TraceExporter {
    dir: PathBuf,
}

impl TraceExporter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write `full_trace_<id>.json` and `visualize_<id>.md`.
    ///
    /// Returns `None` if the directory or either file could not be
    /// written.
    pub fn export(&self, trace: &RunTrace) -> Option<TraceFiles> {
        if let Err(e) = std::fs::create_dir_all(&self.dir) {
            warn!("could not create trace directory {}: {e}", self.dir.display());
            return None;
        }

        let id = run_id();
        let trace_path = self.dir.join(format!("full_trace_{id}.json"));
        let diagram_path = self.dir.join(format!("visualize_{id}.md"));

        let record = match trace_record(trace) {
            Ok(r) => r,
            Err(e) => {
                warn!("could not serialize trace: {e}");
                return None;
            }
        };
        if let Err(e) = std::fs::write(&trace_path, record) {
            warn!("could not write {}: {e}", trace_path.display());
            return None;
        }

        let diagram = format!("```mermaid\n{}\n```\n", render_mermaid(trace));
        if let Err(e) = std::fs::write(&diagram_path, diagram) {
            warn!("could not write {}: {e}", diagram_path.display());
            return None;
        }

        info!("full trace logged to {}", trace_path.display());
        Some(TraceFiles {
            trace: trace_path,
            diagram: diagram_path,
        })
    }
}

fn run_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()[..8].to_string()
}

fn trace_record(trace: &RunTrace) -> Result<String, serde_json::Error> {
    let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);
    let mut value = serde_json::to_value(trace)?;
    if let serde_json::Value::Object(map) = &mut value {
        map.insert(
            "timestamp".to_string(),
            serde_json::Value::String(timestamp),
        );
    }
    serde_json::to_string_pretty(&value)
}
