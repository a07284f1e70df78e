//! ExecutionModel - how a snippet's source becomes a runnable document

/// Per-snippet compilation policy
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionModel {
    /// The source is already a standalone document and renders unchanged.
    Document,
    /// The source is a bare fragment; a host document loads the runtime,
    /// provides the mount point and guards evaluation.
    Harness(Harness),
}

impl ExecutionModel {
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Document => "document",
            Self::Harness(_) => "harness",
        }
    }
}

/// What a fragment needs from its host document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Harness {
    /// Runtime scripts, loaded in order before the fragment runs
    pub runtime_scripts: Vec<String>,
    /// Id of the element the fragment mounts into
    pub mount_id: String,
}

impl Harness {
    pub fn new(mount_id: impl Into<String>) -> Self {
        Self {
            runtime_scripts: Vec::new(),
            mount_id: mount_id.into(),
        }
    }

    pub fn with_runtime(mut self, url: impl Into<String>) -> Self {
        self.runtime_scripts.push(url.into());
        self
    }
}
