//! Sandbox policy - the capability grant of the preview frame
//!
//! Rendered as the iframe `sandbox` attribute. Anything not listed is
//! denied by the browser, so the grant is an explicit allow-list.

use std::fmt;

/// One `allow-*` token of the iframe sandbox attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SandboxCapability {
    Scripts,
    Modals,
    SameOrigin,
}

impl SandboxCapability {
    pub fn token(&self) -> &'static str {
        match self {
            Self::Scripts => "allow-scripts",
            Self::Modals => "allow-modals",
            Self::SameOrigin => "allow-same-origin",
        }
    }
}

impl fmt::Display for SandboxCapability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SandboxPolicy {
    capabilities: Vec<SandboxCapability>,
}

impl SandboxPolicy {
    /// Deny everything
    pub fn locked() -> Self {
        Self { capabilities: Vec::new() }
    }

    /// Script execution, dialogs, and access to the frame's own inline resources
    pub fn preview() -> Self {
        Self::locked()
            .allow(SandboxCapability::Scripts)
            .allow(SandboxCapability::Modals)
            .allow(SandboxCapability::SameOrigin)
    }

    pub fn allow(mut self, capability: SandboxCapability) -> Self {
        if !self.capabilities.contains(&capability) {
            self.capabilities.push(capability);
        }
        self
    }

    /// Value for the iframe `sandbox` attribute
    pub fn attribute(&self) -> String {
        self.capabilities
            .iter()
            .map(|c| c.token())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for SandboxPolicy {
    fn default() -> Self {
        Self::preview()
    }
}
