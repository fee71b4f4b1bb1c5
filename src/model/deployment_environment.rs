use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{Identifiable, Parented, Taggable};

/// A named deployment environment, such as `Development` or `Live`.
///
/// Deployment environments are root-level nodes: they have no parent and
/// no hierarchical qualification, so the canonical name is the name
/// itself. Identity is the name alone; two environments with the same
/// name are the same environment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeploymentEnvironment {
    name: String,
}

impl DeploymentEnvironment {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Identifiable for DeploymentEnvironment {
    fn name(&self) -> &str {
        &self.name
    }

    fn canonical_name(&self) -> String {
        self.name.clone()
    }
}

impl Taggable for DeploymentEnvironment {
    fn default_tags(&self) -> HashSet<String> {
        HashSet::new()
    }
}

impl Parented for DeploymentEnvironment {
    fn parent(&self) -> Option<&dyn Identifiable> {
        None
    }
}
