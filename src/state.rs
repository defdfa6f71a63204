//! Application state container.
//!
//! All mutations go through [`Workspace::apply`]. A successful command
//! invalidates the cached layout plan; the next visualize request rebuilds it.

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::LayoutConfig;
use crate::layout::{LayoutPlan, pack};
use crate::model::{NewSku, ScoredSku, SkuRecord};
use crate::registry::{RegistryError, SkuRegistry};

/// A mutation of the SKU collection.
#[derive(Clone, Debug)]
pub enum Command {
    Add(NewSku),
    /// Adds the SKUs whose codes are not registered yet.
    AddMissing(Vec<NewSku>),
    Update { id: u64, sku: NewSku },
    Delete(u64),
    Clear,
}

/// Result of a successfully applied command.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    Added(SkuRecord),
    AddedMany(Vec<SkuRecord>),
    Updated(SkuRecord),
    Deleted(SkuRecord),
    Cleared(usize),
}

#[derive(Clone, Debug)]
struct CachedPlan {
    revision: u64,
    plan: Arc<LayoutPlan>,
}

/// SKU registry plus the last computed layout plan.
#[derive(Clone, Debug, Default)]
pub struct Workspace {
    registry: SkuRegistry,
    cached_plan: Option<CachedPlan>,
}

impl Workspace {
    pub fn new(registry: SkuRegistry) -> Self {
        Self {
            registry,
            cached_plan: None,
        }
    }

    pub fn registry(&self) -> &SkuRegistry {
        &self.registry
    }

    /// Applies a command; the collection is untouched when it fails.
    pub fn apply(&mut self, command: Command) -> Result<Outcome, RegistryError> {
        let outcome = match command {
            Command::Add(sku) => Outcome::Added(self.registry.add(sku)?),
            Command::AddMissing(skus) => Outcome::AddedMany(self.registry.add_missing(skus)?),
            Command::Update { id, sku } => Outcome::Updated(self.registry.update(id, sku)?),
            Command::Delete(id) => Outcome::Deleted(self.registry.delete(id)?),
            Command::Clear => Outcome::Cleared(self.registry.clear()),
        };
        self.cached_plan = None;
        Ok(outcome)
    }

    pub fn ranked(&self) -> Vec<ScoredSku> {
        self.registry.ranked()
    }

    /// Returns the layout plan for the current collection, reusing the cache when fresh.
    pub fn layout(&mut self, config: &LayoutConfig) -> Arc<LayoutPlan> {
        let revision = self.registry.revision();
        if let Some(cached) = &self.cached_plan {
            if cached.revision == revision {
                return Arc::clone(&cached.plan);
            }
        }

        let plan = Arc::new(pack(
            &self.registry.ranked(),
            config.warehouse(),
            config.geometry(),
            &HashMap::new(),
        ));
        self.cached_plan = Some(CachedPlan {
            revision,
            plan: Arc::clone(&plan),
        });
        plan
    }

    /// Whether a layout plan is cached for the current revision.
    pub fn has_fresh_layout(&self) -> bool {
        self.cached_plan
            .as_ref()
            .is_some_and(|cached| cached.revision == self.registry.revision())
    }
}
