//! Optional LLM-backed plan enhancement hook.
//!
//! The product keeps an API-key setting for reordering plans with an
//! external model. No provider is wired up; with or without a key the
//! active strategy is the identity pass, so generation stays fully
//! deterministic.

use crate::models::ScheduledItem;

/// Strategy applied to a generated item list before it is persisted.
pub trait PlanEnhancer: Send + Sync {
    fn enhance(&self, items: Vec<ScheduledItem>) -> Vec<ScheduledItem>;
}

/// Identity pass: items come back untouched.
pub struct NoopEnhancer;

impl PlanEnhancer for NoopEnhancer {
    fn enhance(&self, items: Vec<ScheduledItem>) -> Vec<ScheduledItem> {
        items
    }
}

/// Select the enhancement strategy for the configured API key.
pub fn from_config(llm_api_key: Option<&str>) -> Box<dyn PlanEnhancer> {
    match llm_api_key {
        Some(_) => {
            tracing::info!("LLM enhancement key configured; using pass-through until a provider is wired up");
            Box::new(NoopEnhancer)
        }
        None => Box::new(NoopEnhancer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_enhancer_is_identity() {
        let enhancer = NoopEnhancer;
        let items: Vec<ScheduledItem> = vec![];
        assert!(enhancer.enhance(items).is_empty());
    }
}
