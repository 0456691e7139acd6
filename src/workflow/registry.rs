/// Template registry seam and an in-process catalog using ArcSwap
///
/// Workflow listings need display names for templates and their
/// implementations. Callers inject any [`TemplateRegistry`] into the read
/// path; [`TemplateCatalog`] is the lock-free in-memory implementation that
/// template plugins register into at startup.

use arc_swap::ArcSwap;
use std::collections::HashMap;

/// Resolves template and implementation display metadata
///
/// Lookups return `None` when the template or implementation is not known.
pub trait TemplateRegistry: Send + Sync {
    /// Friendly name of a template
    fn template_name(&self, template_id: &str) -> Option<String>;

    /// Display name of one implementation of a template
    fn implementation_name(&self, template_id: &str, impl_id: &str) -> Option<String>;
}

/// Lock-free template catalog
///
/// Reads load the current map without blocking; updates clone the map,
/// modify the copy and swap it in atomically.
#[derive(Debug, Default)]
pub struct TemplateCatalog {
    /// Key: template_id
    templates: ArcSwap<HashMap<String, TemplateEntry>>,
}

/// A registered template with its known implementations
#[derive(Debug, Clone)]
struct TemplateEntry {
    friendly_name: String,
    /// Key: impl_id, Value: implementation display name
    implementations: HashMap<String, String>,
}

impl TemplateCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register or rename a template
    ///
    /// Re-registering keeps implementations already attached to the template.
    pub fn register_template(&self, template_id: &str, friendly_name: &str) {
        self.templates.rcu(|current| {
            let mut next = (**current).clone();
            next.entry(template_id.to_string())
                .and_modify(|entry| entry.friendly_name = friendly_name.to_string())
                .or_insert_with(|| TemplateEntry {
                    friendly_name: friendly_name.to_string(),
                    implementations: HashMap::new(),
                });
            next
        });

        tracing::debug!("Registered workflow template: {}", template_id);
    }

    /// Attach an implementation to a registered template
    ///
    /// Returns false when the template is unknown.
    pub fn register_implementation(
        &self,
        template_id: &str,
        impl_id: &str,
        implementation_name: &str,
    ) -> bool {
        if !self.templates.load().contains_key(template_id) {
            return false;
        }

        let mut attached = false;
        self.templates.rcu(|current| {
            let mut next = (**current).clone();
            attached = match next.get_mut(template_id) {
                Some(entry) => {
                    entry
                        .implementations
                        .insert(impl_id.to_string(), implementation_name.to_string());
                    true
                }
                None => false,
            };
            next
        });

        if attached {
            tracing::debug!("Registered implementation {} for template {}", impl_id, template_id);
        }
        attached
    }

    /// Drop a template together with its implementations
    pub fn unregister_template(&self, template_id: &str) -> bool {
        if !self.templates.load().contains_key(template_id) {
            return false;
        }

        self.templates.rcu(|current| {
            let mut next = (**current).clone();
            next.remove(template_id);
            next
        });

        tracing::info!("Unregistered workflow template: {}", template_id);
        true
    }

    /// Number of registered templates
    pub fn len(&self) -> usize {
        self.templates.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.load().is_empty()
    }
}

impl TemplateRegistry for TemplateCatalog {
    fn template_name(&self, template_id: &str) -> Option<String> {
        self.templates
            .load()
            .get(template_id)
            .map(|entry| entry.friendly_name.clone())
    }

    fn implementation_name(&self, template_id: &str, impl_id: &str) -> Option<String> {
        self.templates
            .load()
            .get(template_id)
            .and_then(|entry| entry.implementations.get(impl_id).cloned())
    }
}
