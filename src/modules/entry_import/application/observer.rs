use crate::modules::entry_import::domain::ResolvedAction;

/// Host-side sink for workflow output events
///
/// `on_resolved` fires at most once per commit, currently only for the
/// reuse-local outcome; the new-entity path notifies through the entry
/// importer instead. `on_close` fires exactly once per commit or explicit
/// cancel and tells the host to tear down the workflow's surface.
pub trait WorkflowObserver: Send + Sync {
    fn on_resolved(&self, action: &ResolvedAction);

    fn on_close(&self);
}
