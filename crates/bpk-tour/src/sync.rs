#![forbid(unsafe_code)]

//! Active-target synchronization.
//!
//! When the active step changes, the element highlighted for the old step
//! loses the active class and the element for the new step gains it. Both
//! elements are resolved *before* either is touched, so a step list where
//! two steps share a target ends with that target still marked.

use bpk_dom::Element;

/// Which targets a transition found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SyncOutcome {
    pub previous_resolved: bool,
    pub current_resolved: bool,
}

/// Move `class_name` from `previous` to `current`. Absent elements are skipped.
pub fn sync_targets(
    previous: Option<&Element>,
    current: Option<&Element>,
    class_name: &str,
) -> SyncOutcome {
    if let Some(previous) = previous {
        previous.remove_class(class_name);
    }
    if let Some(current) = current {
        current.add_class(class_name);
    }
    SyncOutcome {
        previous_resolved: previous.is_some(),
        current_resolved: current.is_some(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::Step;
    use bpk_dom::{Document, Locator};

    const ACTIVE: &str = "target--active";

    #[test]
    fn moves_class_between_targets() {
        let doc = Document::new();
        let a = doc.create_element("div");
        let b = doc.create_element("div");
        a.add_class(ACTIVE);
        let outcome = sync_targets(Some(&a), Some(&b), ACTIVE);
        assert!(!a.has_class(ACTIVE));
        assert!(b.has_class(ACTIVE));
        assert_eq!(
            outcome,
            SyncOutcome {
                previous_resolved: true,
                current_resolved: true
            }
        );
    }

    #[test]
    fn tolerates_missing_elements() {
        let doc = Document::new();
        let a = doc.create_element("div");
        a.add_class(ACTIVE);
        assert!(!sync_targets(Some(&a), None, ACTIVE).current_resolved);
        assert!(!a.has_class(ACTIVE));
        assert_eq!(sync_targets(None, None, ACTIVE), SyncOutcome::default());
    }

    #[test]
    fn shared_target_stays_marked() {
        let doc = Document::new();
        let shared = doc.create_element("div");
        let first = Step::new(Locator::element(&shared), "one");
        let second = Step::new(Locator::element(&shared), "two");
        let resolve = |step: &Step| step.target_element();
        sync_targets(None, resolve(&first).as_ref(), ACTIVE);
        sync_targets(resolve(&first).as_ref(), resolve(&second).as_ref(), ACTIVE);
        assert!(shared.has_class(ACTIVE));
    }
}
