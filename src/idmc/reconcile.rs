//! Set reconciliation between desired and previously applied privileges

use std::collections::BTreeSet;
use std::fmt;

/// A set of privilege ids
pub type PrivilegeSet = BTreeSet<String>;

/// Which half of a reconciliation a failure belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcilePhase {
    Add,
    Remove,
}

impl fmt::Display for ReconcilePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReconcilePhase::Add => write!(f, "add"),
            ReconcilePhase::Remove => write!(f, "remove"),
        }
    }
}

/// Privileges to add and to remove to move from one set to another
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconciliationPlan {
    pub to_add: PrivilegeSet,
    pub to_remove: PrivilegeSet,
}

impl ReconciliationPlan {
    /// True when both halves are empty
    pub fn is_empty(&self) -> bool {
        self.to_add.is_empty() && self.to_remove.is_empty()
    }
}

/// Compute `desired \ previous` and `previous \ desired`
pub fn reconcile(desired: &PrivilegeSet, previous: &PrivilegeSet) -> ReconciliationPlan {
    ReconciliationPlan {
        to_add: desired.difference(previous).cloned().collect(),
        to_remove: previous.difference(desired).cloned().collect(),
    }
}
