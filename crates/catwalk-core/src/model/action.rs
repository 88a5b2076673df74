//! The closed set of action kinds a request can carry.

/// Semantic operation requested on a resource.
///
/// This enum is deliberately closed: access-policy selection matches on it
/// exhaustively, so adding a kind is a compile error everywhere a decision
/// depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Create,
    List,
    Retrieve,
    Update,
    PartialUpdate,
    Delete,
}

impl ActionKind {
    /// Safe (read-type) actions never mutate an instance.
    pub fn is_safe(self) -> bool {
        matches!(self, ActionKind::List | ActionKind::Retrieve)
    }

    /// Write-type actions target an existing instance.
    pub fn is_write(self) -> bool {
        matches!(
            self,
            ActionKind::Update | ActionKind::PartialUpdate | ActionKind::Delete
        )
    }

    /// Label used in logs and metrics.
    pub fn as_str(self) -> &'static str {
        match self {
            ActionKind::Create => "create",
            ActionKind::List => "list",
            ActionKind::Retrieve => "retrieve",
            ActionKind::Update => "update",
            ActionKind::PartialUpdate => "partial_update",
            ActionKind::Delete => "delete",
        }
    }
}
