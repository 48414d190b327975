//! Editor metadata for the `action-button` document construct.

/// How a host editor treats a document construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConstructDescriptor {
    /// Name used in documents.
    pub name: &'static str,
    /// Number of arguments.
    pub arity: usize,
    /// Number of arguments the cursor may enter during structured editing.
    pub accessible: usize,
}

impl ConstructDescriptor {
    /// Whether the construct is edited as one atomic unit.
    pub fn is_opaque_for_editing(&self) -> bool {
        self.accessible == 0
    }

    /// Whether argument `index` can be navigated into.
    pub fn is_accessible(&self, index: usize) -> bool {
        index < self.accessible.min(self.arity)
    }
}

/// `action-button` takes `(content, command)` and hides both from the cursor.
pub const ACTION_BUTTON: ConstructDescriptor = ConstructDescriptor {
    name: "action-button",
    arity: 2,
    accessible: 0,
};
