use lasso::{Rodeo, Spur};

/// A lightweight, interned identifier for nodes in the scene graph.
/// Copies and comparisons are O(1).
///
/// The text lives in the `IdGen` of the document that allocated the ID,
/// so an ID only resolves against that document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(Spur);

/// Per-document ID source. Produces `<kind><n>` or `<kind><n>_<suffix>`.
///
/// Counters and the string table are owned by the document, so two
/// documents built from the same call sequence get the same IDs and a
/// dropped document releases every ID it allocated.
#[derive(Debug, Clone, Default)]
pub struct IdGen {
    next: u64,
    names: Rodeo,
}

impl IdGen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next ID for a node of `kind`, tagged with an optional
    /// human-readable suffix (e.g. `SetClip`, `HatchBrush`).
    pub fn next(&mut self, kind: &str, suffix: Option<&str>) -> NodeId {
        self.next += 1;
        let name = match suffix {
            Some(s) => format!("{kind}{}_{s}", self.next),
            None => format!("{kind}{}", self.next),
        };
        NodeId(self.names.get_or_intern(name))
    }

    /// The text of `id`.
    pub fn resolve(&self, id: NodeId) -> &str {
        self.names.resolve(&id.0)
    }

    /// The ID previously allocated with this exact text, if any.
    pub fn lookup(&self, name: &str) -> Option<NodeId> {
        self.names.get(name).map(NodeId)
    }

    /// Number of IDs allocated so far.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
