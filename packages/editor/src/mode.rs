use serde::{Deserialize, Serialize};

/// Whether a section editor accepts edits.
///
/// `Locked` is the initial state. The only transitions are
/// `Locked → Editing` (begin edit) and `Editing → Locked` (save succeeded or
/// edits discarded). A failed save stays in `Editing`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EditMode {
    #[default]
    Locked,
    Editing,
}

impl EditMode {
    pub fn is_editing(self) -> bool {
        self == EditMode::Editing
    }

    pub fn is_locked(self) -> bool {
        self == EditMode::Locked
    }
}

impl std::fmt::Display for EditMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EditMode::Locked => write!(f, "locked"),
            EditMode::Editing => write!(f, "editing"),
        }
    }
}
