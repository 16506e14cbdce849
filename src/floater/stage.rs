//! Selection stages and the per-gesture selection state

/// One of the drill-down phases of a gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Book,
    Chapter,
    Verse,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Book => "book",
            Stage::Chapter => "chapter",
            Stage::Verse => "verse",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a gesture currently is, together with the hovered cell of that stage.
///
/// Earlier stages keep the index they were committed with; only the current
/// stage has a `hovered` cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Idle,
    Book {
        hovered: Option<usize>,
    },
    Chapter {
        book: usize,
        hovered: Option<usize>,
    },
    Verse {
        book: usize,
        chapter: usize,
        hovered: Option<usize>,
    },
}

impl Selection {
    pub fn stage(&self) -> Option<Stage> {
        match self {
            Selection::Idle => None,
            Selection::Book { .. } => Some(Stage::Book),
            Selection::Chapter { .. } => Some(Stage::Chapter),
            Selection::Verse { .. } => Some(Stage::Verse),
        }
    }

    /// The hovered cell of the current stage
    pub fn hovered(&self) -> Option<usize> {
        match *self {
            Selection::Idle => None,
            Selection::Book { hovered }
            | Selection::Chapter { hovered, .. }
            | Selection::Verse { hovered, .. } => hovered,
        }
    }

    pub(crate) fn set_hovered(&mut self, index: Option<usize>) {
        match self {
            Selection::Idle => {}
            Selection::Book { hovered }
            | Selection::Chapter { hovered, .. }
            | Selection::Verse { hovered, .. } => *hovered = index,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Selection::Idle)
    }
}
