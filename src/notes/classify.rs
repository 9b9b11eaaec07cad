/// Destination bucket for a converted note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteCategory {
    Trash,
    Archive,
    Unsorted,
}

impl NoteCategory {
    /// Trashed wins over archived when a note carries both flags.
    pub fn from_flags(is_trashed: bool, is_archived: bool) -> Self {
        if is_trashed {
            NoteCategory::Trash
        } else if is_archived {
            NoteCategory::Archive
        } else {
            NoteCategory::Unsorted
        }
    }

    pub fn dir_name(&self) -> &'static str {
        match self {
            NoteCategory::Trash => "trash",
            NoteCategory::Archive => "archive",
            NoteCategory::Unsorted => "unsorted",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trashed_takes_precedence_over_archived() {
        assert_eq!(NoteCategory::from_flags(true, true), NoteCategory::Trash);
        assert_eq!(NoteCategory::from_flags(true, false), NoteCategory::Trash);
    }

    #[test]
    fn archived_when_not_trashed() {
        assert_eq!(NoteCategory::from_flags(false, true), NoteCategory::Archive);
    }

    #[test]
    fn unsorted_when_neither_flag_set() {
        assert_eq!(
            NoteCategory::from_flags(false, false),
            NoteCategory::Unsorted
        );
    }

    #[test]
    fn directory_names() {
        assert_eq!(NoteCategory::Trash.dir_name(), "trash");
        assert_eq!(NoteCategory::Archive.dir_name(), "archive");
        assert_eq!(NoteCategory::Unsorted.dir_name(), "unsorted");
    }
}
