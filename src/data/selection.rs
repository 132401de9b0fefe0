use thiserror::Error;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Data file does not contain enough columns (at least {required} needed, found {found}).")]
    InsufficientColumns { required: usize, found: usize },
    #[error("Please select at least two columns ({checked} selected).")]
    InsufficientSelection { checked: usize },
    #[error("Not enough columns in data: column {column} selected but the file has {available}.")]
    ColumnOutOfRange { column: usize, available: usize },
}

// ---------------------------------------------------------------------------
// Column slots – fixed, ordered (label, flag) pairs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSlot {
    pub label: String,
    pub checked: bool,
}

/// The checkboxes of one panel, in display order.
///
/// Slot `i` always refers to matrix column `i`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSelection {
    slots: Vec<ColumnSlot>,
}

impl ColumnSelection {
    /// All slots unchecked.
    pub fn new(labels: &[&str]) -> Self {
        Self {
            slots: labels
                .iter()
                .map(|l| ColumnSlot {
                    label: l.to_string(),
                    checked: false,
                })
                .collect(),
        }
    }

    /// Slots with explicit flags. Missing flags are unchecked, extra flags
    /// are dropped.
    pub fn with_flags(labels: &[&str], flags: &[bool]) -> Self {
        let mut sel = Self::new(labels);
        for (slot, &flag) in sel.slots.iter_mut().zip(flags) {
            slot.checked = flag;
        }
        sel
    }

    pub fn slots(&self) -> &[ColumnSlot] {
        &self.slots
    }

    pub fn label(&self, idx: usize) -> Option<&str> {
        self.slots.get(idx).map(|s| s.label.as_str())
    }

    /// Set one flag. Returns `true` if the state actually changed.
    pub fn set_checked(&mut self, idx: usize, checked: bool) -> bool {
        match self.slots.get_mut(idx) {
            Some(slot) if slot.checked != checked => {
                slot.checked = checked;
                true
            }
            _ => false,
        }
    }

    /// Indices of checked slots, in scan order.
    pub fn checked_indices(&self) -> Vec<usize> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, s)| s.checked)
            .map(|(i, _)| i)
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Picking series out of the checked set
// ---------------------------------------------------------------------------

/// Which columns feed which role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesPick {
    pub x: usize,
    pub y: usize,
    pub z: Option<usize>,
    /// Checked columns beyond what the panel can show.
    pub ignored: Vec<usize>,
}

/// First checked slot is x, second is y, third (when `allow_secondary`) is z.
/// Anything after that lands in `ignored`.
pub fn pick_series(
    selection: &ColumnSelection,
    allow_secondary: bool,
) -> Result<SeriesPick, SelectionError> {
    let checked = selection.checked_indices();
    if checked.len() < 2 {
        return Err(SelectionError::InsufficientSelection {
            checked: checked.len(),
        });
    }

    let used = if allow_secondary { 3 } else { 2 };
    let z = if allow_secondary {
        checked.get(2).copied()
    } else {
        None
    };
    let ignored = checked.iter().skip(used).copied().collect();

    Ok(SeriesPick {
        x: checked[0],
        y: checked[1],
        z,
        ignored,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const LABELS: [&str; 5] = ["Column 1", "Column 2", "Column 3", "Column 4", "Column 5"];

    #[test]
    fn test_two_checked() {
        let sel = ColumnSelection::with_flags(&LABELS, &[true, true, false, false, false]);
        let pick = pick_series(&sel, true).unwrap();
        assert_eq!((pick.x, pick.y, pick.z), (0, 1, None));
        assert!(pick.ignored.is_empty());
    }

    #[test]
    fn test_positional_not_labeled() {
        // Column 3 and Column 5: x comes from the earlier slot regardless of label.
        let sel = ColumnSelection::with_flags(&LABELS, &[false, false, true, false, true]);
        let pick = pick_series(&sel, true).unwrap();
        assert_eq!((pick.x, pick.y), (2, 4));
    }

    #[test]
    fn test_too_few_checked() {
        let none = ColumnSelection::with_flags(&LABELS, &[false; 5]);
        assert_eq!(
            pick_series(&none, true),
            Err(SelectionError::InsufficientSelection { checked: 0 })
        );
        let one = ColumnSelection::with_flags(&LABELS, &[false, true, false, false, false]);
        assert_eq!(
            pick_series(&one, true),
            Err(SelectionError::InsufficientSelection { checked: 1 })
        );
    }

    #[test]
    fn test_third_is_secondary_rest_ignored() {
        let sel = ColumnSelection::with_flags(&LABELS, &[true; 5]);
        let pick = pick_series(&sel, true).unwrap();
        assert_eq!(pick.z, Some(2));
        assert_eq!(pick.ignored, vec![3, 4]);
    }

    #[test]
    fn test_no_secondary_when_unsupported() {
        let sel = ColumnSelection::with_flags(&LABELS, &[true, true, true, false, false]);
        let pick = pick_series(&sel, false).unwrap();
        assert_eq!(pick.z, None);
        assert_eq!(pick.ignored, vec![2]);
    }

    #[test]
    fn test_set_checked_reports_change() {
        let mut sel = ColumnSelection::new(&LABELS);
        assert!(sel.set_checked(1, true));
        assert!(!sel.set_checked(1, true));
        assert!(!sel.set_checked(9, true));
        assert_eq!(sel.checked_indices(), vec![1]);
    }
}
