//! Snapshot rendering shared by the TUI and the CLI
//!
//! [`cells`] maps a snapshot to one [`ArrayCell`] per array slot, in order,
//! tagging each with the role that decides how it is drawn. The ratatui pane
//! lives in [`crate::ui::panes::array`]; [`to_text`] is the plain one-line form.

use crate::snapshot::Snapshot;

/// How a single array slot is highlighted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellRole {
    /// Not yet in its final position
    Unsorted,
    /// One of the two values being compared
    Comparing,
    /// Known to be in its final position
    Settled,
}

/// One drawable array slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrayCell {
    pub index: usize,
    pub value: i64,
    pub role: CellRole,
}

/// Map a snapshot to its cells, in `state` order.
///
/// Slots past `pointer` are settled. On a pass boundary the slot at
/// `pointer` has just been placed, so it counts as settled too, and a
/// boundary whose array is already in order settles every slot.
pub fn cells(snapshot: &Snapshot) -> Vec<ArrayCell> {
    let all_settled = snapshot.is_pass_boundary() && is_ordered(&snapshot.state);
    snapshot
        .state
        .iter()
        .enumerate()
        .map(|(index, &value)| ArrayCell {
            index,
            value,
            role: if all_settled {
                CellRole::Settled
            } else {
                role_of(snapshot, index)
            },
        })
        .collect()
}

fn role_of(snapshot: &Snapshot, index: usize) -> CellRole {
    match snapshot.comparing {
        Some(cmp) if cmp.contains(index) => CellRole::Comparing,
        Some(_) if index > snapshot.pointer => CellRole::Settled,
        None if index >= snapshot.pointer => CellRole::Settled,
        _ => CellRole::Unsorted,
    }
}

fn is_ordered(values: &[i64]) -> bool {
    values.windows(2).all(|pair| pair[0] <= pair[1])
}

/// Render a snapshot on one line: `[v]` unsorted, `<v>` compared,
/// `{v}` settled.
pub fn to_text(snapshot: &Snapshot) -> String {
    cells(snapshot)
        .iter()
        .map(|cell| match cell.role {
            CellRole::Unsorted => format!("[{}]", cell.value),
            CellRole::Comparing => format!("<{}>", cell.value),
            CellRole::Settled => format!("{{{}}}", cell.value),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Short description of what a snapshot shows, e.g. for a status line
pub fn describe(snapshot: &Snapshot) -> String {
    match snapshot.comparing {
        Some(cmp) => format!(
            "Comparing a[{}]={} and a[{}]={}",
            cmp.left(),
            snapshot.state[cmp.left()],
            cmp.right(),
            snapshot.state[cmp.right()]
        ),
        None if snapshot.state.len() <= 1 => "Nothing to sort".to_string(),
        None => format!("Pass complete, a[{}] settled", snapshot.pointer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::Comparison;

    fn snapshot(state: Vec<i64>, comparing: Option<usize>, pointer: usize) -> Snapshot {
        Snapshot {
            state,
            comparing: comparing.map(Comparison::new),
            pointer,
        }
    }

    #[test]
    fn test_cells_follow_state_order() {
        let snap = snapshot(vec![5, 3, 8, 1], Some(0), 3);
        let values: Vec<i64> = cells(&snap).iter().map(|c| c.value).collect();
        assert_eq!(values, vec![5, 3, 8, 1]);
    }

    #[test]
    fn test_comparing_cells_highlighted() {
        let snap = snapshot(vec![5, 3, 8, 1], Some(1), 3);
        let roles: Vec<CellRole> = cells(&snap).iter().map(|c| c.role).collect();
        assert_eq!(
            roles,
            vec![
                CellRole::Unsorted,
                CellRole::Comparing,
                CellRole::Comparing,
                CellRole::Unsorted
            ]
        );
    }

    #[test]
    fn test_settled_suffix() {
        let during = snapshot(vec![3, 5, 1, 8], Some(0), 2);
        assert_eq!(cells(&during)[3].role, CellRole::Settled);
        assert_eq!(cells(&during)[2].role, CellRole::Unsorted);

        let boundary = snapshot(vec![3, 1, 5, 8], None, 2);
        let roles: Vec<CellRole> = cells(&boundary).iter().map(|c| c.role).collect();
        assert_eq!(
            roles,
            vec![
                CellRole::Unsorted,
                CellRole::Unsorted,
                CellRole::Settled,
                CellRole::Settled
            ]
        );
    }

    #[test]
    fn test_ordered_boundary_settles_everything() {
        // Final snapshot of an early exit: pointer is still 2
        let finished = snapshot(vec![1, 2, 3], None, 2);
        assert!(cells(&finished).iter().all(|c| c.role == CellRole::Settled));
        assert_eq!(to_text(&finished), "{1} {2} {3}");

        // Mid-pass comparisons keep the pointer-based roles
        let comparing = snapshot(vec![1, 2, 3], Some(0), 2);
        assert_eq!(to_text(&comparing), "<1> <2> [3]");
    }

    #[test]
    fn test_to_text() {
        let snap = snapshot(vec![3, 5, 1, 8], Some(1), 2);
        assert_eq!(to_text(&snap), "[3] <5> <1> {8}");

        let single = snapshot(vec![7], None, 0);
        assert_eq!(to_text(&single), "{7}");
    }

    #[test]
    fn test_describe() {
        let snap = snapshot(vec![5, -3], Some(0), 1);
        assert_eq!(describe(&snap), "Comparing a[0]=5 and a[1]=-3");
        assert_eq!(describe(&snapshot(vec![1, 2], None, 1)), "Pass complete, a[1] settled");
        assert_eq!(describe(&snapshot(vec![7], None, 0)), "Nothing to sort");
    }
}
