//! Collapsing unchanged runs far from any change.

use super::SplitRow;

/// Replace every unchanged row further than `context` rows from a change
/// with [`SplitRow::Fold`] markers, one per contiguous hidden run.
pub fn fold_unchanged(rows: Vec<SplitRow>, context: usize) -> Vec<SplitRow> {
    let changed: Vec<usize> = rows
        .iter()
        .enumerate()
        .filter(|(_, row)| !row.is_unchanged())
        .map(|(i, _)| i)
        .collect();

    if changed.is_empty() {
        return rows;
    }

    let mut visible = vec![false; rows.len()];
    for &i in &changed {
        let start = i.saturating_sub(context);
        let end = i.saturating_add(context).saturating_add(1).min(rows.len());
        visible[start..end].iter_mut().for_each(|v| *v = true);
    }

    let mut folded = Vec::with_capacity(rows.len());
    let mut hidden = 0;
    for (row, keep) in rows.into_iter().zip(visible) {
        if keep {
            if hidden > 0 {
                folded.push(SplitRow::Fold { hidden });
                hidden = 0;
            }
            folded.push(row);
        } else {
            hidden += 1;
        }
    }
    if hidden > 0 {
        folded.push(SplitRow::Fold { hidden });
    }
    folded
}
