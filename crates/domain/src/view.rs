//! View selection — which hall gets the detailed (focused) card.

use serde::{Deserialize, Serialize};

use crate::hall::Hall;
use crate::id::HallId;

/// The derived, read-only board view: one focused hall rendered in detail,
/// the rest in sorted order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    /// The hall matching the remembered selection, or the first hall of the
    /// sorted order when the selection is unset or no longer exists.
    pub focused: Option<Hall>,
    /// Remaining halls in sorted order, focused hall excluded.
    pub rest: Vec<Hall>,
}

/// Split a sorted hall list into the focused hall and the rest.
#[must_use]
pub fn split_view(sorted: Vec<Hall>, expanded: Option<&HallId>) -> BoardView {
    let focused_index = expanded
        .and_then(|id| sorted.iter().position(|hall| hall.id == *id))
        .or(if sorted.is_empty() { None } else { Some(0) });

    match focused_index {
        None => BoardView {
            focused: None,
            rest: sorted,
        },
        Some(index) => {
            let mut rest = sorted;
            let focused = rest.remove(index);
            BoardView {
                focused: Some(focused),
                rest,
            }
        }
    }
}
