use serde::Serialize;

/// Horizontal distance a card must travel to commit an action
pub const DRAG_THRESHOLD: i32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DragDecision {
    Resolve,
    /// Acknowledged but has no effect
    Snooze,
    Cancel,
}

/// Decide what a released drag does. Both thresholds are exclusive.
pub fn drag_decision(offset: i32) -> DragDecision {
    if offset > DRAG_THRESHOLD {
        DragDecision::Resolve
    } else if offset < -DRAG_THRESHOLD {
        DragDecision::Snooze
    } else {
        DragDecision::Cancel
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds_are_exclusive() {
        assert_eq!(drag_decision(101), DragDecision::Resolve);
        assert_eq!(drag_decision(100), DragDecision::Cancel);
        assert_eq!(drag_decision(0), DragDecision::Cancel);
        assert_eq!(drag_decision(-100), DragDecision::Cancel);
        assert_eq!(drag_decision(-101), DragDecision::Snooze);
    }
}
