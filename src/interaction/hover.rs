use crate::content::TreePart;
use crate::growth::{SegmentId, TreeModel};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Enter,
    Leave,
    Click,
}

/// A pointer event already resolved to the segment under the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub segment: SegmentId,
}

impl PointerEvent {
    pub fn new(kind: PointerKind, segment: SegmentId) -> Self {
        Self { kind, segment }
    }
}

/// Observable effect of a pointer event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    HoverStarted(TreePart),
    HoverEnded(TreePart),
    Selected(TreePart),
}

pub type SelectionCallback = Box<dyn FnMut(TreePart)>;

/// Hover flags and the current selection of the tree viewer
#[derive(Default)]
pub struct TreeInteraction {
    hovered: [bool; 4],
    selected: Option<TreePart>,
    on_selected: Option<SelectionCallback>,
}

impl TreeInteraction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_on_selected(&mut self, callback: SelectionCallback) {
        self.on_selected = Some(callback);
    }

    /// Apply one pointer event. Segments the model does not know are ignored.
    pub fn handle(&mut self, model: &TreeModel, event: PointerEvent) -> Option<Transition> {
        let part = model.part_of(event.segment)?;
        match event.kind {
            PointerKind::Enter => self.set_hovered(part, true).then_some(Transition::HoverStarted(part)),
            PointerKind::Leave => self.set_hovered(part, false).then_some(Transition::HoverEnded(part)),
            PointerKind::Click => {
                self.select(part);
                Some(Transition::Selected(part))
            }
        }
    }

    /// Select a part directly and notify the selection callback
    pub fn select(&mut self, part: TreePart) {
        log::debug!("Selected {}", part);
        self.selected = Some(part);
        if let Some(callback) = self.on_selected.as_mut() {
            callback(part);
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<TreePart> {
        self.selected
    }

    pub fn is_hovered(&self, part: TreePart) -> bool {
        self.hovered[part.index()]
    }

    /// Hover flags packed as bits, `1 << part.index()`
    pub fn hover_mask(&self) -> u32 {
        TreePart::ALL
            .iter()
            .filter(|p| self.is_hovered(**p))
            .fold(0, |mask, p| mask | (1 << p.index()))
    }

    pub fn clear_hover(&mut self) -> Vec<TreePart> {
        let cleared: Vec<TreePart> = TreePart::ALL.into_iter().filter(|p| self.is_hovered(*p)).collect();
        self.hovered = [false; 4];
        cleared
    }

    /// Returns whether the flag changed
    fn set_hovered(&mut self, part: TreePart, hovered: bool) -> bool {
        let flag = &mut self.hovered[part.index()];
        if *flag == hovered {
            return false;
        }
        *flag = hovered;
        log::debug!("{} hover {}", part, if hovered { "on" } else { "off" });
        true
    }
}

/// Turns a stream of "segment under the cursor" samples into enter/leave events
#[derive(Debug, Default)]
pub struct PointerTracker {
    current: Option<SegmentId>,
}

impl PointerTracker {
    pub fn move_to(&mut self, hit: Option<SegmentId>) -> Vec<PointerEvent> {
        if hit == self.current {
            return Vec::new();
        }
        let mut events = Vec::with_capacity(2);
        if let Some(old) = self.current {
            events.push(PointerEvent::new(PointerKind::Leave, old));
        }
        if let Some(new) = hit {
            events.push(PointerEvent::new(PointerKind::Enter, new));
        }
        self.current = hit;
        events
    }

    pub fn current(&self) -> Option<SegmentId> {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn first_segment(model: &TreeModel, part: TreePart) -> SegmentId {
        model.segments_of(part).next().unwrap().id
    }

    #[test]
    fn test_enter_leave_toggles_only_that_part() {
        let model = TreeModel::default();
        let mut interaction = TreeInteraction::new();
        let roots = first_segment(&model, TreePart::Roots);

        let t = interaction.handle(&model, PointerEvent::new(PointerKind::Enter, roots));
        assert_eq!(t, Some(Transition::HoverStarted(TreePart::Roots)));
        assert!(interaction.is_hovered(TreePart::Roots));
        assert!(!interaction.is_hovered(TreePart::Bark));
        assert_eq!(interaction.hover_mask(), 1 << TreePart::Roots.index());

        interaction.handle(&model, PointerEvent::new(PointerKind::Leave, roots));
        assert_eq!(interaction.hover_mask(), 0);
    }

    #[test]
    fn test_click_selects_and_notifies_once() {
        let model = TreeModel::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut interaction = TreeInteraction::new();
        interaction.set_on_selected(Box::new(move |part| sink.borrow_mut().push(part)));

        let leaves = first_segment(&model, TreePart::Leaves);
        interaction.handle(&model, PointerEvent::new(PointerKind::Click, leaves));
        assert_eq!(interaction.selected(), Some(TreePart::Leaves));
        assert_eq!(*seen.borrow(), vec![TreePart::Leaves]);
    }

    #[test]
    fn test_unknown_segment_is_ignored() {
        let model = TreeModel::default();
        let mut interaction = TreeInteraction::new();
        let t = interaction.handle(&model, PointerEvent::new(PointerKind::Click, SegmentId(10_000)));
        assert_eq!(t, None);
        assert_eq!(interaction.selected(), None);
    }

    #[test]
    fn test_repeated_enter_reports_once() {
        let model = TreeModel::default();
        let mut interaction = TreeInteraction::new();
        let mut branches = model.segments_of(TreePart::Branches).map(|s| s.id);
        let a = branches.next().unwrap();
        let b = branches.next().unwrap();
        assert!(interaction.handle(&model, PointerEvent::new(PointerKind::Enter, a)).is_some());
        assert!(interaction.handle(&model, PointerEvent::new(PointerKind::Enter, b)).is_none());
    }

    #[test]
    fn test_tracker_emits_leave_before_enter() {
        let mut tracker = PointerTracker::default();
        assert_eq!(
            tracker.move_to(Some(SegmentId(1))),
            vec![PointerEvent::new(PointerKind::Enter, SegmentId(1))]
        );
        assert!(tracker.move_to(Some(SegmentId(1))).is_empty());
        assert_eq!(
            tracker.move_to(Some(SegmentId(2))),
            vec![
                PointerEvent::new(PointerKind::Leave, SegmentId(1)),
                PointerEvent::new(PointerKind::Enter, SegmentId(2)),
            ]
        );
        assert_eq!(
            tracker.move_to(None),
            vec![PointerEvent::new(PointerKind::Leave, SegmentId(2))]
        );
        assert_eq!(tracker.current(), None);
    }

    #[test]
    fn test_clear_selection() {
        let mut interaction = TreeInteraction::new();
        interaction.select(TreePart::Bark);
        interaction.clear_selection();
        assert_eq!(interaction.selected(), None);
    }
}
