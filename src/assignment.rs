//! Active-field assignment: the bounded, ordered list of fields shown on the
//! center card, and the drag state machine that edits it.

use tracing::{debug, info};

use crate::constants::fields::MAX_ACTIVE;
use crate::fields::FieldId;

/// Ordered, duplicate-free list of at most [`MAX_ACTIVE`] fields
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ActiveFields(Vec<FieldId>);

/// Result of inserting a field at a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted { evicted: Option<FieldId> },
    AlreadyPresent,
}

impl ActiveFields {
    /// Seed from any sequence, keeping first occurrences up to the limit
    pub fn new(fields: impl IntoIterator<Item = FieldId>) -> Self {
        let mut active = Self::default();
        for field in fields {
            if active.0.len() == MAX_ACTIVE {
                break;
            }
            if !active.contains(field) {
                active.0.push(field);
            }
        }
        active
    }

    pub fn as_slice(&self) -> &[FieldId] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.0.len() >= MAX_ACTIVE
    }

    pub fn contains(&self, field: FieldId) -> bool {
        self.0.contains(&field)
    }

    pub fn position(&self, field: FieldId) -> Option<usize> {
        self.0.iter().position(|f| *f == field)
    }

    /// Insert at `slot` (clamped to the length), evicting the tail on overflow
    pub fn insert_at(&mut self, field: FieldId, slot: usize) -> InsertOutcome {
        if self.contains(field) {
            return InsertOutcome::AlreadyPresent;
        }
        let slot = slot.min(self.0.len());
        self.0.insert(slot, field);
        let evicted = if self.0.len() > MAX_ACTIVE {
            self.0.pop()
        } else {
            None
        };
        InsertOutcome::Inserted { evicted }
    }

    /// Append when there is room and the field is not present
    pub fn push(&mut self, field: FieldId) -> bool {
        if self.is_full() || self.contains(field) {
            return false;
        }
        self.0.push(field);
        true
    }

    pub fn remove(&mut self, field: FieldId) -> bool {
        match self.position(field) {
            Some(idx) => {
                self.0.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Move the entry at `from` so it lands before the entry currently at `to`
    ///
    /// `to` is an insertion index into the list as it looks before the move;
    /// `to == len` moves the entry to the end.
    pub fn move_to(&mut self, from: usize, to: usize) -> bool {
        if from >= self.0.len() {
            return false;
        }
        let mut to = to.min(self.0.len());
        // Removing the source shifts everything after it up by one
        if from < to {
            to -= 1;
        }
        if from == to {
            return false;
        }
        let field = self.0.remove(from);
        self.0.insert(to, field);
        true
    }
}

/// Where a drag started
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragOrigin {
    /// An unassigned bubble on the ring
    Circle,
    /// A row of the preview list
    List,
}

/// Where the insertion marker sits on a hovered preview row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowMarker {
    /// The row being dragged hovers over itself
    Through,
    Above,
    Below,
}

/// Slot a release over preview row `row` would target, and where to mark it.
///
/// A bubble hovering the lower half of the last row of a full list resolves
/// to that row's slot, so the dropped field replaces the tail instead of
/// being evicted itself.
pub fn row_drop_target(
    field: FieldId,
    origin: DragOrigin,
    row: usize,
    row_field: FieldId,
    lower_half: bool,
) -> (usize, RowMarker) {
    if origin == DragOrigin::List && field == row_field {
        return (row, RowMarker::Through);
    }
    if !lower_half {
        return (row, RowMarker::Above);
    }
    if origin == DragOrigin::Circle && row + 1 >= MAX_ACTIVE {
        return (MAX_ACTIVE - 1, RowMarker::Above);
    }
    (row + 1, RowMarker::Below)
}

/// Transient bookkeeping for one drag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    pub field: FieldId,
    pub origin: DragOrigin,
    pub hover_slot: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AssignmentState {
    #[default]
    Idle,
    DraggingFromCircle {
        field: FieldId,
        hover_slot: Option<usize>,
    },
    DraggingFromList {
        field: FieldId,
        hover_slot: Option<usize>,
    },
}

impl AssignmentState {
    pub fn session(self) -> Option<DragSession> {
        match self {
            AssignmentState::Idle => None,
            AssignmentState::DraggingFromCircle { field, hover_slot } => Some(DragSession {
                field,
                origin: DragOrigin::Circle,
                hover_slot,
            }),
            AssignmentState::DraggingFromList { field, hover_slot } => Some(DragSession {
                field,
                origin: DragOrigin::List,
                hover_slot,
            }),
        }
    }
}

/// What a drop did to the configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// No drag in progress, or nothing applicable
    Ignored,
    Inserted {
        field: FieldId,
        slot: usize,
        evicted: Option<FieldId>,
    },
    Appended {
        field: FieldId,
    },
    Reordered {
        field: FieldId,
        from: usize,
        to: usize,
    },
}

/// Drag/drop state machine over an [`ActiveFields`] list
#[derive(Debug, Clone, Default)]
pub struct AssignmentMachine {
    fields: ActiveFields,
    state: AssignmentState,
}

impl AssignmentMachine {
    pub fn new(fields: ActiveFields) -> Self {
        Self {
            fields,
            state: AssignmentState::Idle,
        }
    }

    pub fn fields(&self) -> &ActiveFields {
        &self.fields
    }

    pub fn session(&self) -> Option<DragSession> {
        self.state.session()
    }

    pub fn is_dragging(&self) -> bool {
        !matches!(self.state, AssignmentState::Idle)
    }

    /// Start dragging `field`; only accepted from idle and from a consistent origin
    pub fn begin_drag(&mut self, field: FieldId, origin: DragOrigin) -> bool {
        if self.is_dragging() {
            debug!(%field, ?origin, "Drag start ignored, another drag is active");
            return false;
        }
        let assigned = self.fields.contains(field);
        self.state = match origin {
            DragOrigin::Circle if !assigned => AssignmentState::DraggingFromCircle {
                field,
                hover_slot: None,
            },
            DragOrigin::List if assigned => AssignmentState::DraggingFromList {
                field,
                hover_slot: None,
            },
            _ => {
                debug!(%field, ?origin, assigned, "Drag start ignored, origin does not match field");
                return false;
            }
        };
        debug!(%field, ?origin, "Drag started");
        true
    }

    /// Record the slot under the pointer (or none) while dragging
    pub fn hover(&mut self, slot: Option<usize>) {
        match &mut self.state {
            AssignmentState::Idle => {}
            AssignmentState::DraggingFromCircle { hover_slot, .. }
            | AssignmentState::DraggingFromList { hover_slot, .. } => *hover_slot = slot,
        }
    }

    /// Drop the dragged field on a list slot
    pub fn drop_on_slot(&mut self, slot: usize) -> DropOutcome {
        let outcome = match self.state {
            AssignmentState::Idle => DropOutcome::Ignored,
            AssignmentState::DraggingFromCircle { field, .. } => {
                match self.fields.insert_at(field, slot) {
                    // A drop past the tail of a full list evicts the new field itself
                    InsertOutcome::Inserted { evicted } => match self.fields.position(field) {
                        Some(slot) => DropOutcome::Inserted { field, slot, evicted },
                        None => DropOutcome::Ignored,
                    },
                    InsertOutcome::AlreadyPresent => DropOutcome::Ignored,
                }
            }
            AssignmentState::DraggingFromList { field, .. } => match self.fields.position(field) {
                Some(from) if self.fields.move_to(from, slot) => DropOutcome::Reordered {
                    field,
                    from,
                    to: self.fields.position(field).unwrap_or(from),
                },
                _ => DropOutcome::Ignored,
            },
        };
        self.log_outcome(outcome);
        self.end_drag();
        outcome
    }

    /// Drop on the preview container outside of any slot
    pub fn drop_on_container(&mut self) -> DropOutcome {
        let outcome = match self.state {
            AssignmentState::DraggingFromCircle { field, .. } if self.fields.push(field) => {
                DropOutcome::Appended { field }
            }
            _ => DropOutcome::Ignored,
        };
        self.log_outcome(outcome);
        self.end_drag();
        outcome
    }

    /// Remove a field regardless of the drag state
    pub fn remove(&mut self, field: FieldId) -> bool {
        let removed = self.fields.remove(field);
        if removed {
            info!(%field, remaining = self.fields.len(), "Removed field from card");
            if let AssignmentState::DraggingFromList { field: dragged, .. } = self.state
                && dragged == field
            {
                self.end_drag();
            }
        }
        removed
    }

    /// Terminal event of any drag: back to idle, bookkeeping cleared
    pub fn end_drag(&mut self) {
        if self.is_dragging() {
            debug!(state = ?self.state, "Drag ended");
        }
        self.state = AssignmentState::Idle;
    }

    fn log_outcome(&self, outcome: DropOutcome) {
        match outcome {
            DropOutcome::Ignored => debug!(state = ?self.state, "Drop ignored"),
            DropOutcome::Inserted { field, slot, evicted } => {
                info!(%field, slot, evicted = ?evicted, "Inserted field into card")
            }
            DropOutcome::Appended { field } => info!(%field, "Appended field to card"),
            DropOutcome::Reordered { field, from, to } => {
                info!(%field, from, to, "Reordered card field")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::DEFAULT_ACTIVE;
    use crate::fields::FieldId::*;

    fn full() -> AssignmentMachine {
        AssignmentMachine::new(ActiveFields::new(DEFAULT_ACTIVE))
    }

    fn assert_invariants(fields: &ActiveFields) {
        assert!(fields.len() <= MAX_ACTIVE);
        let mut seen = std::collections::HashSet::new();
        assert!(fields.as_slice().iter().all(|f| seen.insert(*f)), "duplicate in {fields:?}");
    }

    #[test]
    fn test_new_dedups_and_truncates() {
        let fields = ActiveFields::new([BookTitle, Author, BookTitle, Length, Category, Publisher, AiReview]);
        assert_eq!(fields.as_slice(), &[BookTitle, Author, Length, Category, Publisher]);
    }

    #[test]
    fn test_sixth_field_evicts_tail() {
        let mut machine = full();
        assert!(machine.begin_drag(Category, DragOrigin::Circle));
        machine.hover(Some(0));

        let outcome = machine.drop_on_slot(0);

        assert_eq!(
            outcome,
            DropOutcome::Inserted { field: Category, slot: 0, evicted: Some(RatingStar) }
        );
        assert_eq!(
            machine.fields().as_slice(),
            &[Category, BookTitle, BookSubtitle, Author, Narrator]
        );
        assert_eq!(machine.session(), None);
    }

    #[test]
    fn test_insert_into_middle_evicts_tail_not_head() {
        let mut fields = ActiveFields::new(DEFAULT_ACTIVE);
        let outcome = fields.insert_at(Length, 2);
        assert_eq!(outcome, InsertOutcome::Inserted { evicted: Some(RatingStar) });
        assert_eq!(fields.as_slice()[0], BookTitle);
        assert_eq!(fields.as_slice()[2], Length);
    }

    #[test]
    fn test_insert_at_tail_of_full_list_evicts_itself() {
        let mut fields = ActiveFields::new(DEFAULT_ACTIVE);
        let outcome = fields.insert_at(Length, 5);
        assert_eq!(outcome, InsertOutcome::Inserted { evicted: Some(Length) });
        assert_eq!(fields, ActiveFields::new(DEFAULT_ACTIVE));
    }

    #[test]
    fn test_insert_slot_clamped() {
        let mut fields = ActiveFields::new([BookTitle]);
        fields.insert_at(Author, 99);
        assert_eq!(fields.as_slice(), &[BookTitle, Author]);
    }

    #[test]
    fn test_drop_on_slot_with_room() {
        let mut machine = AssignmentMachine::new(ActiveFields::new([BookTitle, Author]));
        machine.begin_drag(Discount, DragOrigin::Circle);
        let outcome = machine.drop_on_slot(1);
        assert_eq!(outcome, DropOutcome::Inserted { field: Discount, slot: 1, evicted: None });
        assert_eq!(machine.fields().as_slice(), &[BookTitle, Discount, Author]);
    }

    #[test]
    fn test_circle_drag_of_assigned_field_rejected() {
        let mut machine = full();
        assert!(!machine.begin_drag(BookTitle, DragOrigin::Circle));
        assert_eq!(machine.drop_on_slot(0), DropOutcome::Ignored);
        assert_eq!(machine.fields(), &ActiveFields::new(DEFAULT_ACTIVE));
    }

    #[test]
    fn test_list_drag_requires_assigned_field() {
        let mut machine = full();
        assert!(!machine.begin_drag(Category, DragOrigin::List));
        assert!(machine.begin_drag(Author, DragOrigin::List));
        // Already dragging
        assert!(!machine.begin_drag(Narrator, DragOrigin::List));
    }

    #[test]
    fn test_drop_without_session_ignored() {
        let mut machine = full();
        assert_eq!(machine.drop_on_slot(0), DropOutcome::Ignored);
        assert_eq!(machine.drop_on_container(), DropOutcome::Ignored);
        assert_eq!(machine.fields(), &ActiveFields::new(DEFAULT_ACTIVE));
    }

    #[test]
    fn test_list_drag_reorders() {
        let mut machine = full();
        machine.begin_drag(BookTitle, DragOrigin::List);
        // Insert before the entry at index 3 (Narrator)
        let outcome = machine.drop_on_slot(3);
        assert_eq!(outcome, DropOutcome::Reordered { field: BookTitle, from: 0, to: 2 });
        assert_eq!(
            machine.fields().as_slice(),
            &[BookSubtitle, Author, BookTitle, Narrator, RatingStar]
        );
    }

    #[test]
    fn test_list_drag_to_end_and_up() {
        let mut machine = full();
        machine.begin_drag(Author, DragOrigin::List);
        machine.drop_on_slot(5);
        assert_eq!(
            machine.fields().as_slice(),
            &[BookTitle, BookSubtitle, Narrator, RatingStar, Author]
        );

        machine.begin_drag(RatingStar, DragOrigin::List);
        machine.drop_on_slot(0);
        assert_eq!(
            machine.fields().as_slice(),
            &[RatingStar, BookTitle, BookSubtitle, Narrator, Author]
        );
    }

    #[test]
    fn test_bubble_below_last_row_of_full_list_replaces_tail() {
        let mut machine = full();
        let (slot, marker) = row_drop_target(Category, DragOrigin::Circle, 4, RatingStar, true);
        assert_eq!((slot, marker), (4, RowMarker::Above));

        machine.begin_drag(Category, DragOrigin::Circle);
        assert_eq!(
            machine.drop_on_slot(slot),
            DropOutcome::Inserted {
                field: Category,
                slot: 4,
                evicted: Some(RatingStar),
            }
        );
        assert_eq!(
            machine.fields().as_slice(),
            &[BookTitle, BookSubtitle, Author, Narrator, Category]
        );
    }

    #[test]
    fn test_row_drop_target_halves() {
        assert_eq!(
            row_drop_target(Category, DragOrigin::Circle, 2, Author, false),
            (2, RowMarker::Above)
        );
        assert_eq!(
            row_drop_target(Category, DragOrigin::Circle, 2, Author, true),
            (3, RowMarker::Below)
        );
        // Room left after the last row of a short list
        assert_eq!(
            row_drop_target(Category, DragOrigin::Circle, 3, Narrator, true),
            (4, RowMarker::Below)
        );
        assert_eq!(
            row_drop_target(Author, DragOrigin::List, 2, Author, true),
            (2, RowMarker::Through)
        );
        // Reordering may still target the end of a full list
        assert_eq!(
            row_drop_target(Author, DragOrigin::List, 4, RatingStar, true),
            (5, RowMarker::Below)
        );
    }

    #[test]
    fn test_list_drag_onto_itself_is_noop() {
        let mut machine = full();
        machine.begin_drag(Author, DragOrigin::List);
        assert_eq!(machine.drop_on_slot(2), DropOutcome::Ignored);
        assert_eq!(machine.fields(), &ActiveFields::new(DEFAULT_ACTIVE));
        assert!(!machine.is_dragging());
    }

    #[test]
    fn test_list_drop_on_container_never_removes() {
        let mut machine = full();
        machine.begin_drag(Narrator, DragOrigin::List);
        assert_eq!(machine.drop_on_container(), DropOutcome::Ignored);
        assert_eq!(machine.fields(), &ActiveFields::new(DEFAULT_ACTIVE));
    }

    #[test]
    fn test_container_drop_appends_only_with_room() {
        let mut machine = AssignmentMachine::new(ActiveFields::new([BookTitle]));
        machine.begin_drag(Length, DragOrigin::Circle);
        assert_eq!(machine.drop_on_container(), DropOutcome::Appended { field: Length });
        assert_eq!(machine.fields().as_slice(), &[BookTitle, Length]);

        let mut machine = full();
        machine.begin_drag(Length, DragOrigin::Circle);
        assert_eq!(machine.drop_on_container(), DropOutcome::Ignored);
        assert_eq!(machine.fields().len(), MAX_ACTIVE);
    }

    #[test]
    fn test_remove_in_every_state() {
        let mut machine = full();
        assert!(machine.remove(Author));

        machine.begin_drag(Category, DragOrigin::Circle);
        assert!(machine.remove(Narrator));
        assert!(machine.is_dragging(), "unrelated circle drag survives removal");

        machine.end_drag();
        machine.begin_drag(BookTitle, DragOrigin::List);
        machine.hover(Some(1));
        assert!(machine.remove(BookSubtitle));
        assert!(machine.is_dragging());

        assert!(machine.remove(BookTitle));
        assert_eq!(machine.session(), None, "removing the dragged row ends the drag");
        assert_eq!(machine.fields().as_slice(), &[RatingStar]);
        assert!(!machine.remove(BookTitle));
    }

    #[test]
    fn test_end_drag_clears_session() {
        let mut machine = full();
        machine.begin_drag(Length, DragOrigin::Circle);
        machine.hover(Some(2));
        assert_eq!(
            machine.session(),
            Some(DragSession { field: Length, origin: DragOrigin::Circle, hover_slot: Some(2) })
        );

        machine.end_drag();
        assert_eq!(machine.session(), None);
        // Hover while idle has nowhere to go
        machine.hover(Some(1));
        assert_eq!(machine.session(), None);
    }

    #[test]
    fn test_invariants_hold_over_mixed_sequences() {
        // Deterministic walk over many add/remove/reorder combinations
        let mut machine = AssignmentMachine::default();
        for step in 0..500usize {
            let field = FieldId::ALL[(step * 7 + step / 3) % FieldId::ALL.len()];
            let slot = (step * 5) % (MAX_ACTIVE + 2);
            match step % 4 {
                0 | 1 => {
                    machine.begin_drag(field, DragOrigin::Circle);
                    machine.drop_on_slot(slot);
                }
                2 => {
                    machine.remove(field);
                }
                _ => {
                    machine.begin_drag(field, DragOrigin::List);
                    machine.drop_on_slot(slot);
                }
            }
            assert_invariants(machine.fields());
            assert!(!machine.is_dragging());
        }
    }

    #[test]
    fn test_move_to_out_of_range_source() {
        let mut fields = ActiveFields::new([BookTitle, Author]);
        assert!(!fields.move_to(5, 0));
        assert!(fields.move_to(1, 0));
        assert_eq!(fields.as_slice(), &[Author, BookTitle]);
    }
}
