//! Bubble ring layout for unassigned fields in edit mode

use std::f32::consts::{FRAC_PI_2, TAU};

use crate::config::LayoutSettings;
use crate::fields::{DESCRIPTORS, FieldId};
use crate::types::{Position, ViewportClass};

/// One unassigned field placed on the ring
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bubble {
    pub field: FieldId,
    /// Offset from the ring center
    pub offset: Position,
}

impl Bubble {
    /// Offset while flying from the field's default position onto the ring
    pub fn offset_at(&self, progress: f32) -> Position {
        let from = self.field.descriptor().default_position;
        let t = progress.clamp(0.0, 1.0);
        Position::new(
            from.x + (self.offset.x - from.x) * t,
            from.y + (self.offset.y - from.y) * t,
        )
    }
}

/// Fields not in `active`, in fixed descriptor order
pub fn unassigned(active: &[FieldId]) -> Vec<FieldId> {
    DESCRIPTORS
        .iter()
        .map(|descriptor| descriptor.id)
        .filter(|id| !active.contains(id))
        .collect()
}

/// Angular spacing for `count` bubbles, `None` when there is nothing to place
pub fn angle_step(count: usize) -> Option<f32> {
    (count > 0).then(|| TAU / count as f32)
}

/// Ring radius for the given viewport width
pub fn ring_radius(viewport_width: f32, layout: &LayoutSettings) -> f32 {
    match ViewportClass::from_width(viewport_width, layout.narrow_breakpoint) {
        ViewportClass::Wide => layout.wide_bubble_radius,
        ViewportClass::Narrow => layout.narrow_bubble_radius,
    }
}

/// Spread the unassigned fields evenly around a circle of `radius`
///
/// The first bubble sits straight above the center. Slots follow descriptor
/// order, so removing a field only re-spaces the others.
pub fn layout_bubbles(active: &[FieldId], radius: f32) -> Vec<Bubble> {
    let fields = unassigned(active);
    let Some(step) = angle_step(fields.len()) else {
        return Vec::new();
    };

    fields
        .into_iter()
        .enumerate()
        .map(|(slot, field)| {
            // 0 points right and angles grow clockwise on screen
            let angle = slot as f32 * step - FRAC_PI_2;
            Bubble {
                field,
                offset: Position::new(angle.cos() * radius, angle.sin() * radius),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::DEFAULT_ACTIVE;

    const EPSILON: f32 = 1e-3;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_steps_sum_to_full_circle() {
        for count in 1..=FieldId::ALL.len() {
            let step = angle_step(count).unwrap();
            assert!(approx(step * count as f32, TAU), "count={count}");
        }
    }

    #[test]
    fn test_no_fields_no_bubbles() {
        assert_eq!(angle_step(0), None);
        assert!(layout_bubbles(&FieldId::ALL, 420.0).is_empty());
    }

    #[test]
    fn test_single_bubble_at_top() {
        let active: Vec<FieldId> = FieldId::ALL
            .into_iter()
            .filter(|id| *id != FieldId::Category)
            .collect();
        let bubbles = layout_bubbles(&active, 100.0);

        assert_eq!(bubbles.len(), 1);
        assert_eq!(bubbles[0].field, FieldId::Category);
        assert!(approx(bubbles[0].offset.x, 0.0));
        assert!(approx(bubbles[0].offset.y, -100.0));
    }

    #[test]
    fn test_bubbles_follow_descriptor_order() {
        let bubbles = layout_bubbles(&DEFAULT_ACTIVE, 420.0);
        let fields: Vec<FieldId> = bubbles.iter().map(|b| b.field).collect();
        assert_eq!(fields, unassigned(&DEFAULT_ACTIVE));
        assert_eq!(fields.len(), 10);
        assert_eq!(fields[0], FieldId::NumberOfReviews);
    }

    #[test]
    fn test_bubbles_lie_on_ring() {
        for bubble in layout_bubbles(&[FieldId::BookTitle], 120.0) {
            let distance = bubble.offset.x.hypot(bubble.offset.y);
            assert!(approx(distance, 120.0), "{:?}", bubble.field);
        }
    }

    #[test]
    fn test_removal_order_does_not_matter() {
        let a = layout_bubbles(&[FieldId::Author, FieldId::Length], 200.0);
        let b = layout_bubbles(&[FieldId::Length, FieldId::Author], 200.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_fly_out_from_default_position() {
        let bubble = layout_bubbles(&DEFAULT_ACTIVE, 420.0)[0];
        let start = bubble.field.descriptor().default_position;

        assert_eq!(bubble.offset_at(0.0), start);
        for progress in [1.0, 7.0] {
            let end = bubble.offset_at(progress);
            assert!(approx(end.x, bubble.offset.x) && approx(end.y, bubble.offset.y));
        }

        let half = bubble.offset_at(0.5);
        assert!(approx(half.x, (start.x + bubble.offset.x) / 2.0));
        assert!(approx(half.y, (start.y + bubble.offset.y) / 2.0));
    }

    #[test]
    fn test_ring_radius_by_viewport() {
        let layout = LayoutSettings::default();
        assert_eq!(ring_radius(1280.0, &layout), layout.wide_bubble_radius);
        assert_eq!(ring_radius(400.0, &layout), layout.narrow_bubble_radius);
        assert!(layout.narrow_bubble_radius < layout.wide_bubble_radius);
    }
}
