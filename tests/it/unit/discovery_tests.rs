//! Unit tests for building controllers from discovered groups.

use crate::helpers::MockHost;
use carousel::{CarouselConfig, ConfigError, Control, GroupDescriptor, GroupKind, init_carousels};

fn group(kind: GroupKind, items: usize, has_controls: bool) -> GroupDescriptor<MockHost> {
    GroupDescriptor {
        kind,
        host: MockHost::new(150.0, vec![20.0; items]),
        item_count: items,
        has_controls,
    }
}

#[test]
fn test_one_controller_per_group() {
    let groups = vec![
        group(GroupKind::HorizontalTimeline, 4, true),
        group(GroupKind::PostsCarousel, 7, false),
    ];

    let carousels = init_carousels(groups, &CarouselConfig::default()).unwrap();
    assert_eq!(carousels.len(), 2);
    assert_eq!(carousels[0].item_count(), 4);
    assert!(carousels[0].has_controls());
    assert_eq!(carousels[1].item_count(), 7);
    assert!(!carousels[1].has_controls());
}

#[test]
fn test_empty_groups_are_skipped() {
    let groups = vec![
        group(GroupKind::PostsCarousel, 0, true),
        group(GroupKind::HorizontalTimeline, 3, true),
    ];

    let carousels = init_carousels(groups, &CarouselConfig::default()).unwrap();
    assert_eq!(carousels.len(), 1);
    assert_eq!(carousels[0].item_count(), 3);
}

#[test]
fn test_instances_are_independent() {
    let groups = vec![
        group(GroupKind::PostsCarousel, 5, true),
        group(GroupKind::PostsCarousel, 5, true),
    ];
    let mut carousels = init_carousels(groups, &CarouselConfig::default()).unwrap();

    carousels[0].go_to(3);
    assert_eq!(carousels[0].current_index(), 3);
    assert_eq!(carousels[1].current_index(), 0);
    assert_eq!(carousels[1].host().offset(), Some(0.0));
}

#[test]
fn test_constructed_at_index_zero() {
    let carousels =
        init_carousels(vec![group(GroupKind::HorizontalTimeline, 3, true)], &CarouselConfig::default())
            .unwrap();
    let carousel = &carousels[0];

    assert_eq!(carousel.current_index(), 0);
    assert_eq!(carousel.host().root_resets, 1);
    assert_eq!(carousel.host().is_disabled(Control::Previous), Some(true));
    assert_eq!(carousel.host().is_disabled(Control::Next), Some(false));
}

#[test]
fn test_invalid_config_rejected_up_front() {
    let config = CarouselConfig {
        drag_threshold_px: f32::NAN,
        ..CarouselConfig::default()
    };
    let result = init_carousels(vec![group(GroupKind::PostsCarousel, 3, true)], &config);
    assert!(matches!(result, Err(ConfigError::InvalidThreshold(_))));
}

#[test]
fn test_group_kind_selectors() {
    assert_eq!(GroupKind::HorizontalTimeline.selector(), ".block-timeline--horizontal");
    assert_eq!(GroupKind::PostsCarousel.selector(), ".block-posts--carousel");
    assert_eq!(GroupKind::ALL.len(), 2);
}
