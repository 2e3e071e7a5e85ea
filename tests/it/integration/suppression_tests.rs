//! Click suppression after drags, end-to-end through `handle_event`.

use crate::helpers::{assert_rendered_at, click_item, drag, five_items, ms, tap_item};
use carousel::{CarouselConfig, CarouselEvent, PointerTarget};
use std::time::Instant;

#[test]
fn test_click_ending_a_drag_is_swallowed() {
    let mut carousel = five_items();
    let now = Instant::now();

    drag(&mut carousel, 500.0, 400.0, now);
    assert_rendered_at(&carousel, 1);
    assert!(carousel.gesture().is_suppressed());

    // The pointer was released over item 3; its synthetic click must not jump.
    let response = click_item(&mut carousel, 3, now + ms(1));
    assert!(!response.navigated);
    assert_rendered_at(&carousel, 1);
}

#[test]
fn test_click_without_drag_navigates() {
    let mut carousel = five_items();
    let response = click_item(&mut carousel, 2, Instant::now());

    assert!(response.navigated);
    assert_rendered_at(&carousel, 2);
}

#[test]
fn test_tap_within_threshold_is_a_click() {
    let mut carousel = five_items();
    let now = Instant::now();

    let response = tap_item(&mut carousel, 4, 250.0, now);
    assert!(response.navigated);
    assert!(carousel.gesture().is_idle());
    assert_rendered_at(&carousel, 4);
}

#[test]
fn test_suppression_lifts_after_delay() {
    let mut carousel = five_items();
    let now = Instant::now();
    drag(&mut carousel, 500.0, 400.0, now);

    assert_eq!(carousel.next_deadline(), Some(now + ms(100)));
    assert!(!carousel.tick(now + ms(99)));
    assert!(carousel.gesture().is_suppressed());

    assert!(carousel.tick(now + ms(100)));
    assert!(carousel.gesture().is_idle());
    assert_eq!(carousel.next_deadline(), None);

    click_item(&mut carousel, 3, now + ms(101));
    assert_rendered_at(&carousel, 3);
}

#[test]
fn test_late_click_without_tick_still_navigates() {
    let mut carousel = five_items();
    let now = Instant::now();
    drag(&mut carousel, 500.0, 400.0, now);

    // Host never fired its timer; dispatch applies the deadline itself.
    click_item(&mut carousel, 0, now + ms(150));
    assert_rendered_at(&carousel, 0);
}

#[test]
fn test_configured_delay() {
    let config = CarouselConfig {
        suppression_delay_ms: 400,
        ..CarouselConfig::default()
    };
    let mut carousel = crate::helpers::TestCarouselBuilder::new()
        .with_config(config)
        .build();
    let now = Instant::now();
    drag(&mut carousel, 500.0, 400.0, now);

    click_item(&mut carousel, 4, now + ms(300));
    assert_rendered_at(&carousel, 1);

    click_item(&mut carousel, 4, now + ms(400));
    assert_rendered_at(&carousel, 4);
}

#[test]
fn test_new_press_supersedes_pending_release() {
    let mut carousel = five_items();
    let now = Instant::now();
    drag(&mut carousel, 500.0, 400.0, now);

    carousel.handle_event(
        CarouselEvent::PointerDown {
            x: 200.0,
            target: PointerTarget::Item(2),
        },
        now + ms(20),
    );
    assert!(carousel.gesture().is_dragging());
    assert_eq!(carousel.next_deadline(), None);

    carousel.handle_event(CarouselEvent::PointerUp { x: 205.0 }, now + ms(30));
    let response = click_item(&mut carousel, 2, now + ms(30));
    assert!(response.navigated);
    assert_rendered_at(&carousel, 2);
}

#[test]
fn test_wheel_and_arrows_ignore_suppression() {
    let mut carousel = five_items();
    let now = Instant::now();
    drag(&mut carousel, 500.0, 400.0, now);

    carousel.handle_event(CarouselEvent::NextClick, now + ms(5));
    assert_rendered_at(&carousel, 2);
    carousel.handle_event(
        CarouselEvent::Wheel {
            delta_x: 20.0,
            delta_y: 0.0,
        },
        now + ms(6),
    );
    assert_rendered_at(&carousel, 3);
}
