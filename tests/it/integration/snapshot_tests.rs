//! Snapshot tests for the visual state a controller publishes.
//!
//! Pixel values are redacted and asserted separately so the snapshots only
//! pin down the shape and the discrete markers.

use crate::helpers::{TestCarouselBuilder, click_item, five_items, ms};
use carousel::{CarouselEvent, PointerTarget};
use std::time::Instant;

#[test]
fn test_visual_after_item_click() {
    let mut carousel = five_items();
    click_item(&mut carousel, 3, Instant::now());

    assert_eq!(carousel.visual().offset, -600.0);
    insta::assert_json_snapshot!(carousel.visual(), {
        ".offset" => "[offset]",
        ".title_height" => "[height]"
    }, @r#"
    {
      "offset": "[offset]",
      "passed": [
        true,
        true,
        true,
        false,
        false
      ],
      "previous_disabled": false,
      "next_disabled": false,
      "grabbing": false,
      "item_pointer_events": "all",
      "touch_action": null,
      "title_height": "[height]"
    }
    "#);
}

#[test]
fn test_visual_mid_drag_without_controls() {
    let mut carousel = TestCarouselBuilder::new()
        .with_items(3)
        .without_controls()
        .build();
    let now = Instant::now();

    carousel.handle_event(
        CarouselEvent::PointerDown {
            x: 400.0,
            target: PointerTarget::Item(0),
        },
        now,
    );
    carousel.handle_event(CarouselEvent::PointerMove { x: 380.0 }, now + ms(8));

    insta::assert_json_snapshot!(carousel.visual(), {
        ".offset" => "[offset]",
        ".title_height" => "[height]"
    }, @r#"
    {
      "offset": "[offset]",
      "passed": [
        false,
        false,
        false
      ],
      "previous_disabled": null,
      "next_disabled": null,
      "grabbing": true,
      "item_pointer_events": "none",
      "touch_action": "pan-y",
      "title_height": "[height]"
    }
    "#);
}
