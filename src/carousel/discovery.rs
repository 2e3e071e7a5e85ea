//! Building controllers from the groups a host found on its page.
//!
//! Finding the groups is the host's job; this module only turns each
//! descriptor into an independent controller.

use super::Carousel;
use crate::config::CarouselConfig;
use crate::error::ConfigError;
use crate::host::CarouselHost;
use serde::{Deserialize, Serialize};

/// The block families that get carousel behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupKind {
    /// A timeline laid out horizontally
    HorizontalTimeline,
    /// A list of posts shown as a carousel
    PostsCarousel,
}

impl GroupKind {
    pub const ALL: [GroupKind; 2] = [GroupKind::HorizontalTimeline, GroupKind::PostsCarousel];

    /// Selector a document host can use to find groups of this kind.
    pub fn selector(self) -> &'static str {
        match self {
            Self::HorizontalTimeline => ".block-timeline--horizontal",
            Self::PostsCarousel => ".block-posts--carousel",
        }
    }
}

/// One group found by the host.
#[derive(Debug, Clone)]
pub struct GroupDescriptor<H> {
    pub kind: GroupKind,
    /// Geometry and visual sink for this group alone
    pub host: H,
    pub item_count: usize,
    /// Both arrow controls are present
    pub has_controls: bool,
}

/// Build one controller per group, in order.
///
/// Groups without items are skipped with a warning; an invalid configuration
/// fails the whole call since it would fail every group.
pub fn init_carousels<H, I>(
    groups: I,
    config: &CarouselConfig,
) -> Result<Vec<Carousel<H>>, ConfigError>
where
    H: CarouselHost,
    I: IntoIterator<Item = GroupDescriptor<H>>,
{
    config.validate()?;

    let mut carousels = Vec::new();
    for (position, group) in groups.into_iter().enumerate() {
        let kind = group.kind;
        match Carousel::new(
            group.host,
            group.item_count,
            group.has_controls,
            config.clone(),
        ) {
            Ok(carousel) => carousels.push(carousel),
            Err(e) => {
                tracing::warn!(group = position, ?kind, error = %e, "Skipping carousel group");
            }
        }
    }

    tracing::info!(count = carousels.len(), "Carousels initialized");
    Ok(carousels)
}
