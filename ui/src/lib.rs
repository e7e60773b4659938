//! Presentational building blocks for dashboard screens.

mod activity_feed;
mod icon;
mod stat_card;

pub use activity_feed::{ActivityFeed, viewer_time_zone};
pub use icon::IconGlyph;
pub use stat_card::StatCard;
