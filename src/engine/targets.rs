//! View identifiers and thresholds for the two watched applications.

use crate::config::Variant;

pub const MAPS_PACKAGE: &str = "com.google.android.apps.maps";
pub const SOCIAL_PACKAGE: &str = "com.instagram.android";

pub const MAPS_EXPLORE_CARD: &str = "com.google.android.apps.maps:id/explore_tab_home_title_card";
/// The explore card has not slid up far enough for a drag to matter yet.
pub const MAPS_CARD_MAX_TOP: i32 = 2000;
/// Bounds above this overlap the status bar and are noise.
pub const MAPS_CARD_MIN_TOP: i32 = 10;
pub const MAPS_SWIPE_START_OFFSET: i32 = 5;
pub const MAPS_SWIPE_END_OFFSET: i32 = 200;

pub const SOCIAL_SEARCH_TAB: &str = "com.instagram.android:id/search_tab";
pub const SOCIAL_REELS_TAB: &str = "com.instagram.android:id/clips_tab";
pub const SOCIAL_PROFILE_TAB: &str = "com.instagram.android:id/profile_tab";
pub const SOCIAL_FEED_DEMARCATOR: &str =
    "com.instagram.android:id/end_of_feed_demarcator_container";

/// One distraction category: a view id plus text it must contain, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HideTarget {
    pub view_id: &'static str,
    pub needle: &'static str,
}

const FEED_DEMARCATOR_ONLY: &[HideTarget] = &[HideTarget {
    view_id: SOCIAL_FEED_DEMARCATOR,
    needle: "",
}];

const ALL_DISTRACTIONS: &[HideTarget] = &[
    // "Suggested for you" at the end of the followed feed.
    HideTarget {
        view_id: SOCIAL_FEED_DEMARCATOR,
        needle: "",
    },
    // Follow button on posts from non-friends.
    HideTarget {
        view_id: "com.instagram.android:id/row_right_aligned_follow_button_stub",
        needle: "Follow",
    },
    // Threads up-sell.
    HideTarget {
        view_id: "com.instagram.android:id/netego_bloks_view",
        needle: "",
    },
    HideTarget {
        view_id: "com.instagram.android:id/secondary_label",
        needle: "Sponsored",
    },
    // Accounts to follow.
    HideTarget {
        view_id: "com.instagram.android:id/netego_carousel_title",
        needle: "Suggested for you",
    },
];

pub fn hide_targets(variant: Variant) -> &'static [HideTarget] {
    match variant {
        Variant::FeedDemarcator => FEED_DEMARCATOR_ONLY,
        Variant::Distractions => ALL_DISTRACTIONS,
    }
}
