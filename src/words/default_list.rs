//! Built-in default word list.
//!
//! Used whenever no word list is configured, or a configured source
//! fails to produce any words. Duplicates are kept on purpose: they
//! only skew the selection odds slightly and the list is not a set.

pub const DEFAULT_WORDS: &[&str] = &[
    "apple", "banana", "cherry", "grapes", "orange", "peanut", "tomato", "butter", "cheese",
    "potato", "carrot", "pepper", "muffin", "cookie", "donuts", "coffee", "butter", "bottle",
    "pencil", "marker", "laptop", "tablet", "mobile", "window", "mirror", "guitar", "violin",
    "drums", "pillow", "cushion", "tissue", "basket", "hanger", "jacket", "sweater", "button",
    "breeze", "forest", "garden", "rocket", "planet", "cosmos", "galaxy", "shadow", "tunnel",
    "bridge", "castle", "island", "frozen", "sunset", "desert", "coffin", "turkey", "butter",
    "pencil", "cloudy", "friend", "school", "pocket", "singer", "artist", "dancer", "writer",
    "reader", "farmer", "hunter", "driver", "doctor", "lawyer", "baker", "sailor", "hammer",
    "socket", "branch", "silver", "gadget", "sponge", "anchor", "ladder", "helmet", "ribbon",
    "flames", "danger", "muscle", "shadow", "wallet", "pebble", "marble", "candle", "jungle",
    "desert", "winter", "summer", "spring", "autumn", "melody", "garden", "church", "theory",
    "saddle",
];
