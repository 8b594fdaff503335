use serde::{Deserialize, Serialize};

use crate::store::REVIEWS_KEY;

/// How the form captures a rating. Both produce a number in [1, 5].
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RatingStyle {
    #[default]
    Number,
    Stars,
}

/// Settings for one review widget on the page.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct WidgetConfig {
    pub storage_key: String,
    pub rating_style: RatingStyle,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        WidgetConfig {
            storage_key: REVIEWS_KEY.to_string(),
            rating_style: RatingStyle::default(),
        }
    }
}
