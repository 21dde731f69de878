use iso8601_timestamp::Timestamp;

auto_derived!(
    /// Action applied to an item once it is fully seen
    #[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
    pub enum SeenPolicy {
        /// Remove the item from display entirely
        Hide,
        /// Keep the item visible but visually muted
        Deemphasize,
    }

    /// Classification of an item relative to the viewing history
    pub enum SeenState {
        /// Never acknowledged; there is no reference timestamp
        UnseenUnknown,
        /// Acknowledged before, but the content changed since
        UnseenKnown,
        /// The acknowledgment is current
        Seen,
    }

    /// Display decision for a single rendered item
    pub struct SeenView {
        /// Seen classification
        pub state: SeenState,
        /// Whether the host page should remove the item from display
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "crate::if_false", default))]
        pub hide: bool,
        /// Difference between the rendered count and the count at last
        /// acknowledgment, if a record exists
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        pub delta: Option<i64>,
        /// Timestamp of the last acknowledgment, offered as a jump-link
        /// target when the item changed after it
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        pub jump_from: Option<Timestamp>,
    }
);

impl Default for SeenPolicy {
    fn default() -> Self {
        SeenPolicy::Deemphasize
    }
}

impl SeenView {
    /// Badge value to render next to the item, if any.
    ///
    /// Suppressed whenever there is nothing new to show: no record,
    /// or the count has not advanced past the acknowledged one.
    pub fn badge(&self) -> Option<i64> {
        self.delta.filter(|delta| *delta > 0)
    }
}
