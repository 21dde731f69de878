auto_derived!(
    /// Content item as rendered by the host page
    ///
    /// Constructed from per-item metadata (a listing row or a detail
    /// view); the tracker never fetches items itself.
    pub struct Item {
        /// Stable identifier, unique within its model namespace
        pub id: String,
        /// Content model this item belongs to ("topic", "comment", ...)
        pub model: String,
        /// ISO 8601 timestamp of the last substantive change.
        ///
        /// Kept as the raw string supplied by the page so that a value
        /// which fails to parse can degrade instead of being rejected
        /// up front.
        pub changed_at: String,
        /// Server-side counter at render time (e.g. reply count)
        #[cfg_attr(
            feature = "serde",
            serde(skip_serializing_if = "crate::v0::if_zero_i64", default)
        )]
        pub count: i64,
    }
);

/// Utility function to check if an i64 is zero
pub fn if_zero_i64(t: &i64) -> bool {
    t == &0
}
