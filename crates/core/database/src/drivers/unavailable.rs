database_derived!(
    /// Driver whose operations always fail
    ///
    /// Stands in for a store that is disabled or unreachable, so that
    /// consumers can exercise their degraded behavior.
    #[derive(Default)]
    pub struct UnavailableDb;
);
