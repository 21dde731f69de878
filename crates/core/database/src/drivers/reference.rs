use std::{collections::HashMap, sync::Arc};

use futures::lock::Mutex;

use crate::{SeenCompositeKey, SeenRecord};

database_derived!(
    /// Reference implementation
    #[derive(Default)]
    pub struct ReferenceDb {
        pub seen_records: Arc<Mutex<HashMap<SeenCompositeKey, SeenRecord>>>,
    }
);
