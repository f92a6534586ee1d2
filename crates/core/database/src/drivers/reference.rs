use std::{collections::HashMap, sync::Arc};

use futures::lock::Mutex;

use crate::{TrustedProfile, TrustedReport};

database_derived!(
    /// Reference implementation
    #[derive(Default)]
    pub struct ReferenceDb {
        /// Registry of profiles allowed through the trust gate
        pub trusted_profiles: Arc<Mutex<HashMap<String, TrustedProfile>>>,
        /// Reports keyed by (publication id, actor)
        pub trusted_reports: Arc<Mutex<HashMap<(String, String), TrustedReport>>>,
    }
);
