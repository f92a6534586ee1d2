auto_derived!(
    /// Registry entry naming a profile as trusted
    ///
    /// The registry is seeded out-of-band; the report workflow only
    /// reads it.
    pub struct TrustedProfile {
        /// Profile id
        pub id: String,
    }
);
