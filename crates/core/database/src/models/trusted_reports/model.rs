auto_derived!(
    /// A trusted profile's report of a publication
    pub struct TrustedReport {
        /// Unique id assigned at submission time
        pub id: String,
        /// Id of the reported publication
        pub publication_id: String,
        /// Profile id of the reporting principal
        ///
        /// Always derived from the caller's credential, never from the
        /// request body.
        pub actor: String,
        /// Reason given for the report
        pub reason: String,
    }

    /// Outcome of submitting a report
    pub enum ReportSubmission {
        /// A new report row was written
        Created,
        /// The actor already reported this publication, nothing written
        Duplicate,
    }
);
