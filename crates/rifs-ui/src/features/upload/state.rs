//! Upload run bookkeeping, kept pure for native testing.

/// Outcome of one file within a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadEntry {
    /// File name as picked.
    pub file_name: String,
    /// Content hash when the upload succeeded.
    pub hash: Option<String>,
    /// Failure description when it did not.
    pub error: Option<String>,
}

/// One multi-file upload pass in completion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UploadRun {
    /// Files queued for this run.
    pub total: usize,
    /// Per-file outcomes recorded so far.
    pub results: Vec<UploadEntry>,
}

impl UploadRun {
    /// Start a fresh run over `total` files.
    #[must_use]
    pub fn begin(total: usize) -> Self {
        Self {
            total,
            results: Vec::with_capacity(total),
        }
    }

    /// Record one stored file.
    pub fn record_success(&mut self, file_name: impl Into<String>, hash: impl Into<String>) {
        self.results.push(UploadEntry {
            file_name: file_name.into(),
            hash: Some(hash.into()),
            error: None,
        });
    }

    /// Record one rejected file.
    pub fn record_failure(&mut self, file_name: impl Into<String>, error: impl Into<String>) {
        self.results.push(UploadEntry {
            file_name: file_name.into(),
            hash: None,
            error: Some(error.into()),
        });
    }

    /// Whether every queued file has an outcome.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.total > 0 && self.results.len() == self.total
    }

    /// Files with a stored hash.
    #[must_use]
    pub fn succeeded(&self) -> usize {
        self.results
            .iter()
            .filter(|entry| entry.hash.is_some())
            .count()
    }

    /// Files that were rejected.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.results
            .iter()
            .filter(|entry| entry.error.is_some())
            .count()
    }

    /// Completion percentage for the progress bar.
    #[must_use]
    pub fn progress_percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        let done = self.results.len().min(self.total) as u64;
        u32::try_from(done * 100 / self.total as u64).unwrap_or(100)
    }

    /// The lone outcome of a single-file run that stored its file.
    #[must_use]
    pub fn single_success(&self) -> Option<&UploadEntry> {
        if self.total != 1 || !self.is_done() {
            return None;
        }
        self.results.first().filter(|entry| entry.hash.is_some())
    }

    /// User-facing summary of the finished run.
    #[must_use]
    pub fn summary(&self) -> String {
        let failed = self.failed();
        if failed == 0 {
            let plural = if self.succeeded() == 1 { "" } else { "s" };
            format!("Uploaded {} image{plural}", self.succeeded())
        } else {
            format!(
                "Uploaded {} of {} images, {failed} failed",
                self.succeeded(),
                self.total
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::UploadRun;

    #[test]
    fn runs_track_outcomes_in_completion_order() {
        let mut run = UploadRun::begin(3);
        assert!(!run.is_done());
        assert_eq!(run.progress_percent(), 0);

        run.record_success("a.png", "hash-a");
        run.record_failure("b.png", "too large");
        assert_eq!(run.progress_percent(), 66);
        assert!(!run.is_done());

        run.record_success("c.png", "hash-c");
        assert!(run.is_done());
        assert_eq!(run.progress_percent(), 100);
        assert_eq!(run.succeeded(), 2);
        assert_eq!(run.failed(), 1);
        assert_eq!(run.results[1].file_name, "b.png");
    }

    #[test]
    fn summaries_match_the_outcome_mix() {
        let mut clean = UploadRun::begin(1);
        clean.record_success("a.png", "hash-a");
        assert_eq!(clean.summary(), "Uploaded 1 image");

        let mut mixed = UploadRun::begin(2);
        mixed.record_success("a.png", "hash-a");
        mixed.record_failure("b.png", "rejected");
        assert_eq!(mixed.summary(), "Uploaded 1 of 2 images, 1 failed");
    }

    #[test]
    fn single_success_needs_a_one_file_run() {
        let mut run = UploadRun::begin(1);
        assert_eq!(run.single_success(), None);
        run.record_success("a.png", "hash-a");
        assert!(run.single_success().is_some());

        let mut failed = UploadRun::begin(1);
        failed.record_failure("a.png", "rejected");
        assert_eq!(failed.single_success(), None);

        let mut pair = UploadRun::begin(2);
        pair.record_success("a.png", "hash-a");
        pair.record_success("b.png", "hash-b");
        assert_eq!(pair.single_success(), None);
    }

    #[test]
    fn empty_runs_never_report_done() {
        let run = UploadRun::default();
        assert!(!run.is_done());
        assert_eq!(run.progress_percent(), 0);
    }
}
