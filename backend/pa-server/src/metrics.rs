use metrics::counter;

/// Counters for state-changing API operations
#[derive(Debug, Clone)]
pub struct Metrics {
    prefix: &'static str,
}

impl Metrics {
    pub fn new() -> Self {
        Self { prefix: "pa_api" }
    }

    pub fn profile_updated(&self) {
        counter!(format!("{}.profiles.updated", self.prefix)).increment(1);
    }

    pub fn staff_status_changed(&self) {
        counter!(format!("{}.profiles.staff_changed", self.prefix)).increment(1);
    }

    pub fn images_uploaded(&self) {
        counter!(format!("{}.images.uploaded", self.prefix)).increment(1);
    }

    pub fn images_deleted(&self) {
        counter!(format!("{}.images.deleted", self.prefix)).increment(1);
    }

    pub fn image_rejected(&self) {
        counter!(format!("{}.images.rejected", self.prefix)).increment(1);
    }

    pub fn account_retired(&self) {
        counter!(format!("{}.accounts.retired", self.prefix)).increment(1);
    }

    /// Retirement rolled back; `reason` is a short tag such as `notification`
    pub fn retirement_failed(&self, reason: &str) {
        counter!(format!("{}.accounts.retirement_failed", self.prefix)).increment(1);
        counter!(format!("{}.accounts.retirement_failed.{}", self.prefix, reason)).increment(1);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
