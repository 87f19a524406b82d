use std::time::Duration;
use tokio::time::Instant;

/// How long a successful fetch stays fresh unless configured otherwise.
pub const DEFAULT_MAX_AGE: Duration = Duration::from_secs(10 * 60);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStatus {
    Idle,
    InFlight,
    Completed,
    Failed,
}

/// Decides whether held data is recent enough to skip a new fetch.
#[derive(Debug, Clone)]
pub struct StalenessPolicy {
    max_age: Duration,
    status: FetchStatus,
    last_success: Option<Instant>,
}

impl StalenessPolicy {
    pub fn new(max_age: Duration) -> Self {
        Self {
            max_age,
            status: FetchStatus::Idle,
            last_success: None,
        }
    }

    pub fn max_age(&self) -> Duration {
        self.max_age
    }

    pub fn status(&self) -> FetchStatus {
        self.status
    }

    pub fn is_in_flight(&self) -> bool {
        self.status == FetchStatus::InFlight
    }

    /// `true` if the last successful fetch finished less than `max_age` ago.
    pub fn is_fresh(&self) -> bool {
        self.last_success
            .is_some_and(|at| at.elapsed() < self.max_age)
    }

    pub fn started(&mut self) {
        self.status = FetchStatus::InFlight;
    }

    pub fn completed(&mut self) {
        self.status = FetchStatus::Completed;
        self.last_success = Some(Instant::now());
    }

    /// Marks the fetch as failed. Freshness still refers to the last success.
    pub fn failed(&mut self) {
        self.status = FetchStatus::Failed;
    }
}

impl Default for StalenessPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_AGE)
    }
}
