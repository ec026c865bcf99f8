/// Tracks books service calls that have not completed yet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestsState {
    /// Calls started but not yet finished
    pub in_flight: usize,
    /// Error of the most recent failed call
    pub last_error: Option<String>,
}

impl RequestsState {
    /// No call is outstanding
    pub fn is_idle(&self) -> bool {
        self.in_flight == 0
    }
}
