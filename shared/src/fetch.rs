//! Loading/data/error triple every screen keeps for its backend call.

use crate::error::ApiError;

#[derive(Debug, Clone, PartialEq)]
pub struct FetchState<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
    /// Bumped on every successful finish, even when the data is unchanged.
    pub successes: u64,
}

impl<T> Default for FetchState<T> {
    /// Screens start out loading since the first fetch fires on mount.
    fn default() -> Self {
        FetchState {
            data: None,
            loading: true,
            error: None,
            successes: 0,
        }
    }
}

impl<T> FetchState<T> {
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Success replaces the data; failure keeps whatever was shown before.
    pub fn finish(&mut self, result: Result<T, ApiError>) {
        self.loading = false;
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
                self.successes += 1;
            }
            Err(err) => self.error = Some(err.to_string()),
        }
    }

    /// Full-screen error only when there is nothing else to show.
    pub fn is_blocking_error(&self) -> bool {
        self.error.is_some() && self.data.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_loading_without_data() {
        let state = FetchState::<u32>::default();
        assert!(state.loading);
        assert_eq!(state.data, None);
        assert_eq!(state.error, None);
    }

    #[test]
    fn success_replaces_data_and_clears_error() {
        let mut state = FetchState::default();
        state.finish(Err(ApiError::network("offline")));
        state.begin();
        assert_eq!(state.error, None);
        state.finish(Ok(3));
        assert_eq!(state.data, Some(3));
        assert!(!state.loading);
    }

    #[test]
    fn identical_refresh_still_counts_as_a_success() {
        let mut state = FetchState::default();
        state.finish(Ok(7));
        state.begin();
        state.finish(Ok(7));
        assert_eq!(state.successes, 2);

        state.finish(Err(ApiError::network("offline")));
        assert_eq!(state.successes, 2);
    }

    #[test]
    fn failure_keeps_stale_data() {
        let mut state = FetchState::default();
        state.finish(Ok("snapshot"));
        state.begin();
        state.finish(Err(ApiError::Status {
            status: 503,
            body: "busy".into(),
        }));
        assert_eq!(state.data, Some("snapshot"));
        assert_eq!(state.error.as_deref(), Some("Server error: 503 - busy"));
        assert!(!state.is_blocking_error());
    }

    #[test]
    fn failure_without_data_blocks_the_screen() {
        let mut state = FetchState::<Vec<u8>>::default();
        state.finish(Err(ApiError::decode("expected value")));
        assert!(state.is_blocking_error());
        assert_eq!(state.error.as_deref(), Some("Failed to parse response: expected value"));
    }
}
