use crate::ssl::enums::refresh_outcome::RefreshOutcome;

impl RefreshOutcome {
    pub fn is_reloaded(&self) -> bool {
        matches!(self, RefreshOutcome::Reloaded)
    }
}

impl std::fmt::Display for RefreshOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RefreshOutcome::Unchanged => write!(f, "unchanged"),
            RefreshOutcome::Reloaded => write!(f, "reloaded"),
        }
    }
}
