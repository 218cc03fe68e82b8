#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum RefreshOutcome {
    /// The joint-change gate stayed closed; nothing was read.
    Unchanged,
    /// Both files were decoded and a new snapshot was published.
    Reloaded,
}
