use super::snapshot::RawEntry;

/// Host content that can be read as an entry snapshot
///
/// Implementations own the knowledge of where entries come from (rendered
/// markup, authoring layer, fixtures). Each call returns what is currently
/// materialized; it may grow between calls while an editor is loading.
pub trait ContentSource {
    /// Read the entries currently available
    fn snapshot(&mut self) -> Vec<RawEntry>;
}

impl<F> ContentSource for F
where
    F: FnMut() -> Vec<RawEntry>,
{
    fn snapshot(&mut self) -> Vec<RawEntry> {
        self()
    }
}
