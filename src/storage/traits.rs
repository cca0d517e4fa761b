/// Narrow string store. The persistent store outlives the process, the
/// ephemeral one lives for a single session.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> anyhow::Result<()>;
}
