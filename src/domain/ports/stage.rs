use async_trait::async_trait;

/// One unit of the report pipeline.
///
/// `run` is total: a stage absorbs every provider failure into its own
/// fallback and always hands back an output.
#[async_trait]
pub trait Stage: Send + Sync {
    type Input: Send + Sync;
    type Output: Send;

    /// Name of this stage (e.g., "collector", "insight_generator")
    fn name(&self) -> &'static str;

    async fn run(&self, input: &Self::Input) -> Self::Output;
}
