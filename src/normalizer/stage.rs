/// Trait for a single text transform stage in the normalization pipeline.
///
/// Stages are pure: same input text, same output text, no side effects.
/// Some stages require punctuation to still be present (possessive and
/// abbreviation expansion depend on `'` and `.`); later stages require it
/// stripped. The pipeline owns the ordering.
pub trait TransformStage: Send + Sync {
    /// Apply this transform to the text, returning the rewritten text
    fn apply(&self, text: &str) -> String;

    /// Get the name of this stage for logging
    fn name(&self) -> &'static str;
}
