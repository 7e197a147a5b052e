/// Source of the random suffixes appended to colliding slugs.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait SlugSuffixGenerator {
    /// Returns `len` characters drawn from `[a-z0-9]`.
    fn random_suffix(&self, len: usize) -> String;
}
