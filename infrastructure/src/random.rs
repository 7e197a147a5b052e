use domain::ports::random::SlugSuffixGenerator;
use rand::Rng;
use tracing::instrument;

const SUFFIX_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

pub struct ThreadRngSlugSuffixGenerator;

impl SlugSuffixGenerator for ThreadRngSlugSuffixGenerator {
    #[instrument(level = "trace", skip(self))]
    fn random_suffix(&self, len: usize) -> String {
        let mut rng = rand::rng();
        (0..len)
            .map(|_| SUFFIX_ALPHABET[rng.random_range(0..SUFFIX_ALPHABET.len())] as char)
            .collect()
    }
}
