/// Port for best-effort connection string canonicalization.
///
/// Implementations never fail loudly: `None` means "keep the original".
pub trait DsnNormalizer {
    fn normalize(&self, dsn: &str) -> Option<String>;
}
