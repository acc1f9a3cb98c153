/// Invalid list geometry reported by [`crate::ListOptions::validate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OptionsError {
    #[error("item height must be positive")]
    ZeroItemHeight,

    #[error("viewport height must be positive")]
    ZeroViewportHeight,
}
