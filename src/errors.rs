use thiserror::Error;

#[derive(Error, Debug)]
pub enum HeroError {
    #[error("Asset not found: {0}")]
    AssetNotFound(String),
    #[error("Animation error: {0}")]
    Animation(#[from] hero_lottie::LottieError),
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}
