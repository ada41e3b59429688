#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("layout requires at least one point")]
    EmptyInput,
    #[error("point {index} has a non-finite position ({x}, {y})")]
    NonFinitePosition { index: usize, x: f64, y: f64 },
    #[error("layout option `{name}` is out of range: {value}")]
    InvalidOption { name: &'static str, value: f64 },
}

pub type Result<T> = std::result::Result<T, Error>;
