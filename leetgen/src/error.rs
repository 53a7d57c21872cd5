#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid limit {limit}: must be zero or greater")]
    NegativeLimit { limit: i64 },
}
