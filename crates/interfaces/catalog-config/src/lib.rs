//! Central configuration constants for defaults and limits.

/// Default number of entries requested in one load.
pub const DEFAULT_BATCH_SIZE: usize = 151;

/// Minimum batch size accepted by the front ends.
pub const MIN_BATCH_SIZE: usize = 1;

/// Maximum batch size offered by the front ends.
pub const MAX_BATCH_SIZE: usize = 1025;

/// Upstream REST API root.
pub const DEFAULT_API_BASE: &str = "https://pokeapi.co/api/v2/";

/// Collection listed under the API root.
pub const DEFAULT_COLLECTION: &str = "pokemon";

/// Convenience function to clamp a batch size into the allowed range.
pub fn clamp_batch_size(v: usize) -> usize {
    v.clamp(MIN_BATCH_SIZE, MAX_BATCH_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_keeps_batch_size_in_range() {
        assert_eq!(clamp_batch_size(0), MIN_BATCH_SIZE);
        assert_eq!(clamp_batch_size(DEFAULT_BATCH_SIZE), DEFAULT_BATCH_SIZE);
        assert_eq!(clamp_batch_size(10_000), MAX_BATCH_SIZE);
    }
}
