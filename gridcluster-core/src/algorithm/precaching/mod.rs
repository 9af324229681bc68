mod precaching_algorithm;

pub use precaching_algorithm::{PreCachingAlgorithm, DEFAULT_CACHE_CAPACITY};
