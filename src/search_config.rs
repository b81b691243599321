/*!
Contains configuration information for the branch-and-bound searches.
Typical usage is to use the builder to construct the config, e.g.
```
use motif_bnb::search_config::{SearchConfig, SearchConfigBuilder};
let config: SearchConfig = SearchConfigBuilder::default()
    .window(Some(5))
    .reverse_strand(true)
    .build()
    .unwrap();
```
*/

/**
Contains configuration information for the branch-and-bound searches.
Typical usage is to use the builder to construct the config, e.g.
```
use motif_bnb::search_config::{SearchConfig, SearchConfigBuilder};
let config: SearchConfig = SearchConfigBuilder::default()
    .bounding(false)
    .build()
    .unwrap();
```
*/
#[derive(derive_builder::Builder, Clone, Debug)]
#[builder(default)]
pub struct SearchConfig {
    /// Requested window width W; anything outside [N, 2N-1] (or None) becomes 2N-1
    pub window: Option<usize>,
    /// If true, sequences may also be placed using their reverse complement strand
    pub reverse_strand: bool,
    /// If false, the optimistic bound is never used to prune; results are identical but slower
    pub bounding: bool,
    /// Largest allowed tree depth, applies to both W and the number of sequences
    pub max_depth: usize
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            // the widest window where every pair of sequences still overlaps
            window: None,
            reverse_strand: false,
            bounding: true,
            // far beyond what is tractable to search anyways
            max_depth: 512
        }
    }
}
