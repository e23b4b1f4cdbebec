//! Default parameters.

/// Default value of `max_leaf_size` for decision trees.
pub const DEFAULT_MAX_LEAF_SIZE: usize = 10;
/// Default value of `max_depth` for decision trees.
pub const DEFAULT_MAX_DEPTH:     usize = 5;
/// Default number of iterations of the optimization drivers.
pub const DEFAULT_HORIZON:       usize = 10;

/// Number of dashes used to draw a split line.
pub const DASHES_PER_LINE:       usize = 40;
/// Default width (px) of the rendered partition.
pub const PLOT_WIDTH:            u32   = 640;
/// Default height (px) of the rendered partition.
pub const PLOT_HEIGHT:           u32   = 480;
