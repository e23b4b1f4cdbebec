//! Exports the decision tree, its oracles, and the sample type.
//! 
pub use crate::sample::Sample;


pub use crate::hypothesis::Regressor;


pub use crate::decision_tree::{
    // Tree and its builder
    DecisionTree,
    DecisionTreeBuilder,
    Node,


    // Splitting rules
    Stump,
    StumpOracle,
    SquaredErrorStump,


    TrainWarning,
};


pub use crate::visualize::{
    SplitCanvas,
    SegmentRecorder,
    Segment,
    PlotCanvas,
    render_partition,
};


pub use crate::common::{
    MiniLearnError,
    Result,
};
