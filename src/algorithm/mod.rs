/// Pairwise border matching and the undirected adjacency graph
pub mod adjacency;
/// Pipeline orchestration from raw input to solution
pub mod executor;
/// Orientation resolution over the adjacency graph
pub mod orientation;
/// Grid placement from a corner tile and placement validation
pub mod placement;
