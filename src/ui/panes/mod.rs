//! TUI pane rendering modules
//!
//! Each pane module exports a primary `render_*_pane()` function (plus a render-data
//! struct where the argument list grows long). Panes are stateless: everything they draw
//! comes from the latest published snapshot or from the session's idle input.
//!
//! # Pane Modules
//!
//! - [`array`]: bar chart of the working array, colored by slot role
//! - [`graph`]: adjacency list and frontier/visited/path state for BFS and DFS
//! - [`history`]: search key, bounds and binary-search probe history
//! - [`merge`]: merge sort replay, current step plus the full step log
//! - [`status`]: status bar with step counter, run state and keybindings

pub mod array;
pub mod graph;
pub mod history;
pub mod merge;
pub mod status;

pub use array::{render_array_pane, ArrayRenderData};
pub use graph::{render_graph_pane, GraphRenderData};
pub use history::render_history_pane;
pub use merge::render_merge_pane;
pub use status::{render_status_bar, StatusRenderData};
