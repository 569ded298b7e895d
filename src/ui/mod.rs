//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into four layers:
//!
//! - **[`app`]**: application state, keyboard event loop, transient error display
//! - **[`sink`]**: the [`VisualizationSink`](crate::engine::VisualizationSink) that queues
//!   run events for the render loop
//! - **[`panes`]**: stateless render functions for each visible pane (array, graph,
//!   search history, merge log, status bar)
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a
//! [`Session`](crate::engine::Session) whose sink is a [`ChannelSink`], and call
//! [`App::run`] to start the event loop.
//!
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod sink;
pub mod theme;

pub use app::App;
pub use sink::{ChannelSink, SinkEvent};
