//! Application wiring for the scatter chart UI.
//!
//! Split into focused sub-modules so that each concern can be reasoned
//! about independently:
//!
//! | Sub-module      | Responsibility |
//! | --------------- | -------------- |
//! | [`scatter_app`] | `ScatterApp` state and per-frame rendering/orchestration |
//! | [`axis_labels`] | Clickable axis label strips with active/inactive styling |
//! | [`run`]         | Top-level [`run_scatter()`] entry point, window sizing and icon |

mod axis_labels;
mod run;
mod scatter_app;

pub use run::run_scatter;
pub use scatter_app::ScatterApp;
