//! UI Components

pub mod analysis_dashboard;
pub mod channel_drilldown;
pub mod filter_bar;
pub mod overlay;
pub mod video_grid;

pub use analysis_dashboard::{AnalysisDashboard, PanelLines};
pub use channel_drilldown::ChannelDrilldownView;
pub use filter_bar::FilterBar;
pub use overlay::OverlayHost;
pub use video_grid::VideoGrid;
