pub mod aggregate;
pub mod client;
pub mod context;
pub mod drilldown;
pub mod overlay;
pub mod query;
pub mod selection;

#[cfg(test)]
mod testing;

// Re-exports for convenience
pub use aggregate::{
    BoundedPreview, CorrelationStrength, DEFAULT_PREVIEW_LIMIT, Numbering, Panel, PanelKind,
    PanelLine, ScalarStat, dashboard_panels, scalar_stats,
};
pub use client::{HttpVideoSource, VideoSource};
pub use context::{AppConfig, AppConfigExt, ConfigError};
pub use drilldown::{
    ChannelDrilldown, ChannelTicket, DrilldownId, DrilldownState, Drilldowns, FAILED_TITLE,
    NO_DESCRIPTION, description_or_placeholder,
};
pub use overlay::{Overlay, OverlayContent, OverlayEvent, OverlayId, OverlayStack};
pub use query::{
    Completion, DashboardView, FetchError, QueryController, QueryState, QueryTicket, VideoQuery,
    sort_by_view_count,
};
pub use selection::SelectionState;
pub use shorts_types as types;
