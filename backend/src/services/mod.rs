//! Report engine: consensus, window selection, telemetry matching and
//! formatting.
//!
//! Everything except [`enrichment`], [`live`] and [`spot_report`] is pure and
//! synchronous. Those three read storage through the repository traits and
//! are the only suspension points.

pub mod consensus;
pub mod enrichment;
pub mod formatting;
pub mod live;
pub mod nearest;
pub mod spot_report;
pub mod time_windows;
pub mod window_selector;

pub use consensus::{aggregate, most_common, ConsensusResult, WindowedConsensus};
pub use enrichment::{
    enrich_batch, enrich_session, match_analytics_spot, signatures_for, EnrichmentFailure,
    EnrichmentOutcome, SwellSignature,
};
pub use live::build_live_data;
pub use nearest::{latest, nearest};
pub use spot_report::{assemble_report, build_spot_report};
pub use time_windows::{TimeWindow, TimeWindowTable, WindowSpan};
pub use window_selector::select_active;
