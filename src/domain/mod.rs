// ============================================================================
// Domain Module
// Configuration and period schedule for constant generation
// ============================================================================

mod rate_config;
mod schedule;

pub use rate_config::RateConfig;
pub use schedule::{
    PeriodDefinition, PeriodSchedule, BLOCKS_PER_ROUND, BLOCKS_PER_YEAR, BLOCK_INTERVAL_SECS,
    DAYS_PER_YEAR, HOURS_PER_YEAR, ROUNDS_PER_YEAR,
};
