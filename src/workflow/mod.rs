pub mod fetch_state;
pub mod statistics_flow;

pub use fetch_state::FetchState;
pub use statistics_flow::StatisticsFlow;
