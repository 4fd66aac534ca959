pub mod alerts_feed;
pub mod chart;
pub mod filter_panel;
pub mod page_header;
pub mod stat_card;
pub mod table;
pub mod ui;
