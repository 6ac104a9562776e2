mod log_viewer;
mod pc_card;

pub use log_viewer::LogViewer;
pub use pc_card::PcCard;
