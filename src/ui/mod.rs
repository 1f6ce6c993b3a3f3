pub mod colorbar;
pub mod panels;
pub mod plot;
