pub mod fragment;
pub mod net;
pub mod sidebar;
