pub mod badges;
pub mod format;
pub mod nav;
pub mod render;
pub mod scope;
pub mod skeleton;
pub mod state;
pub mod templates;
