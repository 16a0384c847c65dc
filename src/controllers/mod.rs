pub mod home_controller;
pub mod products_controller;
pub mod trending_controller;
pub mod analytics_controller;
pub mod alerts_controller;
pub mod nav_controller;
