pub mod icons;
pub mod nav;
pub mod pool_types;
pub mod prediction_types;
pub mod site_metrics;
pub mod wallet_modal;
