mod laptop;
mod refrigerator;
mod smartphone_charger;

pub use laptop::Laptop;
pub use refrigerator::Refrigerator;
pub use smartphone_charger::SmartphoneCharger;
