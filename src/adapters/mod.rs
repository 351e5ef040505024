//! Adapters bridging each device's native API onto [`Outlet`].
//!
//! | Adapter               | Wraps               | Forwards to      |
//! |-----------------------|---------------------|------------------|
//! | `LaptopAdapter`       | `Laptop`            | `charge`         |
//! | `RefrigeratorAdapter` | `Refrigerator`      | `start_cooling`  |
//! | `SmartphoneAdapter`   | `SmartphoneCharger` | `charge_phone`   |

mod laptop;
mod outlet;
mod refrigerator;
mod smartphone;

pub use laptop::LaptopAdapter;
pub use outlet::Outlet;
pub use refrigerator::RefrigeratorAdapter;
pub use smartphone::SmartphoneAdapter;
