use super::Outlet;
use crate::devices::SmartphoneCharger;

#[derive(Debug, Default)]
pub struct SmartphoneAdapter {
    charger: SmartphoneCharger,
}

impl SmartphoneAdapter {
    /// ```compile_fail
    /// use outlet::adapters::SmartphoneAdapter;
    /// use outlet::devices::Laptop;
    ///
    /// let _ = SmartphoneAdapter::new(Laptop::new());
    /// ```
    pub fn new(charger: SmartphoneCharger) -> Self {
        Self { charger }
    }

    pub fn device(&self) -> &SmartphoneCharger {
        &self.charger
    }
}

impl Outlet for SmartphoneAdapter {
    fn plug_in(&self) -> &'static str {
        self.charger.charge_phone()
    }
}
