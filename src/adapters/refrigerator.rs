use super::Outlet;
use crate::devices::Refrigerator;

#[derive(Debug, Default)]
pub struct RefrigeratorAdapter {
    refrigerator: Refrigerator,
}

impl RefrigeratorAdapter {
    /// ```compile_fail
    /// use outlet::adapters::RefrigeratorAdapter;
    /// use outlet::devices::SmartphoneCharger;
    ///
    /// let _ = RefrigeratorAdapter::new(SmartphoneCharger::new());
    /// ```
    pub fn new(refrigerator: Refrigerator) -> Self {
        Self { refrigerator }
    }

    pub fn device(&self) -> &Refrigerator {
        &self.refrigerator
    }
}

impl Outlet for RefrigeratorAdapter {
    fn plug_in(&self) -> &'static str {
        self.refrigerator.start_cooling()
    }
}
