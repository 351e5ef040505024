use super::Outlet;
use crate::devices::Laptop;

#[derive(Debug, Default)]
pub struct LaptopAdapter {
    laptop: Laptop,
}

impl LaptopAdapter {
    /// Wraps a laptop. Only a [`Laptop`] is accepted:
    ///
    /// ```compile_fail
    /// use outlet::adapters::LaptopAdapter;
    /// use outlet::devices::Refrigerator;
    ///
    /// let _ = LaptopAdapter::new(Refrigerator::new());
    /// ```
    pub fn new(laptop: Laptop) -> Self {
        Self { laptop }
    }

    pub fn device(&self) -> &Laptop {
        &self.laptop
    }
}

impl Outlet for LaptopAdapter {
    fn plug_in(&self) -> &'static str {
        self.laptop.charge()
    }
}
