/// A phone charging brick. Its API predates the outlet and speaks in terms
/// of phones rather than plugs.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SmartphoneCharger;

impl SmartphoneCharger {
    pub fn new() -> Self {
        Self
    }

    pub fn charge_phone(&self) -> &'static str {
        "Smartphone is charging."
    }
}
