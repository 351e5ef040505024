/// A laptop whose power brick only knows how to charge.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Laptop;

impl Laptop {
    pub fn new() -> Self {
        Self
    }

    pub fn charge(&self) -> &'static str {
        "Laptop is charging."
    }
}
