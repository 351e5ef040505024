/// A kitchen refrigerator that starts its compressor when powered.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Refrigerator;

impl Refrigerator {
    pub fn new() -> Self {
        Self
    }

    pub fn start_cooling(&self) -> &'static str {
        "Refrigerator is cooling."
    }
}
