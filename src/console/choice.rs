use std::str::FromStr;

use super::error::ChoiceError;

/// A menu entry, numbered as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Laptop,
    Refrigerator,
    Smartphone,
    Exit,
}

impl FromStr for Choice {
    type Err = ChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let number: i64 = s
            .parse()
            .map_err(|_| ChoiceError::NotANumber(s.to_string()))?;

        match number {
            1 => Ok(Choice::Laptop),
            2 => Ok(Choice::Refrigerator),
            3 => Ok(Choice::Smartphone),
            4 => Ok(Choice::Exit),
            n => Err(ChoiceError::OutOfRange(n)),
        }
    }
}
