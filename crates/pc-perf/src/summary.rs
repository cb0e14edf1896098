//! Recommendation tiers for the configuration summary.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    Excellent,
    Good,
    Basic,
}

impl Recommendation {
    pub fn from_efficiency(efficiency: u32) -> Self {
        if efficiency >= 80 {
            Self::Excellent
        } else if efficiency >= 70 {
            Self::Good
        } else {
            Self::Basic
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Excellent => {
                "Excellent choice! This configuration offers optimal performance for your requirements."
            }
            Self::Good => {
                "Good choice. This configuration meets your requirements with good efficiency."
            }
            Self::Basic => {
                "This configuration meets your basic requirements, but you might want to consider alternatives for better efficiency."
            }
        }
    }
}
