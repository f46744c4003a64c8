use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[strum(to_string = "hebrew", serialize = "he")]
    Hebrew,
    #[strum(to_string = "english", serialize = "en")]
    English,
    #[strum(to_string = "swedish", serialize = "sv")]
    Swedish,
    #[strum(to_string = "japanese", serialize = "ja")]
    Japanese,
}

impl Language {
    /// Weighted tile bag: a letter appears once per unit of weight.
    pub fn letter_bag(&self) -> &'static str {
        match self {
            // No final forms; they normalize onto these anyway.
            Self::Hebrew => "אאאאבבבגגדדההההווווווזחחטייייייכככללללמממממנננססעעפפצצקקררררשששתתת",
            Self::English => "aaaaaaaabbccdddeeeeeeeeeeeeffggghhhhhhiiiiiiijkllllmmnnnnnnnooooooopprrrrrrsssssstttttttttuuuvwwxyyz",
            Self::Swedish => "aaaaaaaabbcddddeeeeeeeeeffgggghhiiiiijkkkllllllmmmnnnnnnnoooooprrrrrrrrsssssstttttttttuuuvvyåååäääöö",
            Self::Japanese => "日日月月火水水木木金金土土山山川川田田人人人口口大大小小中中上上下下目耳手足力本本年年生生子女男",
        }
    }

    /// Two-letter code used by the game server.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Hebrew => "he",
            Self::English => "en",
            Self::Swedish => "sv",
            Self::Japanese => "ja",
        }
    }

    pub fn is_rtl(&self) -> bool {
        matches!(self, Self::Hebrew)
    }
}
