use crate::types::{AppId, ContextId};
use num_enum::{TryFromPrimitive, IntoPrimitive};
use strum_macros::{Display, EnumString, EnumIter};

/// Apps with well-known inventories.
#[derive(Display, EnumString, EnumIter, Debug, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive, Clone, Copy)]
#[repr(u32)]
pub enum App {
    TF2 = 440,
    Dota2 = 570,
    Portal2 = 620,
    CSGO = 730,
    SpiralKnights = 99900,
    H1Z1 = 295110,
    Steam = 753,
    PUBG = 578080,
}

impl App {
    /// The app ID.
    pub fn appid(self) -> AppId {
        self.into()
    }
    
    /// The context which holds the app's tradable items. Steam items default to the community
    /// context. `None` if the context is not known.
    pub fn default_contextid(self) -> Option<ContextId> {
        match self {
            Self::TF2 |
            Self::Dota2 |
            Self::Portal2 |
            Self::CSGO |
            Self::PUBG => Some(2),
            Self::H1Z1 => Some(1),
            Self::Steam => Some(SteamContext::Community.into()),
            Self::SpiralKnights => None,
        }
    }
}

/// Contexts for the Steam app (753).
#[derive(Display, EnumString, EnumIter, Debug, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive, Clone, Copy)]
#[repr(u64)]
pub enum SteamContext {
    Gifts = 1,
    Coupons = 3,
    Community = 6,
    ItemRewards = 7,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;
    
    #[test]
    fn converts_app_ids() {
        assert_eq!(App::CSGO.appid(), 730);
        assert_eq!(App::try_from(440).unwrap(), App::TF2);
        assert!(App::try_from(1).is_err());
    }
    
    #[test]
    fn gets_default_contexts() {
        assert_eq!(App::Steam.default_contextid(), Some(6));
        assert_eq!(App::H1Z1.default_contextid(), Some(1));
        assert_eq!(App::iter().filter(|app| app.default_contextid().is_none()).count(), 1);
    }
    
    #[test]
    fn parses_app_names() {
        assert_eq!("CSGO".parse::<App>().unwrap(), App::CSGO);
        assert_eq!(App::Dota2.to_string(), "Dota2");
    }
}
