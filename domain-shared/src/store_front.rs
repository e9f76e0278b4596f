/// Steam application id of the tracked product, e.g. `1671210`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SteamAppId(pub u32);
