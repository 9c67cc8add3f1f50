// src/config/consts.rs

// Net config
pub const SOURCE_URL: &str = "https://poe2db.tw/us/Distilled_Emotions#DistilledEmotionsPassives";
pub const USER_AGENT: &str = "passive_scrape/0.1";

// Export
pub const DEFAULT_OUT_FILE: &str = "data.json";
pub const JSON_INDENT: &[u8] = b"    ";

// Page markup (class names on poe2db)
pub const CURRENCY_CLASS: &str = "item_currency";
pub const IMPLICIT_MOD_CLASS: &str = "implicitMod";
pub const MOD_VALUE_CLASS: &str = "mod-value";
pub const KEYWORD_CLASS: &str = "KeywordPopups";

// Weighting: least to most severe. Weight of the n-th entry is 3^n.
pub const TOKEN_SEVERITY: [&str; 10] = [
    "Distilled Ire",
    "Distilled Guilt",
    "Distilled Greed",
    "Distilled Paranoia",
    "Distilled Envy",
    "Distilled Disgust",
    "Distilled Despair",
    "Distilled Fear",
    "Distilled Suffering",
    "Distilled Isolation",
];
