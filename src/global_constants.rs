#![allow(dead_code)]

pub const APPLICATION_NAME: &str = "gesture-gis";

pub const LOG_TAG_MAIN: &str = "[MAIN]";
pub const LOG_TAG_BOT: &str = "[BOT]";
pub const LOG_TAG_GIS: &str = "[GIS]";
pub const LOG_TAG_DISPATCHER: &str = "[DISPATCHER]";
pub const LOG_TAG_VALIDATOR: &str = "[VALIDATOR]";
pub const LOG_TAG_SELECTOR: &str = "[SELECTOR]";
pub const LOG_TAG_PROBE: &str = "[PROBE]";
pub const LOG_TAG_BACKEND: &str = "[BACKEND]";
pub const LOG_TAG_CONSOLE: &str = "[CONSOLE]";
pub const LOG_TAG_SETTINGS: &str = "[SETTINGS]";
pub const LOG_TAG_IDENTITY: &str = "[IDENTITY]";

pub const GIS_COMMAND_PREFIX: &str = "gis ";
pub const IDENTITY_REPLY: &str = "i am halping";

pub const DEFAULT_BOT_NAME: &str = "gesture";
pub const DEFAULT_CHANNEL: &str = "#general";
pub const DEFAULT_SEARCH_URL: &str =
    "http://ajax.googleapis.com/ajax/services/search/images?v=1.0&q=";
pub const DEFAULT_DEADLINE_MS: u64 = 2000;
pub const DEFAULT_PROBE_TIMEOUT_SECS: u64 = 10;

pub const IMAGE_MEDIA_TYPE_PREFIX: &str = "image/";
pub const SYNTHETIC_SUFFIX_PARAM: &str = "lol=lol";

pub const SETTINGS_DIR_NAME: &str = "gesture-gis";
pub const SETTINGS_FILE_NAME: &str = "settings.json";
