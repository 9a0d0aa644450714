// API path definitions; base URLs come from Config.

pub const FIGHTERS_PATH: &str = "/fighters";
pub const TATTOO_PATH: &str = "/api/tattoo";
