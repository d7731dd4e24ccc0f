pub mod args;
pub mod model;
pub mod controller {
    pub mod backend;
    pub mod play;
    pub mod roster;
    pub mod transport;
}
pub mod view {
    pub mod board;
    pub mod history;
    pub mod index;
    pub mod logs;
    pub mod matches;
    pub mod play;
    pub mod players;
    pub mod start;
    pub mod stats;
}

const HTMX_PATH: &str = "https://unpkg.com/htmx.org@1.9.12";
