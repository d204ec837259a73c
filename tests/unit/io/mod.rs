mod logging;
mod theme;
