pub mod cli;
pub mod io;
pub mod logging;
pub mod markup;
pub mod model;
pub mod ops;
pub mod tui;
pub mod util;
