pub mod cli;
pub mod safe;
pub mod util;
