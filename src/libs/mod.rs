pub mod assemble;
pub mod io;
