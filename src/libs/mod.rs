pub mod fasta;
pub mod io;
pub mod nw;
