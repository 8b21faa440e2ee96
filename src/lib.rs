pub mod folder;
pub mod linkedlist;
pub mod map;
pub mod sieve;
pub mod sortedvec;
pub mod util;
