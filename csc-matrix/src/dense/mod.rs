mod vec;
pub use vec::DVec;
