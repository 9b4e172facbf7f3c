//! The algorithmic core: the per-frame perturbation model and the recursive
//! circle-packing generator.

pub mod generate;
pub mod wiggle;
