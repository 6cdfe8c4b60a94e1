pub mod parseutil;
pub mod pdf;
pub mod rownorm;
pub mod streetextract;
