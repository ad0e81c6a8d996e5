pub mod autogen;
pub mod longrunning;
