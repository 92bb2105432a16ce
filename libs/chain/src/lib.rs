pub mod registry;
pub mod rpc;
