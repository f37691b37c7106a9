pub mod checkpoint;
pub mod contract;
pub mod validator;
