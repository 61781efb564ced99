pub mod proxy;

pub use proxy::{Hysteria2Options, ProxyOptions, ProxyRecord, ProxyType, VlessOptions, VmessOptions};
