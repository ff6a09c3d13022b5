// Adapters layer: transports that hand raw payloads to the core and relay its result.

pub mod http;
